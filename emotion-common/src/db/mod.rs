//! Database layer: connection setup and row models

pub mod init;
pub mod models;

pub use init::{init_database, init_memory_database};

//! # EmotionSense Common Library
//!
//! Shared code for the EmotionSense backend:
//! - Bootstrap configuration loading
//! - Database initialization and the emotion record model
//! - Common error type

pub mod config;
pub mod db;
pub mod error;

pub use db::models::EmotionRecord;
pub use error::{Error, Result};

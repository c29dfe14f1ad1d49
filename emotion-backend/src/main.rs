//! emotion-backend - EmotionSense record service
//!
//! Persists emotion detections (modality, label, confidence, source file,
//! server timestamp) in SQLite and serves them over a small REST API.

use anyhow::Result;
use emotion_common::config::BootstrapConfig;
use emotion_common::db::init_database;
use emotion_backend::{build_router, AppState};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let config = BootstrapConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    info!(
        "Starting EmotionSense backend (emotion-backend) v{}",
        env!("CARGO_PKG_VERSION")
    );

    match &config.config_file {
        Some(path) => info!("Configuration file: {}", path.display()),
        None => info!("No configuration file, using environment and defaults"),
    }
    if let Some(warning) = &config.config_warning {
        warn!("{}", warning);
    }

    info!("Database path: {}", config.database_path.display());
    let pool = match init_database(&config.database_path).await {
        Ok(pool) => {
            info!("✓ Connected to database");
            pool
        }
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            return Err(e.into());
        }
    };

    let state = AppState::from_pool(pool);
    let app = build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("emotion-backend listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

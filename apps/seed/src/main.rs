//! One-shot seeding binary.
//!
//! Connects with the server configuration, applies registered seed
//! operations, and disconnects before exiting. Exit code 0 on success,
//! 1 on failure. No operations ship yet, so a default run is a no-op.

use anyhow::{Context, Result};
use bhub_database::Database;
use bhub_database::seed::{Seeder, run_then_disconnect};
use bhub_domain::config::ApiConfig;
use bhub_kernel::config::load_config;
use bhub_logger::Logger;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    let cfg: ApiConfig = load_config(Some("server")).unwrap_or_else(|e| {
        warn!("No usable configuration, falling back to defaults: {e}");
        ApiConfig::default()
    });

    let db = connect(&cfg).await?;

    // No seed records ship yet; register ops here as fixtures land.
    let seeder = Seeder::new();

    let report = run_then_disconnect(db, &seeder).await.context("Seed run failed")?;
    info!(applied = report.applied.len(), "Seed run complete");

    Ok(())
}

async fn connect(cfg: &ApiConfig) -> Result<Database> {
    let db_cfg = &cfg.database;
    let mut builder =
        Database::builder().url(&db_cfg.url).session(&db_cfg.namespace, &db_cfg.database);

    if let Some(creds) = &db_cfg.credentials {
        builder = builder.auth(&creds.username, &creds.password);
    }

    builder.init().await.context("Failed to establish database connection")
}

#![windows_subsystem = "windows"]

use bhub::domain::config::ApiConfig;
use bhub::kernel::config::load_config;
use bhub_desktop::DesktopApp;
use bhub_logger::Logger;
use tracing::warn;

fn main() -> anyhow::Result<()> {
    let _logger = Logger::builder().name(env!("CARGO_PKG_NAME")).console(true).init()?;

    let cfg: ApiConfig = load_config(Some("desktop")).unwrap_or_else(|e| {
        warn!("No desktop configuration found, using defaults: {e}");
        ApiConfig::default()
    });

    DesktopApp::new().with_title("BudgetHub").launch(cfg, bhub::features::dashboard::App);

    Ok(())
}

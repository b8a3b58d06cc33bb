use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

/// Errors surfaced while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error: {source}")]
    Config {
        #[from]
        source: config::ConfigError,
    },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layering strategy:
/// 1. **Base file**: settings from a file (e.g. `server.toml`); defaults to `"server"`.
/// 2. **Environment overrides**: variables prefixed with `BHUB__`, nested structures
///    addressed with double underscores (`BHUB__DATABASE__URL` maps to `database.url`).
///
/// # Errors
/// Returns [`ConfigError`] if the file cannot be found, the environment variables are
/// malformed, or deserialization into `T` fails.
///
/// # Example
/// ```rust
/// use bhub_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("server"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix("BHUB").separator("__").convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder.build()?.try_deserialize::<T>()?;

    Ok(config)
}

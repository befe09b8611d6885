//! Configuration for Products API

use core_config::{
    AppInfo, FromEnv, app_info, cors::CorsConfig, env_parse_or, server::ServerConfig,
};
use std::path::PathBuf;
use std::time::Duration;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub environment: Environment,
    /// JSON file with products to create at startup
    pub seed_file: Option<PathBuf>,
    pub shutdown_timeout: Duration,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let cors = CorsConfig::from_env()?;

        let seed_file = std::env::var_os("PRODUCTS_SEED_FILE")
            .filter(|raw| !raw.to_string_lossy().trim().is_empty())
            .map(PathBuf::from);

        let shutdown_timeout = Duration::from_secs(env_parse_or("SHUTDOWN_TIMEOUT_SECS", 30)?);

        Ok(Self {
            app: app_info!(),
            server,
            cors,
            environment,
            seed_file,
            shutdown_timeout,
        })
    }
}

//! Server configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use runtime::RuntimeConfig;

/// Configuration required to bootstrap the HTTP server.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log: LogConfig,
    pub runtime: RuntimeConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log: LogConfig::default(),
            runtime: RuntimeConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `WARRIOR_HOST` - Bind address (default: 0.0.0.0)
    /// - `WARRIOR_PORT` - Bind port (default: 3000)
    /// - `WARRIOR_LOG_TO_FILE` - Also write logs to a file (default: false)
    /// - `WARRIOR_LOG_DIR` - Log file directory (default: platform cache dir)
    /// - plus everything read by [`RuntimeConfig::from_env`]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = env::var("WARRIOR_HOST") {
            config.host = host;
        }

        if let Some(port) = read_env::<u16>("WARRIOR_PORT") {
            config.port = port;
        }

        if let Some(enable) = read_env::<bool>("WARRIOR_LOG_TO_FILE") {
            config.log.to_file = enable;
        } else if env::var("WARRIOR_LOG_TO_FILE").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.log.to_file = true;
        }

        config.log.dir = env::var("WARRIOR_LOG_DIR").ok().map(PathBuf::from);
        config.runtime = RuntimeConfig::from_env();

        config
    }

    /// `host:port` string handed to the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging destinations.
#[derive(Clone, Debug, Default)]
pub struct LogConfig {
    pub to_file: bool,
    pub dir: Option<PathBuf>,
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

//! Runtime configuration, read from `batmill.toml` plus `BATMILL__*`
//! environment overrides.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub database: Database,
}

#[derive(Debug, Deserialize)]
pub struct App {
    /// Log level handed to the tracing env filter.
    pub level: String,
    /// Display version shown in page titles.
    pub version: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("app.level", "info")?
            .set_default(
                "app.version",
                concat!("Version ", env!("CARGO_PKG_VERSION")),
            )?
            .set_default("server.port", 3000)?
            .set_default("database", "memory")?
            .add_source(File::with_name("batmill").required(false))
            .add_source(Environment::with_prefix("BATMILL").separator("__"))
            .build()?
            .try_deserialize()
    }
}

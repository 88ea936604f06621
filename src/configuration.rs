use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub db_path: String,
    pub host: String,
    pub port: u16,
}

impl Settings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("db_path", "trivia.db")?
        .set_default("host", "0.0.0.0")?
        .set_default("port", 8080)
}

/// Defaults, then an optional `trivia.toml`, then environment variables
/// (`DB_PATH`, `HOST`, `PORT`), with `.env` loaded first when present.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    dotenv::dotenv().ok();
    with_defaults()?
        .add_source(File::with_name("trivia").required(false))
        .add_source(Environment::default().try_parsing(true))
        .build()?
        .try_deserialize()
}

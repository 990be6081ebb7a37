use config::{Config, Environment};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub environment: Option<String>,
    pub database_url: String,
    pub port: Option<u16>,
    pub jwt_secret: String,
    /// Bearer token lifetime; defaults to 30 days.
    pub token_expiry_days: Option<i64>,
    /// Which edge list discovery removes from the candidate set:
    /// `"following"` (default, repaired semantics) or `"followers"` (legacy).
    pub discovery_exclusion: Option<String>,
}

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let settings = Config::builder();
    let settings = settings.add_source(Environment::default());
    settings.build()?.try_deserialize()
}

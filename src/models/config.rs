//! Configuration model loaded from external sources.

use config::Config;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings of the directory HTTP server.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Glob handed to Tera, e.g. `templates/**/*`.
    pub templates_dir: String,
}

impl ServerConfig {
    /// Reads `config/default.yaml`, then the optional `config/{app_env}.yaml`
    /// profile, then `APP_*` environment variables.
    pub fn load(app_env: &str) -> Result<Self, config::ConfigError> {
        Config::builder()
            // Add `./config/default.yaml`
            .add_source(config::File::with_name("config/default"))
            // Add environment-specific overrides
            .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
            // Add settings from the environment (with a prefix of APP)
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}

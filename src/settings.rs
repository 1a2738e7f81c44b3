use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settings {
    pub store_url: Url,
    pub store_api_key: String,
    pub debug: bool,
    pub auth_token: String,
    pub enable_swagger: bool,
    pub port: u16,
    pub items_per_page: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            // APP_STORE_URL -> store_url
            .add_source(Environment::with_prefix("APP").try_parsing(true))
            .set_default("store_url", "http://localhost:54321")?
            .set_default("store_api_key", "")?
            .set_default("debug", false)?
            .set_default("auth_token", "default-token-change-me")?
            .set_default("enable_swagger", true)?
            .set_default("port", 8080)?
            .set_default("items_per_page", 12)?
            .build()?;

        config.try_deserialize()
    }
}

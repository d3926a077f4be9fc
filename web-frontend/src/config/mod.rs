use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Base URL of the items API. Changing this changes the request target
    /// without any code change.
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_api_url() -> String {
    "http://backend:3000".to_string()
}

/// Load settings from an optional `configuration` file plus `APP__`-prefixed
/// environment variables (`APP__API_URL`, `APP__PORT`, `APP__HOST`).
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(config::Environment::with_prefix("APP").separator("__"))
        .build()?;

    settings.try_deserialize()
}

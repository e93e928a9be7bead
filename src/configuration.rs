use serde_aux::field_attributes::deserialize_number_from_string;
use std::path::PathBuf;
use std::time::Duration;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Settings {
    pub solved_ac: SolvedAcSettings,
    pub log_level: String,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct SolvedAcSettings {
    pub base_url: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl SolvedAcSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

fn configuration_directory() -> PathBuf {
    match std::env::var("APP_CONFIG_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join("configuration"),
    }
}

/// Layers built-in defaults, an optional `configuration/base.yaml`,
/// and `APP_`-prefixed environment variables, in that order.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_file = configuration_directory().join("base.yaml");

    let settings = config::Config::builder()
        .set_default("solved_ac.base_url", "https://solved.ac/api/v3")?
        .set_default("solved_ac.timeout_milliseconds", 10_000)?
        .set_default("log_level", "warn")?
        .add_source(config::File::from(base_file).required(false))
        // E.g. `APP_SOLVED_AC__TIMEOUT_MILLISECONDS=2000` sets `solved_ac.timeout_milliseconds`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

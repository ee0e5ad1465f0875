use std::path::Path;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_numbers")]
    pub numbers: Vec<i64>,
    #[serde(default = "enabled")]
    pub show_total: bool,
    #[serde(default = "enabled")]
    pub show_evens: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            numbers: default_numbers(),
            show_total: true,
            show_evens: true,
        }
    }
}

impl AppConfig {
    /// Reads `even_numbers.{toml,json,...}` from the working directory if one
    /// exists, then applies `EVEN_NUMBERS_*` environment variables.
    ///
    /// Env values stay strings until deserialization so that a single value
    /// in `EVEN_NUMBERS_NUMBERS` still splits into a one element list.
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(File::with_name("even_numbers").required(false))
    }

    /// Same as [`AppConfig::load`] but the file must exist at `path`.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::build(File::from(path.as_ref()))
    }

    fn build<F>(file: F) -> Result<Self, ConfigError>
    where
        F: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix("EVEN_NUMBERS")
                    .list_separator(",")
                    .with_list_parse_key("numbers"),
            )
            .build()?;
        config.try_deserialize()
    }
}

fn default_numbers() -> Vec<i64> {
    (1..=10).collect()
}

fn enabled() -> bool {
    true
}

use serde::Deserialize;
use config::{Config, ConfigError, Environment, File};

pub const DEFAULT_DATA_FILE: &str = "data.json";

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AppConfig {
    pub data_file: String,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_sources("expense_tracker", "APP")
    }

    fn from_sources(file_name: &str, env_prefix: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Start off with default values
            .set_default("data_file", DEFAULT_DATA_FILE)?
            // Optional config file in the working directory
            .add_source(File::with_name(file_name).required(false))
            // Add in settings from environment variables (e.g. APP_DATA_FILE)
            .add_source(Environment::with_prefix(env_prefix))
            .build()?;

        settings.try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_sources() {
        let config = AppConfig::from_sources("no_such_config_file", "EXPENSE_TEST_DEFAULTS").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.data_file, "data.json");
    }

    #[test]
    fn test_environment_override() {
        env::set_var("EXPENSE_TEST_ENV_DATA_FILE", "/tmp/expenses.json");
        let config = AppConfig::from_sources("no_such_config_file", "EXPENSE_TEST_ENV").unwrap();
        env::remove_var("EXPENSE_TEST_ENV_DATA_FILE");
        assert_eq!(config.data_file, "/tmp/expenses.json");
    }

    #[test]
    fn test_config_file_override() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("tracker.toml");
        std::fs::write(&file, "data_file = \"ledger.json\"\n").unwrap();

        let name = temp_dir.path().join("tracker");
        let config = AppConfig::from_sources(name.to_str().unwrap(), "EXPENSE_TEST_FILE").unwrap();
        assert_eq!(config.data_file, "ledger.json");
    }
}

pub mod types;
use crate::error::Result;
use types::CONFIG_PATH;
pub use types::{CONFIG, Config, NetworkConfig};

impl Config {
    fn new() -> Self {
        get_config().unwrap_or_default()
    }
}

fn get_config() -> Result<Config> {
    std::env::var(CONFIG_PATH)
        // Read config file to string
        .map(std::fs::read_to_string)?
        // Parse config file to Config struct
        .map(|str| toml::from_str::<Config>(&str))?
        .map_err(|e| e.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new_default() {
        let config = Config::new();
        assert_eq!(config.network.retries, 3);
        assert_eq!(config.network.max_backoff_ms, 5000);
    }

    #[test]
    fn test_config_parse_toml() {
        let config: Config = toml::from_str(
            r#"
            [network]
            retries = 5
            request_timeout_secs = 15
            "#,
        )
        .unwrap();
        assert_eq!(config.network.retries, 5);
        assert_eq!(config.network.request_timeout_secs, 15);
        // Unset keys fall back to defaults
        assert_eq!(config.network.max_backoff_ms, 5000);
    }
}

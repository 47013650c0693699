use std::{env, time::Duration};

pub const DEFAULT_BUSTIME_HOST: &str = "https://bustime.mta.info";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone)]
pub struct AppConfig {
    pub bustime_host: String,
    pub bustime_key: String,
    pub bustime_timeout: Duration,
    pub bind_address: String,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingVar(&'static str),
    InvalidVar { name: &'static str, value: String },
    HttpClient(reqwest::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigError::MissingVar(name) => write!(f, "{} must be set", name),
            ConfigError::InvalidVar { name, value } => {
                write!(f, "Invalid value for {}: {}", name, value)
            }
            ConfigError::HttpClient(e) => write!(f, "Failed to build HTTP client: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bustime_key = lookup("BUSTIME_API_KEY")
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingVar("BUSTIME_API_KEY"))?;

        let bustime_timeout = match lookup("BUSTIME_TIMEOUT_SECS") {
            Some(value) => value
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidVar {
                    name: "BUSTIME_TIMEOUT_SECS",
                    value,
                })?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(AppConfig {
            bustime_host: lookup("BUSTIME_HOST")
                .unwrap_or_else(|| DEFAULT_BUSTIME_HOST.to_string())
                .trim_end_matches('/')
                .to_string(),
            bustime_key,
            bustime_timeout,
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn applies_defaults() {
        let config = AppConfig::from_lookup(lookup(&[("BUSTIME_API_KEY", "abc")])).unwrap();

        assert_eq!(config.bustime_key, "abc");
        assert_eq!(config.bustime_host, DEFAULT_BUSTIME_HOST);
        assert_eq!(config.bustime_timeout, Duration::from_secs(10));
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("BUSTIME_API_KEY", "abc"),
            ("BUSTIME_HOST", "http://localhost:8080/"),
            ("BUSTIME_TIMEOUT_SECS", "3"),
            ("BIND_ADDRESS", "127.0.0.1:9000"),
        ]))
        .unwrap();

        assert_eq!(config.bustime_host, "http://localhost:8080");
        assert_eq!(config.bustime_timeout, Duration::from_secs(3));
        assert_eq!(config.bind_address, "127.0.0.1:9000");
    }

    #[test]
    fn requires_api_key() {
        let err = AppConfig::from_lookup(lookup(&[])).err().unwrap();
        assert!(matches!(err, ConfigError::MissingVar("BUSTIME_API_KEY")));

        let err = AppConfig::from_lookup(lookup(&[("BUSTIME_API_KEY", "")]))
            .err()
            .unwrap();
        assert!(matches!(err, ConfigError::MissingVar("BUSTIME_API_KEY")));
    }

    #[test]
    fn rejects_bad_timeout() {
        let err = AppConfig::from_lookup(lookup(&[
            ("BUSTIME_API_KEY", "abc"),
            ("BUSTIME_TIMEOUT_SECS", "soon"),
        ]))
        .err()
        .unwrap();

        assert!(matches!(
            err,
            ConfigError::InvalidVar { name: "BUSTIME_TIMEOUT_SECS", .. }
        ));
    }
}

use std::{env, net::SocketAddr};

use axum::http::HeaderValue;
use thiserror::Error;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_ALLOW_ORIGIN: &str = "*";
const DEFAULT_MAX_AGE_SECS: u64 = 86400;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allow_origin: HeaderValue,
    pub max_age_secs: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origin: HeaderValue::from_static(DEFAULT_ALLOW_ORIGIN),
            max_age_secs: DEFAULT_MAX_AGE_SECS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WebConfig {
    pub bind_address: SocketAddr,
    pub cors: CorsConfig,
}

impl WebConfig {
    /// Reads `WEB_BIND_ADDRESS`, `CORS_ALLOW_ORIGIN` and `CORS_MAX_AGE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let bind_address = read(&lookup, "WEB_BIND_ADDRESS", DEFAULT_BIND_ADDRESS, |value| {
            value.parse::<SocketAddr>().ok()
        })?;
        let allow_origin = read(&lookup, "CORS_ALLOW_ORIGIN", DEFAULT_ALLOW_ORIGIN, |value| {
            HeaderValue::from_str(value).ok()
        })?;
        let max_age_secs = match lookup("CORS_MAX_AGE") {
            Some(value) => value.trim().parse::<u64>().map_err(|_| {
                ConfigError::InvalidValue {
                    key: "CORS_MAX_AGE",
                    value,
                }
            })?,
            None => DEFAULT_MAX_AGE_SECS,
        };

        Ok(Self {
            bind_address,
            cors: CorsConfig {
                allow_origin,
                max_age_secs,
            },
        })
    }
}

fn read<F, T, P>(
    lookup: &F,
    key: &'static str,
    default: &str,
    parse: P,
) -> Result<T, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
    P: Fn(&str) -> Option<T>,
{
    let value = lookup(key).unwrap_or_else(|| default.to_owned());
    parse(&value).ok_or(ConfigError::InvalidValue { key, value })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&'static str, &str)]) -> Result<WebConfig, ConfigError> {
        let vars = vars
            .iter()
            .map(|(k, v)| (*k, v.to_string()))
            .collect::<HashMap<_, _>>();
        WebConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.cors.allow_origin, "*");
        assert_eq!(config.cors.max_age_secs, 86400);
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("WEB_BIND_ADDRESS", "127.0.0.1:3000"),
            ("CORS_ALLOW_ORIGIN", "https://example.org"),
            ("CORS_MAX_AGE", "600"),
        ])
        .unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.cors.allow_origin, "https://example.org");
        assert_eq!(config.cors.max_age_secs, 600);
    }

    #[test]
    fn invalid_values() {
        assert_eq!(
            config(&[("CORS_MAX_AGE", "a day")]).unwrap_err(),
            ConfigError::InvalidValue {
                key: "CORS_MAX_AGE",
                value: "a day".to_owned()
            }
        );
        assert!(config(&[("WEB_BIND_ADDRESS", "localhost")]).is_err());
    }
}

// src/config.rs
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_MAX_WORKERS: usize = 8;

/// Server-side settings for the upstream API. Never sent to the browser.
#[derive(Debug, Clone, Default)]
pub struct UpstreamConfig {
    pub base_url: Option<String>,
    pub endpoint: Option<String>,
    pub expand: Option<String>,
    pub token: Option<String>,
}

impl UpstreamConfig {
    /// Base URL, endpoint and token, when all three are set.
    pub fn required(&self) -> Option<(&str, &str, &str)> {
        Some((
            self.base_url.as_deref()?,
            self.endpoint.as_deref()?,
            self.token.as_deref()?,
        ))
    }
}

/// Where property lookups are sent (our own proxy by default).
#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub base_url: String,
    pub endpoint: String,
    pub expand: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: "/api".to_string(),
            endpoint: "/properties".to_string(),
            expand: "images".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Origin used to resolve a relative lookup base, e.g. `http://127.0.0.1:3000`.
    pub public_origin: String,
    pub upstream: UpstreamConfig,
    pub lookup: LookupConfig,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidBindAddr(String),
    InvalidMaxWorkers(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBindAddr(v) => write!(f, "BIND_ADDR is not a socket address: {v}"),
            ConfigError::InvalidMaxWorkers(v) => {
                write!(f, "MAX_WORKERS must be a positive integer: {v}")
            }
        }
    }
}

impl Error for ConfigError {}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source. Empty values count as unset.
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| get(name).filter(|v| !v.trim().is_empty());

        let bind_raw = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_raw
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_raw.clone()))?;

        let max_workers = match var("MAX_WORKERS") {
            None => DEFAULT_MAX_WORKERS,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidMaxWorkers(raw)),
            },
        };

        let defaults = LookupConfig::default();

        Ok(Self {
            bind_addr,
            max_workers,
            public_origin: var("PUBLIC_ORIGIN").unwrap_or_else(|| format!("http://{bind_addr}")),
            upstream: UpstreamConfig {
                base_url: var("UPSTREAM_API_BASE_URL"),
                endpoint: var("UPSTREAM_PROPERTY_ENDPOINT"),
                expand: var("UPSTREAM_PROPERTY_EXPAND"),
                token: var("UPSTREAM_API_TOKEN"),
            },
            lookup: LookupConfig {
                base_url: var("PUBLIC_API_BASE_URL").unwrap_or(defaults.base_url),
                endpoint: var("PUBLIC_PROPERTY_ENDPOINT").unwrap_or(defaults.endpoint),
                expand: var("PUBLIC_PROPERTY_EXPAND").unwrap_or(defaults.expand),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults_when_nothing_set() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(cfg.max_workers, DEFAULT_MAX_WORKERS);
        assert_eq!(cfg.public_origin, "http://127.0.0.1:3000");
        assert_eq!(cfg.lookup.base_url, "/api");
        assert_eq!(cfg.lookup.endpoint, "/properties");
        assert_eq!(cfg.lookup.expand, "images");
        assert!(cfg.upstream.required().is_none());
    }

    #[test]
    fn empty_values_are_unset() {
        let cfg = config(&[("UPSTREAM_API_TOKEN", ""), ("PUBLIC_API_BASE_URL", "  ")]).unwrap();
        assert!(cfg.upstream.token.is_none());
        assert_eq!(cfg.lookup.base_url, "/api");
    }

    #[test]
    fn upstream_requires_all_three() {
        let cfg = config(&[
            ("UPSTREAM_API_BASE_URL", "https://api.example.com"),
            ("UPSTREAM_PROPERTY_ENDPOINT", "/properties"),
        ])
        .unwrap();
        assert!(cfg.upstream.required().is_none());

        let cfg = config(&[
            ("UPSTREAM_API_BASE_URL", "https://api.example.com"),
            ("UPSTREAM_PROPERTY_ENDPOINT", "/properties"),
            ("UPSTREAM_API_TOKEN", "secret"),
        ])
        .unwrap();
        assert_eq!(
            cfg.upstream.required(),
            Some(("https://api.example.com", "/properties", "secret"))
        );
    }

    #[test]
    fn invalid_numbers_and_addresses() {
        assert!(matches!(
            config(&[("BIND_ADDR", "nope")]),
            Err(ConfigError::InvalidBindAddr(_))
        ));
        assert!(matches!(
            config(&[("MAX_WORKERS", "0")]),
            Err(ConfigError::InvalidMaxWorkers(_))
        ));
    }
}

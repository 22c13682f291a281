//! Server configuration loaded from the process environment.

use std::env;

use thiserror::Error;
use url::Url;

const DEFAULT_ADDRESS: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TEMPLATES_DIR: &str = "templates";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Errors raised while reading configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is absent.
    #[error("{0} environment variable not set")]
    Missing(&'static str),
    /// A variable is present but cannot be used.
    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Runtime settings shared by `main` and the route handlers.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    pub address: String,
    /// Port the HTTP server binds to.
    pub port: u16,
    /// Base URL of the commerce backend (customers, carts, orders, ...).
    pub api_url: Url,
    /// Base URL of the catalog backend (invoices, inventory, promotions, ...).
    pub catalog_api_url: Url,
    /// Key material used to sign the flash message cookie.
    pub secret: Option<String>,
    /// Glob root for the Tera templates.
    pub templates_dir: String,
    /// Timeout applied to every backend request.
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Build the configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_url = read("API_URL").ok_or(ConfigError::Missing("API_URL"))?;
        let api_url = parse_base_url("API_URL", &api_url)?;

        let catalog_api_url = match read("CATALOG_API_URL") {
            Some(value) => parse_base_url("CATALOG_API_URL", &value)?,
            None => {
                log::warn!("CATALOG_API_URL not set, catalog pages will use API_URL");
                api_url.clone()
            }
        };

        let port = match read("PORT") {
            Some(value) => value.parse::<u16>().map_err(|err| ConfigError::Invalid {
                name: "PORT",
                reason: err.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let request_timeout_secs = match read("REQUEST_TIMEOUT_SECS") {
            Some(value) => value.parse::<u64>().map_err(|err| ConfigError::Invalid {
                name: "REQUEST_TIMEOUT_SECS",
                reason: err.to_string(),
            })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            address: read("ADDRESS").unwrap_or_else(|| DEFAULT_ADDRESS.to_string()),
            port,
            api_url,
            catalog_api_url,
            secret: read("SECRET_KEY"),
            templates_dir: read("TEMPLATES_DIR")
                .unwrap_or_else(|| DEFAULT_TEMPLATES_DIR.to_string()),
            request_timeout_secs,
        })
    }
}

fn parse_base_url(name: &'static str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|err| ConfigError::Invalid {
        name,
        reason: err.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::Invalid {
            name,
            reason: format!("unsupported scheme `{other}`"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn requires_api_url() {
        let result = ServerConfig::from_lookup(lookup(&[]));

        assert!(matches!(result, Err(ConfigError::Missing("API_URL"))));
    }

    #[test]
    fn applies_defaults_and_catalog_fallback() {
        let config = ServerConfig::from_lookup(lookup(&[("API_URL", "http://backend:4000")]))
            .expect("config should load");

        assert_eq!(config.address, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.catalog_api_url, config.api_url);
        assert_eq!(config.templates_dir, "templates");
        assert_eq!(config.request_timeout_secs, 15);
        assert!(config.secret.is_none());
    }

    #[test]
    fn reads_explicit_values() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("API_URL", "http://backend:4000/api"),
            ("CATALOG_API_URL", "https://catalog.example.com"),
            ("PORT", "9090"),
            ("ADDRESS", "0.0.0.0"),
            ("SECRET_KEY", "secret"),
        ]))
        .expect("config should load");

        assert_eq!(config.port, 9090);
        assert_eq!(config.address, "0.0.0.0");
        assert_eq!(config.catalog_api_url.host_str(), Some("catalog.example.com"));
        assert_eq!(config.secret.as_deref(), Some("secret"));
    }

    #[test]
    fn rejects_invalid_values() {
        let bad_port = ServerConfig::from_lookup(lookup(&[
            ("API_URL", "http://backend"),
            ("PORT", "eighty"),
        ]));
        assert!(matches!(
            bad_port,
            Err(ConfigError::Invalid { name: "PORT", .. })
        ));

        let bad_scheme = ServerConfig::from_lookup(lookup(&[("API_URL", "ftp://backend")]));
        assert!(matches!(
            bad_scheme,
            Err(ConfigError::Invalid { name: "API_URL", .. })
        ));
    }
}

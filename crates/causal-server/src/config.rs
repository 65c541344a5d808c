//! Server configuration loaded from environment variables.
//!
//! Every variable is optional:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `HOST` | `0.0.0.0` | Address to bind |
//! | `PORT` | `5000` | TCP port to listen on |
//! | `BROADCAST_CAPACITY` | `256` | Realtime events buffered per subscriber |
//! | `CORS_ALLOWED_ORIGINS` | `*` | Comma-separated allowed origins |

use axum::http::HeaderValue;

use causal_core::broadcast::DEFAULT_CAPACITY;

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set to a value that cannot be used.
    #[error("invalid {var}: {reason}")]
    Invalid {
        /// The offending environment variable.
        var: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Origins allowed to call the API from a browser.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CorsOrigins {
    /// Any origin, without credentials.
    #[default]
    Any,
    /// Only the listed origins, with credentials.
    List(Vec<HeaderValue>),
}

/// Configuration for the Causal server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
    /// Realtime events buffered per subscriber before it starts skipping.
    pub broadcast_capacity: usize,
    /// Browser origins allowed by CORS.
    pub cors_origins: CorsOrigins,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 5000,
            broadcast_capacity: DEFAULT_CAPACITY,
            cors_origins: CorsOrigins::Any,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|e| ConfigError::Invalid {
                var: "PORT",
                reason: format!("{raw}: {e}"),
            })?,
            None => defaults.port,
        };

        let broadcast_capacity = match lookup("BROADCAST_CAPACITY") {
            Some(raw) => parse_capacity(&raw)?,
            None => defaults.broadcast_capacity,
        };

        let cors_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => parse_origins(&raw)?,
            None => defaults.cors_origins,
        };

        Ok(Self {
            host,
            port,
            broadcast_capacity,
            cors_origins,
        })
    }
}

fn parse_capacity(raw: &str) -> Result<usize, ConfigError> {
    let capacity: usize = raw.trim().parse().map_err(|e| ConfigError::Invalid {
        var: "BROADCAST_CAPACITY",
        reason: format!("{raw}: {e}"),
    })?;
    if capacity == 0 {
        return Err(ConfigError::Invalid {
            var: "BROADCAST_CAPACITY",
            reason: String::from("must be greater than zero"),
        });
    }
    Ok(capacity)
}

fn parse_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if entries.is_empty() || entries.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    entries
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
                var: "CORS_ALLOWED_ORIGINS",
                reason: format!("{origin}: {e}"),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        ServerConfig::from_lookup(|var| map.get(var).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.broadcast_capacity, DEFAULT_CAPACITY);
        assert_eq!(config.cors_origins, CorsOrigins::Any);
    }

    #[test]
    fn reads_port_and_host() {
        let config = load(&[("HOST", "127.0.0.1"), ("PORT", "8081")]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8081);
    }

    #[test]
    fn rejects_bad_port() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn rejects_zero_capacity() {
        assert!(load(&[("BROADCAST_CAPACITY", "0")]).is_err());
        assert_eq!(
            load(&[("BROADCAST_CAPACITY", "16")]).unwrap().broadcast_capacity,
            16
        );
    }

    #[test]
    fn parses_origin_list() {
        let config = load(&[(
            "CORS_ALLOWED_ORIGINS",
            "https://causal.example, http://localhost:3000",
        )])
        .unwrap();
        assert_eq!(
            config.cors_origins,
            CorsOrigins::List(vec![
                HeaderValue::from_static("https://causal.example"),
                HeaderValue::from_static("http://localhost:3000"),
            ])
        );
    }

    #[test]
    fn wildcard_means_any() {
        let config = load(&[("CORS_ALLOWED_ORIGINS", "*")]).unwrap();
        assert_eq!(config.cors_origins, CorsOrigins::Any);
    }
}

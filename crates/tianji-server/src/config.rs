//! Server configuration
//!
//! Values come from Shuttle secrets (Secrets.toml locally).
//! - TIANJI_CORS_ORIGIN: allowed browser origin (unset = permissive)
//! - TIANJI_BODY_LIMIT_BYTES: max JSON body size (default 1 MiB)
//! - TIANJI_COIN_SEED: fixed seed for coin tosses (demos and replays)

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;

pub const CORS_ORIGIN_KEY: &str = "TIANJI_CORS_ORIGIN";
pub const BODY_LIMIT_KEY: &str = "TIANJI_BODY_LIMIT_BYTES";
pub const COIN_SEED_KEY: &str = "TIANJI_COIN_SEED";

const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub cors_origin: Option<String>,
    pub body_limit_bytes: usize,
    pub coin_seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            cors_origin: None,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            coin_seed: None,
        }
    }
}

impl ServerConfig {
    /// Build from a key lookup; unparsable values fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let cors_origin = lookup(CORS_ORIGIN_KEY)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let body_limit_bytes = match lookup(BODY_LIMIT_KEY) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(
                    "⚠️  Invalid {}={:?}, using {} bytes",
                    BODY_LIMIT_KEY,
                    raw,
                    DEFAULT_BODY_LIMIT_BYTES
                );
                DEFAULT_BODY_LIMIT_BYTES
            }),
            None => DEFAULT_BODY_LIMIT_BYTES,
        };

        let coin_seed = lookup(COIN_SEED_KEY).and_then(|raw| match raw.trim().parse() {
            Ok(seed) => Some(seed),
            Err(_) => {
                tracing::warn!("⚠️  Invalid {}={:?}, tossing unseeded", COIN_SEED_KEY, raw);
                None
            }
        });

        Self {
            cors_origin,
            body_limit_bytes,
            coin_seed,
        }
    }

    /// CORS layer for the configured origin
    pub fn cors_layer(&self) -> Result<CorsLayer, String> {
        let Some(origin) = &self.cors_origin else {
            return Ok(CorsLayer::permissive());
        };

        let origin = origin
            .parse::<HeaderValue>()
            .map_err(|e| format!("Invalid {} {:?}: {}", CORS_ORIGIN_KEY, origin, e))?;

        Ok(CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.body_limit_bytes, 1024 * 1024);
    }

    #[test]
    fn test_reads_values() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            (CORS_ORIGIN_KEY, " https://tianji.example "),
            (BODY_LIMIT_KEY, "4096"),
            (COIN_SEED_KEY, "88"),
        ]));
        assert_eq!(config.cors_origin.as_deref(), Some("https://tianji.example"));
        assert_eq!(config.body_limit_bytes, 4096);
        assert_eq!(config.coin_seed, Some(88));
        assert!(config.cors_layer().is_ok());
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            (CORS_ORIGIN_KEY, "   "),
            (BODY_LIMIT_KEY, "lots"),
            (COIN_SEED_KEY, "-1"),
        ]));
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_rejects_unusable_origin() {
        let config = ServerConfig {
            cors_origin: Some("bad\norigin".to_string()),
            ..ServerConfig::default()
        };
        assert!(config.cors_layer().is_err());
    }
}

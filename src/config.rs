//! Configuration management for the status dashboard

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::env;
use std::time::Duration;

use crate::errors::{DashboardError, Result};
use crate::models::status::ServiceEndpoint;

/// Monitored dependencies: (name, env override, default health URL)
const DEFAULT_SERVICES: [(&str, &str, &str); 4] = [
    ("scrapy-bot", "SCRAPY_BOT_URL", "http://scrapy-bot:8000/health"),
    ("kafka-bot", "KAFKA_BOT_URL", "http://kafka-bot:8000/health"),
    ("ai-bot", "AI_BOT_URL", "http://ai-bot:8000/health"),
    ("wp-publisher", "WP_PUBLISHER_URL", "http://wp-publisher:8081/docs"),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Health-check endpoints, in display order
    pub services: Vec<ServiceEndpoint>,

    /// Bound on every single probe
    pub probe_timeout: Duration,

    /// Address the HTTP server binds to
    pub host: String,

    /// Port the HTTP server listens on
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            services: DEFAULT_SERVICES
                .iter()
                .map(|(name, _, url)| ServiceEndpoint::new(*name, *url))
                .collect(),
            probe_timeout: Duration::from_secs(2),
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let services = DEFAULT_SERVICES
            .iter()
            .map(|(name, key, default_url)| {
                let url = lookup(*key).unwrap_or_else(|| default_url.to_string());
                ServiceEndpoint::new(*name, url.trim())
            })
            .collect();

        let mut config = Config {
            services,
            ..Config::default()
        };

        if let Some(timeout) = lookup("PROBE_TIMEOUT_MS") {
            if let Ok(ms) = timeout.trim().parse::<u64>() {
                config.probe_timeout = Duration::from_millis(ms);
            }
        }

        if let Some(host) = lookup("DASHBOARD_HOST") {
            config.host = host;
        }

        if let Some(port) = lookup("DASHBOARD_PORT") {
            if let Ok(port) = port.trim().parse() {
                config.port = port;
            }
        }

        config
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.services.is_empty() {
            return Err(config_error("at least one service must be configured"));
        }

        let mut seen = HashSet::new();
        for service in &self.services {
            if service.name.is_empty() {
                return Err(config_error("service name cannot be empty"));
            }

            if !seen.insert(service.name.as_str()) {
                return Err(config_error(format!("duplicate service name: {}", service.name)));
            }

            match reqwest::Url::parse(&service.url) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => {}
                Ok(url) => {
                    return Err(config_error(format!(
                        "service {} has unsupported URL scheme: {}",
                        service.name,
                        url.scheme()
                    )));
                }
                Err(e) => {
                    return Err(config_error(format!(
                        "service {} has invalid URL {}: {}",
                        service.name, service.url, e
                    )));
                }
            }
        }

        if self.probe_timeout.is_zero() {
            return Err(config_error("probe_timeout must be greater than 0"));
        }

        if self.host.is_empty() {
            return Err(config_error("host cannot be empty"));
        }

        Ok(())
    }
}

fn config_error(msg: impl Into<String>) -> DashboardError {
    DashboardError::Config(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);

        let names: Vec<&str> = config.services.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["scrapy-bot", "kafka-bot", "ai-bot", "wp-publisher"]);
        assert_eq!(config.services[3].url, "http://wp-publisher:8081/docs");
        assert_eq!(config.probe_timeout, Duration::from_secs(2));
        assert_eq!(config.port, 8080);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("AI_BOT_URL", "http://localhost:9000/health"),
            ("PROBE_TIMEOUT_MS", "500"),
            ("DASHBOARD_PORT", "9999"),
        ]));

        assert_eq!(config.services[2].name, "ai-bot");
        assert_eq!(config.services[2].url, "http://localhost:9000/health");
        assert_eq!(config.services[0].url, "http://scrapy-bot:8000/health");
        assert_eq!(config.probe_timeout, Duration::from_millis(500));
        assert_eq!(config.port, 9999);
    }

    #[test]
    fn test_unparseable_values_keep_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("PROBE_TIMEOUT_MS", "soon"),
            ("DASHBOARD_PORT", "not-a-port"),
        ]));

        assert_eq!(config.probe_timeout, Duration::from_secs(2));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let mut config = Config::default();
        config.services.push(ServiceEndpoint::new("ai-bot", "http://other/health"));

        let err = config.validate().unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
        assert!(err.to_string().contains("duplicate service name: ai-bot"));
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        let mut config = Config::default();
        config.services[0].url = "scrapy-bot/health".to_string();
        assert!(config.validate().is_err());

        config.services[0].url = "ftp://scrapy-bot/health".to_string();
        assert!(
            config
                .validate()
                .unwrap_err()
                .to_string()
                .contains("unsupported URL scheme")
        );
    }

    #[test]
    fn test_validate_rejects_zero_timeout_and_empty_table() {
        let mut config = Config::default();
        config.probe_timeout = Duration::ZERO;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.services.clear();
        assert!(config.validate().is_err());
    }
}

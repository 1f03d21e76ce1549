//! Server settings read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::warn;

/// Default path of the pricing rules file.
pub const DEFAULT_RULES_PATH: &str = "./config/pricing.yaml";

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Path of the pricing rules YAML file.
    pub rules_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            rules_path: PathBuf::from(DEFAULT_RULES_PATH),
        }
    }
}

impl ServerConfig {
    /// Reads settings from the process environment.
    ///
    /// `PORT` is honoured for hosted platforms, and `CAKE_PRICING_PORT` takes
    /// priority over it. Unparseable values keep the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(host) = lookup("CAKE_PRICING_HOST") {
            cfg.host = host;
        }

        for key in ["PORT", "CAKE_PRICING_PORT"] {
            if let Some(port) = lookup(key) {
                match port.parse::<u16>() {
                    Ok(p) => cfg.port = p,
                    Err(_) => warn!(key, value = %port, "Ignoring invalid port"),
                }
            }
        }

        if let Some(path) = lookup("CAKE_PRICING_RULES") {
            cfg.rules_path = PathBuf::from(path);
        }

        cfg
    }

    /// Returns the socket address to bind.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_environment_empty() {
        assert_eq!(config_from(&[]), ServerConfig::default());
    }

    #[test]
    fn test_prefixed_port_beats_platform_port() {
        let cfg = config_from(&[("PORT", "3000"), ("CAKE_PRICING_PORT", "9090")]);
        assert_eq!(cfg.port, 9090);
    }

    #[test]
    fn test_invalid_port_keeps_default() {
        let cfg = config_from(&[("CAKE_PRICING_PORT", "not-a-port")]);
        assert_eq!(cfg.port, 8080);
    }

    #[test]
    fn test_rules_path_and_host_overrides() {
        let cfg = config_from(&[
            ("CAKE_PRICING_HOST", "127.0.0.1"),
            ("CAKE_PRICING_RULES", "/etc/cakes/pricing.yaml"),
        ]);
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.rules_path, PathBuf::from("/etc/cakes/pricing.yaml"));
        assert_eq!(cfg.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
    }
}

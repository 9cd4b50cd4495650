//! Server configuration.

use serde::{Deserialize, Serialize};
use stresstest_ext_http::{GeminiConfig, YahooConfig};

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty allows any
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Quote source settings
    #[serde(default)]
    pub market_data: YahooConfig,

    /// Text generator settings
    #[serde(default)]
    pub generator: GeminiConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            market_data: YahooConfig::default(),
            generator: GeminiConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, std::io::Error> {
        toml::from_str(content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Apply environment overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from `lookup`.
    ///
    /// Recognized keys: `GEMINI_API_KEY`, `GEMINI_MODEL`, `STRESSTEST_HOST`,
    /// `STRESSTEST_PORT`. Blank values and unparseable ports are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = get("GEMINI_API_KEY") {
            self.generator.api_key = Some(key);
        }
        if let Some(model) = get("GEMINI_MODEL") {
            self.generator.model = model;
        }
        if let Some(host) = get("STRESSTEST_HOST") {
            self.host = host;
        }
        if let Some(port) = get("STRESSTEST_PORT") {
            match port.parse() {
                Ok(port) => self.port = port,
                Err(_) => tracing::warn!("Ignoring invalid STRESSTEST_PORT '{}'", port),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 5000);
        assert!(config.cors_origins.is_empty());
        assert!(config.generator.api_key.is_none());
    }

    #[test]
    fn test_from_toml() {
        let config = ServerConfig::from_toml(
            r#"
            port = 8080
            cors_origins = ["http://localhost:3000"]

            [generator]
            model = "gemini-1.5-pro"
            temperature = 0.2
            "#,
        )
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.generator.model, "gemini-1.5-pro");
        assert_eq!(config.generator.temperature, 0.2);
        assert_eq!(config.market_data.base_url, YahooConfig::default().base_url);
    }

    #[test]
    fn test_from_toml_invalid() {
        let err = ServerConfig::from_toml("port = \"eighty\"").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("GEMINI_API_KEY", "secret"),
            ("GEMINI_MODEL", " "),
            ("STRESSTEST_PORT", "9000"),
        ]
        .into_iter()
        .collect();

        let mut config = ServerConfig::default();
        config.apply_overrides(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.generator.api_key.as_deref(), Some("secret"));
        assert_eq!(config.generator.model, GeminiConfig::default().model);
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_port_override_ignored() {
        let mut config = ServerConfig::default();
        config.apply_overrides(|k| (k == "STRESSTEST_PORT").then(|| "http".to_string()));
        assert_eq!(config.port, 5000);
    }
}

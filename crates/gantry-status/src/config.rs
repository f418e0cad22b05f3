//! Status configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Identity reported by the status endpoint.
///
/// Built once at startup and handed to [`StatusHandler`](crate::status::StatusHandler).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    pub name: String,
    pub version: String,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            name: "Gantry Status API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl StatusConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(mut self, name: Option<String>, version: Option<String>) -> Self {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(version) = version {
            self.version = version;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let config = StatusConfig::from_toml(
            r#"
name = "Orders API"
version = "2.3.1"
"#,
        )
        .unwrap();
        assert_eq!(config.name, "Orders API");
        assert_eq!(config.version, "2.3.1");
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config = StatusConfig::from_toml(r#"name = "Orders API""#).unwrap();
        assert_eq!(config.name, "Orders API");
        assert_eq!(config.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn reject_wrong_types() {
        assert!(StatusConfig::from_toml("version = 3").is_err());
    }

    #[test]
    fn overrides_replace_only_given_fields() {
        let config = StatusConfig::default().with_overrides(None, Some("9.9.9".to_string()));
        assert_eq!(config.name, "Gantry Status API");
        assert_eq!(config.version, "9.9.9");
    }

    #[test]
    fn from_file_missing_path_fails() {
        assert!(StatusConfig::from_file(Path::new("/nonexistent/status.toml")).is_err());
    }
}

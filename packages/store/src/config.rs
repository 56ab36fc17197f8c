//! # Dashboard configuration — `dashboard.toml`
//!
//! ```toml
//! [api]
//! base_url = "https://aluminium-ulwg.onrender.com"
//!
//! [report]
//! locale = ""   # empty = detect from the viewer (browser language / $LANG)
//! ```
//!
//! Every section defaults, so a missing or empty file equals the defaults. On
//! native targets [`DashboardConfig::load`] reads the file from the working
//! directory when present and then applies the `DASHBOARD_API_BASE_URL` and
//! `DASHBOARD_LOCALE` environment overrides (a `.env` file is honoured).

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://aluminium-ulwg.onrender.com";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid dashboard config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize dashboard config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration stored in `dashboard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Where the admin API lives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Report rendering options.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Locale tag for date cells, e.g. `"en-GB"`. Empty means detect.
    #[serde(default)]
    pub locale: String,
}

impl DashboardConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "dashboard.toml"
    }

    /// Builder method to point at another API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The configured locale, if one was set.
    pub fn locale(&self) -> Option<&str> {
        let locale = self.report.locale.trim();
        (!locale.is_empty()).then_some(locale)
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Apply overrides from a variable lookup (`DASHBOARD_API_BASE_URL`, `DASHBOARD_LOCALE`).
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DASHBOARD_API_BASE_URL").filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
        if let Some(locale) = lookup("DASHBOARD_LOCALE") {
            self.report.locale = locale.trim().to_string();
        }
        self
    }

    /// Load `dashboard.toml` from the working directory plus environment overrides.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let path = std::path::Path::new(Self::filename());
        let config = match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.display().to_string(),
                    source,
                })
            }
        };
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_from_empty_file() {
        let config = DashboardConfig::from_toml("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.locale(), None);
    }

    #[test]
    fn test_parse_sections() {
        let config = DashboardConfig::from_toml(
            r#"
            [api]
            base_url = "http://localhost:5000"

            [report]
            locale = "en-GB"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.locale(), Some("en-GB"));

        let back = DashboardConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            DashboardConfig::from_toml("[api]\nbase_url = 3"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("DASHBOARD_API_BASE_URL", " http://staging:8080 "),
            ("DASHBOARD_LOCALE", "de_DE.UTF-8"),
        ]
        .into_iter()
        .collect();
        let config = DashboardConfig::default()
            .with_overrides(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.api.base_url, "http://staging:8080");
        assert_eq!(config.locale(), Some("de_DE.UTF-8"));

        let untouched = DashboardConfig::default()
            .with_base_url("http://a")
            .with_overrides(|_| None);
        assert_eq!(untouched.api.base_url, "http://a");
    }
}

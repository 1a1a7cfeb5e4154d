//! # User Configuration
//!
//! Model of `~/.config/getoai/config.json`: proxy and mirror settings, per-tool
//! method preferences and the AppImage destination.
//!
//! Configuration never aborts a command. A missing file yields defaults, an
//! unreadable or malformed one yields defaults plus a warning.
//!
//! Settings reach package managers through [`UserConfig::env_exports`], which the
//! process runner applies to every child process. The parent environment is left
//! untouched.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use colored::Colorize;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schemas::tools::InstallMethod;
use crate::{log_debug, log_warn};

/// Keys accepted by `config set` besides `preferred_method.<tool>`.
pub const SETTABLE_KEYS: [&str; 6] = [
    "http_proxy",
    "https_proxy",
    "npm_registry",
    "pypi_mirror",
    "go_proxy",
    "bin_path",
];

const PREFERRED_PREFIX: &str = "preferred_method.";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown config key: {0} (available keys: {keys}, preferred_method.<tool>)", keys = SETTABLE_KEYS.join(", "))]
    UnknownKey(String),

    #[error("Unknown tool in config key: {0}")]
    UnknownTool(String),

    #[error(transparent)]
    InvalidMethod(#[from] crate::schemas::tools::SchemaParseError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub http_proxy: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub https_proxy: String,
    /// npm registry mirror, exported as `npm_config_registry`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub npm_registry: String,
    /// PyPI index mirror, exported as `PIP_INDEX_URL`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pypi_mirror: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub go_proxy: String,
    /// Tool name to method name. Values are validated when used.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub preferred_method: BTreeMap<String, String>,
    /// AppImage destination; `~` is expanded.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bin_path: String,
}

impl UserConfig {
    /// Reads `path`, degrading to defaults on any problem.
    pub fn load(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log_debug!("[Config] No config file at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                log_warn!(
                    "[Config] Could not read {}: {}. Using defaults.",
                    path.display().to_string().yellow(),
                    e
                );
                return Self::default();
            }
        };
        match serde_json::from_str::<UserConfig>(&contents) {
            Ok(config) => {
                log_debug!("[Config] Loaded {}", path.display().to_string().green());
                config
            }
            Err(e) => {
                log_warn!(
                    "[Config] Ignoring malformed {}: {}. Using defaults.",
                    path.display().to_string().yellow(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Writes pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source: io::Error| ConfigError::Write {
            path: path.display().to_string(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, format!("{json}\n")).map_err(write_err)
    }

    /// Environment variables handed to child processes.
    pub fn env_exports(&self) -> Vec<(String, String)> {
        let mut exports = Vec::new();
        let mut push = |key: &str, value: &str| {
            if !value.is_empty() {
                exports.push((key.to_string(), value.to_string()));
            }
        };
        push("HTTP_PROXY", &self.http_proxy);
        push("http_proxy", &self.http_proxy);
        push("HTTPS_PROXY", &self.https_proxy);
        push("https_proxy", &self.https_proxy);
        push("GOPROXY", &self.go_proxy);
        push("npm_config_registry", &self.npm_registry);
        push("PIP_INDEX_URL", &self.pypi_mirror);
        exports
    }

    /// Proxy for in-process HTTP downloads; HTTPS wins over HTTP.
    pub fn download_proxy(&self) -> Option<&str> {
        [&self.https_proxy, &self.http_proxy]
            .into_iter()
            .find(|p| !p.is_empty())
            .map(String::as_str)
    }

    /// Parsed preference for `tool`; an invalid stored value reads as none.
    pub fn preferred_method_for(&self, tool: &str) -> Option<InstallMethod> {
        let raw = self.preferred_method.get(tool)?;
        match raw.parse::<InstallMethod>() {
            Ok(method) => Some(method),
            Err(e) => {
                log_warn!("[Config] Ignoring preferred_method.{}: {}", tool, e);
                None
            }
        }
    }

    /// Applies `config set <key> <value>`. `tool_exists` validates `preferred_method.<tool>`.
    pub fn set_key(
        &mut self,
        key: &str,
        value: &str,
        tool_exists: impl Fn(&str) -> bool,
    ) -> Result<(), ConfigError> {
        if let Some(tool) = key.strip_prefix(PREFERRED_PREFIX) {
            if !tool_exists(tool) {
                return Err(ConfigError::UnknownTool(tool.to_string()));
            }
            let method: InstallMethod = value.parse()?;
            self.preferred_method
                .insert(tool.to_string(), method.as_str().to_string());
            return Ok(());
        }

        let slot = match key {
            "http_proxy" => &mut self.http_proxy,
            "https_proxy" => &mut self.https_proxy,
            "npm_registry" => &mut self.npm_registry,
            "pypi_mirror" => &mut self.pypi_mirror,
            "go_proxy" => &mut self.go_proxy,
            "bin_path" => &mut self.bin_path,
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        };
        *slot = value.trim().to_string();
        Ok(())
    }

    /// Scalar settings in display order.
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("http_proxy", self.http_proxy.as_str()),
            ("https_proxy", self.https_proxy.as_str()),
            ("npm_registry", self.npm_registry.as_str()),
            ("pypi_mirror", self.pypi_mirror.as_str()),
            ("go_proxy", self.go_proxy.as_str()),
            ("bin_path", self.bin_path.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let config = UserConfig::load(&temp.path().join("config.json"));
        assert_eq!(config, UserConfig::default());
    }

    #[test]
    fn malformed_file_is_not_fatal() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.json");
        fs::write(&path, "{ not json").expect("write");
        assert_eq!(UserConfig::load(&path), UserConfig::default());
    }

    #[test]
    fn save_then_load_keeps_settings_and_omits_empty_fields() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("nested").join("config.json");
        let mut config = UserConfig::default();
        config.set_key("npm_registry", "https://registry.npmmirror.com", |_| true).expect("set");
        config.set_key("preferred_method.cursor", "Brew", |_| true).expect("set");
        config.save(&path).expect("save");

        let raw = fs::read_to_string(&path).expect("read");
        assert!(raw.contains("\"npm_registry\": \"https://registry.npmmirror.com\""));
        assert!(!raw.contains("http_proxy"));
        let reloaded = UserConfig::load(&path);
        assert_eq!(reloaded, config);
        assert_eq!(reloaded.preferred_method_for("cursor"), Some(InstallMethod::Brew));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let mut config = UserConfig::default();
        let err = config.set_key("proxy", "x", |_| true).expect_err("unknown");
        assert!(err.to_string().starts_with("Unknown config key: proxy"));
    }

    #[test]
    fn preferred_method_validates_tool_and_method() {
        let mut config = UserConfig::default();
        assert!(matches!(
            config.set_key("preferred_method.ghost-tool", "brew", |t| t == "cursor"),
            Err(ConfigError::UnknownTool(_))
        ));
        assert!(matches!(
            config.set_key("preferred_method.cursor", "flatpak", |t| t == "cursor"),
            Err(ConfigError::InvalidMethod(_))
        ));
        assert!(config.preferred_method.is_empty());
    }

    #[test]
    fn env_exports_cover_proxies_and_mirrors() {
        let config = UserConfig {
            https_proxy: "http://127.0.0.1:7890".into(),
            go_proxy: "https://goproxy.cn,direct".into(),
            pypi_mirror: "https://pypi.tuna.tsinghua.edu.cn/simple".into(),
            ..Default::default()
        };
        let exports = config.env_exports();
        let keys: Vec<&str> = exports.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["HTTPS_PROXY", "https_proxy", "GOPROXY", "PIP_INDEX_URL"]);
        assert_eq!(config.download_proxy(), Some("http://127.0.0.1:7890"));
        assert_eq!(UserConfig::default().download_proxy(), None);
    }

    #[test]
    fn stale_preference_reads_as_none() {
        let mut config = UserConfig::default();
        config.preferred_method.insert("cursor".into(), "flatpak".into());
        assert_eq!(config.preferred_method_for("cursor"), None);
        assert_eq!(config.preferred_method_for("aider"), None);
    }
}

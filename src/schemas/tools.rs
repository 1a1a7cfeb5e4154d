//! # Tool Catalog Schema
//!
//! Data structures describing installable tools and the ways they can be installed.
//!
//! ## Core Concepts
//!
//! - **InstallMethod**: closed set of installation mechanisms (package managers, script, docker, download)
//! - **ToolRecord**: one catalog entry, with its base methods and per-OS overrides
//! - **InstallConfig**: the parameters one method needs (package, args, docker and download payloads)
//!
//! Records are assembled with small builder methods so the catalog reads as data:
//!
//! ```ignore
//! ToolRecord::new("aider", "AI pair programming in your terminal", Category::Coding, "https://aider.chat")
//!     .command("aider")
//!     .method(InstallMethod::Pip, InstallConfig::package("aider-chat"))
//!     .method(InstallMethod::Brew, InstallConfig::package("aider"));
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::libs::utilities::file_types::FileType;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Raised when a user-supplied string does not name a known enum value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaParseError {
    #[error("unknown install method '{0}' (expected one of: {methods})", methods = InstallMethod::names().join(", "))]
    UnknownMethod(String),
    #[error("unknown category '{0}' (expected one of: llm, coding, ui, utility, platform, infra)")]
    UnknownCategory(String),
}

// ============================================================================
// CORE ENUMS
// ============================================================================

/// Supported installation methods.
///
/// The declaration order doubles as the stable tie-break order wherever methods
/// are collected into ordered maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallMethod {
    /// Remote shell script piped into `sh`.
    Script,
    /// Homebrew formula or cask.
    Brew,
    /// Global npm package.
    Npm,
    /// Python package through pip / pip3.
    Pip,
    /// `go install <module>@latest`.
    Go,
    /// Docker image: pull, long-running container, or compose stack.
    Docker,
    /// Pre-built binary. Declared by some catalog entries but has no driver.
    Binary,
    /// Debian/Ubuntu apt-get.
    Apt,
    /// Chocolatey (Windows).
    Choco,
    /// Scoop (Windows).
    Scoop,
    /// Desktop installer download or, failing a URL, the vendor's download page.
    Download,
}

impl InstallMethod {
    pub const ALL: [InstallMethod; 11] = [
        InstallMethod::Script,
        InstallMethod::Brew,
        InstallMethod::Npm,
        InstallMethod::Pip,
        InstallMethod::Go,
        InstallMethod::Docker,
        InstallMethod::Binary,
        InstallMethod::Apt,
        InstallMethod::Choco,
        InstallMethod::Scoop,
        InstallMethod::Download,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InstallMethod::Script => "script",
            InstallMethod::Brew => "brew",
            InstallMethod::Npm => "npm",
            InstallMethod::Pip => "pip",
            InstallMethod::Go => "go",
            InstallMethod::Docker => "docker",
            InstallMethod::Binary => "binary",
            InstallMethod::Apt => "apt",
            InstallMethod::Choco => "choco",
            InstallMethod::Scoop => "scoop",
            InstallMethod::Download => "download",
        }
    }

    /// Human readable description used by `info` and the method prompt.
    pub fn description(self) -> &'static str {
        match self {
            InstallMethod::Script => "Installation script (curl/wget)",
            InstallMethod::Brew => "Homebrew package manager (macOS/Linux)",
            InstallMethod::Npm => "NPM package manager (Node.js)",
            InstallMethod::Pip => "Pip package manager (Python)",
            InstallMethod::Go => "Go install (requires Go toolchain)",
            InstallMethod::Docker => "Docker container",
            InstallMethod::Binary => "Pre-built binary",
            InstallMethod::Apt => "APT package manager (Debian/Ubuntu)",
            InstallMethod::Choco => "Chocolatey package manager (Windows)",
            InstallMethod::Scoop => "Scoop package manager (Windows)",
            InstallMethod::Download => "Manual download and install",
        }
    }

    /// Sort rank used when ordering available methods. Lower wins.
    pub fn priority(self) -> u8 {
        match self {
            InstallMethod::Brew | InstallMethod::Apt | InstallMethod::Choco => 1,
            InstallMethod::Scoop => 2,
            InstallMethod::Npm | InstallMethod::Pip => 3,
            InstallMethod::Go => 4,
            InstallMethod::Script => 5,
            InstallMethod::Docker => 6,
            InstallMethod::Binary => 7,
            InstallMethod::Download => 8,
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|m| m.as_str()).collect()
    }
}

impl fmt::Display for InstallMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstallMethod {
    type Err = SchemaParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == wanted)
            .ok_or_else(|| SchemaParseError::UnknownMethod(s.to_string()))
    }
}

/// Operating systems the catalog distinguishes between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Os {
    Darwin,
    Linux,
    Windows,
    Other,
}

impl Os {
    /// The OS this binary was compiled for.
    pub fn current() -> Self {
        match std::env::consts::OS {
            "macos" => Os::Darwin,
            "linux" => Os::Linux,
            "windows" => Os::Windows,
            _ => Os::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Os::Darwin => "darwin",
            Os::Linux => "linux",
            Os::Windows => "windows",
            Os::Other => "other",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed set of catalog categories. Declaration order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Llm,
    Coding,
    Ui,
    Utility,
    Platform,
    Infra,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Llm,
        Category::Coding,
        Category::Ui,
        Category::Utility,
        Category::Platform,
        Category::Infra,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Llm => "llm",
            Category::Coding => "coding",
            Category::Ui => "ui",
            Category::Utility => "utility",
            Category::Platform => "platform",
            Category::Infra => "infra",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Category::Llm => "LLM Runners",
            Category::Coding => "Coding Assistants",
            Category::Ui => "Chat Interfaces",
            Category::Utility => "CLI Utilities",
            Category::Platform => "AI Platforms",
            Category::Infra => "AI Infrastructure",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SchemaParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| SchemaParseError::UnknownCategory(s.to_string()))
    }
}

// ============================================================================
// INSTALL CONFIGURATION
// ============================================================================

/// Per-method installation parameters.
///
/// `package` is overloaded by method: a package name for package managers, an
/// image reference for docker, a script URL for `script`, and the vendor's
/// download page for `download`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallConfig {
    pub package: String,
    pub args: Vec<String>,
    pub docker_ports: Vec<String>,
    pub docker_env: BTreeMap<String, String>,
    pub docker_volumes: Vec<String>,
    pub container_name: Option<String>,
    pub compose_repo_url: Option<String>,
    pub download_urls: BTreeMap<Os, String>,
    pub file_type: Option<FileType>,
}

/// Which docker sub-flow a config selects. Compose wins over everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockerFlow<'a> {
    Compose { repo_url: &'a str },
    Service,
    Pull,
}

impl InstallConfig {
    pub fn package(package: impl Into<String>) -> Self {
        InstallConfig {
            package: package.into(),
            ..Default::default()
        }
    }

    pub fn with_args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|a| a.to_string()));
        self
    }

    /// Shorthand for Homebrew casks.
    pub fn cask(self) -> Self {
        self.with_args(&["--cask"])
    }

    pub fn container(mut self, name: &str, ports: &[&str]) -> Self {
        self.container_name = Some(name.to_string());
        self.docker_ports.extend(ports.iter().map(|p| p.to_string()));
        self
    }

    pub fn volume(mut self, volume: &str) -> Self {
        self.docker_volumes.push(volume.to_string());
        self
    }

    #[cfg(test)]
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.docker_env.insert(key.to_string(), value.to_string());
        self
    }

    pub fn compose(mut self, repo_url: &str) -> Self {
        self.compose_repo_url = Some(repo_url.to_string());
        self
    }

    pub fn download_url(mut self, os: Os, url: &str) -> Self {
        self.download_urls.insert(os, url.to_string());
        self
    }

    pub fn docker_flow(&self) -> DockerFlow<'_> {
        match self.compose_repo_url.as_deref() {
            Some(repo_url) if !repo_url.is_empty() => DockerFlow::Compose { repo_url },
            _ if !self.docker_ports.is_empty() => DockerFlow::Service,
            _ => DockerFlow::Pull,
        }
    }

    pub fn download_url_for(&self, os: Os) -> Option<&str> {
        self.download_urls
            .get(&os)
            .map(String::as_str)
            .filter(|u| !u.is_empty())
    }
}

// ============================================================================
// TOOL RECORD
// ============================================================================

/// One installable tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRecord {
    pub name: String,
    pub description: String,
    pub category: Category,
    pub website: String,
    /// Binary probed on PATH; empty for tools without a CLI surface.
    pub command: String,
    /// Desktop bundle name (`Cursor.app`); empty for CLI tools.
    pub app_name: String,
    pub install_methods: BTreeMap<InstallMethod, InstallConfig>,
    pub platform_overrides: BTreeMap<Os, BTreeMap<InstallMethod, InstallConfig>>,
}

impl ToolRecord {
    pub fn new(name: &str, description: &str, category: Category, website: &str) -> Self {
        ToolRecord {
            name: name.to_string(),
            description: description.to_string(),
            category,
            website: website.to_string(),
            command: String::new(),
            app_name: String::new(),
            install_methods: BTreeMap::new(),
            platform_overrides: BTreeMap::new(),
        }
    }

    pub fn command(mut self, command: &str) -> Self {
        self.command = command.to_string();
        self
    }

    pub fn app(mut self, app_name: &str) -> Self {
        self.app_name = app_name.to_string();
        self
    }

    pub fn method(mut self, method: InstallMethod, config: InstallConfig) -> Self {
        self.install_methods.insert(method, config);
        self
    }

    pub fn override_for(mut self, os: Os, method: InstallMethod, config: InstallConfig) -> Self {
        self.platform_overrides
            .entry(os)
            .or_default()
            .insert(method, config);
        self
    }

    /// Methods declared for `os`: base methods first, then override-only methods.
    pub fn declared_methods(&self, os: Os) -> Vec<InstallMethod> {
        let mut methods: Vec<InstallMethod> = self.install_methods.keys().copied().collect();
        if let Some(overrides) = self.platform_overrides.get(&os) {
            for method in overrides.keys() {
                if !methods.contains(method) {
                    methods.push(*method);
                }
            }
        }
        methods
    }

    /// Methods declared in the override block for `os`, in declaration order.
    pub fn override_methods(&self, os: Os) -> Vec<InstallMethod> {
        self.platform_overrides
            .get(&os)
            .map(|m| m.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Effective configuration of `method` on `os`; an override replaces the base entry.
    pub fn config_for(&self, method: InstallMethod, os: Os) -> Option<&InstallConfig> {
        self.platform_overrides
            .get(&os)
            .and_then(|m| m.get(&method))
            .or_else(|| self.install_methods.get(&method))
    }

    #[cfg(test)]
    /// Package argument handed to a driver: the configured package or the tool name.
    pub fn package_for(&self, method: InstallMethod, os: Os) -> String {
        self.config_for(method, os)
            .map(|c| c.package.clone())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| self.name.clone())
    }

    #[cfg(test)]
    pub fn is_manual_only(&self) -> bool {
        self.install_methods.is_empty() && self.platform_overrides.is_empty()
    }

    /// Repository URL of a compose-based deployment, if the docker method uses one.
    pub fn compose_repo(&self) -> Option<&str> {
        match self.install_methods.get(&InstallMethod::Docker)?.docker_flow() {
            DockerFlow::Compose { repo_url } => Some(repo_url),
            _ => None,
        }
    }

    /// Name of the long-running container this tool's docker method manages.
    pub fn container_name(&self) -> Option<String> {
        let docker = self.install_methods.get(&InstallMethod::Docker)?;
        match docker.docker_flow() {
            DockerFlow::Service => Some(
                docker
                    .container_name
                    .clone()
                    .filter(|n| !n.is_empty())
                    .unwrap_or_else(|| self.name.clone()),
            ),
            DockerFlow::Pull => docker.container_name.clone().filter(|n| !n.is_empty()),
            DockerFlow::Compose { .. } => None,
        }
    }

    pub fn is_desktop_app(&self) -> bool {
        !self.app_name.is_empty()
    }
}

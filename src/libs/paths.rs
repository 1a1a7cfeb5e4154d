// Resolves every filesystem location the installer touches.
//
// Nothing here is fatal: a missing home directory degrades to the current
// directory so read-only commands such as `list` keep working.

use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::log_debug;

/// Default configuration file, relative to the home directory.
const CONFIG_RELATIVE: [&str; 3] = [".config", "getoai", "config.json"];
/// Root for compose checkouts, relative to the home directory.
const TOOLS_RELATIVE: [&str; 2] = [".getoai", "tools"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    home_dir: PathBuf,
    config_file: PathBuf,
    tools_dir: PathBuf,
    local_bin: PathBuf,
}

impl AppPaths {
    /// Resolves paths for the current user.
    ///
    /// `config_override` comes from `--config` / `GETOAI_CONFIG` and is tilde-expanded.
    pub fn resolve(config_override: Option<&str>) -> Self {
        let home_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        let mut paths = Self::rooted(&home_dir);
        if let Some(custom) = config_override.filter(|c| !c.trim().is_empty()) {
            paths.config_file = expand_path(custom);
        }
        log_debug!(
            "[Paths] home={} config={}",
            paths.home_dir.display().to_string().cyan(),
            paths.config_file.display().to_string().cyan()
        );
        paths
    }

    /// Paths anchored at an explicit home directory.
    pub fn rooted(home_dir: &Path) -> Self {
        AppPaths {
            home_dir: home_dir.to_path_buf(),
            config_file: CONFIG_RELATIVE.iter().fold(home_dir.to_path_buf(), |p, s| p.join(s)),
            tools_dir: TOOLS_RELATIVE.iter().fold(home_dir.to_path_buf(), |p, s| p.join(s)),
            local_bin: home_dir.join(".local").join("bin"),
        }
    }

    /// Replaces the AppImage destination with a user-configured directory.
    pub fn with_bin_path(mut self, bin_path: Option<&str>) -> Self {
        if let Some(custom) = bin_path.filter(|b| !b.trim().is_empty()) {
            self.local_bin = expand_path(custom);
        }
        self
    }

    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    pub fn tools_dir(&self) -> &Path {
        &self.tools_dir
    }

    /// Directory a compose-based tool is cloned into.
    pub fn compose_dir(&self, tool_name: &str) -> PathBuf {
        self.tools_dir.join(tool_name)
    }

    pub fn local_bin(&self) -> &Path {
        &self.local_bin
    }

    pub fn appimage_path(&self, tool_name: &str) -> PathBuf {
        self.local_bin.join(format!("{tool_name}.appimage"))
    }
}

/// Expands `~` and environment variables; falls back to the literal path.
pub fn expand_path(raw: &str) -> PathBuf {
    match shellexpand::full(raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => PathBuf::from(shellexpand::tilde(raw).as_ref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rooted_layout() {
        let paths = AppPaths::rooted(Path::new("/home/dev"));
        assert_eq!(paths.config_file(), Path::new("/home/dev/.config/getoai/config.json"));
        assert_eq!(paths.compose_dir("dify"), PathBuf::from("/home/dev/.getoai/tools/dify"));
        assert_eq!(paths.appimage_path("jan"), PathBuf::from("/home/dev/.local/bin/jan.appimage"));
    }

    #[test]
    fn bin_path_override_replaces_local_bin() {
        let paths = AppPaths::rooted(Path::new("/home/dev")).with_bin_path(Some("/opt/ai/bin"));
        assert_eq!(paths.local_bin(), Path::new("/opt/ai/bin"));
        let untouched = AppPaths::rooted(Path::new("/home/dev")).with_bin_path(Some("  "));
        assert_eq!(untouched.local_bin(), Path::new("/home/dev/.local/bin"));
    }
}

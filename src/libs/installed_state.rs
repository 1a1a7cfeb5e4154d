//! Installed-state detection and version probing.
//!
//! Detection order matters: a compose deployment is judged by its running
//! containers, a container tool by `docker ps -a`, a desktop app by its bundle
//! on disk, and everything else by its command on PATH.

use std::fmt;
use std::path::PathBuf;

use crate::installers::compose::{find_compose_file, lists_running_container, running_query};
use crate::libs::paths::AppPaths;
use crate::libs::process::{CommandRunner, CommandSpec};
use crate::libs::utilities::platform::{HostTool, PlatformSnapshot};
use crate::log_debug;
use crate::schemas::tools::{Os, ToolRecord};

const VERSION_FLAGS: [&str; 3] = ["--version", "-v", "version"];

/// What `installed`, `info` and the update report print in the version column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionReport {
    /// No command to ask (desktop apps, containers).
    NotApplicable,
    NotInstalled,
    Known(String),
    /// Installed, but no version flag produced output.
    Unknown,
}

impl fmt::Display for VersionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionReport::NotApplicable => f.write_str("N/A"),
            VersionReport::NotInstalled => f.write_str("not installed"),
            VersionReport::Known(version) => f.write_str(version),
            VersionReport::Unknown => f.write_str("unknown"),
        }
    }
}

pub struct InstalledState<'a> {
    runner: &'a dyn CommandRunner,
    paths: &'a AppPaths,
}

impl<'a> InstalledState<'a> {
    pub fn new(runner: &'a dyn CommandRunner, paths: &'a AppPaths) -> Self {
        InstalledState { runner, paths }
    }

    pub fn is_installed(&self, tool: &ToolRecord, platform: &PlatformSnapshot) -> bool {
        if tool.compose_repo().is_some() {
            return self.compose_running(tool, platform);
        }
        if let Some(container) = tool.container_name() {
            if self.container_exists(&container, platform) {
                return true;
            }
        }
        if tool.is_desktop_app() {
            return desktop_app_locations(tool, platform.os, self.paths)
                .iter()
                .any(|p| p.exists());
        }
        !tool.command.is_empty() && self.runner.on_path(&tool.command)
    }

    pub fn version(&self, tool: &ToolRecord, platform: &PlatformSnapshot) -> VersionReport {
        if tool.command.is_empty() {
            return VersionReport::NotApplicable;
        }
        if !self.is_installed(tool, platform) {
            return VersionReport::NotInstalled;
        }
        self.probe_version(&tool.command)
    }

    /// First line printed by the first version flag that succeeds.
    pub fn probe_version(&self, command: &str) -> VersionReport {
        for flag in VERSION_FLAGS {
            let Ok(output) = self.runner.capture(&CommandSpec::new(command).arg(flag)) else {
                continue;
            };
            if !output.success() {
                continue;
            }
            if let Some(line) = output
                .combined()
                .lines()
                .map(str::trim)
                .find(|l| !l.is_empty())
            {
                return VersionReport::Known(line.to_string());
            }
        }
        VersionReport::Unknown
    }

    /// Checkout present and at least one stack container running.
    fn compose_running(&self, tool: &ToolRecord, platform: &PlatformSnapshot) -> bool {
        let checkout = self.paths.compose_dir(&tool.name);
        if !checkout.is_dir() {
            return false;
        }
        let Some(compose_file) = find_compose_file(&checkout) else {
            log_debug!("[State] {} checked out but has no compose file", tool.name);
            return false;
        };
        let Some(query) = running_query(platform.compose, &compose_file) else {
            return false;
        };
        self.runner
            .capture(&query)
            .map(|out| out.success() && lists_running_container(&out.stdout))
            .unwrap_or(false)
    }

    /// Container with exactly this name exists, running or stopped.
    pub fn container_exists(&self, name: &str, platform: &PlatformSnapshot) -> bool {
        if !platform.has(HostTool::Docker) {
            return false;
        }
        let query = CommandSpec::new("docker").args([
            "ps".to_string(),
            "-a".to_string(),
            "--filter".to_string(),
            format!("name=^{name}$"),
            "--format".to_string(),
            "{{.ID}}".to_string(),
        ]);
        self.runner
            .capture(&query)
            .map(|out| out.success() && !out.stdout.trim().is_empty())
            .unwrap_or(false)
    }
}

/// Places a desktop app's bundle or launcher may live on `os`.
pub fn desktop_app_locations(tool: &ToolRecord, os: Os, paths: &AppPaths) -> Vec<PathBuf> {
    match os {
        Os::Darwin => vec![
            PathBuf::from("/Applications").join(&tool.app_name),
            paths.home_dir().join("Applications").join(&tool.app_name),
        ],
        Os::Linux => {
            let launcher = format!("{}.desktop", tool.name);
            vec![
                PathBuf::from("/usr/share/applications").join(&launcher),
                PathBuf::from("/usr/local/share/applications").join(&launcher),
                paths
                    .home_dir()
                    .join(".local")
                    .join("share")
                    .join("applications")
                    .join(&launcher),
                paths.appimage_path(&tool.name),
            ]
        }
        Os::Windows => ["ProgramFiles", "ProgramFiles(x86)"]
            .iter()
            .filter_map(std::env::var_os)
            .map(|root| PathBuf::from(root).join(&tool.app_name))
            .collect(),
        Os::Other => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::process::testing::FakeRunner;
    use crate::libs::utilities::platform::{ComposeFlavor, DockerStatus};
    use crate::schemas::tools::{Category, InstallConfig, InstallMethod};
    use std::fs;

    fn cli_tool() -> ToolRecord {
        ToolRecord::new("aider", "pair programmer", Category::Coding, "https://aider.chat")
            .command("aider")
            .method(InstallMethod::Pip, InstallConfig::package("aider-chat"))
    }

    fn compose_tool() -> ToolRecord {
        ToolRecord::new("dify", "platform", Category::Platform, "https://dify.ai").method(
            InstallMethod::Docker,
            InstallConfig::package("langgenius/dify-web").compose("https://github.com/langgenius/dify"),
        )
    }

    fn docker_host() -> PlatformSnapshot {
        PlatformSnapshot::new(Os::Linux).with_docker(DockerStatus::Running, ComposeFlavor::V2)
    }

    #[test]
    fn cli_tool_is_installed_when_on_path() {
        let runner = FakeRunner::new();
        let paths = AppPaths::rooted(std::path::Path::new("/home/dev"));
        let state = InstalledState::new(&runner, &paths);
        let platform = PlatformSnapshot::new(Os::Linux);
        assert!(!state.is_installed(&cli_tool(), &platform));
        assert_eq!(state.version(&cli_tool(), &platform), VersionReport::NotInstalled);

        runner.add_to_path("aider");
        runner.output_for("aider --version", "aider 0.82.1\n");
        assert!(state.is_installed(&cli_tool(), &platform));
        assert_eq!(
            state.version(&cli_tool(), &platform),
            VersionReport::Known("aider 0.82.1".into())
        );
    }

    #[test]
    fn version_falls_through_flags() {
        let runner = FakeRunner::with_path(&["mods"]);
        runner.fail_on("mods --version");
        runner.output_for("mods -v", "\nmods v1.7.0\n");
        let paths = AppPaths::rooted(std::path::Path::new("/home/dev"));
        let state = InstalledState::new(&runner, &paths);
        assert_eq!(state.probe_version("mods"), VersionReport::Known("mods v1.7.0".into()));

        let silent = FakeRunner::new();
        let state = InstalledState::new(&silent, &paths);
        assert_eq!(state.probe_version("quiet"), VersionReport::Unknown);
        assert_eq!(silent.calls().len(), VERSION_FLAGS.len());
    }

    #[test]
    fn tools_without_command_report_not_applicable() {
        let runner = FakeRunner::new();
        let paths = AppPaths::rooted(std::path::Path::new("/home/dev"));
        let state = InstalledState::new(&runner, &paths);
        let tool = compose_tool();
        assert_eq!(state.version(&tool, &docker_host()).to_string(), "N/A");
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn compose_tool_needs_checkout_and_running_container() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = AppPaths::rooted(temp.path());
        let runner = FakeRunner::new();
        let state = InstalledState::new(&runner, &paths);
        let tool = compose_tool();

        assert!(!state.is_installed(&tool, &docker_host()));
        assert!(runner.calls().is_empty());

        let checkout = paths.compose_dir("dify").join("docker");
        fs::create_dir_all(&checkout).expect("mkdir");
        fs::write(checkout.join("docker-compose.yaml"), "services: {}\n").expect("write");
        runner.output_for("docker compose -f", "WARN[0000] variable not set\n");
        assert!(!state.is_installed(&tool, &docker_host()));

        let running = FakeRunner::new();
        running.output_for("docker compose -f", "WARN[0000] variable not set\n3f2a9c81b0de\n");
        let state = InstalledState::new(&running, &paths);
        assert!(state.is_installed(&tool, &docker_host()));
        assert!(running.calls()[0].ends_with("ps --status=running -q"));
    }

    #[test]
    fn container_tool_checks_docker_ps() {
        let tool = ToolRecord::new("open-webui", "ui", Category::Ui, "https://openwebui.com")
            .method(
                InstallMethod::Docker,
                InstallConfig::package("ghcr.io/open-webui/open-webui:main")
                    .container("open-webui", &["3000:8080"]),
            );
        let runner = FakeRunner::new();
        runner.output_for("docker ps -a", "9b1c2d3e4f50\n");
        let paths = AppPaths::rooted(std::path::Path::new("/home/dev"));
        let state = InstalledState::new(&runner, &paths);
        assert!(state.is_installed(&tool, &docker_host()));
        assert_eq!(
            runner.calls(),
            vec!["docker ps -a --filter name=^open-webui$ --format {{.ID}}".to_string()]
        );

        let no_docker = FakeRunner::new();
        let state = InstalledState::new(&no_docker, &paths);
        assert!(!state.is_installed(&tool, &PlatformSnapshot::new(Os::Linux)));
        assert!(no_docker.calls().is_empty());
    }

    #[test]
    fn desktop_app_detected_in_user_applications() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = AppPaths::rooted(temp.path());
        let tool = ToolRecord::new("cursor", "editor", Category::Coding, "https://cursor.sh")
            .app("Cursor.app")
            .method(InstallMethod::Download, InstallConfig::package("https://cursor.sh"));
        let runner = FakeRunner::new();
        let state = InstalledState::new(&runner, &paths);
        let mac = PlatformSnapshot::new(Os::Darwin);

        let user_bundle = temp.path().join("Applications").join("Cursor.app");
        if !PathBuf::from("/Applications/Cursor.app").exists() {
            assert!(!state.is_installed(&tool, &mac));
        }
        fs::create_dir_all(&user_bundle).expect("mkdir");
        assert!(state.is_installed(&tool, &mac));
    }

    #[test]
    fn appimage_counts_as_installed_on_linux() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = AppPaths::rooted(temp.path());
        let tool = ToolRecord::new("jan", "chat", Category::Ui, "https://jan.ai").app("Jan.app");
        let locations = desktop_app_locations(&tool, Os::Linux, &paths);
        assert_eq!(locations.last(), Some(&paths.appimage_path("jan")));
        assert!(locations[0].ends_with("applications/jan.desktop"));
        assert!(desktop_app_locations(&tool, Os::Other, &paths).is_empty());
    }
}

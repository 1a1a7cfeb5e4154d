// ============================================================================
//                          STANDARD LIBRARY DEPENDENCIES
// ============================================================================

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

// ============================================================================
//                             EXTERNAL DEPENDENCIES
// ============================================================================

use colored::Colorize;

// ============================================================================
//                              INTERNAL IMPORTS
// ============================================================================

use crate::libs::process::{CommandRunner, CommandSpec};
use crate::log_debug;
use crate::schemas::tools::Os;

/// Helper programs whose presence gates installation methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HostTool {
    Brew,
    AptGet,
    Choco,
    Scoop,
    Node,
    Npm,
    Pip,
    Pip3,
    Python3,
    Go,
    Docker,
    DockerCompose,
    Curl,
    Wget,
    Git,
    Dpkg,
}

impl HostTool {
    pub const ALL: [HostTool; 16] = [
        HostTool::Brew,
        HostTool::AptGet,
        HostTool::Choco,
        HostTool::Scoop,
        HostTool::Node,
        HostTool::Npm,
        HostTool::Pip,
        HostTool::Pip3,
        HostTool::Python3,
        HostTool::Go,
        HostTool::Docker,
        HostTool::DockerCompose,
        HostTool::Curl,
        HostTool::Wget,
        HostTool::Git,
        HostTool::Dpkg,
    ];

    /// Executable name looked up on PATH.
    pub fn binary(self) -> &'static str {
        match self {
            HostTool::Brew => "brew",
            HostTool::AptGet => "apt-get",
            HostTool::Choco => "choco",
            HostTool::Scoop => "scoop",
            HostTool::Node => "node",
            HostTool::Npm => "npm",
            HostTool::Pip => "pip",
            HostTool::Pip3 => "pip3",
            HostTool::Python3 => "python3",
            HostTool::Go => "go",
            HostTool::Docker => "docker",
            HostTool::DockerCompose => "docker-compose",
            HostTool::Curl => "curl",
            HostTool::Wget => "wget",
            HostTool::Git => "git",
            HostTool::Dpkg => "dpkg",
        }
    }
}

/// Outcome of asking the docker daemon for its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockerStatus {
    NotInstalled,
    NotRunning { detail: String },
    Running,
}

/// Markers in `docker info` output meaning the daemon is down rather than broken.
const DAEMON_DOWN_MARKERS: [&str; 3] = [
    "Cannot connect to the Docker daemon",
    "Is the docker daemon running",
    "permission denied",
];

impl DockerStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, DockerStatus::Running)
    }

    /// What the user should do to make docker usable.
    pub fn remediation(&self) -> Option<String> {
        match self {
            DockerStatus::Running => None,
            DockerStatus::NotInstalled => Some(
                "Docker is not installed.\n  Install it first:  getoai install docker\n  Or manually from: https://www.docker.com"
                    .to_string(),
            ),
            DockerStatus::NotRunning { detail } => {
                if DAEMON_DOWN_MARKERS.iter().any(|m| detail.contains(m)) {
                    Some(
                        "Docker is installed but not running. Please start Docker Desktop or the Docker service:\n  macOS/Windows: Start Docker Desktop application\n  Linux:         sudo systemctl start docker"
                            .to_string(),
                    )
                } else {
                    Some(format!(
                        "Docker is installed but not responding.\n  Error: {}",
                        detail.trim()
                    ))
                }
            }
        }
    }
}

/// Which compose tooling is present. V2 is preferred when both exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeFlavor {
    /// `docker compose` subcommand.
    V2,
    /// Standalone `docker-compose` binary.
    V1,
    Missing,
}

impl ComposeFlavor {
    /// Command prefix used to drive compose, e.g. `docker compose -f …`.
    pub fn command(self) -> Option<CommandSpec> {
        match self {
            ComposeFlavor::V2 => Some(CommandSpec::new("docker").arg("compose")),
            ComposeFlavor::V1 => Some(CommandSpec::new("docker-compose")),
            ComposeFlavor::Missing => None,
        }
    }
}

/// What this machine offers, as far as installation is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformSnapshot {
    pub os: Os,
    pub arch: String,
    tools: BTreeSet<HostTool>,
    pub docker: DockerStatus,
    pub compose: ComposeFlavor,
    pub home_dir: PathBuf,
}

impl PlatformSnapshot {
    /// An empty machine: nothing on PATH, docker absent. Tests build on this.
    pub fn new(os: Os) -> Self {
        PlatformSnapshot {
            os,
            arch: normalize_arch(std::env::consts::ARCH),
            tools: BTreeSet::new(),
            docker: DockerStatus::NotInstalled,
            compose: ComposeFlavor::Missing,
            home_dir: PathBuf::from("."),
        }
    }

    pub fn with_home(mut self, home: &Path) -> Self {
        self.home_dir = home.to_path_buf();
        self
    }

    pub fn has(&self, tool: HostTool) -> bool {
        self.tools.contains(&tool)
    }

    pub fn has_http_client(&self) -> bool {
        self.has(HostTool::Curl) || self.has(HostTool::Wget)
    }

    /// pip3 wins over pip when both are present.
    pub fn pip_binary(&self) -> Option<&'static str> {
        if self.has(HostTool::Pip3) {
            Some("pip3")
        } else if self.has(HostTool::Pip) {
            Some("pip")
        } else {
            None
        }
    }
}

#[cfg(test)]
impl PlatformSnapshot {
    pub fn with_tool(mut self, tool: HostTool) -> Self {
        self.tools.insert(tool);
        self
    }

    pub fn with_docker(mut self, status: DockerStatus, compose: ComposeFlavor) -> Self {
        if status != DockerStatus::NotInstalled {
            self.tools.insert(HostTool::Docker);
        }
        self.docker = status;
        self.compose = compose;
        self
    }
}

/// Probes the real machine through `runner`. Never fails; unknowns read as absent.
pub fn probe_system(runner: &dyn CommandRunner, home_dir: &Path) -> PlatformSnapshot {
    let mut snapshot = PlatformSnapshot::new(Os::current()).with_home(home_dir);
    for tool in HostTool::ALL {
        if runner.on_path(tool.binary()) {
            snapshot.tools.insert(tool);
        }
    }

    if snapshot.has(HostTool::Docker) {
        snapshot.docker = match runner.capture(&CommandSpec::new("docker").arg("info")) {
            Ok(out) if out.success() => DockerStatus::Running,
            Ok(out) => DockerStatus::NotRunning {
                detail: out.combined(),
            },
            Err(e) => DockerStatus::NotRunning {
                detail: e.to_string(),
            },
        };
        snapshot.compose = probe_compose(runner, snapshot.has(HostTool::DockerCompose));
    } else if snapshot.has(HostTool::DockerCompose) {
        snapshot.compose = ComposeFlavor::V1;
    }

    log_debug!(
        "[Platform] os={} arch={} tools={:?} docker={:?} compose={:?}",
        snapshot.os.as_str().cyan(),
        snapshot.arch.cyan(),
        snapshot.tools,
        snapshot.docker,
        snapshot.compose
    );
    snapshot
}

fn probe_compose(runner: &dyn CommandRunner, has_standalone: bool) -> ComposeFlavor {
    let v2 = runner
        .capture(&CommandSpec::new("docker").args(["compose", "version"]))
        .map(|out| out.success() && out.combined().contains("Docker Compose"))
        .unwrap_or(false);
    if v2 {
        ComposeFlavor::V2
    } else if has_standalone {
        ComposeFlavor::V1
    } else {
        ComposeFlavor::Missing
    }
}

/// Cached platform detection with explicit invalidation.
///
/// The first `detect()` runs the probe; later calls return the cached snapshot
/// until `refresh()` re-probes (after installing a prerequisite such as Node.js).
pub struct PlatformProbe<'a> {
    source: Box<dyn Fn() -> PlatformSnapshot + 'a>,
    cache: RefCell<Option<PlatformSnapshot>>,
}

impl<'a> PlatformProbe<'a> {
    pub fn system(runner: &'a dyn CommandRunner, home_dir: &Path) -> Self {
        let home_dir = home_dir.to_path_buf();
        Self::from_fn(move || probe_system(runner, &home_dir))
    }

    pub fn from_fn(source: impl Fn() -> PlatformSnapshot + 'a) -> Self {
        PlatformProbe {
            source: Box::new(source),
            cache: RefCell::new(None),
        }
    }

    pub fn detect(&self) -> PlatformSnapshot {
        if let Some(cached) = self.cache.borrow().as_ref() {
            return cached.clone();
        }
        let fresh = (self.source)();
        *self.cache.borrow_mut() = Some(fresh.clone());
        fresh
    }

    pub fn refresh(&self) -> PlatformSnapshot {
        log_debug!("[Platform] Cache invalidated, re-probing");
        self.cache.borrow_mut().take();
        self.detect()
    }
}

/// Normalizes CPU architecture names ("aarch64" → "arm64", "amd64" → "x86_64").
pub fn normalize_arch(arch: &str) -> String {
    match arch.to_lowercase().as_str() {
        "aarch64" | "arm64" => "arm64".to_string(),
        "x86_64" | "amd64" => "x86_64".to_string(),
        other => other.to_string(),
    }
}

//! # Installer Drivers
//!
//! One driver per [`InstallMethod`]. Every driver implements [`InstallDriver`]:
//! an availability check that is a pure function of the [`PlatformSnapshot`], plus
//! install and uninstall operations that shell out through the [`CommandRunner`].
//!
//! The [`DriverTable`] maps the closed method enum onto driver implementations with
//! an exhaustive `match`, so adding a method without deciding its driver does not
//! compile. `binary` is declared by catalog data but has no driver.
//!
//! Package-manager drivers stream the child's output live. Drivers that must
//! post-process output (DMG mount points, container listings) capture it instead.

use std::io;

use thiserror::Error;

use crate::libs::paths::AppPaths;
use crate::libs::process::{CapturedOutput, CommandRunner, CommandSpec};
use crate::libs::utilities::platform::PlatformSnapshot;
use crate::log_debug;
use crate::schemas::tools::{InstallConfig, InstallMethod, ToolRecord};

/// `apt-get` driver (Debian/Ubuntu).
pub(crate) mod apt;
/// Homebrew formulae and casks.
pub(crate) mod brew;
/// Chocolatey (Windows).
pub(crate) mod choco;
/// Compose-based deployments cloned from a repository.
pub(crate) mod compose;
/// DMG/PKG/DEB/AppImage/EXE/MSI procedures used by the download driver.
pub(crate) mod desktop;
/// Image pulls and long-running containers; delegates compose flows.
pub(crate) mod docker;
/// Desktop installer download or website fallback.
pub(crate) mod download;
/// `go install`.
pub(crate) mod go;
/// Global npm packages.
pub(crate) mod npm;
/// pip / pip3.
pub(crate) mod pip;
/// Scoop (Windows).
pub(crate) mod scoop;
/// `curl | sh` install scripts.
pub(crate) mod script;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Failures a driver can report.
#[derive(Debug, Error)]
pub enum InstallError {
    /// A driver-invoked program exited non-zero.
    #[error("{}", describe_process_failure(.command, .code, .detail))]
    ExternalProcess {
        command: String,
        code: i32,
        detail: String,
    },

    /// The program could not be started at all.
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The driver cannot perform this action (e.g. uninstall through a script).
    #[error("{method} installer does not support {action}")]
    Unsupported {
        method: InstallMethod,
        action: &'static str,
        hint: Option<String>,
    },

    /// Download or image pull failed.
    #[error("{detail}")]
    Network { detail: String, hint: Option<String> },

    /// A required helper (docker daemon, compose, curl) is missing.
    #[error("{what} is required but not available")]
    Prerequisite { what: String, hint: Option<String> },

    /// Bad input or an artifact the driver cannot handle.
    #[error("{0}")]
    Invalid(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

fn describe_process_failure(command: &str, code: &i32, detail: &str) -> String {
    let detail = detail.trim();
    if detail.is_empty() {
        format!("`{command}` exited with code {code}")
    } else {
        format!("`{command}` exited with code {code}: {detail}")
    }
}

impl InstallError {
    /// Remediation text shown below the error, when the driver has one.
    pub fn hint(&self) -> Option<&str> {
        match self {
            InstallError::Unsupported { hint, .. }
            | InstallError::Network { hint, .. }
            | InstallError::Prerequisite { hint, .. } => hint.as_deref(),
            _ => None,
        }
    }

    /// Wraps a failed command as a network failure with a remediation hint.
    pub fn into_network(self, hint: &str) -> InstallError {
        match self {
            InstallError::Network { detail, .. } => InstallError::Network {
                detail,
                hint: Some(hint.to_string()),
            },
            other => InstallError::Network {
                detail: other.to_string(),
                hint: Some(hint.to_string()),
            },
        }
    }
}

// ============================================================================
// DRIVER CONTRACT
// ============================================================================

/// Everything a driver may consult while executing.
pub struct DriverContext<'a> {
    pub runner: &'a dyn CommandRunner,
    pub platform: &'a PlatformSnapshot,
    pub paths: &'a AppPaths,
    /// Proxy for direct HTTP downloads; child processes get theirs from the runner.
    pub proxy: Option<&'a str>,
}

/// One tool, one method, and the effective configuration for the current OS.
pub struct InstallRequest<'a> {
    pub tool: &'a ToolRecord,
    pub method: InstallMethod,
    pub config: &'a InstallConfig,
}

impl<'a> InstallRequest<'a> {
    pub fn new(tool: &'a ToolRecord, method: InstallMethod, config: &'a InstallConfig) -> Self {
        InstallRequest {
            tool,
            method,
            config,
        }
    }

    /// Configured package, falling back to the tool name.
    pub fn package(&self) -> &str {
        if self.config.package.is_empty() {
            &self.tool.name
        } else {
            &self.config.package
        }
    }

    pub fn args(&self) -> &[String] {
        &self.config.args
    }
}

pub trait InstallDriver {
    /// Pure function of the snapshot; never spawns processes.
    fn is_available(&self, platform: &PlatformSnapshot) -> bool;

    fn install(&self, request: &InstallRequest<'_>, ctx: &DriverContext<'_>) -> Result<(), InstallError>;

    fn uninstall(&self, request: &InstallRequest<'_>, ctx: &DriverContext<'_>) -> Result<(), InstallError>;
}

/// Registration table from method to driver.
#[derive(Debug, Default, Clone, Copy)]
pub struct DriverTable;

impl DriverTable {
    pub fn new() -> Self {
        DriverTable
    }

    pub fn driver(&self, method: InstallMethod) -> Option<&'static dyn InstallDriver> {
        match method {
            InstallMethod::Script => Some(&script::ScriptDriver),
            InstallMethod::Brew => Some(&brew::BrewDriver),
            InstallMethod::Npm => Some(&npm::NpmDriver),
            InstallMethod::Pip => Some(&pip::PipDriver),
            InstallMethod::Go => Some(&go::GoDriver),
            InstallMethod::Docker => Some(&docker::DockerDriver),
            InstallMethod::Apt => Some(&apt::AptDriver),
            InstallMethod::Choco => Some(&choco::ChocoDriver),
            InstallMethod::Scoop => Some(&scoop::ScoopDriver),
            InstallMethod::Download => Some(&download::DownloadDriver),
            InstallMethod::Binary => None,
        }
    }

    /// Whether `method` has a driver that is usable on `platform`.
    pub fn is_available(&self, method: InstallMethod, platform: &PlatformSnapshot) -> bool {
        self.driver(method)
            .map(|d| d.is_available(platform))
            .unwrap_or(false)
    }
}

// ============================================================================
// SHARED EXECUTION HELPERS
// ============================================================================

/// Runs `cmd` with live output; non-zero exit becomes `ExternalProcess`.
pub(crate) fn run_streamed(ctx: &DriverContext<'_>, cmd: &CommandSpec) -> Result<(), InstallError> {
    log_debug!("[Installer] Executing: {}", cmd);
    match ctx.runner.stream(cmd) {
        Ok(status) if status.success => Ok(()),
        Ok(status) => Err(InstallError::ExternalProcess {
            command: cmd.to_string(),
            code: status.code.unwrap_or(-1),
            detail: String::new(),
        }),
        Err(source) => Err(InstallError::Spawn {
            command: cmd.to_string(),
            source,
        }),
    }
}

/// Runs `cmd` with captured output; non-zero exit becomes `ExternalProcess` carrying the output.
pub(crate) fn run_captured(
    ctx: &DriverContext<'_>,
    cmd: &CommandSpec,
) -> Result<CapturedOutput, InstallError> {
    log_debug!("[Installer] Executing (captured): {}", cmd);
    match ctx.runner.capture(cmd) {
        Ok(output) if output.success() => Ok(output),
        Ok(output) => Err(InstallError::ExternalProcess {
            command: cmd.to_string(),
            code: output.status.code.unwrap_or(-1),
            detail: output.combined(),
        }),
        Err(source) => Err(InstallError::Spawn {
            command: cmd.to_string(),
            source,
        }),
    }
}

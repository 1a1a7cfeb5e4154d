//! # Homebrew Installer Module
//!
//! Installs and removes tools through Homebrew on macOS and Linux.
//!
//! ## Command Shapes
//!
//! - **Formula**: `brew install <formula> [args...]`
//! - **Cask**: catalog entries carry `--cask` in their args, giving `brew install cursor --cask`
//! - **Tap formula**: fully qualified names such as `kardolus/chatgpt-cli/chatgpt-cli` are passed through untouched
//! - **Removal**: `brew uninstall <formula>`
//!
//! Output is streamed so Homebrew's own progress reporting stays visible.

use colored::Colorize;

use crate::installers::{DriverContext, InstallDriver, InstallError, InstallRequest, run_streamed};
use crate::libs::process::CommandSpec;
use crate::libs::utilities::platform::{HostTool, PlatformSnapshot};
use crate::{log_debug, log_info};

pub(crate) struct BrewDriver;

impl InstallDriver for BrewDriver {
    fn is_available(&self, platform: &PlatformSnapshot) -> bool {
        platform.has(HostTool::Brew)
    }

    /// Runs `brew install <package> <args...>`.
    ///
    /// # Arguments
    /// * `request.package()`: formula or cask token.
    /// * `request.args()`: passed after the package, e.g. `--cask`.
    fn install(&self, request: &InstallRequest<'_>, ctx: &DriverContext<'_>) -> Result<(), InstallError> {
        let cmd = CommandSpec::new("brew")
            .arg("install")
            .arg(request.package())
            .args(request.args().iter().cloned());
        log_info!(
            "[Brew Installer] Installing {} via Homebrew",
            request.package().bold()
        );
        log_debug!("[Brew Installer] Command: {}", cmd.to_string().cyan());
        run_streamed(ctx, &cmd)
    }

    fn uninstall(&self, request: &InstallRequest<'_>, ctx: &DriverContext<'_>) -> Result<(), InstallError> {
        log_info!(
            "[Brew Installer] Uninstalling {} via Homebrew",
            request.package().bold()
        );
        run_streamed(ctx, &CommandSpec::new("brew").args(["uninstall", request.package()]))
    }
}

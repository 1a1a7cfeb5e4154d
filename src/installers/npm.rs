use colored::Colorize;

use crate::installers::{DriverContext, InstallDriver, InstallError, InstallRequest, run_streamed};
use crate::libs::process::CommandSpec;
use crate::libs::utilities::platform::{HostTool, PlatformSnapshot};
use crate::log_info;

/// Global npm packages (`npm install -g`).
pub(crate) struct NpmDriver;

impl InstallDriver for NpmDriver {
    fn is_available(&self, platform: &PlatformSnapshot) -> bool {
        platform.has(HostTool::Npm)
    }

    fn install(&self, request: &InstallRequest<'_>, ctx: &DriverContext<'_>) -> Result<(), InstallError> {
        log_info!("[NPM Installer] Installing {} globally", request.package().bold());
        let cmd = CommandSpec::new("npm")
            .args(["install", "-g", request.package()])
            .args(request.args().iter().cloned());
        run_streamed(ctx, &cmd)
    }

    fn uninstall(&self, request: &InstallRequest<'_>, ctx: &DriverContext<'_>) -> Result<(), InstallError> {
        log_info!("[NPM Installer] Removing global package {}", request.package().bold());
        run_streamed(
            ctx,
            &CommandSpec::new("npm").args(["uninstall", "-g", request.package()]),
        )
    }
}

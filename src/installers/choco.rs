use colored::Colorize;

use crate::installers::{DriverContext, InstallDriver, InstallError, InstallRequest, run_streamed};
use crate::libs::process::CommandSpec;
use crate::libs::utilities::platform::{HostTool, PlatformSnapshot};
use crate::log_info;

/// Chocolatey packages. `-y` keeps choco from prompting mid-install.
pub(crate) struct ChocoDriver;

impl InstallDriver for ChocoDriver {
    fn is_available(&self, platform: &PlatformSnapshot) -> bool {
        platform.has(HostTool::Choco)
    }

    fn install(&self, request: &InstallRequest<'_>, ctx: &DriverContext<'_>) -> Result<(), InstallError> {
        log_info!("[Choco Installer] Installing {}", request.package().bold());
        let cmd = CommandSpec::new("choco")
            .args(["install", request.package(), "-y"])
            .args(request.args().iter().cloned());
        run_streamed(ctx, &cmd)
    }

    fn uninstall(&self, request: &InstallRequest<'_>, ctx: &DriverContext<'_>) -> Result<(), InstallError> {
        log_info!("[Choco Installer] Uninstalling {}", request.package().bold());
        run_streamed(
            ctx,
            &CommandSpec::new("choco").args(["uninstall", request.package(), "-y"]),
        )
    }
}

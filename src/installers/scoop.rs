use colored::Colorize;

use crate::installers::{DriverContext, InstallDriver, InstallError, InstallRequest, run_streamed};
use crate::libs::process::CommandSpec;
use crate::libs::utilities::platform::{HostTool, PlatformSnapshot};
use crate::log_info;

pub(crate) struct ScoopDriver;

impl InstallDriver for ScoopDriver {
    fn is_available(&self, platform: &PlatformSnapshot) -> bool {
        platform.has(HostTool::Scoop)
    }

    fn install(&self, request: &InstallRequest<'_>, ctx: &DriverContext<'_>) -> Result<(), InstallError> {
        log_info!("[Scoop Installer] Installing {}", request.package().bold());
        let cmd = CommandSpec::new("scoop")
            .args(["install", request.package()])
            .args(request.args().iter().cloned());
        run_streamed(ctx, &cmd)
    }

    fn uninstall(&self, request: &InstallRequest<'_>, ctx: &DriverContext<'_>) -> Result<(), InstallError> {
        log_info!("[Scoop Installer] Uninstalling {}", request.package().bold());
        run_streamed(ctx, &CommandSpec::new("scoop").args(["uninstall", request.package()]))
    }
}

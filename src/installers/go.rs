use colored::Colorize;

use crate::installers::{DriverContext, InstallDriver, InstallError, InstallRequest, run_streamed};
use crate::libs::process::CommandSpec;
use crate::libs::utilities::platform::{HostTool, PlatformSnapshot};
use crate::log_info;

const UNINSTALL_HINT: &str = "manually remove from $GOPATH/bin (usually ~/go/bin)";

/// `go install <module>@latest`. Go has no uninstall command.
pub(crate) struct GoDriver;

impl GoDriver {
    fn module_ref(package: &str) -> String {
        if package.contains('@') {
            package.to_string()
        } else {
            format!("{package}@latest")
        }
    }
}

impl InstallDriver for GoDriver {
    fn is_available(&self, platform: &PlatformSnapshot) -> bool {
        platform.has(HostTool::Go)
    }

    fn install(&self, request: &InstallRequest<'_>, ctx: &DriverContext<'_>) -> Result<(), InstallError> {
        let module = Self::module_ref(request.package());
        log_info!("[Go Installer] Installing {}", module.bold());
        let cmd = CommandSpec::new("go")
            .args(["install", module.as_str()])
            .args(request.args().iter().cloned());
        run_streamed(ctx, &cmd)
    }

    fn uninstall(&self, request: &InstallRequest<'_>, _ctx: &DriverContext<'_>) -> Result<(), InstallError> {
        Err(InstallError::Unsupported {
            method: request.method,
            action: "uninstall",
            hint: Some(UNINSTALL_HINT.to_string()),
        })
    }
}

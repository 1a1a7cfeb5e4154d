// APT driver. Refreshes the package index before installing; a failed refresh is
// only a warning since the cached index is usually good enough.

use colored::Colorize;

use crate::installers::{DriverContext, InstallDriver, InstallError, InstallRequest, run_streamed};
use crate::libs::process::CommandSpec;
use crate::libs::utilities::platform::{HostTool, PlatformSnapshot};
use crate::{log_info, log_warn};

pub(crate) struct AptDriver;

impl InstallDriver for AptDriver {
    fn is_available(&self, platform: &PlatformSnapshot) -> bool {
        platform.has(HostTool::AptGet)
    }

    fn install(&self, request: &InstallRequest<'_>, ctx: &DriverContext<'_>) -> Result<(), InstallError> {
        log_info!("[Apt Installer] Updating package index (requires sudo)");
        if let Err(e) = run_streamed(ctx, &CommandSpec::new("sudo").args(["apt-get", "update"])) {
            log_warn!("[Apt Installer] Failed to update package list: {}", e.to_string().yellow());
        }

        log_info!("[Apt Installer] Installing {}", request.package().bold());
        let cmd = CommandSpec::new("sudo")
            .args(["apt-get", "install", "-y", request.package()])
            .args(request.args().iter().cloned());
        run_streamed(ctx, &cmd)
    }

    fn uninstall(&self, request: &InstallRequest<'_>, ctx: &DriverContext<'_>) -> Result<(), InstallError> {
        log_info!("[Apt Installer] Removing {}", request.package().bold());
        run_streamed(
            ctx,
            &CommandSpec::new("sudo").args(["apt-get", "remove", "-y", request.package()]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::installers::test_support::*;
    use crate::libs::process::testing::FakeRunner;
    use crate::schemas::tools::{InstallConfig, InstallMethod};

    #[test]
    fn index_refresh_failure_does_not_abort_install() {
        let runner = FakeRunner::new();
        runner.fail_on("sudo apt-get update");
        let platform = linux().with_tool(HostTool::AptGet);
        let paths = paths();
        let tool = tool("gh");
        let config = InstallConfig::package("gh");
        let request = InstallRequest::new(&tool, InstallMethod::Apt, &config);

        AptDriver
            .install(&request, &ctx(&runner, &platform, &paths))
            .expect("install continues after index failure");
        assert_eq!(
            runner.calls(),
            vec!["sudo apt-get update", "sudo apt-get install -y gh"]
        );
    }

    #[test]
    fn install_failure_is_reported() {
        let runner = FakeRunner::new();
        runner.fail_on("sudo apt-get install");
        let platform = linux().with_tool(HostTool::AptGet);
        let paths = paths();
        let tool = tool("nodejs");
        let config = InstallConfig::package("nodejs");
        let request = InstallRequest::new(&tool, InstallMethod::Apt, &config);
        let err = AptDriver
            .install(&request, &ctx(&runner, &platform, &paths))
            .expect_err("install fails");
        assert!(matches!(err, InstallError::ExternalProcess { .. }));
    }
}

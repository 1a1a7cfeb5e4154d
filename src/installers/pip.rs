// This module installs Python tools with pip. The probe decides the binary:
// `pip3` when present, plain `pip` otherwise.

use colored::Colorize;

use crate::installers::{DriverContext, InstallDriver, InstallError, InstallRequest, run_streamed};
use crate::libs::process::CommandSpec;
use crate::libs::utilities::platform::PlatformSnapshot;
use crate::{log_debug, log_info};

pub(crate) struct PipDriver;

impl PipDriver {
    fn pip(platform: &PlatformSnapshot) -> Result<&'static str, InstallError> {
        platform.pip_binary().ok_or_else(|| InstallError::Prerequisite {
            what: "pip".to_string(),
            hint: Some("Install Python 3 (https://www.python.org/downloads/)".to_string()),
        })
    }
}

impl InstallDriver for PipDriver {
    fn is_available(&self, platform: &PlatformSnapshot) -> bool {
        platform.pip_binary().is_some()
    }

    fn install(&self, request: &InstallRequest<'_>, ctx: &DriverContext<'_>) -> Result<(), InstallError> {
        let pip = Self::pip(ctx.platform)?;
        log_debug!("[Pip Installer] Using '{}' executable", pip.cyan());
        log_info!("[Pip Installer] Installing Python package {}", request.package().bold());
        let cmd = CommandSpec::new(pip)
            .args(["install", request.package()])
            .args(request.args().iter().cloned());
        run_streamed(ctx, &cmd)
    }

    fn uninstall(&self, request: &InstallRequest<'_>, ctx: &DriverContext<'_>) -> Result<(), InstallError> {
        let pip = Self::pip(ctx.platform)?;
        log_info!("[Pip Installer] Uninstalling Python package {}", request.package().bold());
        run_streamed(
            ctx,
            &CommandSpec::new(pip).args(["uninstall", "-y", request.package()]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::installers::test_support::*;
    use crate::libs::process::testing::FakeRunner;
    use crate::libs::utilities::platform::HostTool;
    use crate::schemas::tools::{InstallConfig, InstallMethod};

    #[test]
    fn prefers_pip3_when_present() {
        let runner = FakeRunner::new();
        let platform = linux().with_tool(HostTool::Pip).with_tool(HostTool::Pip3);
        let paths = paths();
        let tool = tool("aider");
        let config = InstallConfig::package("aider-chat");
        let request = InstallRequest::new(&tool, InstallMethod::Pip, &config);
        PipDriver
            .install(&request, &ctx(&runner, &platform, &paths))
            .expect("pip install succeeds");
        assert_eq!(runner.calls(), vec!["pip3 install aider-chat"]);
    }

    #[test]
    fn falls_back_to_pip_and_uninstalls_non_interactively() {
        let runner = FakeRunner::new();
        let platform = linux().with_tool(HostTool::Pip);
        let paths = paths();
        let tool = tool("sgpt");
        let config = InstallConfig::package("shell-gpt");
        let request = InstallRequest::new(&tool, InstallMethod::Pip, &config);
        PipDriver
            .uninstall(&request, &ctx(&runner, &platform, &paths))
            .expect("pip uninstall succeeds");
        assert_eq!(runner.calls(), vec!["pip uninstall -y shell-gpt"]);
    }

    #[test]
    fn unavailable_without_any_pip() {
        assert!(!PipDriver.is_available(&linux()));
    }
}

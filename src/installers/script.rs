//! Installs tools by piping a vendor install script into `sh`.
//!
//! `package` holds the script URL. curl is preferred; wget is the fallback.
//! Install scripts have no standard removal story, so uninstall is unsupported.

use colored::Colorize;

use crate::installers::{DriverContext, InstallDriver, InstallError, InstallRequest};
use crate::libs::process::CommandSpec;
use crate::libs::utilities::platform::{HostTool, PlatformSnapshot};
use crate::{log_debug, log_info};

pub(crate) struct ScriptDriver;

impl ScriptDriver {
    fn fetcher(platform: &PlatformSnapshot, url: &str) -> Result<CommandSpec, InstallError> {
        if platform.has(HostTool::Curl) {
            Ok(CommandSpec::new("curl").args(["-fsSL", url]))
        } else if platform.has(HostTool::Wget) {
            Ok(CommandSpec::new("wget").args(["-qO-", url]))
        } else {
            Err(InstallError::Prerequisite {
                what: "curl".to_string(),
                hint: Some("Install curl or wget and try again".to_string()),
            })
        }
    }
}

impl InstallDriver for ScriptDriver {
    fn is_available(&self, platform: &PlatformSnapshot) -> bool {
        platform.has_http_client()
    }

    fn install(&self, request: &InstallRequest<'_>, ctx: &DriverContext<'_>) -> Result<(), InstallError> {
        let url = request.package();
        let fetch = Self::fetcher(ctx.platform, url)?;
        let shell = CommandSpec::new("sh")
            .args(["-s", "--"])
            .args(request.args().iter().cloned());

        log_info!("[Script Installer] Running install script from {}", url.cyan());
        log_debug!("[Script Installer] Pipeline: {} | {}", fetch, shell);

        match ctx.runner.pipe(&fetch, &shell) {
            Ok(status) if status.success => Ok(()),
            Ok(status) => Err(InstallError::ExternalProcess {
                command: format!("{fetch} | {shell}"),
                code: status.code.unwrap_or(-1),
                detail: String::new(),
            }),
            Err(source) => Err(InstallError::Spawn {
                command: format!("{fetch} | {shell}"),
                source,
            }),
        }
    }

    fn uninstall(&self, request: &InstallRequest<'_>, _ctx: &DriverContext<'_>) -> Result<(), InstallError> {
        Err(InstallError::Unsupported {
            method: request.method,
            action: "uninstall",
            hint: Some(format!(
                "{} was installed by a vendor script; remove it following {}",
                request.tool.name, request.tool.website
            )),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::installers::test_support::*;
    use crate::libs::process::testing::FakeRunner;
    use crate::schemas::tools::{InstallConfig, InstallMethod};

    fn ollama_config() -> InstallConfig {
        InstallConfig::package("https://ollama.com/install.sh")
    }

    #[test]
    fn pipes_curl_into_sh() {
        let runner = FakeRunner::new();
        let platform = linux().with_tool(HostTool::Curl).with_tool(HostTool::Wget);
        let paths = paths();
        let tool = tool("ollama");
        let config = ollama_config();
        let request = InstallRequest::new(&tool, InstallMethod::Script, &config);
        ScriptDriver
            .install(&request, &ctx(&runner, &platform, &paths))
            .expect("script succeeds");
        assert_eq!(
            runner.calls(),
            vec!["curl -fsSL https://ollama.com/install.sh | sh -s --"]
        );
    }

    #[test]
    fn falls_back_to_wget() {
        let runner = FakeRunner::new();
        let platform = linux().with_tool(HostTool::Wget);
        let paths = paths();
        let tool = tool("ollama");
        let config = ollama_config();
        let request = InstallRequest::new(&tool, InstallMethod::Script, &config);
        ScriptDriver
            .install(&request, &ctx(&runner, &platform, &paths))
            .expect("script succeeds");
        assert_eq!(
            runner.calls(),
            vec!["wget -qO- https://ollama.com/install.sh | sh -s --"]
        );
    }

    #[test]
    fn missing_http_client_is_a_prerequisite_error() {
        let runner = FakeRunner::new();
        let platform = linux();
        let paths = paths();
        let tool = tool("ollama");
        let config = ollama_config();
        let request = InstallRequest::new(&tool, InstallMethod::Script, &config);
        assert!(!ScriptDriver.is_available(&platform));
        let err = ScriptDriver
            .install(&request, &ctx(&runner, &platform, &paths))
            .expect_err("no client");
        assert!(matches!(err, InstallError::Prerequisite { .. }));
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn failed_script_reports_pipeline() {
        let runner = FakeRunner::new();
        runner.fail_on("curl");
        let platform = linux().with_tool(HostTool::Curl);
        let paths = paths();
        let tool = tool("ollama");
        let config = ollama_config();
        let request = InstallRequest::new(&tool, InstallMethod::Script, &config);
        let err = ScriptDriver
            .install(&request, &ctx(&runner, &platform, &paths))
            .expect_err("scripted failure");
        assert!(err.to_string().contains("| sh -s --"));
    }
}

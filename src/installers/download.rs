//! # Download Installer Module
//!
//! Desktop applications distributed as installers (DMG, PKG, DEB, AppImage,
//! EXE, MSI). When the catalog lists a direct URL for the current OS, the file is
//! fetched into a temporary directory and handed to the matching procedure in
//! [`super::desktop`]. Otherwise the vendor page is opened in the browser and the
//! user finishes by hand; that still counts as success.
//!
//! This method is always available: its worst case is opening a web page.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;

use crate::installers::{DriverContext, InstallDriver, InstallError, InstallRequest, desktop};
use crate::libs::process::CommandSpec;
use crate::libs::utilities::downloads::{self, DownloadError};
use crate::libs::utilities::file_types::{file_name_from_url, guess_file_type};
use crate::libs::utilities::platform::{HostTool, PlatformSnapshot};
use crate::schemas::tools::Os;
use crate::{log_debug, log_info};

pub(crate) struct DownloadDriver;

impl From<DownloadError> for InstallError {
    fn from(err: DownloadError) -> Self {
        match err {
            DownloadError::Io(e) => InstallError::Io(e),
            other => InstallError::Network {
                detail: other.to_string(),
                hint: Some("Check your network connection or proxy settings (getoai config show)".to_string()),
            },
        }
    }
}

/// Command that opens `url` with the desktop's default handler.
pub(crate) fn browser_command(os: Os, url: &str) -> Option<CommandSpec> {
    match os {
        Os::Darwin => Some(CommandSpec::new("open").arg(url)),
        Os::Linux => Some(CommandSpec::new("xdg-open").arg(url)),
        Os::Windows => Some(CommandSpec::new("cmd").args(["/c", "start", url])),
        Os::Other => None,
    }
}

impl DownloadDriver {
    /// Vendor page used when there is no direct download.
    fn landing_page<'a>(request: &'a InstallRequest<'_>) -> &'a str {
        if request.config.package.is_empty() {
            &request.tool.website
        } else {
            &request.config.package
        }
    }

    fn open_landing_page(ctx: &DriverContext<'_>, url: &str) {
        println!("Please download and install from:");
        println!("  {}", url.underline());
        println!();
        let Some(open) = browser_command(ctx.platform.os, url) else {
            return;
        };
        print!("Opening download page in browser... ");
        match ctx.runner.capture(&open) {
            Ok(out) if out.success() => println!("done"),
            _ => println!("failed (please open the URL manually)"),
        }
    }

    fn download_and_install(
        request: &InstallRequest<'_>,
        ctx: &DriverContext<'_>,
        url: &str,
    ) -> Result<(), InstallError> {
        let os = ctx.platform.os;
        let file_type = request
            .config
            .file_type
            .or_else(|| guess_file_type(url, os))
            .ok_or_else(|| InstallError::Invalid(format!("unsupported file type for {url}")))?;

        let staging = tempfile::Builder::new().prefix("getoai-").tempdir()?;
        let file_name = file_name_from_url(url);
        let target = staging.path().join(&file_name);

        log_info!("[Download Installer] Downloading {}", file_name.bold());
        let size = downloads::fetch_to_file(url, &target, ctx.proxy)?;
        println!(
            "Downloaded {} ({})",
            target.display(),
            downloads::format_megabytes(size)
        );

        desktop::install_artifact(ctx, request.tool, &target, file_type)
    }

    fn remove_bundle(candidates: &[PathBuf]) -> Result<(), InstallError> {
        for path in candidates {
            if path.exists() {
                log_info!("[Download Installer] Removing {}", path.display().to_string().cyan());
                fs::remove_dir_all(path)?;
                println!("{}", "✓ Application removed successfully".green());
                return Ok(());
            }
        }
        Err(InstallError::Invalid(
            "application not found in /Applications or ~/Applications".to_string(),
        ))
    }

    fn uninstall_linux(request: &InstallRequest<'_>, ctx: &DriverContext<'_>) -> Result<(), InstallError> {
        let name = &request.tool.name;
        if ctx.platform.has(HostTool::Dpkg) {
            log_info!("[Download Installer] Attempting to remove {} via dpkg", name.bold());
            let removal = CommandSpec::new("sudo").args(["dpkg", "-r", name.as_str()]);
            match ctx.runner.stream(&removal) {
                Ok(status) if status.success => {
                    println!("{}", "✓ Package removed successfully".green());
                    return Ok(());
                }
                outcome => log_debug!("[Download Installer] dpkg removal did not succeed: {:?}", outcome),
            }
        }

        let appimage = ctx.paths.appimage_path(name);
        if appimage.exists() {
            log_info!("[Download Installer] Removing {}", appimage.display().to_string().cyan());
            fs::remove_file(&appimage)?;
            println!("{}", "✓ AppImage removed successfully".green());
            return Ok(());
        }
        Err(InstallError::Invalid(
            "application not found or unable to uninstall".to_string(),
        ))
    }
}

impl InstallDriver for DownloadDriver {
    fn is_available(&self, _platform: &PlatformSnapshot) -> bool {
        true
    }

    fn install(&self, request: &InstallRequest<'_>, ctx: &DriverContext<'_>) -> Result<(), InstallError> {
        println!();
        println!("{}", format!("{} is a desktop application.", request.tool.name).cyan());
        println!();
        match request.config.download_url_for(ctx.platform.os) {
            Some(url) => Self::download_and_install(request, ctx, url),
            None => {
                Self::open_landing_page(ctx, Self::landing_page(request));
                Ok(())
            }
        }
    }

    fn uninstall(&self, request: &InstallRequest<'_>, ctx: &DriverContext<'_>) -> Result<(), InstallError> {
        let tool = request.tool;
        if tool.app_name.is_empty() {
            println!();
            println!("Please uninstall {} manually:", tool.name);
            println!("  macOS: Move to Trash from Applications folder");
            println!("  Linux: Use your package manager or remove manually");
            println!("  Windows: Use Add/Remove Programs");
            println!();
            return Ok(());
        }

        match ctx.platform.os {
            Os::Darwin => Self::remove_bundle(&[
                PathBuf::from(desktop::MAC_APPLICATIONS).join(&tool.app_name),
                ctx.paths.home_dir().join("Applications").join(&tool.app_name),
            ]),
            Os::Linux => Self::uninstall_linux(request, ctx),
            Os::Windows => {
                println!();
                println!("Please uninstall via Windows Settings:");
                println!("  Settings -> Apps -> Apps & features");
                println!("  Find and uninstall: {}", tool.app_name);
                println!();
                Ok(())
            }
            Os::Other => Err(InstallError::Unsupported {
                method: request.method,
                action: "automatic uninstall on this platform",
                hint: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::installers::test_support::*;
    use crate::libs::paths::AppPaths;
    use crate::libs::process::testing::FakeRunner;
    use crate::schemas::tools::{InstallConfig, InstallMethod};
    use crate::schemas::tools::ToolRecord;

    fn desktop_tool(name: &str, app: &str) -> ToolRecord {
        tool(name).app(app)
    }

    #[test]
    fn always_available() {
        assert!(DownloadDriver.is_available(&PlatformSnapshot::new(Os::Other)));
    }

    #[test]
    fn without_url_opens_vendor_page() {
        let runner = FakeRunner::new();
        let platform = linux();
        let paths = paths();
        let tool = desktop_tool("lmstudio", "LM Studio.app");
        let config = InstallConfig::package("https://lmstudio.ai/download");
        let request = InstallRequest::new(&tool, InstallMethod::Download, &config);
        DownloadDriver
            .install(&request, &ctx(&runner, &platform, &paths))
            .expect("fallback succeeds");
        assert_eq!(runner.calls(), vec!["xdg-open https://lmstudio.ai/download"]);
    }

    #[test]
    fn browser_failure_is_not_an_error() {
        let runner = FakeRunner::new();
        runner.fail_on("open");
        let platform = PlatformSnapshot::new(Os::Darwin);
        let paths = paths();
        let tool = desktop_tool("chatbox", "Chatbox.app");
        let config = InstallConfig::package("");
        let request = InstallRequest::new(&tool, InstallMethod::Download, &config);
        DownloadDriver
            .install(&request, &ctx(&runner, &platform, &paths))
            .expect("still succeeds");
        assert_eq!(runner.calls(), vec!["open https://example.com"]);
    }

    #[test]
    fn url_for_other_os_is_ignored() {
        let runner = FakeRunner::new();
        let platform = PlatformSnapshot::new(Os::Windows);
        let paths = paths();
        let tool = desktop_tool("cursor", "Cursor.app");
        let config = InstallConfig::package("https://cursor.com/downloads")
            .download_url(Os::Darwin, "https://downloader.cursor.sh/mac/dmg/universal");
        let request = InstallRequest::new(&tool, InstallMethod::Download, &config);
        DownloadDriver
            .install(&request, &ctx(&runner, &platform, &paths))
            .expect("fallback succeeds");
        assert_eq!(
            runner.calls(),
            vec!["cmd /c start https://cursor.com/downloads"]
        );
    }

    #[test]
    fn browser_commands_per_os() {
        let url = "https://jan.ai";
        let render = |os| browser_command(os, url).map(|c| c.to_string());
        assert_eq!(render(Os::Darwin).as_deref(), Some("open https://jan.ai"));
        assert_eq!(render(Os::Linux).as_deref(), Some("xdg-open https://jan.ai"));
        assert_eq!(render(Os::Windows).as_deref(), Some("cmd /c start https://jan.ai"));
        assert_eq!(render(Os::Other), None);
    }

    #[test]
    fn uninstall_without_app_name_prints_instructions() {
        let runner = FakeRunner::new();
        let platform = linux();
        let paths = paths();
        let tool = tool("fig");
        let config = InstallConfig::package("https://fig.io");
        let request = InstallRequest::new(&tool, InstallMethod::Download, &config);
        DownloadDriver
            .uninstall(&request, &ctx(&runner, &platform, &paths))
            .expect("manual instructions");
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn mac_uninstall_checks_user_applications() {
        let home = tempfile::tempdir().expect("home");
        let bundle = home.path().join("Applications").join("ZedTestApp-getoai.app");
        fs::create_dir_all(bundle.join("Contents")).expect("bundle");
        let runner = FakeRunner::new();
        let platform = PlatformSnapshot::new(Os::Darwin);
        let paths = AppPaths::rooted(home.path());
        let tool = desktop_tool("zed", "ZedTestApp-getoai.app");
        let config = InstallConfig::package("https://zed.dev");
        let request = InstallRequest::new(&tool, InstallMethod::Download, &config);
        DownloadDriver
            .uninstall(&request, &ctx(&runner, &platform, &paths))
            .expect("bundle removed");
        assert!(!bundle.exists());
    }

    #[test]
    fn linux_uninstall_falls_back_to_appimage() {
        let home = tempfile::tempdir().expect("home");
        let paths = AppPaths::rooted(home.path());
        let image = paths.appimage_path("jan");
        fs::create_dir_all(paths.local_bin()).expect("bin dir");
        fs::write(&image, b"\x7fELF").expect("write");

        let runner = FakeRunner::new();
        runner.fail_on("sudo dpkg -r");
        let platform = linux().with_tool(HostTool::Dpkg);
        let tool = desktop_tool("jan", "Jan.app");
        let config = InstallConfig::package("https://jan.ai");
        let request = InstallRequest::new(&tool, InstallMethod::Download, &config);
        DownloadDriver
            .uninstall(&request, &ctx(&runner, &platform, &paths))
            .expect("appimage removed");
        assert!(!image.exists());
        assert_eq!(runner.calls(), vec!["sudo dpkg -r jan"]);
    }

    #[test]
    fn linux_uninstall_reports_missing_application() {
        let home = tempfile::tempdir().expect("home");
        let paths = AppPaths::rooted(home.path());
        let runner = FakeRunner::new();
        let platform = linux();
        let tool = desktop_tool("jan", "Jan.app");
        let config = InstallConfig::package("https://jan.ai");
        let request = InstallRequest::new(&tool, InstallMethod::Download, &config);
        let err = DownloadDriver
            .uninstall(&request, &ctx(&runner, &platform, &paths))
            .expect_err("nothing to remove");
        assert_eq!(err.to_string(), "application not found or unable to uninstall");
    }
}

// ============================================================================
//                          STANDARD LIBRARY DEPENDENCIES
// ============================================================================

use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
//                             EXTERNAL DEPENDENCIES
// ============================================================================

use colored::Colorize;

// ============================================================================
//                              INTERNAL IMPORTS
// ============================================================================

use crate::installers::{DriverContext, InstallError, run_captured, run_streamed};
use crate::libs::process::{CommandRunner, CommandSpec};
use crate::libs::utilities::file_types::FileType;
use crate::schemas::tools::ToolRecord;
use crate::{log_debug, log_info, log_warn};

/// System-wide application folder DMG bundles are copied into.
pub(crate) const MAC_APPLICATIONS: &str = "/Applications";

/// Installs a downloaded artifact according to its packaging format.
pub(crate) fn install_artifact(
    ctx: &DriverContext<'_>,
    tool: &ToolRecord,
    artifact: &Path,
    file_type: FileType,
) -> Result<(), InstallError> {
    log_debug!(
        "[Desktop] Installing {} as {}",
        artifact.display().to_string().cyan(),
        file_type
    );
    match file_type {
        FileType::Dmg => install_dmg(ctx, tool, artifact, Path::new(MAC_APPLICATIONS)),
        FileType::Pkg => install_pkg(ctx, artifact),
        FileType::Deb => install_deb(ctx, artifact),
        FileType::AppImage => install_appimage(ctx, tool, artifact),
        FileType::Exe => {
            log_info!("[Desktop] Launching installer...");
            run_streamed(ctx, &CommandSpec::new(&artifact.display().to_string()))
        }
        FileType::Msi => {
            log_info!("[Desktop] Installing MSI package...");
            run_streamed(
                ctx,
                &CommandSpec::new("msiexec")
                    .arg("/i")
                    .arg(artifact.display().to_string()),
            )
        }
    }
}

// ============================================================================
//                                   DMG
// ============================================================================

/// Extracts the mount point from `hdiutil attach` output.
///
/// The filesystem row (`Apple_HFS` / `Apple_APFS`) carries the mount point in its
/// last column. Rows naming a `/tmp/` or `/Volumes/` path without a `/dev/` node
/// are accepted too. The last match wins.
pub(crate) fn parse_mount_point(output: &str) -> Option<String> {
    let mut mount_point = None;
    for line in output.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if line.contains("Apple_HFS") || line.contains("Apple_APFS") {
            let columns: Vec<&str> = if line.contains('\t') {
                line.split('\t').map(str::trim).filter(|c| !c.is_empty()).collect()
            } else {
                line.split_whitespace().collect()
            };
            if columns.len() >= 3 {
                mount_point = columns.last().map(|c| c.to_string());
            }
        }
        if (line.contains("/tmp/") || line.contains("/Volumes/")) && !line.contains("/dev/") {
            for part in line.split_whitespace() {
                if part.starts_with("/tmp/") || part.starts_with("/Volumes/") {
                    mount_point = Some(part.to_string());
                }
            }
        }
    }
    mount_point
}

/// Detaches a mounted disk image when dropped, on success and failure alike.
struct MountGuard<'a> {
    runner: &'a dyn CommandRunner,
    mount_point: String,
}

impl Drop for MountGuard<'_> {
    fn drop(&mut self) {
        log_info!("[Desktop] Unmounting DMG...");
        let detach = CommandSpec::new("hdiutil").args(["detach", self.mount_point.as_str(), "-force"]);
        match self.runner.capture(&detach) {
            Ok(out) if out.success() => {}
            Ok(out) => log_warn!("[Desktop] Failed to detach {}: {}", self.mount_point, out.combined()),
            Err(e) => log_warn!("[Desktop] Failed to detach {}: {}", self.mount_point, e),
        }
    }
}

fn find_app_bundle(mount_point: &Path) -> Result<PathBuf, InstallError> {
    let mut entries: Vec<PathBuf> = fs::read_dir(mount_point)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .collect();
    entries.sort();
    for entry in &entries {
        log_debug!("[Desktop] Found entry: {}", entry.display());
    }
    entries
        .into_iter()
        .find(|p| p.extension().is_some_and(|ext| ext == "app"))
        .ok_or_else(|| {
            InstallError::Invalid(format!(
                "no .app bundle found in disk image mounted at {}",
                mount_point.display()
            ))
        })
}

fn install_dmg(
    ctx: &DriverContext<'_>,
    tool: &ToolRecord,
    dmg: &Path,
    applications: &Path,
) -> Result<(), InstallError> {
    log_info!("[Desktop] Mounting DMG...");
    let attach = CommandSpec::new("hdiutil")
        .arg("attach")
        .arg(dmg.display().to_string())
        .args(["-nobrowse", "-mountrandom", "/tmp"]);
    let output = run_captured(ctx, &attach)?;
    let mount_point = parse_mount_point(&output.stdout).ok_or_else(|| {
        InstallError::Invalid(format!(
            "failed to find mount point in output: {}",
            output.stdout.trim()
        ))
    })?;
    log_debug!("[Desktop] Mount point: {}", mount_point.cyan());
    let _guard = MountGuard {
        runner: ctx.runner,
        mount_point: mount_point.clone(),
    };

    let bundle = find_app_bundle(Path::new(&mount_point))?;
    let bundle_name = bundle
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let destination = applications.join(&bundle_name);
    log_info!("[Desktop] Installing to: {}", destination.display().to_string().cyan());

    if destination.exists() {
        log_info!("[Desktop] Removing existing installation...");
        fs::remove_dir_all(&destination)?;
    }

    let copy = CommandSpec::new("cp")
        .arg("-R")
        .arg(bundle.display().to_string())
        .arg(format!("{}/", applications.display()));
    run_streamed(ctx, &copy)?;

    println!();
    println!(
        "{}",
        format!("✓ {} installed successfully to {}", tool.name, applications.display()).green()
    );
    Ok(())
}

// ============================================================================
//                              PKG / DEB
// ============================================================================

fn install_pkg(ctx: &DriverContext<'_>, pkg: &Path) -> Result<(), InstallError> {
    log_info!("[Desktop] Installing PKG file (requires administrator privileges)");
    let cmd = CommandSpec::new("sudo")
        .arg("installer")
        .arg("-pkg")
        .arg(pkg.display().to_string())
        .args(["-target", "/"]);
    run_streamed(ctx, &cmd)?;
    println!("{}", "✓ Installation completed".green());
    Ok(())
}

fn install_deb(ctx: &DriverContext<'_>, deb: &Path) -> Result<(), InstallError> {
    log_info!("[Desktop] Installing DEB package (requires administrator privileges)");
    let cmd = CommandSpec::new("sudo")
        .args(["dpkg", "-i"])
        .arg(deb.display().to_string());
    if let Err(original) = run_streamed(ctx, &cmd) {
        log_info!("[Desktop] Fixing dependencies...");
        if let Err(e) = run_streamed(ctx, &CommandSpec::new("sudo").args(["apt-get", "install", "-f", "-y"])) {
            log_debug!("[Desktop] Dependency repair failed: {}", e);
        }
        return Err(original);
    }
    println!("{}", "✓ Installation completed".green());
    Ok(())
}

// ============================================================================
//                                 APPIMAGE
// ============================================================================

fn install_appimage(ctx: &DriverContext<'_>, tool: &ToolRecord, image: &Path) -> Result<(), InstallError> {
    log_info!("[Desktop] Installing AppImage...");
    make_executable(image)?;

    let destination = ctx.paths.appimage_path(&tool.name);
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }
    // The download lives in a temp dir that may sit on another filesystem.
    if fs::rename(image, &destination).is_err() {
        fs::copy(image, &destination)?;
        make_executable(&destination)?;
    }

    println!();
    println!(
        "{}",
        format!("✓ AppImage installed to: {}", destination.display()).green()
    );
    println!("Make sure {} is in your PATH", ctx.paths.local_bin().display());
    Ok(())
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), InstallError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<(), InstallError> {
    Ok(())
}

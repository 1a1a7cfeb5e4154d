// Compose-based deployments: clone the project's repository into the per-tool
// checkout directory, locate its compose file and bring the stack up detached.
// Uninstall only brings the stack down; the checkout and its data stay on disk.

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::installers::docker::MIRROR_HELP;
use crate::installers::{DriverContext, InstallError, InstallRequest, run_streamed};
use crate::libs::process::CommandSpec;
use crate::libs::utilities::platform::{ComposeFlavor, HostTool, PlatformSnapshot};
use crate::{log_info, log_warn};

/// Conventional compose file locations, checked in order.
pub(crate) const COMPOSE_FILE_CANDIDATES: [&str; 8] = [
    "docker/docker-compose.yaml",
    "docker/docker-compose.yml",
    "docker-compose.yaml",
    "docker-compose.yml",
    "compose.yaml",
    "compose.yml",
    "deploy/docker-compose.yaml",
    "deploy/docker-compose.yml",
];

/// First existing compose file under `checkout`.
pub(crate) fn find_compose_file(checkout: &Path) -> Option<PathBuf> {
    COMPOSE_FILE_CANDIDATES
        .iter()
        .map(|candidate| checkout.join(candidate))
        .find(|path| path.is_file())
}

fn compose_command(platform: &PlatformSnapshot) -> Result<CommandSpec, InstallError> {
    platform.compose.command().ok_or_else(|| InstallError::Prerequisite {
        what: "docker-compose".to_string(),
        hint: Some("Install it first:  getoai install docker-compose".to_string()),
    })
}

/// Copies `.env.example` to `.env` next to the compose file unless `.env` exists.
fn materialize_env(compose_dir: &Path) {
    let example = compose_dir.join(".env.example");
    let env_file = compose_dir.join(".env");
    if !example.is_file() || env_file.exists() {
        return;
    }
    log_info!("[Compose] Creating .env file from .env.example");
    if let Err(e) = fs::copy(&example, &env_file) {
        log_warn!("[Compose] Failed to copy .env.example: {}", e.to_string().yellow());
    }
}

pub(crate) fn install_compose(
    request: &InstallRequest<'_>,
    ctx: &DriverContext<'_>,
    repo_url: &str,
) -> Result<(), InstallError> {
    let compose = compose_command(ctx.platform)?;
    let name = &request.tool.name;
    let checkout = ctx.paths.compose_dir(name);

    if checkout.exists() {
        log_info!(
            "[Compose] {} already exists, updating and restarting",
            checkout.display().to_string().cyan()
        );
        let pull = CommandSpec::new("git")
            .arg("-C")
            .arg(checkout.display().to_string())
            .arg("pull");
        if let Err(e) = run_streamed(ctx, &pull) {
            log_warn!("[Compose] Failed to pull updates: {}", e);
        }
    } else {
        if !ctx.platform.has(HostTool::Git) {
            return Err(InstallError::Prerequisite {
                what: "git".to_string(),
                hint: Some(format!("Install git, then clone {repo_url} into {}", checkout.display())),
            });
        }
        log_info!("[Compose] Cloning {}", repo_url.cyan());
        fs::create_dir_all(ctx.paths.tools_dir())?;
        let clone = CommandSpec::new("git")
            .args(["clone", repo_url])
            .arg(checkout.display().to_string());
        run_streamed(ctx, &clone)?;
    }

    let Some(compose_file) = find_compose_file(&checkout) else {
        log_warn!(
            "[Compose] No docker-compose file found in {}",
            checkout.display().to_string().yellow()
        );
        println!("Please check the repository documentation for deployment instructions.");
        println!("Repository: {repo_url}");
        return Ok(());
    };
    let compose_dir = compose_file.parent().unwrap_or(&checkout).to_path_buf();
    materialize_env(&compose_dir);

    log_info!("[Compose] Starting {} with docker compose", name.bold());
    let up = compose
        .arg("-f")
        .arg(compose_file.display().to_string())
        .args(["up", "-d"])
        .current_dir(&compose_dir);
    run_streamed(ctx, &up).map_err(|e| e.into_network(MIRROR_HELP))?;

    let dir = compose_dir.display();
    println!();
    println!("{}", format!("✓ {name} started successfully!").green());
    println!();
    println!("Install location: {}", checkout.display());
    println!();
    println!("Useful commands:");
    println!("  cd {dir} && docker compose ps      View containers");
    println!("  cd {dir} && docker compose logs    View logs");
    println!("  cd {dir} && docker compose down    Stop services");
    println!("  cd {dir} && docker compose up -d   Start services");
    Ok(())
}

/// Brings the stack down. The checkout directory is never deleted.
pub(crate) fn uninstall_compose(ctx: &DriverContext<'_>, tool_name: &str) -> Result<(), InstallError> {
    let checkout = ctx.paths.compose_dir(tool_name);
    if let Some(compose_file) = find_compose_file(&checkout) {
        match ctx.platform.compose.command() {
            Some(compose) => {
                let compose_dir = compose_file.parent().unwrap_or(&checkout).to_path_buf();
                log_info!("[Compose] Stopping containers");
                let down = compose
                    .arg("-f")
                    .arg(compose_file.display().to_string())
                    .arg("down")
                    .current_dir(&compose_dir);
                run_streamed(ctx, &down)?;
            }
            None => log_warn!("[Compose] docker compose is not available, containers were left running"),
        }
    }

    println!();
    println!("Containers stopped.");
    println!("Data directory: {}", checkout.display());
    println!();
    println!("To completely remove (including all data):");
    println!("  macOS:  Move to Trash manually or use Finder");
    println!("  Linux:  trash-put or move to ~/.local/share/Trash/");
    println!();
    Ok(())
}

/// Whether `ps -q` style output lists at least one container ID.
pub(crate) fn lists_running_container(ps_output: &str) -> bool {
    ps_output.lines().map(str::trim).any(|line| {
        let prefix: Vec<char> = line.chars().take(12).collect();
        prefix.len() == 12 && prefix.iter().all(char::is_ascii_hexdigit)
    })
}

/// `ps` invocation listing running containers of the stack in `compose_file`.
pub(crate) fn running_query(flavor: ComposeFlavor, compose_file: &Path) -> Option<CommandSpec> {
    let base = flavor
        .command()?
        .arg("-f")
        .arg(compose_file.display().to_string())
        .arg("ps");
    Some(match flavor {
        ComposeFlavor::V2 => base.args(["--status=running", "-q"]),
        _ => base.arg("-q"),
    })
}

//! # Docker Installer Module
//!
//! Docker-backed tools come in three shapes, selected by [`DockerFlow`]:
//!
//! - **Pull**: `docker pull <image>`; uninstall removes the image.
//! - **Service**: pull, remove any container already holding the name, then
//!   `docker run -d --name <name> --restart unless-stopped` with the configured
//!   ports, environment and volumes. Uninstall stops and removes that container.
//! - **Compose**: delegated to [`super::compose`].
//!
//! Every flow needs a responsive daemon. Pull and compose failures are most often
//! registry timeouts, so they carry registry-mirror guidance as their hint.

use colored::Colorize;

use crate::installers::{
    DriverContext, InstallDriver, InstallError, InstallRequest, compose, run_captured, run_streamed,
};
use crate::libs::process::CommandSpec;
use crate::libs::utilities::platform::PlatformSnapshot;
use crate::schemas::tools::DockerFlow;
use crate::{log_debug, log_info, log_warn};

/// Shown when pulling images or starting a stack fails.
pub(crate) const MIRROR_HELP: &str = "Docker image pull timed out? Configure a registry mirror.

Edit the Docker daemon configuration:

  # Linux/macOS
  sudo mkdir -p /etc/docker
  sudo tee /etc/docker/daemon.json <<EOF
  {
    \"registry-mirrors\": [
      \"https://docker.1ms.run\",
      \"https://docker.xuanyuan.me\"
    ]
  }
  EOF
  sudo systemctl restart docker  # Linux
  # macOS: restart Docker Desktop

Or in Docker Desktop: Settings -> Docker Engine -> add registry-mirrors

Then run the install command again.";

pub(crate) struct DockerDriver;

impl DockerDriver {
    fn ensure_daemon(platform: &PlatformSnapshot) -> Result<(), InstallError> {
        if platform.docker.is_running() {
            return Ok(());
        }
        Err(InstallError::Prerequisite {
            what: "docker".to_string(),
            hint: platform.docker.remediation(),
        })
    }

    fn service_name(request: &InstallRequest<'_>) -> String {
        request
            .config
            .container_name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| request.tool.name.clone())
    }

    fn pull(ctx: &DriverContext<'_>, image: &str, args: &[String]) -> Result<(), InstallError> {
        log_info!("[Docker Installer] Pulling image {}", image.bold());
        let cmd = CommandSpec::new("docker")
            .args(["pull", image])
            .args(args.iter().cloned());
        run_streamed(ctx, &cmd).map_err(|e| e.into_network(MIRROR_HELP))
    }

    /// Removes a container already using `name` so the new one can take it.
    fn remove_existing(ctx: &DriverContext<'_>, name: &str) {
        let filter = format!("name=^{name}$");
        let listing = CommandSpec::new("docker").args([
            "ps",
            "-a",
            "--filter",
            filter.as_str(),
            "--format",
            "{{.Names}}",
        ]);
        let existing = match run_captured(ctx, &listing) {
            Ok(out) => out.stdout.lines().any(|line| line.trim() == name),
            Err(e) => {
                log_debug!("[Docker Installer] Container lookup failed: {}", e);
                false
            }
        };
        if existing {
            log_info!("[Docker Installer] Container '{}' already exists. Removing...", name);
            if let Err(e) = run_captured(ctx, &CommandSpec::new("docker").args(["rm", "-f", name])) {
                log_warn!("[Docker Installer] Failed to remove old container: {}", e);
            }
        }
    }

    fn run_service(request: &InstallRequest<'_>, ctx: &DriverContext<'_>) -> Result<(), InstallError> {
        let image = request.package();
        let name = Self::service_name(request);
        let config = request.config;

        Self::pull(ctx, image, &[])?;
        Self::remove_existing(ctx, &name);

        let mut run = CommandSpec::new("docker").args([
            "run",
            "-d",
            "--name",
            name.as_str(),
            "--restart",
            "unless-stopped",
        ]);
        for port in &config.docker_ports {
            run = run.arg("-p").arg(port.as_str());
        }
        for (key, value) in &config.docker_env {
            run = run.arg("-e").arg(format!("{key}={value}"));
        }
        for volume in &config.docker_volumes {
            run = run.arg("-v").arg(volume.as_str());
        }
        run = run.args(request.args().iter().cloned()).arg(image);

        log_info!("[Docker Installer] Starting container '{}'", name.bold());
        run_streamed(ctx, &run)?;

        println!();
        println!("{}", format!("✓ Container '{name}' started successfully!").green());
        if !config.docker_ports.is_empty() {
            println!();
            println!("Access URLs:");
            for port in &config.docker_ports {
                println!("  http://localhost:{}", host_port(port));
            }
        }
        println!();
        println!("Useful commands:");
        println!("  docker logs {name}      View logs");
        println!("  docker stop {name}      Stop container");
        println!("  docker start {name}     Start container");
        println!("  docker rm -f {name}     Remove container");
        Ok(())
    }
}

/// Host side of a `-p` mapping: `3000:8080` → `3000`, `127.0.0.1:3000:8080` → `3000`.
pub(crate) fn host_port(mapping: &str) -> &str {
    let parts: Vec<&str> = mapping.split(':').collect();
    match parts.as_slice() {
        [_, host, _] => *host,
        [host, ..] => *host,
        [] => mapping,
    }
}

impl InstallDriver for DockerDriver {
    fn is_available(&self, platform: &PlatformSnapshot) -> bool {
        platform.docker.is_running()
    }

    fn install(&self, request: &InstallRequest<'_>, ctx: &DriverContext<'_>) -> Result<(), InstallError> {
        Self::ensure_daemon(ctx.platform)?;
        match request.config.docker_flow() {
            DockerFlow::Compose { repo_url } => compose::install_compose(request, ctx, repo_url),
            DockerFlow::Service => Self::run_service(request, ctx),
            DockerFlow::Pull => Self::pull(ctx, request.package(), request.args()),
        }
    }

    fn uninstall(&self, request: &InstallRequest<'_>, ctx: &DriverContext<'_>) -> Result<(), InstallError> {
        match request.config.docker_flow() {
            DockerFlow::Compose { .. } => compose::uninstall_compose(ctx, &request.tool.name),
            DockerFlow::Service => {
                let name = Self::service_name(request);
                log_info!("[Docker Installer] Stopping and removing container '{}'", name.bold());
                if let Err(e) = run_captured(ctx, &CommandSpec::new("docker").args(["stop", name.as_str()])) {
                    log_debug!("[Docker Installer] docker stop failed: {}", e);
                }
                run_streamed(ctx, &CommandSpec::new("docker").args(["rm", name.as_str()]))
            }
            DockerFlow::Pull => {
                log_info!("[Docker Installer] Removing image {}", request.package().bold());
                run_streamed(ctx, &CommandSpec::new("docker").args(["rmi", request.package()]))
            }
        }
    }
}

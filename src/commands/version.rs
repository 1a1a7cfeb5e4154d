// This file handles the `version` command.
// It prints the version compiled into the binary and compares it against
// the latest release published on GitHub.

use crate::commands::Session;
use crate::libs::utilities::downloads::agent;
use crate::{log_debug, log_info, log_warn}; // Custom logging macros.
use colored::Colorize;
use serde::Deserialize;

// GitHub repository details for version checking.
const REPO_OWNER: &str = "getoai";
const REPO_NAME: &str = "getoai-cli";

/// The local version, taken from `Cargo.toml` at build time.
const LOCAL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The only field of the GitHub release payload we read.
#[derive(Deserialize)]
struct GitHubRelease {
    tag_name: String, // The release tag name (e.g., "v1.0.0").
}

/// Fetches the latest release tag from the getoai repository.
fn get_latest_github_release(proxy: Option<&str>) -> anyhow::Result<String> {
    let url = format!(
        "https://api.github.com/repos/{}/{}/releases/latest",
        REPO_OWNER, REPO_NAME
    );
    log_debug!("[Version] GET {}", url);
    let response = agent(proxy)?.get(&url).call()?;
    let release: GitHubRelease = response.into_json()?;
    Ok(release.tag_name)
}

/// Release tags carry a leading `v`; the crate version does not.
fn same_version(tag: &str, local: &str) -> bool {
    tag.trim().trim_start_matches('v') == local.trim().trim_start_matches('v')
}

/// Prints the version and whether a newer release exists. A failed check is not an error.
pub fn run(session: &Session<'_>) -> anyhow::Result<()> {
    println!("getoai version {}", LOCAL_VERSION.bold());

    match get_latest_github_release(session.config.download_proxy()) {
        Ok(latest) if same_version(&latest, LOCAL_VERSION) => {
            log_info!("You are running the latest version.");
        }
        Ok(latest) => {
            log_warn!(
                "A newer version is available: {} (you have {}). Consider upgrading.",
                latest.green(),
                LOCAL_VERSION
            );
        }
        Err(e) => {
            log_warn!("Could not check for the latest release: {}", e);
        }
    }
    Ok(())
}

// Register application subcommands.
// Each module corresponds to a specific `getoai` command-line action.

use anyhow::anyhow;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::libs::installed_state::InstalledState;
use crate::libs::orchestrator::{BatchReport, Orchestrator};
use crate::libs::paths::AppPaths;
use crate::libs::process::CommandRunner;
use crate::libs::utilities::platform::PlatformProbe;
use crate::libs::utilities::prompt::Prompter;
use crate::schemas::config::UserConfig;

// View, change and locate the configuration file.
pub mod config;
// Detailed view of one tool.
pub mod info;
// Install one or more tools.
pub mod install;
// Installed tools and their versions.
pub mod installed;
// Catalog table, flat or grouped by category.
pub mod list;
// Keyword search over names and descriptions.
pub mod search;
// Uninstall one or more tools.
pub mod uninstall;
// Reinstall installed tools.
pub mod update;
// Displays the version of getoai.
pub mod version;

/// Bad input from the user, reported after everything else ran. Exits with status 2.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct UsageError(pub String);

/// Everything a command works against, built once in `main`.
pub struct Session<'a> {
    pub catalog: &'a Catalog,
    pub probe: &'a PlatformProbe<'a>,
    pub runner: &'a dyn CommandRunner,
    pub paths: &'a AppPaths,
    pub prompter: &'a dyn Prompter,
    pub config: &'a UserConfig,
}

impl<'a> Session<'a> {
    pub fn orchestrator(&self) -> Orchestrator<'a> {
        Orchestrator::new(
            self.catalog,
            self.probe,
            self.runner,
            self.paths,
            self.prompter,
            self.config,
        )
    }

    pub fn state(&self) -> InstalledState<'a> {
        InstalledState::new(self.runner, self.paths)
    }
}

/// Turns a batch tally into the command result: unknown names win over failures.
pub fn finish(report: &BatchReport) -> anyhow::Result<()> {
    if !report.unknown.is_empty() {
        return Err(UsageError(format!("Unknown tool(s): {}", report.unknown.join(", "))).into());
    }
    if !report.failed.is_empty() {
        return Err(anyhow!(
            "{} of {} tool(s) failed: {}",
            report.failed.len(),
            report.total(),
            report.failed.join(", ")
        ));
    }
    Ok(())
}

/// Cuts `text` to `max` characters, ending with "..." when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

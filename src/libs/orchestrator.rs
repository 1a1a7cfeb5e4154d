//! # Installation Orchestrator
//!
//! Drives one tool name at a time through the install, uninstall and update
//! state machines:
//!
//! ```text
//! lookup ─▶ NotFound
//!    │
//!    ▼
//! installed? ─▶ AlreadyInstalled
//!    │
//!    ▼
//! resolve methods ─▶ (none) ─▶ dependency check ─▶ install deps ─▶ re-probe ─▶ resolve again
//!    │
//!    ▼
//! select method (explicit / preferred / single / prompt)
//!    │
//!    ▼
//! driver ─▶ verify ─▶ Installed | DesktopUnverified | NotOnPath
//! ```
//!
//! Batches are a plain sequential loop. Each tool's result is reported as soon as
//! it is known and the loop moves on, so one bad name never aborts the rest.

use colored::Colorize;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::installers::{DriverContext, DriverTable, InstallError, InstallRequest};
use crate::libs::installed_state::{InstalledState, VersionReport};
use crate::libs::method_resolution::{available_methods, effective_config};
use crate::libs::paths::AppPaths;
use crate::libs::process::CommandRunner;
use crate::libs::utilities::platform::{HostTool, PlatformProbe, PlatformSnapshot};
use crate::libs::utilities::prompt::Prompter;
use crate::libs::utilities::spinner::Spinner;
use crate::schemas::config::UserConfig;
use crate::schemas::tools::{InstallMethod, ToolRecord};
use crate::{log_debug, log_info, log_warn};

// ============================================================================
// OPTIONS, OUTCOMES AND ERRORS
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct InstallOptions {
    /// Explicit `--method`; never substituted when unavailable.
    pub method: Option<InstallMethod>,
    /// Skip the prerequisite warnings printed before a driver runs.
    pub skip_deps: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UninstallOptions {
    /// Do not ask for confirmation.
    pub force: bool,
}

/// How a per-tool operation ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Installed,
    AlreadyInstalled,
    /// Driver succeeded but the command is not visible on PATH yet.
    NotOnPath,
    /// Desktop app whose bundle was not found after a successful driver run.
    DesktopUnverified,
    Updated,
    Uninstalled,
    /// Uninstall driver succeeded but the tool is still detected.
    StillPresent,
    NotInstalled,
    /// The user answered no to the uninstall confirmation.
    Declined,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallationOutcome {
    pub tool: String,
    pub kind: OutcomeKind,
    pub method_used: Option<InstallMethod>,
    pub verified_installed: bool,
    pub message: String,
    pub hint: Option<String>,
}

impl InstallationOutcome {
    fn new(tool: &ToolRecord, kind: OutcomeKind, message: String) -> Self {
        InstallationOutcome {
            tool: tool.name.clone(),
            kind,
            method_used: None,
            verified_installed: false,
            message,
            hint: None,
        }
    }

    fn via(mut self, method: InstallMethod) -> Self {
        self.method_used = Some(method);
        self
    }

    fn verified(mut self, installed: bool) -> Self {
        self.verified_installed = installed;
        self
    }

    fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// True when the requested change happened (possibly with a warning).
    pub fn succeeded(&self) -> bool {
        matches!(
            self.kind,
            OutcomeKind::Installed
                | OutcomeKind::NotOnPath
                | OutcomeKind::DesktopUnverified
                | OutcomeKind::Updated
                | OutcomeKind::Uninstalled
                | OutcomeKind::StillPresent
        )
    }

    pub fn print(&self) {
        match self.kind {
            OutcomeKind::Installed
            | OutcomeKind::Updated
            | OutcomeKind::Uninstalled
            | OutcomeKind::DesktopUnverified => println!("{} {}", "✓".green(), self.message.green()),
            OutcomeKind::NotOnPath | OutcomeKind::StillPresent => {
                println!("{} {}", "⚠".yellow(), self.message.yellow())
            }
            OutcomeKind::AlreadyInstalled | OutcomeKind::NotInstalled | OutcomeKind::Declined => {
                println!("{} {}", "ℹ".blue(), self.message)
            }
        }
        if let Some(hint) = &self.hint {
            for line in hint.lines() {
                println!("  {}", line.cyan());
            }
        }
    }
}

/// Per-tool failures. None of them abort a batch.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {name}")]
    NotFound { name: String, suggestions: Vec<String> },

    #[error("No installation method available for {name} on this system")]
    NoMethodAvailable {
        name: String,
        /// Human-readable prerequisites, e.g. "npm (install Node.js)".
        missing: Vec<String>,
        website: String,
    },

    #[error("Method '{method}' not available for {name}")]
    MethodUnavailable {
        name: String,
        method: InstallMethod,
        available: Vec<InstallMethod>,
        hint: Option<String>,
    },

    #[error("Installation of {name} cancelled")]
    Cancelled { name: String },

    #[error(transparent)]
    Driver(#[from] InstallError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Install,
    Uninstall,
    Update,
}

impl Action {
    fn verb(self) -> &'static str {
        match self {
            Action::Install => "install",
            Action::Uninstall => "uninstall",
            Action::Update => "update",
        }
    }
}

/// Tally of a batch, printed when more than one name was given.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub succeeded: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<String>,
    /// Names not in the catalog.
    pub unknown: Vec<String>,
}

impl BatchReport {
    pub fn record(&mut self, name: &str, result: &Result<InstallationOutcome, ToolError>) {
        let bucket = match result {
            Ok(outcome) if outcome.succeeded() => &mut self.succeeded,
            Ok(_) | Err(ToolError::Cancelled { .. }) => &mut self.skipped,
            Err(ToolError::NotFound { .. }) => &mut self.unknown,
            Err(_) => &mut self.failed,
        };
        bucket.push(name.to_string());
    }

    pub fn total(&self) -> usize {
        self.succeeded.len() + self.skipped.len() + self.failed.len() + self.unknown.len()
    }

    pub fn print_summary(&self) {
        println!();
        println!(
            "Summary: {} succeeded, {} skipped, {} failed",
            self.succeeded.len().to_string().green(),
            self.skipped.len().to_string().blue(),
            (self.failed.len() + self.unknown.len()).to_string().red()
        );
    }
}

// ============================================================================
// ORCHESTRATOR
// ============================================================================

pub struct Orchestrator<'a> {
    catalog: &'a Catalog,
    probe: &'a PlatformProbe<'a>,
    drivers: DriverTable,
    runner: &'a dyn CommandRunner,
    paths: &'a AppPaths,
    prompter: &'a dyn Prompter,
    config: &'a UserConfig,
    spinner: bool,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        catalog: &'a Catalog,
        probe: &'a PlatformProbe<'a>,
        runner: &'a dyn CommandRunner,
        paths: &'a AppPaths,
        prompter: &'a dyn Prompter,
        config: &'a UserConfig,
    ) -> Self {
        Orchestrator {
            catalog,
            probe,
            drivers: DriverTable::new(),
            runner,
            paths,
            prompter,
            config,
            spinner: true,
        }
    }

    #[cfg(test)]
    pub fn with_spinner(mut self, enabled: bool) -> Self {
        self.spinner = enabled;
        self
    }

    fn state(&self) -> InstalledState<'a> {
        InstalledState::new(self.runner, self.paths)
    }

    fn context<'c>(&'c self, platform: &'c PlatformSnapshot) -> DriverContext<'c> {
        DriverContext {
            runner: self.runner,
            platform,
            paths: self.paths,
            proxy: self.config.download_proxy(),
        }
    }

    /// Catalog lookup; happens before any probe so unknown names spawn nothing.
    fn lookup(&self, name: &str) -> Result<&'a ToolRecord, ToolError> {
        self.catalog.get(name).ok_or_else(|| ToolError::NotFound {
            name: name.to_string(),
            suggestions: self.catalog.suggest(name).into_iter().map(String::from).collect(),
        })
    }

    /// Installed tools in name order.
    pub fn installed_tools(&self) -> Vec<&'a ToolRecord> {
        let platform = self.probe.detect();
        let state = self.state();
        self.catalog
            .list()
            .into_iter()
            .filter(|t| state.is_installed(t, &platform))
            .collect()
    }

    // ------------------------------------------------------------------------
    // install
    // ------------------------------------------------------------------------

    pub fn install_tool(&self, name: &str, opts: &InstallOptions) -> Result<InstallationOutcome, ToolError> {
        let tool = self.lookup(name)?;
        self.install_record(tool, opts, true)
    }

    fn install_record(
        &self,
        tool: &ToolRecord,
        opts: &InstallOptions,
        resolve_dependencies: bool,
    ) -> Result<InstallationOutcome, ToolError> {
        let mut platform = self.probe.detect();
        let state = self.state();

        if state.is_installed(tool, &platform) {
            let message = match state.version(tool, &platform) {
                VersionReport::Known(v) => format!("{} is already installed (version: {})", tool.name, v),
                _ => format!("{} is already installed", tool.name),
            };
            return Ok(InstallationOutcome::new(tool, OutcomeKind::AlreadyInstalled, message).verified(true));
        }

        let mut methods = available_methods(tool, &platform, &self.drivers);
        if methods.is_empty() && resolve_dependencies && self.install_dependencies(tool, &platform) {
            platform = self.probe.refresh();
            methods = available_methods(tool, &platform, &self.drivers);
            if !methods.is_empty() {
                println!();
                println!(
                    "{}",
                    format!("Dependencies installed. Continuing with {} installation...", tool.name).green()
                );
            }
        }
        if methods.is_empty() {
            return Err(ToolError::NoMethodAvailable {
                name: tool.name.clone(),
                missing: missing_prerequisites(tool, &platform),
                website: tool.website.clone(),
            });
        }

        let method = self.select_method(tool, &methods, opts.method, &platform)?;
        if !opts.skip_deps {
            warn_missing_runtime(method, &platform);
        }
        self.execute_install(tool, method, &platform)?;
        Ok(self.verify_install(tool, method))
    }

    /// Offers to install catalog tools that unlock a declared method. True when
    /// at least one dependency install was attempted.
    fn install_dependencies(&self, tool: &ToolRecord, platform: &PlatformSnapshot) -> bool {
        let dependencies = self.installable_dependencies(tool, platform);
        if dependencies.is_empty() {
            return false;
        }

        let labels: Vec<String> = dependencies
            .iter()
            .map(|d| format!("{} ({})", d.name, d.description))
            .collect();
        println!();
        println!("{} Missing dependencies: {}", "⚠".yellow(), labels.join(", ").yellow());
        if !self.prompter.confirm("Install required dependencies first?", true) {
            log_info!("[Orchestrator] Dependency installation declined for {}", tool.name);
            return false;
        }

        for dependency in dependencies {
            println!();
            println!("{}", format!("Installing dependency: {}", dependency.name).cyan());
            let result = self.install_record(dependency, &InstallOptions::default(), false);
            report(self.catalog, Action::Install, &dependency.name, &result);
        }
        true
    }

    fn installable_dependencies(&self, tool: &ToolRecord, platform: &PlatformSnapshot) -> Vec<&'a ToolRecord> {
        let mut found: Vec<&'a ToolRecord> = Vec::new();
        for method in tool.declared_methods(platform.os) {
            let dependency = match method {
                InstallMethod::Npm if !platform.has(HostTool::Npm) => "node",
                InstallMethod::Docker if !platform.has(HostTool::Docker) => "docker",
                _ => continue,
            };
            let Some(record) = self.catalog.get(dependency) else {
                continue;
            };
            if found.iter().any(|r| r.name == record.name) {
                continue;
            }
            if available_methods(record, platform, &self.drivers).is_empty() {
                log_debug!("[Orchestrator] Dependency {} has no usable method either", dependency);
                continue;
            }
            found.push(record);
        }
        found
    }

    fn select_method(
        &self,
        tool: &ToolRecord,
        methods: &[InstallMethod],
        requested: Option<InstallMethod>,
        platform: &PlatformSnapshot,
    ) -> Result<InstallMethod, ToolError> {
        if let Some(method) = requested {
            if methods.contains(&method) {
                return Ok(method);
            }
            return Err(ToolError::MethodUnavailable {
                name: tool.name.clone(),
                method,
                available: methods.to_vec(),
                hint: method_hint(method, platform),
            });
        }

        if let Some(preferred) = self.config.preferred_method_for(&tool.name) {
            if methods.contains(&preferred) {
                log_info!("[Orchestrator] Using configured method {} for {}", preferred, tool.name);
                return Ok(preferred);
            }
            log_warn!(
                "[Orchestrator] Configured method {} for {} is not available, ignoring",
                preferred,
                tool.name
            );
        }

        if let [only] = methods {
            return Ok(*only);
        }

        let options: Vec<String> = methods
            .iter()
            .map(|m| format!("{:<9} {}", m.as_str(), m.description()))
            .collect();
        let title = format!("Multiple installation methods available for {}", tool.name);
        let method = self
            .prompter
            .select(&title, &options)
            .and_then(|choice| methods.get(choice).copied())
            .ok_or_else(|| ToolError::Cancelled { name: tool.name.clone() })?;
        println!("{} Selected installation method: {}", "ℹ".blue(), method.as_str().bold());
        Ok(method)
    }

    fn run_driver(
        &self,
        tool: &ToolRecord,
        method: InstallMethod,
        platform: &PlatformSnapshot,
        action: Action,
    ) -> Result<(), ToolError> {
        let (Some(driver), Some(config)) = (
            self.drivers.driver(method),
            effective_config(tool, method, platform),
        ) else {
            return Err(ToolError::MethodUnavailable {
                name: tool.name.clone(),
                method,
                available: available_methods(tool, platform, &self.drivers),
                hint: None,
            });
        };
        let request = InstallRequest::new(tool, method, config);
        let ctx = self.context(platform);
        match action {
            Action::Uninstall => driver.uninstall(&request, &ctx)?,
            Action::Install | Action::Update => driver.install(&request, &ctx)?,
        }
        Ok(())
    }

    fn execute_install(&self, tool: &ToolRecord, method: InstallMethod, platform: &PlatformSnapshot) -> Result<(), ToolError> {
        println!(
            "{} Installing {} using {}...",
            "ℹ".blue(),
            tool.name.bold(),
            method.as_str().cyan()
        );
        self.run_driver(tool, method, platform, Action::Install)
    }

    /// Re-probes after a driver run and classifies what is now visible.
    fn verify_install(&self, tool: &ToolRecord, method: InstallMethod) -> InstallationOutcome {
        let spinner = Spinner::start(&format!("Verifying {}...", tool.name), self.spinner);
        let platform = self.probe.refresh();
        let state = self.state();
        let installed = state.is_installed(tool, &platform);
        let version = installed.then(|| state.version(tool, &platform));
        spinner.stop();

        let outcome = match version {
            Some(VersionReport::Known(v)) => InstallationOutcome::new(
                tool,
                OutcomeKind::Installed,
                format!("{} installed successfully! (version: {})", tool.name, v),
            ),
            Some(_) => InstallationOutcome::new(
                tool,
                OutcomeKind::Installed,
                format!("{} installed successfully!", tool.name),
            ),
            None if tool.is_desktop_app() => InstallationOutcome::new(
                tool,
                OutcomeKind::DesktopUnverified,
                format!("{} installation completed", tool.name),
            )
            .with_hint("Desktop app installed, you may need to restart Finder or your launcher to see it"),
            None => InstallationOutcome::new(
                tool,
                OutcomeKind::NotOnPath,
                format!("{} installation completed, but command not found in PATH", tool.name),
            )
            .with_hint(path_hint(method)),
        };
        outcome.via(method).verified(installed)
    }

    pub fn install_batch(&self, names: &[String], opts: &InstallOptions) -> BatchReport {
        self.batch(names, Action::Install, |name| self.install_tool(name, opts))
    }

    // ------------------------------------------------------------------------
    // uninstall
    // ------------------------------------------------------------------------

    pub fn uninstall_tool(&self, name: &str, opts: &UninstallOptions) -> Result<InstallationOutcome, ToolError> {
        let tool = self.lookup(name)?;
        let platform = self.probe.detect();
        let state = self.state();

        if !state.is_installed(tool, &platform) {
            return Ok(InstallationOutcome::new(
                tool,
                OutcomeKind::NotInstalled,
                format!("{} is not installed", tool.name),
            ));
        }

        if !opts.force {
            let question = format!("Are you sure you want to uninstall {}?", tool.name);
            if !self.prompter.confirm(&question, false) {
                return Ok(InstallationOutcome::new(
                    tool,
                    OutcomeKind::Declined,
                    "Uninstall canceled".to_string(),
                ));
            }
        }

        if tool.compose_repo().is_some() {
            self.run_driver(tool, InstallMethod::Docker, &platform, Action::Uninstall)?;
            return Ok(InstallationOutcome::new(
                tool,
                OutcomeKind::Uninstalled,
                format!("{} stopped successfully", tool.name),
            )
            .via(InstallMethod::Docker)
            .with_hint(format!(
                "Project files kept in {}",
                self.paths.compose_dir(&tool.name).display()
            )));
        }

        let method = self.uninstall_with_first_working(tool, &platform)?;

        let platform = self.probe.refresh();
        if state.is_installed(tool, &platform) {
            return Ok(InstallationOutcome::new(
                tool,
                OutcomeKind::StillPresent,
                format!("{} uninstall completed, but command still found in PATH", tool.name),
            )
            .via(method)
            .verified(true)
            .with_hint("You may need to restart your shell"));
        }
        Ok(InstallationOutcome::new(
            tool,
            OutcomeKind::Uninstalled,
            format!("{} uninstalled successfully", tool.name),
        )
        .via(method))
    }

    /// Tries each usable method until a driver reports success.
    fn uninstall_with_first_working(
        &self,
        tool: &ToolRecord,
        platform: &PlatformSnapshot,
    ) -> Result<InstallMethod, ToolError> {
        let mut candidates = available_methods(tool, platform, &self.drivers);
        // A live container says which method put the tool there. A download
        // without an app bundle can only print instructions, so it goes last.
        let in_container = tool
            .container_name()
            .is_some_and(|c| self.state().container_exists(&c, platform));
        candidates.sort_by_key(|m| {
            (
                in_container && *m != InstallMethod::Docker,
                *m == InstallMethod::Download,
            )
        });

        let mut last_error = None;
        for method in candidates {
            log_debug!("[Orchestrator] Trying to uninstall {} via {}", tool.name, method);
            match self.run_driver(tool, method, platform, Action::Uninstall) {
                Ok(()) => return Ok(method),
                Err(e) => {
                    log_warn!("[Orchestrator] Uninstall of {} via {} failed: {}", tool.name, method, e);
                    last_error = Some(e);
                }
            }
        }
        Err(last_error.unwrap_or_else(|| ToolError::NoMethodAvailable {
            name: tool.name.clone(),
            missing: missing_prerequisites(tool, platform),
            website: tool.website.clone(),
        }))
    }

    pub fn uninstall_batch(&self, names: &[String], opts: &UninstallOptions) -> BatchReport {
        self.batch(names, Action::Uninstall, |name| self.uninstall_tool(name, opts))
    }

    // ------------------------------------------------------------------------
    // update
    // ------------------------------------------------------------------------

    /// Reinstalls with the first available method.
    pub fn update_tool(&self, name: &str) -> Result<InstallationOutcome, ToolError> {
        let tool = self.lookup(name)?;
        let platform = self.probe.detect();
        let state = self.state();

        if !state.is_installed(tool, &platform) {
            return Ok(InstallationOutcome::new(
                tool,
                OutcomeKind::NotInstalled,
                format!("{} is not installed", tool.name),
            ));
        }

        let methods = available_methods(tool, &platform, &self.drivers);
        let Some(&method) = methods.first() else {
            return Err(ToolError::NoMethodAvailable {
                name: tool.name.clone(),
                missing: missing_prerequisites(tool, &platform),
                website: tool.website.clone(),
            });
        };
        println!("{} Updating {} using {}...", "ℹ".blue(), tool.name.bold(), method.as_str().cyan());
        self.run_driver(tool, method, &platform, Action::Update)?;

        let platform = self.probe.refresh();
        let message = match state.version(tool, &platform) {
            VersionReport::Known(v) => format!("{} updated to {}", tool.name, v),
            _ => format!("{} updated successfully", tool.name),
        };
        Ok(InstallationOutcome::new(tool, OutcomeKind::Updated, message)
            .via(method)
            .verified(state.is_installed(tool, &platform)))
    }

    pub fn update_batch(&self, names: &[String]) -> BatchReport {
        self.batch(names, Action::Update, |name| self.update_tool(name))
    }

    /// Updates every installed catalog tool.
    pub fn update_all(&self) -> BatchReport {
        let spinner = Spinner::start("Checking installed tools...", self.spinner);
        let installed: Vec<String> = self.installed_tools().iter().map(|t| t.name.clone()).collect();
        if installed.is_empty() {
            spinner.info("No AI tools installed to update");
            return BatchReport::default();
        }
        spinner.stop();

        println!("Updating {} installed tools...", installed.len());
        self.update_batch(&installed)
    }

    fn batch(
        &self,
        names: &[String],
        action: Action,
        mut run: impl FnMut(&str) -> Result<InstallationOutcome, ToolError>,
    ) -> BatchReport {
        let mut summary = BatchReport::default();
        for (index, name) in names.iter().enumerate() {
            if index > 0 {
                println!();
            }
            let result = run(name);
            report(self.catalog, action, name, &result);
            summary.record(name, &result);
        }
        if names.len() > 1 {
            summary.print_summary();
        }
        summary
    }
}

// ============================================================================
// REPORTING HELPERS
// ============================================================================

/// Prints one tool's result the way every command shows it.
pub fn report(catalog: &Catalog, action: Action, name: &str, result: &Result<InstallationOutcome, ToolError>) {
    let error = match result {
        Ok(outcome) => return outcome.print(),
        Err(e) => e,
    };
    println!("{} {}", "✗".red(), error.to_string().red());
    match error {
        ToolError::NotFound { suggestions, .. } => {
            if !suggestions.is_empty() {
                println!("  Did you mean: {}?", suggestions.join(", ").cyan());
            }
            println!("  Run '{}' to see all available tools", "getoai list".cyan());
            println!("  Run '{}' to search for tools", "getoai search <keyword>".cyan());
        }
        ToolError::NoMethodAvailable { missing, website, .. } => {
            if !missing.is_empty() {
                println!("  Missing dependencies:");
                for item in missing {
                    println!("    - {item}");
                }
            }
            println!("  Visit {} for manual installation", website.cyan());
        }
        ToolError::MethodUnavailable { available, hint, .. } => {
            let names: Vec<&str> = available.iter().map(|m| m.as_str()).collect();
            if names.is_empty() {
                println!("  No methods are available on this system");
            } else {
                println!("  Available methods: {}", names.join(", ").cyan());
            }
            if let Some(hint) = hint {
                for line in hint.lines() {
                    println!("  {line}");
                }
            }
        }
        ToolError::Cancelled { .. } => {}
        ToolError::Driver(e) => {
            println!("  {}", format!("Failed to {} {}", action.verb(), name).red());
            if let Some(hint) = e.hint() {
                for line in hint.lines() {
                    println!("  {}", line.yellow());
                }
            }
            if let Some(tool) = catalog.get(name) {
                println!("  Visit {} for manual installation", tool.website.cyan());
            }
        }
    }
}

/// What would make each unavailable declared method usable.
fn missing_prerequisites(tool: &ToolRecord, platform: &PlatformSnapshot) -> Vec<String> {
    let mut missing: Vec<String> = tool
        .declared_methods(platform.os)
        .into_iter()
        .filter_map(|m| prerequisite_label(m, platform))
        .collect();
    missing.dedup();
    missing
}

fn prerequisite_label(method: InstallMethod, platform: &PlatformSnapshot) -> Option<String> {
    let label = match method {
        InstallMethod::Npm => "npm (install Node.js)",
        InstallMethod::Pip => "pip (install Python)",
        InstallMethod::Go => "go (install Go)",
        InstallMethod::Docker if platform.has(HostTool::Docker) => "docker (daemon not running)",
        InstallMethod::Docker => "docker",
        InstallMethod::Brew => "brew (Homebrew)",
        InstallMethod::Apt => "apt-get",
        InstallMethod::Choco => "choco (Chocolatey)",
        InstallMethod::Scoop => "scoop",
        InstallMethod::Script => "curl or wget",
        InstallMethod::Download | InstallMethod::Binary => return None,
    };
    Some(label.to_string())
}

/// Remediation for an explicitly requested method that is not usable.
fn method_hint(method: InstallMethod, platform: &PlatformSnapshot) -> Option<String> {
    match method {
        InstallMethod::Docker => platform.docker.remediation(),
        InstallMethod::Npm => Some("Install Node.js first: getoai install node".to_string()),
        _ => prerequisite_label(method, platform).map(|label| format!("Requires {label}")),
    }
}

fn warn_missing_runtime(method: InstallMethod, platform: &PlatformSnapshot) {
    let missing = match method {
        InstallMethod::Npm if !platform.has(HostTool::Node) => "Node.js",
        InstallMethod::Pip if !platform.has(HostTool::Python3) => "Python 3",
        InstallMethod::Go if !platform.has(HostTool::Go) => "Go",
        _ => return,
    };
    println!(
        "{} {} does not appear to be installed; the {} installer may fail",
        "⚠".yellow(),
        missing,
        method.as_str()
    );
}

fn path_hint(method: InstallMethod) -> String {
    match method {
        InstallMethod::Go => "Add Go binaries to your PATH:\n  export PATH=$PATH:~/go/bin".to_string(),
        InstallMethod::Pip => "Add Python user binaries to your PATH:\n  export PATH=$PATH:~/.local/bin".to_string(),
        InstallMethod::Npm => {
            "Restart your shell, or check the global bin directory with `npm bin -g`".to_string()
        }
        _ => "Restart your shell, or add the install location to your PATH".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::process::testing::FakeRunner;
    use crate::libs::utilities::platform::{ComposeFlavor, DockerStatus};
    use crate::libs::utilities::prompt::testing::ScriptedPrompter;
    use crate::schemas::tools::Os;

    struct Fixture {
        catalog: Catalog,
        runner: FakeRunner,
        paths: AppPaths,
        prompter: ScriptedPrompter,
        config: UserConfig,
        _home: tempfile::TempDir,
    }

    impl Fixture {
        fn new(runner: FakeRunner, prompter: ScriptedPrompter) -> Self {
            let home = tempfile::tempdir().expect("tempdir");
            Fixture {
                catalog: Catalog::builtin(),
                runner,
                paths: AppPaths::rooted(home.path()),
                prompter,
                config: UserConfig::default(),
                _home: home,
            }
        }

        fn orchestrator<'a>(&'a self, probe: &'a PlatformProbe<'a>) -> Orchestrator<'a> {
            Orchestrator::new(
                &self.catalog,
                probe,
                &self.runner,
                &self.paths,
                &self.prompter,
                &self.config,
            )
            .with_spinner(false)
        }
    }

    fn fixed(platform: PlatformSnapshot) -> PlatformProbe<'static> {
        PlatformProbe::from_fn(move || platform.clone())
    }

    fn mac_with_brew() -> PlatformSnapshot {
        PlatformSnapshot::new(Os::Darwin).with_tool(HostTool::Brew)
    }

    fn docker_linux() -> PlatformSnapshot {
        PlatformSnapshot::new(Os::Linux)
            .with_tool(HostTool::Pip3)
            .with_tool(HostTool::Python3)
            .with_docker(DockerStatus::Running, ComposeFlavor::V2)
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    /// Answers every selection with an index one past the last option.
    struct PastTheEnd;

    impl Prompter for PastTheEnd {
        fn select(&self, _title: &str, options: &[String]) -> Option<usize> {
            Some(options.len())
        }

        fn confirm(&self, _question: &str, default: bool) -> bool {
            default
        }
    }

    #[test]
    fn out_of_range_selection_cancels_the_install() {
        let fx = Fixture::new(FakeRunner::new(), ScriptedPrompter::choosing(None));
        let probe = fixed(mac_with_brew());
        let orchestrator = Orchestrator::new(&fx.catalog, &probe, &fx.runner, &fx.paths, &PastTheEnd, &fx.config)
            .with_spinner(false);
        let err = orchestrator
            .install_tool("cursor", &InstallOptions::default())
            .expect_err("cancelled");

        assert!(matches!(err, ToolError::Cancelled { .. }));
        assert!(!fx.runner.ran("brew install"));
    }

    #[test]
    fn cursor_on_macos_prompts_between_brew_and_download() {
        let fx = Fixture::new(FakeRunner::new(), ScriptedPrompter::choosing(Some(0)));
        let probe = fixed(mac_with_brew());
        let outcome = fx
            .orchestrator(&probe)
            .install_tool("cursor", &InstallOptions::default())
            .expect("install");

        assert_eq!(fx.prompter.selections.get(), 1);
        let options = fx.prompter.last_options.borrow().clone();
        assert_eq!(options.len(), 2);
        assert!(options[0].starts_with("brew"));
        assert!(options[1].starts_with("download"));
        assert!(fx.runner.ran("brew install cursor --cask"));
        assert_eq!(outcome.method_used, Some(InstallMethod::Brew));
        if !std::path::Path::new("/Applications/Cursor.app").exists() {
            assert_eq!(outcome.kind, OutcomeKind::DesktopUnverified);
            assert!(outcome.hint.is_some());
        }
    }

    #[test]
    fn explicit_docker_method_runs_the_service_container() {
        let fx = Fixture::new(FakeRunner::new(), ScriptedPrompter::choosing(None));
        let probe = fixed(docker_linux());
        let opts = InstallOptions {
            method: Some(InstallMethod::Docker),
            skip_deps: false,
        };
        let outcome = fx
            .orchestrator(&probe)
            .install_tool("open-webui", &opts)
            .expect("install");

        assert_eq!(fx.prompter.selections.get(), 0);
        assert!(fx.runner.ran("docker pull ghcr.io/open-webui/open-webui:main"));
        let run = fx
            .runner
            .calls()
            .into_iter()
            .find(|c| c.starts_with("docker run"))
            .expect("docker run issued");
        assert!(run.contains("--name open-webui"));
        assert!(run.contains("-p 3000:8080"));
        assert!(run.contains("-v open-webui-data:/app/backend/data"));
        assert!(!fx.runner.ran("pip3 install"));
        assert_eq!(outcome.method_used, Some(InstallMethod::Docker));
        assert_eq!(outcome.kind, OutcomeKind::NotOnPath);
    }

    #[test]
    fn uninstalling_a_container_removes_that_container() {
        let runner = FakeRunner::new();
        runner.output_for("docker ps -a", "9b1c2d3e4f50\n");
        let fx = Fixture::new(runner, ScriptedPrompter::choosing(None));
        let probe = fixed(docker_linux());
        let outcome = fx
            .orchestrator(&probe)
            .uninstall_tool("open-webui", &UninstallOptions { force: true })
            .expect("uninstall");

        assert_eq!(fx.prompter.confirmations.get(), 0);
        assert!(fx.runner.ran("docker stop open-webui"));
        assert!(fx.runner.ran("docker rm open-webui"));
        assert!(!fx.runner.ran("pip3 uninstall"));
        assert_eq!(outcome.method_used, Some(InstallMethod::Docker));
    }

    #[test]
    fn unknown_tool_spawns_nothing_and_is_recorded_as_unknown() {
        let fx = Fixture::new(FakeRunner::new(), ScriptedPrompter::choosing(None));
        let probe = PlatformProbe::from_fn(|| panic!("unknown names must not probe"));
        let report = fx
            .orchestrator(&probe)
            .uninstall_batch(&names(&["ghost-tool"]), &UninstallOptions { force: true });

        assert!(fx.runner.calls().is_empty());
        assert_eq!(report.unknown, names(&["ghost-tool"]));
        assert!(report.failed.is_empty());

        match fx.orchestrator(&probe).install_tool("olama", &InstallOptions::default()) {
            Err(ToolError::NotFound { suggestions, .. }) => {
                assert_eq!(suggestions.first().map(String::as_str), Some("ollama"))
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn installed_tool_is_a_no_op() {
        let runner = FakeRunner::with_path(&["aider", "brew", "pip3"]);
        runner.output_for("aider --version", "aider 0.82.1\n");
        let fx = Fixture::new(runner, ScriptedPrompter::choosing(Some(0)));
        let probe = fixed(mac_with_brew().with_tool(HostTool::Pip3));
        let outcome = fx
            .orchestrator(&probe)
            .install_tool("aider", &InstallOptions::default())
            .expect("no-op");

        assert_eq!(outcome.kind, OutcomeKind::AlreadyInstalled);
        assert_eq!(outcome.message, "aider is already installed (version: aider 0.82.1)");
        assert!(!fx.runner.ran("brew install"));
        assert!(!fx.runner.ran("pip3 install"));
        assert_eq!(fx.prompter.selections.get(), 0);
    }

    #[test]
    fn single_available_method_skips_the_prompt() {
        let fx = Fixture::new(FakeRunner::new(), ScriptedPrompter::choosing(None));
        let probe = fixed(mac_with_brew().with_tool(HostTool::Npm).with_tool(HostTool::Node));
        let outcome = fx
            .orchestrator(&probe)
            .install_tool("claude-code", &InstallOptions::default())
            .expect("install");

        assert_eq!(fx.prompter.selections.get(), 0);
        assert!(fx.runner.ran("npm install -g @anthropic-ai/claude-code"));
        assert_eq!(outcome.kind, OutcomeKind::NotOnPath);
        assert!(outcome.hint.as_deref().is_some_and(|h| h.contains("npm bin -g")));
    }

    #[test]
    fn unavailable_explicit_method_is_never_substituted() {
        let fx = Fixture::new(FakeRunner::new(), ScriptedPrompter::choosing(Some(0)));
        let probe = fixed(PlatformSnapshot::new(Os::Linux).with_tool(HostTool::Pip3));
        let opts = InstallOptions {
            method: Some(InstallMethod::Docker),
            skip_deps: true,
        };
        match fx.orchestrator(&probe).install_tool("open-webui", &opts) {
            Err(ToolError::MethodUnavailable { available, hint, .. }) => {
                assert_eq!(available, vec![InstallMethod::Pip]);
                assert!(hint.is_some_and(|h| h.contains("getoai install docker")));
            }
            other => panic!("expected MethodUnavailable, got {other:?}"),
        }
        assert!(!fx.runner.ran("pip3 install"));
    }

    #[test]
    fn missing_node_is_installed_first_then_the_tool() {
        let fx = Fixture::new(FakeRunner::new(), ScriptedPrompter::choosing(None).confirming(true));
        let runner = &fx.runner;
        let probe = PlatformProbe::from_fn(move || {
            if runner.ran("brew install node") {
                mac_with_brew().with_tool(HostTool::Npm).with_tool(HostTool::Node)
            } else {
                mac_with_brew()
            }
        });
        let outcome = fx
            .orchestrator(&probe)
            .install_tool("claude-code", &InstallOptions::default())
            .expect("install after dependency");

        assert_eq!(fx.prompter.confirmations.get(), 1);
        let calls = fx.runner.calls();
        let node = calls.iter().position(|c| c == "brew install node").expect("node installed");
        let claude = calls
            .iter()
            .position(|c| c == "npm install -g @anthropic-ai/claude-code")
            .expect("tool installed");
        assert!(node < claude);
        assert_eq!(outcome.method_used, Some(InstallMethod::Npm));
    }

    #[test]
    fn declined_dependency_reports_missing_prerequisites() {
        let fx = Fixture::new(FakeRunner::new(), ScriptedPrompter::choosing(None).confirming(false));
        let probe = fixed(mac_with_brew());
        match fx.orchestrator(&probe).install_tool("claude-code", &InstallOptions::default()) {
            Err(ToolError::NoMethodAvailable { missing, website, .. }) => {
                assert_eq!(missing, vec!["npm (install Node.js)".to_string()]);
                assert_eq!(website, "https://claude.ai");
            }
            other => panic!("expected NoMethodAvailable, got {other:?}"),
        }
        assert!(fx.runner.calls().is_empty());
    }

    #[test]
    fn reinstalling_a_service_replaces_the_old_container() {
        let runner = FakeRunner::new();
        runner.output_for("docker ps -a --filter name=^lobe-chat$ --format {{.Names}}", "lobe-chat\n");
        let fx = Fixture::new(runner, ScriptedPrompter::choosing(None));
        let probe = fixed(docker_linux());
        fx.orchestrator(&probe)
            .install_tool("lobechat", &InstallOptions::default())
            .expect("install");

        let calls = fx.runner.calls();
        let removed = calls.iter().position(|c| c == "docker rm -f lobe-chat").expect("old container removed");
        let started = calls.iter().position(|c| c.starts_with("docker run")).expect("container started");
        assert!(removed < started);
    }

    #[test]
    fn configured_preference_wins_without_prompting() {
        let mut fx = Fixture::new(FakeRunner::new(), ScriptedPrompter::choosing(None));
        fx.config.preferred_method.insert("aider".into(), "pip".into());
        let probe = fixed(mac_with_brew().with_tool(HostTool::Pip3).with_tool(HostTool::Python3));
        let outcome = fx
            .orchestrator(&probe)
            .install_tool("aider", &InstallOptions::default())
            .expect("install");

        assert_eq!(fx.prompter.selections.get(), 0);
        assert!(fx.runner.ran("pip3 install aider-chat"));
        assert_eq!(outcome.method_used, Some(InstallMethod::Pip));
    }

    #[test]
    fn uninstall_falls_back_to_the_next_method() {
        let runner = FakeRunner::with_path(&["llm"]);
        runner.fail_on("brew uninstall llm");
        let fx = Fixture::new(runner, ScriptedPrompter::choosing(None).confirming(true));
        let probe = fixed(mac_with_brew().with_tool(HostTool::Pip3));
        let outcome = fx
            .orchestrator(&probe)
            .uninstall_tool("llm", &UninstallOptions::default())
            .expect("uninstall");

        assert_eq!(fx.prompter.confirmations.get(), 1);
        assert!(fx.runner.ran("brew uninstall llm"));
        assert!(fx.runner.ran("pip3 uninstall -y llm"));
        assert_eq!(outcome.method_used, Some(InstallMethod::Pip));
        // The fake PATH still lists llm.
        assert_eq!(outcome.kind, OutcomeKind::StillPresent);
    }

    #[test]
    fn uninstall_prefers_a_package_manager_over_the_download_page() {
        let fx = Fixture::new(
            FakeRunner::with_path(&["ollama", "brew"]),
            ScriptedPrompter::choosing(None),
        );
        let probe = fixed(mac_with_brew());
        let outcome = fx
            .orchestrator(&probe)
            .uninstall_tool("ollama", &UninstallOptions { force: true })
            .expect("uninstall");

        assert!(fx.runner.ran("brew uninstall ollama"));
        assert_eq!(outcome.method_used, Some(InstallMethod::Brew));
    }

    #[test]
    fn declining_uninstall_runs_nothing() {
        let fx = Fixture::new(FakeRunner::with_path(&["llm"]), ScriptedPrompter::choosing(None));
        let probe = fixed(mac_with_brew());
        let outcome = fx
            .orchestrator(&probe)
            .uninstall_tool("llm", &UninstallOptions::default())
            .expect("declined");
        assert_eq!(outcome.kind, OutcomeKind::Declined);
        assert!(!fx.runner.ran("brew uninstall"));
    }

    #[test]
    fn update_reinstalls_with_the_first_method() {
        let runner = FakeRunner::with_path(&["aider"]);
        runner.output_for("aider --version", "aider 0.83.0\n");
        let fx = Fixture::new(runner, ScriptedPrompter::choosing(None));
        let probe = fixed(mac_with_brew().with_tool(HostTool::Pip3));
        let outcome = fx.orchestrator(&probe).update_tool("aider").expect("update");

        assert!(fx.runner.ran("brew install aider"));
        assert_eq!(outcome.kind, OutcomeKind::Updated);
        assert_eq!(outcome.message, "aider updated to aider 0.83.0");

        let missing = fx.orchestrator(&probe).update_tool("llm").expect("skip");
        assert_eq!(missing.kind, OutcomeKind::NotInstalled);
    }

    #[test]
    fn cancelled_selection_does_not_stop_the_batch() {
        let fx = Fixture::new(FakeRunner::new(), ScriptedPrompter::choosing(None));
        let probe = fixed(mac_with_brew().with_tool(HostTool::Npm).with_tool(HostTool::Node));
        let report = fx.orchestrator(&probe).install_batch(
            &names(&["cursor", "ghost-tool", "claude-code"]),
            &InstallOptions::default(),
        );

        assert_eq!(report.skipped, names(&["cursor"]));
        assert_eq!(report.unknown, names(&["ghost-tool"]));
        assert_eq!(report.succeeded, names(&["claude-code"]));
        assert_eq!(report.total(), 3);
        assert!(!fx.runner.ran("brew install cursor"));
        assert!(fx.runner.ran("npm install -g @anthropic-ai/claude-code"));
    }

    #[test]
    fn compose_uninstall_keeps_the_checkout() {
        let runner = FakeRunner::new();
        runner.output_for("docker compose -f", "3f2a9c81b0de\n");
        let fx = Fixture::new(runner, ScriptedPrompter::choosing(None));
        let checkout = fx.paths.compose_dir("dify").join("docker");
        std::fs::create_dir_all(&checkout).expect("mkdir");
        std::fs::write(checkout.join("docker-compose.yaml"), "services: {}\n").expect("write");

        let probe = fixed(docker_linux());
        let outcome = fx
            .orchestrator(&probe)
            .uninstall_tool("dify", &UninstallOptions { force: true })
            .expect("uninstall");

        assert_eq!(outcome.kind, OutcomeKind::Uninstalled);
        assert!(fx.runner.calls().iter().any(|c| c.ends_with("down")));
        assert!(checkout.join("docker-compose.yaml").exists());
    }

    #[test]
    fn batch_report_buckets() {
        let tool = ToolRecord::new("x", "x", crate::schemas::tools::Category::Utility, "https://x.dev");
        let mut report = BatchReport::default();
        report.record("a", &Ok(InstallationOutcome::new(&tool, OutcomeKind::Installed, String::new())));
        report.record("b", &Ok(InstallationOutcome::new(&tool, OutcomeKind::AlreadyInstalled, String::new())));
        report.record("c", &Err(ToolError::Cancelled { name: "c".into() }));
        report.record(
            "d",
            &Err(ToolError::Driver(InstallError::Invalid("boom".into()))),
        );
        assert_eq!(report.succeeded, names(&["a"]));
        assert_eq!(report.skipped, names(&["b", "c"]));
        assert_eq!(report.failed, names(&["d"]));
    }
}

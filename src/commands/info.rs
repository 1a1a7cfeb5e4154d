//! `getoai info <tool>`: everything known about one tool on this machine.

use colored::Colorize;

use crate::commands::{Session, UsageError};
use crate::installers::DriverTable;
use crate::libs::installed_state::VersionReport;
use crate::libs::method_resolution::{available_methods, unavailable_methods};
use crate::libs::utilities::platform::PlatformSnapshot;
use crate::schemas::tools::{InstallMethod, ToolRecord};

/// Declared methods with their availability: usable ones in resolution order first.
fn method_rows(tool: &ToolRecord, platform: &PlatformSnapshot, drivers: &DriverTable) -> Vec<(InstallMethod, bool)> {
    available_methods(tool, platform, drivers)
        .into_iter()
        .map(|m| (m, true))
        .chain(unavailable_methods(tool, platform, drivers).into_iter().map(|m| (m, false)))
        .collect()
}

fn field(label: &str, value: impl std::fmt::Display) {
    println!("{:<13}{}", format!("{label}:"), value);
}

pub fn run(session: &Session<'_>, name: &str) -> anyhow::Result<()> {
    let Some(tool) = session.catalog.get(name) else {
        println!("{} Unknown tool: {}", "✗".red(), name);
        let suggestions = session.catalog.suggest(name);
        if !suggestions.is_empty() {
            println!("  Did you mean: {}?", suggestions.join(", ").cyan());
        }
        println!("Use '{}' to see all available tools", "getoai list".cyan());
        return Err(UsageError(format!("Unknown tool: {name}")).into());
    };

    let platform = session.probe.detect();
    let state = session.state();
    let drivers = DriverTable::new();

    println!();
    field("Name", tool.name.bold());
    field("Description", &tool.description);
    field(
        "Category",
        format!("{} ({})", tool.category.as_str(), tool.category.display_name()),
    );
    field("Website", tool.website.cyan());
    if !tool.command.is_empty() {
        field("Command", &tool.command);
    }
    if tool.is_desktop_app() {
        field("App", &tool.app_name);
    }

    if state.is_installed(tool, &platform) {
        field("Status", "Installed".green());
        match state.version(tool, &platform) {
            VersionReport::NotApplicable => {}
            version => field("Version", version),
        }
    } else {
        field("Status", "Not installed".red());
    }

    println!();
    println!("Install methods on {}:", platform.os);
    for (method, available) in method_rows(tool, &platform, &drivers) {
        let mark = if available { "✓".green() } else { "✗".red() };
        let line = format!("{:<9} {}", method.as_str(), method.description());
        if available {
            println!("  {mark} {line}");
        } else {
            println!("  {mark} {}", line.dimmed());
        }
    }

    let overrides = tool.override_methods(platform.os);
    if !overrides.is_empty() {
        let names: Vec<&str> = overrides.iter().map(|m| m.as_str()).collect();
        println!("Preferred on {}: {}", platform.os, names.join(", ").cyan());
    }
    if let Some(preferred) = session.config.preferred_method_for(&tool.name) {
        println!("Configured method: {}", preferred.as_str().cyan());
    }
    if let Some(repo) = tool.compose_repo() {
        println!("Compose project: {}", repo);
        println!("Checkout:        {}", session.paths.compose_dir(&tool.name).display());
    }
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::libs::utilities::platform::HostTool;
    use crate::schemas::tools::Os;

    #[test]
    fn available_methods_come_first() {
        let catalog = Catalog::builtin();
        let aider = catalog.get("aider").expect("aider");
        let platform = PlatformSnapshot::new(Os::Linux).with_tool(HostTool::Pip3);
        assert_eq!(
            method_rows(aider, &platform, &DriverTable::new()),
            vec![(InstallMethod::Pip, true), (InstallMethod::Brew, false)]
        );
    }

    #[test]
    fn override_only_method_is_listed() {
        let catalog = Catalog::builtin();
        let node = catalog.get("node").expect("node");
        let rows = method_rows(node, &PlatformSnapshot::new(Os::Linux), &DriverTable::new());
        assert!(rows.contains(&(InstallMethod::Apt, false)));
        assert!(rows.iter().all(|(_, available)| !available));
    }
}

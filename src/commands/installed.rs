//! `getoai installed`: installed tools with the version each one reports.

use colored::Colorize;
use prettytable::{Cell, Row};

use crate::commands::Session;
use crate::commands::list::{clean_table, title_row};
use crate::libs::installed_state::VersionReport;

pub fn run(session: &Session<'_>) -> anyhow::Result<()> {
    let installed = session.orchestrator().installed_tools();
    if installed.is_empty() {
        println!("No AI tools installed yet.");
        println!("Use '{}' to see available tools", "getoai list".cyan());
        println!("Use '{}' to install one", "getoai install <tool>".cyan());
        return Ok(());
    }

    let state = session.state();
    let mut table = clean_table();
    table.set_titles(title_row(&["NAME", "CATEGORY", "VERSION"]));
    for tool in &installed {
        // Already known to be installed; only the version flag is left to ask.
        let version = if tool.command.is_empty() {
            VersionReport::NotApplicable
        } else {
            state.probe_version(&tool.command)
        };
        table.add_row(Row::new(vec![
            Cell::new(&tool.name),
            Cell::new(tool.category.as_str()),
            Cell::new(&version.to_string()),
        ]));
    }

    println!();
    table.printstd();
    println!();
    println!("{} installed", installed.len().to_string().bold());
    Ok(())
}

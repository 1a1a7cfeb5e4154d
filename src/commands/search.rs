//! `getoai search <query>`: case-insensitive match on name or description.

use colored::Colorize;
use prettytable::{Cell, Row, Table};

use crate::commands::Session;
use crate::commands::list::{clean_table, status_cell, title_row};
use crate::schemas::tools::ToolRecord;

fn results_table(results: &[(&ToolRecord, bool)]) -> Table {
    let mut table = clean_table();
    table.set_titles(title_row(&["NAME", "CATEGORY", "STATUS", "DESCRIPTION"]));
    for (tool, installed) in results {
        table.add_row(Row::new(vec![
            Cell::new(&tool.name),
            Cell::new(tool.category.as_str()),
            status_cell(*installed),
            Cell::new(&tool.description),
        ]));
    }
    table
}

pub fn run(session: &Session<'_>, query: &str) -> anyhow::Result<()> {
    let matches = session.catalog.search(query);
    if matches.is_empty() {
        println!("No tools found matching '{}'", query.yellow());
        println!("Use '{}' to see all available tools", "getoai list".cyan());
        return Ok(());
    }

    let platform = session.probe.detect();
    let state = session.state();
    let results: Vec<(&ToolRecord, bool)> = matches
        .into_iter()
        .map(|t| (t, state.is_installed(t, &platform)))
        .collect();

    println!();
    println!("Found {} tool(s) matching '{}':", results.len(), query.bold());
    println!();
    results_table(&results).printstd();
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn results_show_full_descriptions() {
        let catalog = Catalog::builtin();
        let found = catalog.search("pair programming");
        assert!(!found.is_empty());
        let rows: Vec<(&ToolRecord, bool)> = found.into_iter().map(|t| (t, false)).collect();
        let rendered = results_table(&rows).to_string();
        assert!(rendered.contains("aider"));
        assert!(rendered.contains("AI pair programming in your terminal"));
    }
}

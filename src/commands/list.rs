//! # List Command
//!
//! Prints the catalog as a table: NAME, CATEGORY, STATUS, INSTALL VIA and a
//! shortened DESCRIPTION. `--group` prints one table per category in display
//! order; `--category` narrows the listing to one category.
//!
//! STATUS and INSTALL VIA reflect this machine: the installed check and the
//! methods that are usable right now.

use colored::Colorize;
use prettytable::{Cell, Row, Table, format};

use crate::commands::{Session, truncate};
use crate::installers::DriverTable;
use crate::libs::method_resolution::available_methods;
use crate::schemas::tools::{Category, InstallMethod, ToolRecord};

const DESCRIPTION_WIDTH: usize = 40;
const METHODS_WIDTH: usize = 14;

/// One rendered line of the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ListRow {
    pub name: String,
    pub category: Category,
    pub installed: bool,
    pub methods: Vec<InstallMethod>,
    pub description: String,
}

impl ListRow {
    fn new(tool: &ToolRecord, installed: bool, methods: Vec<InstallMethod>) -> Self {
        ListRow {
            name: tool.name.clone(),
            category: tool.category,
            installed,
            methods,
            description: tool.description.clone(),
        }
    }

    fn methods_label(&self) -> String {
        if self.methods.is_empty() {
            return "-".to_string();
        }
        let joined: Vec<&str> = self.methods.iter().map(|m| m.as_str()).collect();
        truncate(&joined.join(","), METHODS_WIDTH)
    }
}

pub(crate) fn status_cell(installed: bool) -> Cell {
    if installed {
        Cell::new("✓").style_spec("Fg")
    } else {
        Cell::new("✗").style_spec("Fr")
    }
}

pub(crate) fn title_row(titles: &[&str]) -> Row {
    Row::new(titles.iter().map(|t| Cell::new(t).style_spec("b")).collect())
}

pub(crate) fn clean_table() -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    table
}

fn build_table(rows: &[&ListRow], show_category: bool) -> Table {
    let mut table = clean_table();
    let titles: &[&str] = if show_category {
        &["NAME", "CATEGORY", "STATUS", "INSTALL VIA", "DESCRIPTION"]
    } else {
        &["NAME", "STATUS", "INSTALL VIA", "DESCRIPTION"]
    };
    table.set_titles(title_row(titles));

    for row in rows {
        let mut cells = vec![Cell::new(&row.name)];
        if show_category {
            cells.push(Cell::new(row.category.as_str()));
        }
        cells.push(status_cell(row.installed));
        let methods = row.methods_label();
        cells.push(if row.methods.is_empty() {
            Cell::new(&methods).style_spec("Fy")
        } else {
            Cell::new(&methods)
        });
        cells.push(Cell::new(&truncate(&row.description, DESCRIPTION_WIDTH)));
        table.add_row(Row::new(cells));
    }
    table
}

pub fn run(session: &Session<'_>, category: Option<Category>, group: bool) -> anyhow::Result<()> {
    let tools = match category {
        Some(c) => session.catalog.by_category(c),
        None => session.catalog.list(),
    };
    if tools.is_empty() {
        println!("No tools found.");
        return Ok(());
    }

    let platform = session.probe.detect();
    let state = session.state();
    let drivers = DriverTable::new();
    let rows: Vec<ListRow> = tools
        .iter()
        .map(|t| {
            ListRow::new(
                t,
                state.is_installed(t, &platform),
                available_methods(t, &platform, &drivers),
            )
        })
        .collect();

    println!();
    if group && category.is_none() {
        for cat in Category::ALL {
            let in_category: Vec<&ListRow> = rows.iter().filter(|r| r.category == cat).collect();
            if in_category.is_empty() {
                continue;
            }
            println!(
                "{} ({})",
                cat.display_name().bold().cyan(),
                in_category.len()
            );
            build_table(&in_category, false).printstd();
            println!();
        }
    } else {
        let all: Vec<&ListRow> = rows.iter().collect();
        build_table(&all, true).printstd();
    }

    println!();
    println!("{}", format!("Total: {} tools available", session.catalog.count()).bold());
    println!();
    println!("Commands:");
    println!("  getoai install <tool>   Install a tool");
    println!("  getoai info <tool>      Show tool details");
    println!("  getoai search <keyword> Search for tools");
    println!("  getoai list -g          Group by category");
    Ok(())
}

//! `getoai uninstall <tool...> [--force]`
//!
//! Compose deployments are stopped, never deleted: their checkout under
//! `~/.getoai/tools/<tool>` keeps the data.

use crate::commands::{Session, finish};
use crate::libs::orchestrator::UninstallOptions;

pub fn run(session: &Session<'_>, tools: &[String], force: bool) -> anyhow::Result<()> {
    let report = session
        .orchestrator()
        .uninstall_batch(tools, &UninstallOptions { force });
    finish(&report)
}

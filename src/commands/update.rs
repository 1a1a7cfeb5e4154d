//! `getoai update [tool...] [--all]`
//!
//! Updating reinstalls with the first available method; there is no
//! version-aware upgrade.

use crate::commands::{Session, finish};

pub fn run(session: &Session<'_>, tools: &[String], all: bool) -> anyhow::Result<()> {
    let orchestrator = session.orchestrator();
    let report = if all || tools.is_empty() {
        orchestrator.update_all()
    } else {
        orchestrator.update_batch(tools)
    };
    finish(&report)
}

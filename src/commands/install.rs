//! `getoai install <tool...> [--method M] [--skip-deps]`

use crate::commands::{Session, finish};
use crate::libs::orchestrator::InstallOptions;
use crate::log_debug;
use crate::schemas::tools::InstallMethod;

pub fn run(
    session: &Session<'_>,
    tools: &[String],
    method: Option<InstallMethod>,
    skip_deps: bool,
) -> anyhow::Result<()> {
    log_debug!(
        "[Install] tools={:?} method={:?} skip_deps={}",
        tools,
        method,
        skip_deps
    );
    let opts = InstallOptions { method, skip_deps };
    let report = session.orchestrator().install_batch(tools, &opts);
    finish(&report)
}

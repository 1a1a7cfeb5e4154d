// Core machinery behind the commands.

// Whether a tool is present and which version it reports.
pub mod installed_state;
// Which install methods a tool can use here, best first.
pub mod method_resolution;
// Per-tool install/uninstall/update flows and batch reporting.
pub mod orchestrator;
// Home, config and checkout locations.
pub mod paths;
// External process execution behind a trait.
pub mod process;
pub mod utilities;

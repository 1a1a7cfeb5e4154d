// clap definitions for the `getoai` command line.
pub mod cmd_enums;

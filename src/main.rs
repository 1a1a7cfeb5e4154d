mod catalog;
mod cli;
mod commands;
mod installers;
mod libs;
mod logger;
mod schemas;

use std::process::ExitCode;

use clap::Parser;

use crate::catalog::Catalog;
use crate::cli::cmd_enums::{Cli, Commands, ConfigCommands};
use crate::commands::{Session, UsageError};
use crate::libs::paths::AppPaths;
use crate::libs::process::SystemRunner;
use crate::libs::utilities::platform::PlatformProbe;
use crate::libs::utilities::prompt::TerminalPrompter;
use crate::schemas::config::UserConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.debug);
    log_debug!("[getoai] Debug mode enabled");

    // Configuration first: it decides the AppImage directory and the child environment.
    let paths = AppPaths::resolve(cli.config.as_deref());
    let config = UserConfig::load(paths.config_file());
    let paths = paths.with_bin_path(Some(config.bin_path.as_str()));

    let runner = SystemRunner::new().with_env(config.env_exports());
    let probe = PlatformProbe::system(&runner, paths.home_dir());
    let prompter = TerminalPrompter::new(cli.yes);
    let catalog = Catalog::builtin();

    let session = Session {
        catalog: &catalog,
        probe: &probe,
        runner: &runner,
        paths: &paths,
        prompter: &prompter,
        config: &config,
    };

    let result = match cli.command {
        Commands::List { category, group } => commands::list::run(&session, category, group),
        Commands::Search { query } => commands::search::run(&session, &query),
        Commands::Info { tool } => commands::info::run(&session, &tool),
        Commands::Install {
            tools,
            method,
            skip_deps,
        } => commands::install::run(&session, &tools, method, skip_deps),
        Commands::Uninstall { tools, force } => commands::uninstall::run(&session, &tools, force),
        Commands::Update { tools, all } => commands::update::run(&session, &tools, all),
        Commands::Installed => commands::installed::run(&session),
        Commands::Config { action } => match action {
            ConfigCommands::Show => commands::config::show(&session),
            ConfigCommands::Set { key, value } => commands::config::set(&session, &key, &value),
            ConfigCommands::Path => commands::config::path(&session),
        },
        Commands::Version => commands::version::run(&session),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log_error!("{}", e);
            if e.downcast_ref::<UsageError>().is_some() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

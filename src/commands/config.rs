//! # Config Command
//!
//! `config show`, `config set <key> <value>` and `config path`.
//!
//! Values take effect on the next invocation: the file is read once at start-up
//! and its proxies and mirrors are handed to every child process.

use std::path::Path;

use colored::Colorize;

use crate::catalog::Catalog;
use crate::commands::{Session, UsageError};
use crate::log_debug;
use crate::schemas::config::{ConfigError, UserConfig};

const NOT_SET: &str = "(not set)";

pub fn show(session: &Session<'_>) -> anyhow::Result<()> {
    let config = session.config;
    println!();
    println!("{}", "Current Configuration:".bold());
    println!("----------------------");
    for (key, value) in config.entries() {
        let shown = if value.is_empty() {
            NOT_SET.dimmed().to_string()
        } else {
            value.to_string()
        };
        println!("{:<15}{}", format!("{key}:"), shown);
    }
    if config.preferred_method.is_empty() {
        println!("{:<15}{}", "preferred_method:", NOT_SET.dimmed());
    } else {
        println!("preferred_method:");
        for (tool, method) in &config.preferred_method {
            println!("  {:<13}{}", format!("{tool}:"), method);
        }
    }
    println!();
    println!("Config file: {}", session.paths.config_file().display().to_string().cyan());
    println!();
    Ok(())
}

/// Validates, stores and saves one key. Invalid keys and values are usage errors.
fn apply_set(
    current: &UserConfig,
    catalog: &Catalog,
    path: &Path,
    key: &str,
    value: &str,
) -> anyhow::Result<UserConfig> {
    let mut updated = current.clone();
    match updated.set_key(key, value, |tool| catalog.contains(tool)) {
        Ok(()) => {}
        Err(e @ (ConfigError::UnknownKey(_) | ConfigError::UnknownTool(_) | ConfigError::InvalidMethod(_))) => {
            return Err(UsageError(e.to_string()).into());
        }
        Err(e) => return Err(e.into()),
    }
    updated.save(path)?;
    log_debug!("[Config] Saved {} to {}", key, path.display());
    Ok(updated)
}

pub fn set(session: &Session<'_>, key: &str, value: &str) -> anyhow::Result<()> {
    apply_set(
        session.config,
        session.catalog,
        session.paths.config_file(),
        key,
        value,
    )?;
    println!("{} Set {} = {}", "✓".green(), key.bold(), value);
    Ok(())
}

pub fn path(session: &Session<'_>) -> anyhow::Result<()> {
    println!("{}", session.paths.config_file().display());
    Ok(())
}

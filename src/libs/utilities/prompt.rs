//! Interactive questions asked during installation.
//!
//! The orchestrator only talks to the [`Prompter`] trait, so tests can script
//! answers. [`TerminalPrompter`] renders `dialoguer` widgets on a terminal and
//! falls back to a numbered menu read from stdin when input is piped.

use std::io::{self, BufRead, IsTerminal, Write};

use colored::Colorize;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};

use crate::log_debug;

pub trait Prompter {
    /// Index of the chosen option; `None` when cancelled or the answer is invalid.
    fn select(&self, title: &str, options: &[String]) -> Option<usize>;

    fn confirm(&self, question: &str, default: bool) -> bool;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter {
    assume_yes: bool,
}

impl TerminalPrompter {
    /// With `assume_yes`, every selection takes the first option and every
    /// confirmation its default.
    pub fn new(assume_yes: bool) -> Self {
        TerminalPrompter { assume_yes }
    }
}

/// Parses a 1-based menu answer.
pub fn parse_choice(input: &str, option_count: usize) -> Option<usize> {
    match input.trim().parse::<usize>() {
        Ok(choice) if (1..=option_count).contains(&choice) => Some(choice - 1),
        _ => None,
    }
}

fn read_line() -> Option<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).ok()?;
    Some(line)
}

impl Prompter for TerminalPrompter {
    fn select(&self, title: &str, options: &[String]) -> Option<usize> {
        if options.is_empty() {
            return None;
        }
        if self.assume_yes {
            log_debug!("[Prompt] --yes given, choosing '{}'", options[0]);
            return Some(0);
        }

        if io::stdin().is_terminal() && io::stderr().is_terminal() {
            return Select::with_theme(&ColorfulTheme::default())
                .with_prompt(title)
                .items(options)
                .default(0)
                .interact_opt()
                .unwrap_or_else(|e| {
                    log_debug!("[Prompt] Selection aborted: {}", e);
                    None
                });
        }

        println!();
        println!("{}", title.bold());
        println!();
        for (i, option) in options.iter().enumerate() {
            println!("  {} {}", format!("{})", i + 1).cyan(), option);
        }
        println!();
        print!("Enter your choice (1-{}): ", options.len());
        let _ = io::stdout().flush();
        let answer = read_line()?;
        parse_choice(&answer, options.len())
    }

    fn confirm(&self, question: &str, default: bool) -> bool {
        if self.assume_yes {
            return default;
        }

        if io::stdin().is_terminal() && io::stderr().is_terminal() {
            return Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(question)
                .default(default)
                .interact()
                .unwrap_or(false);
        }

        let suffix = if default { "[Y/n]" } else { "[y/N]" };
        print!("{question} {suffix}: ");
        let _ = io::stdout().flush();
        match read_line().map(|l| l.trim().to_lowercase()) {
            Some(answer) if answer.is_empty() => default,
            Some(answer) => answer == "y" || answer == "yes",
            None => false,
        }
    }
}

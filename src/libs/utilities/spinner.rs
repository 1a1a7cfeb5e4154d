// Progress spinner shown while the orchestrator probes and resolves methods.
//
// The ticker runs on indicatif's background thread. `finish_and_clear` stops and
// joins it, so once `stop*` returns nothing else writes to the terminal and the
// status line printed afterwards cannot interleave with a repaint.

use std::io::{self, IsTerminal};
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

const FRAMES: [&str; 11] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "];
const TICK: Duration = Duration::from_millis(80);

pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// Starts ticking immediately. Hidden when stderr is not a terminal or `enabled` is false.
    pub fn start(message: &str, enabled: bool) -> Self {
        if !enabled || !io::stderr().is_terminal() {
            return Spinner {
                bar: ProgressBar::hidden(),
            };
        }
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&FRAMES),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(TICK);
        Spinner { bar }
    }

    /// Clears the spinner line; returns once the ticker thread has stopped.
    pub fn stop(self) {
        self.bar.finish_and_clear();
    }

    /// Stops, then prints `message` as an informational status line.
    pub fn info(self, message: &str) {
        self.stop();
        println!("{} {}", "ℹ".blue(), message);
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_spinner_is_hidden_and_stops_cleanly() {
        let spinner = Spinner::start("Resolving installation method...", false);
        assert!(spinner.bar.is_hidden());
        spinner.stop();
    }

    #[test]
    fn dropping_a_running_spinner_finishes_it() {
        let spinner = Spinner::start("Checking ollama...", false);
        drop(spinner);
    }

    #[test]
    fn info_stops_before_printing() {
        Spinner::start("Checking installed tools...", false).info("No AI tools installed to update");
    }
}

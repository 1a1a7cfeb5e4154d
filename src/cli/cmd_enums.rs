use clap::{Parser, Subcommand};

use crate::schemas::tools::{Category, InstallMethod};

/// Defines the command-line interface (CLI) for 'getoai'.
#[derive(Parser)]
#[command(name = "getoai")]
#[command(version)]
#[command(about = "One-click installer for AI tools and CLIs")]
#[command(
    long_about = "getoai installs and manages AI tools and command-line programs through the \
package managers already on this machine (brew, apt, npm, pip, go, docker, choco, scoop), \
install scripts, or desktop installers.",
    after_help = "Examples:\n  getoai list                    List all available tools\n  getoai install ollama          Install ollama\n  getoai install claude-code     Install Claude Code CLI\n  getoai info aider              Show info about aider"
)]
pub struct Cli {
    /// Enables detailed debug output, including every external command.
    #[arg(short, long, global = true)]
    pub(crate) debug: bool,

    /// Path to an alternative config.json.
    #[arg(long, global = true, env = "GETOAI_CONFIG", value_name = "PATH")]
    pub(crate) config: Option<String>,

    /// Answer prompts with their defaults (first method, default confirmation).
    #[arg(short = 'y', long, global = true, env = "GETOAI_YES")]
    pub(crate) yes: bool,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all available AI tools.
    List {
        /// Only show one category [llm, coding, ui, utility, platform, infra].
        #[arg(short, long)]
        category: Option<Category>,
        /// Group tools by category.
        #[arg(short, long)]
        group: bool,
    },
    /// Search tools by name or description.
    Search {
        /// Case-insensitive keyword.
        query: String,
    },
    /// Show detailed information about a tool.
    Info {
        tool: String,
    },
    /// Install one or more tools.
    Install {
        #[arg(required = true, value_name = "TOOL")]
        tools: Vec<String>,
        /// Installation method to use instead of asking [brew, apt, npm, pip, go, docker, script, download, choco, scoop].
        #[arg(short, long)]
        method: Option<InstallMethod>,
        /// Do not warn about missing runtimes (Node.js, Python, Go) before installing.
        #[arg(long)]
        skip_deps: bool,
    },
    /// Uninstall one or more tools.
    #[command(visible_aliases = ["remove", "rm"])]
    Uninstall {
        #[arg(required = true, value_name = "TOOL")]
        tools: Vec<String>,
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        force: bool,
    },
    /// Update installed tools by reinstalling them.
    Update {
        /// Tools to update; every installed tool when omitted.
        #[arg(value_name = "TOOL")]
        tools: Vec<String>,
        /// Update every installed tool.
        #[arg(short, long, conflicts_with = "tools")]
        all: bool,
    },
    /// List installed AI tools with their versions.
    Installed,
    /// View and manage getoai configuration.
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
    /// Show the current version.
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration.
    Show,
    /// Set a configuration value.
    #[command(
        long_about = "Set a configuration value.\n\nAvailable keys:\n  http_proxy               HTTP proxy URL\n  https_proxy              HTTPS proxy URL\n  npm_registry             npm registry URL (e.g., https://registry.npmmirror.com)\n  pypi_mirror              PyPI mirror URL (e.g., https://pypi.tuna.tsinghua.edu.cn/simple)\n  go_proxy                 Go module proxy (e.g., https://goproxy.cn,direct)\n  bin_path                 Directory for AppImages (default ~/.local/bin)\n  preferred_method.<tool>  Method to use for <tool> without asking"
    )]
    Set { key: String, value: String },
    /// Show the configuration file path.
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn install_parses_method_and_several_tools() {
        let cli = Cli::try_parse_from(["getoai", "install", "aider", "llm", "-m", "pip", "--skip-deps"])
            .expect("parses");
        match cli.command {
            Commands::Install {
                tools,
                method,
                skip_deps,
            } => {
                assert_eq!(tools, vec!["aider".to_string(), "llm".to_string()]);
                assert_eq!(method, Some(InstallMethod::Pip));
                assert!(skip_deps);
            }
            _ => panic!("expected install"),
        }
    }

    #[test]
    fn unknown_method_is_rejected() {
        assert!(Cli::try_parse_from(["getoai", "install", "aider", "--method", "flatpak"]).is_err());
        assert!(Cli::try_parse_from(["getoai", "install"]).is_err());
    }

    #[test]
    fn remove_is_an_alias_for_uninstall() {
        let cli = Cli::try_parse_from(["getoai", "rm", "llm", "-f", "-d"]).expect("parses");
        assert!(cli.debug);
        assert!(matches!(cli.command, Commands::Uninstall { force: true, .. }));
    }

    #[test]
    fn list_accepts_category_and_global_flags() {
        let cli = Cli::try_parse_from(["getoai", "list", "-c", "coding", "-g", "--yes"]).expect("parses");
        assert!(cli.yes);
        match cli.command {
            Commands::List { category, group } => {
                assert_eq!(category, Some(Category::Coding));
                assert!(group);
            }
            _ => panic!("expected list"),
        }
    }
}

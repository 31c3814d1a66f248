//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - configure: Configure command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod configure;

pub use completions::CompletionsArgs;
pub use configure::ConfigureArgs;

/// barista-configure - package skeleton configurator
///
/// Turn a freshly cloned Barista package skeleton into your package.
#[derive(Parser, Debug)]
#[command(
    name = "barista-configure",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Configure a freshly cloned package skeleton",
    long_about = "Asks for a package name, description and author username, then rewrites \
                  composer.json and README.md so that the skeleton's placeholder vendor and \
                  package names become yours. Removes the bootstrap script when done.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  barista-configure                                  \x1b[90m# Answer the questions interactively\x1b[0m\n   \
                  barista-configure configure --name cool-tool -n    \x1b[90m# No prompts\x1b[0m\n   \
                  barista-configure configure --dry-run              \x1b[90m# Preview only\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'd', global = true, env = "BARISTA_PROJECT_DIR")]
    pub dir: Option<PathBuf>,

    /// Settings file (defaults to barista.yaml in the project directory)
    #[arg(long, short = 'c', global = true, env = "BARISTA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrite the skeleton for a new package (default)
    Configure(ConfigureArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_no_subcommand() {
        let cli = Cli::try_parse_from(["barista-configure"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parsing_configure() {
        let cli = Cli::try_parse_from([
            "barista-configure",
            "configure",
            "--name",
            "cool-tool",
            "--description",
            "does things",
            "--username",
            "octocat",
            "-n",
            "--dry-run",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Configure(args)) => {
                assert_eq!(args.name.as_deref(), Some("cool-tool"));
                assert_eq!(args.description.as_deref(), Some("does things"));
                assert_eq!(args.username.as_deref(), Some("octocat"));
                assert!(args.no_interaction);
                assert!(args.dry_run);
                assert!(!args.keep);
            }
            _ => panic!("Expected Configure command"),
        }
    }

    #[test]
    fn test_cli_parsing_repeated_remove() {
        let cli = Cli::try_parse_from([
            "barista-configure",
            "configure",
            "--remove",
            "configure.php",
            "--remove",
            "bin/setup",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Configure(args)) => {
                assert_eq!(
                    args.remove,
                    [PathBuf::from("configure.php"), PathBuf::from("bin/setup")]
                );
            }
            _ => panic!("Expected Configure command"),
        }
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["barista-configure", "version"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Version)));
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from([
            "barista-configure",
            "-v",
            "-d",
            "/tmp/skeleton",
            "-c",
            "custom.yaml",
            "configure",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/skeleton")));
        assert_eq!(cli.config, Some(PathBuf::from("custom.yaml")));
    }

    #[test]
    fn test_cli_global_options_after_subcommand() {
        let cli =
            Cli::try_parse_from(["barista-configure", "configure", "--dir", "/tmp/skeleton"])
                .unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/skeleton")));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["barista-configure", "completions", "bash"]).unwrap();
        match cli.command {
            Some(Commands::Completions(args)) => {
                assert_eq!(args.shell, "bash");
            }
            _ => panic!("Expected Completions command"),
        }
    }
}

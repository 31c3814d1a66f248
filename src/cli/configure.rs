use std::path::PathBuf;

use clap::Parser;

/// Arguments for the configure command
#[derive(Parser, Debug, Default, Clone)]
#[command(after_help = "EXAMPLES:\n  \
                   Answer the questions interactively:\n    barista-configure\n\n\
                   Configure without prompts:\n    barista-configure configure --name cool-tool --description \"Does things\" -n\n\n\
                   Preview the result without writing:\n    barista-configure configure --name cool-tool --dry-run\n\n\
                   Keep the bootstrap script:\n    barista-configure configure --keep")]
pub struct ConfigureArgs {
    /// Package name, hyphenated (e.g. my-cool-package)
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Package description
    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Author GitHub username
    #[arg(long, value_name = "USER")]
    pub username: Option<String>,

    /// Never prompt; use defaults for anything not given
    #[arg(long = "no-interaction", short = 'n')]
    pub no_interaction: bool,

    /// Print the rewritten files instead of writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Keep rewritten namespace keys in their original position
    #[arg(long)]
    pub keep_key_order: bool,

    /// Do not remove the bootstrap files after configuring
    #[arg(long)]
    pub keep: bool,

    /// Additional file to remove after configuring (repeatable)
    #[arg(long = "remove", value_name = "PATH")]
    pub remove: Vec<PathBuf>,
}

mod cmd;
mod logging;
mod prompt;

use clap::{Args, Parser, Subcommand};
use zk_core::{ConfigLoader, Period};

use crate::cmd::output;
use crate::cmd::CommandError;

#[derive(Debug, Parser)]
#[command(
    name = "zk",
    version,
    about = "A CLI for managing your Neovim + Obsidian Zettelkasten.",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create a new note in the inbox and link it from today's daily note
    New(NewArgs),

    /// Open today's daily note, creating it if needed
    Day,

    /// Open this week's weekly note, creating it if needed
    Week,

    /// Validate configuration and print resolved paths
    Doctor,
}

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Note title (prompted for when omitted)
    pub title: Option<String>,

    /// Print only the created path, for Neovim integration
    #[arg(long)]
    pub vim: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        output::error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}

fn run(command: Commands) -> Result<(), CommandError> {
    let loaded = ConfigLoader::from_env();

    let quiet = matches!(&command, Commands::New(args) if args.vim);
    let _log_guard = loaded.as_ref().ok().and_then(|cfg| logging::init(&cfg.logging, quiet));

    match command {
        Commands::Doctor => cmd::doctor::run(loaded),
        Commands::New(args) => cmd::new::run(&loaded?, args),
        Commands::Day => cmd::periodic::run(&loaded?, Period::Daily),
        Commands::Week => cmd::periodic::run(&loaded?, Period::Weekly),
    }
}

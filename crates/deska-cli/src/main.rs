use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "deska")]
#[command(about = "DESKA CLI - rule-based desk assistant", long_about = None)]
struct Cli {
    /// Use this config file instead of ~/.config/deska/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpret one utterance and act on it
    Ask {
        /// The utterance, e.g. `deska ask open youtube`
        #[arg(required = true, trailing_var_arg = true)]
        words: Vec<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Do not open requested URLs
        #[arg(long)]
        no_open: bool,
    },
    /// Tell the current time
    Time,
    /// Tell today's date
    Date,
    /// Evaluate an arithmetic expression
    Calc {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        expression: Vec<String>,
    },
    /// List the applications that can be opened
    Apps,
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write the default configuration
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let repository = commands::repository(cli.config)?;

    match cli.command {
        Commands::Ask { words, json, no_open } => {
            commands::ask::run(&repository, &words.join(" "), json, no_open)?
        }
        Commands::Time => commands::ask::run(&repository, "time", false, true)?,
        Commands::Date => commands::ask::run(&repository, "date", false, true)?,
        Commands::Calc { expression } => commands::calc::run(&expression.join(" "))?,
        Commands::Apps => commands::apps::run(&repository)?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&repository)?,
            ConfigAction::Init { force } => commands::config::init(&repository, force)?,
        },
    }

    Ok(())
}

//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use contactbook::config::GlobalConfig;
use contactbook::core::ports::NotifierKind;
use contactbook::VERSION;
use contactbook::output::OutputMode;

/// contactbook - Add, list, search and delete contacts
#[derive(Parser, Debug)]
#[command(
    name = "contactbook",
    version,
    about = "Add, list, search and delete contacts",
    long_about = "A small contact manager.\n\n\
                  Contacts are kept in memory for the life of one run.\n\
                  Adding or deleting a contact sends a notification to its email."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Notification transport: console or log
    #[arg(long, global = true)]
    pub notifier: Option<NotifierKind>,

    /// Config file (defaults to $CONTACTBOOK_CONFIG, then ~/.contactbook/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the demonstration: add two contacts, list them, delete one
    Demo,

    /// Load contacts from a TOML file, then search and delete by name
    Run {
        /// Seed file with [[contact]] entries
        file: PathBuf,

        /// Name to search for (repeatable)
        #[arg(short, long = "search", value_name = "NAME")]
        search: Vec<String>,

        /// Name to delete (repeatable)
        #[arg(short, long = "delete", value_name = "NAME")]
        delete: Vec<String>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = match &cli.config {
        Some(path) => GlobalConfig::load_from(path)?,
        None => GlobalConfig::load(),
    };
    let notifier = config.notifier(cli.notifier);
    log::debug!("notifications via {notifier}");

    match cli.command {
        None | Some(Command::Demo) => commands::demo(notifier, output_mode),
        Some(Command::Run {
            file,
            search,
            delete,
        }) => commands::session(&file, &search, &delete, notifier, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": VERSION
                    })
                );
            } else {
                println!("contactbook v{VERSION}");
            }
            Ok(())
        },
    }
}

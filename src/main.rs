use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use addressbook::cli::Session;
use addressbook::config::{AddressBookPaths, Settings};
use addressbook::storage::BookStore;

#[derive(Parser)]
#[command(
    name = "addressbook",
    version,
    about = "Interactive command-line address book",
    long_about = "An assistant bot that keeps your contacts, their phone numbers \
                  and birthdays, and tells you whose birthday is coming up."
)]
struct Cli {
    /// Address book file (defaults to book.json in the data directory)
    #[arg(short, long, env = "ADDRESSBOOK_FILE")]
    file: Option<PathBuf>,

    /// Days ahead covered by the `birthdays` command
    #[arg(long)]
    days: Option<u32>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file if it is missing
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so the conversation on stdout stays clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = AddressBookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let book_file = settings.resolve_book_file(&paths, cli.file);
    let upcoming_days = cli.days.unwrap_or(settings.upcoming_days);

    if let Some(Commands::Config { init }) = cli.command {
        if init {
            if paths.settings_file().exists() {
                println!("Settings already exist at {}", paths.settings_file().display());
            } else {
                settings.save(&paths)?;
                info!(path = %paths.settings_file().display(), "settings written");
                println!("Wrote settings to {}", paths.settings_file().display());
            }
        }
        println!("Data directory:  {}", paths.base_dir().display());
        println!("Settings file:   {}", paths.settings_file().display());
        println!("Address book:    {}", book_file.display());
        println!("Birthday window: {} days", upcoming_days);
        return Ok(());
    }

    let store = BookStore::new(book_file);
    let book = store.load()?;
    info!(contacts = book.len(), "starting session");

    let mut session = Session::new(book, store)
        .with_upcoming_days(upcoming_days)
        .with_prompt(settings.prompt);
    session.run(io::stdin().lock(), io::stdout().lock())?;

    Ok(())
}

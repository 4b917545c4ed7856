use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

use tally::cli::{
    handle_accs, handle_add, handle_balance, handle_cats, handle_config, handle_edit,
    handle_last, handle_transfer, handle_undo, handle_where, AddArgs, BalanceCommands,
    ConfigCommands, EditArgs, LastArgs, TransferArgs, UndoArgs,
};
use tally::config::{Settings, TallyPaths};
use tally::storage::Database;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Command-line companion for the Satchel expense tracker",
    long_about = "tally adds expenses and income to your Satchel database without \
                  opening the full application. Category and account names may be \
                  given as partial, case-insensitive fragments as long as they match \
                  exactly one entry."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an expense or income entry
    Add(AddArgs),

    /// Transfer money between accounts
    Transfer(TransferArgs),

    /// Show recent entries
    Last(LastArgs),

    /// Edit a recent entry
    Edit(EditArgs),

    /// Delete the most recent entry
    Undo(UndoArgs),

    /// Show and manage account balances
    Balance {
        #[command(subcommand)]
        command: Option<BalanceCommands>,
    },

    /// Manage tally configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// List available categories
    Cats {
        /// Show a flat list instead of a tree
        #[arg(long)]
        flat: bool,
    },

    /// List available accounts
    Accs,

    /// Show where the database and config file are located
    Where,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let paths = TallyPaths::new()?;

    match cli.command {
        Commands::Add(args) => {
            let settings = Settings::load_or_create(&paths)?;
            let db = Database::open(&paths)?;
            handle_add(&db, &settings, args)?;
        }
        Commands::Transfer(args) => {
            let db = Database::open(&paths)?;
            handle_transfer(&db, args)?;
        }
        Commands::Last(args) => {
            let settings = Settings::load_or_create(&paths)?;
            let db = Database::open(&paths)?;
            handle_last(&db, &settings, args)?;
        }
        Commands::Edit(args) => {
            let settings = Settings::load_or_create(&paths)?;
            let db = Database::open(&paths)?;
            handle_edit(&db, &settings, args)?;
        }
        Commands::Undo(args) => {
            let settings = Settings::load_or_create(&paths)?;
            let db = Database::open(&paths)?;
            handle_undo(&db, &settings, args)?;
        }
        Commands::Balance { command } => {
            let db = Database::open(&paths)?;
            handle_balance(&db, command)?;
        }
        Commands::Config { command } => {
            handle_config(&paths, command)?;
        }
        Commands::Cats { flat } => {
            let db = Database::open(&paths)?;
            handle_cats(&db, flat)?;
        }
        Commands::Accs => {
            let db = Database::open(&paths)?;
            handle_accs(&db)?;
        }
        Commands::Where => {
            handle_where(&paths)?;
        }
    }

    Ok(())
}

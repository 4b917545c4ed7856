//! Balance CLI commands

use clap::Subcommand;

use crate::cli::parse_amount;
use crate::display::format_balance_sheet;
use crate::error::TallyResult;
use crate::services::BalanceService;
use crate::storage::Database;

/// Balance subcommands; `tally balance` with no subcommand shows balances
#[derive(Subcommand)]
pub enum BalanceCommands {
    /// Show balances for every account, plus the grand total
    Show,
    /// Set an account's balance to an exact value
    ///
    /// The starting balance is rewritten so the computed balance becomes the
    /// requested value, regardless of record history.
    Set {
        /// Account name (partial match OK)
        account: String,
        /// Target balance
        amount: String,
    },
    /// Add a signed delta to an account's balance
    Adjust {
        /// Account name (partial match OK)
        account: String,
        /// Signed delta; write negative values after '--' (e.g. `-- -50`)
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
}

/// Handle `tally balance`
pub fn handle_balance(db: &Database, command: Option<BalanceCommands>) -> TallyResult<()> {
    let service = BalanceService::new(db);

    match command.unwrap_or(BalanceCommands::Show) {
        BalanceCommands::Show => {
            println!("{}", format_balance_sheet(&service.sheet()?));
        }
        BalanceCommands::Set { account, amount } => {
            let target = parse_amount(&amount)?;
            let change = service.set(&account, target)?;

            println!("{} balance set to {}", change.account_name, change.balance);
            println!(
                "(starting balance adjusted: {} -> {})",
                change.old_starting, change.new_starting
            );
        }
        BalanceCommands::Adjust { account, amount } => {
            let delta = parse_amount(&amount)?;
            let change = service.adjust(&account, delta)?;

            println!(
                "{} adjusted by {}",
                change.account_name,
                delta.format_signed()
            );
            println!("New balance: {}", change.balance);
        }
    }

    Ok(())
}

//! Transfer CLI command

use clap::Args;

use crate::cli::{parse_amount, parse_date};
use crate::display::format_record_line;
use crate::error::TallyResult;
use crate::services::{TransferInput, TransferService};
use crate::storage::Database;

/// Arguments for `tally transfer`
#[derive(Args)]
pub struct TransferArgs {
    /// Amount to transfer, must be positive
    pub amount: String,
    /// Description of the transfer
    pub label: String,
    /// Source account name (partial match OK)
    #[arg(short = 'f', long = "from")]
    pub from: String,
    /// Destination account name (partial match OK)
    #[arg(short = 't', long = "to")]
    pub to: String,
    /// Date: YYYY-MM-DD, 'today', 'yesterday', or '<N>d'
    #[arg(short = 'd', long)]
    pub date: Option<String>,
}

/// Handle `tally transfer`
pub fn handle_transfer(db: &Database, args: TransferArgs) -> TallyResult<()> {
    let amount = parse_amount(&args.amount)?;
    let date = parse_date(args.date.as_deref())?;

    let service = TransferService::new(db);
    let result = service.create(TransferInput {
        amount,
        label: args.label,
        from: args.from,
        to: args.to,
        date,
    })?;

    println!("{}", format_record_line(&result.outflow));

    Ok(())
}

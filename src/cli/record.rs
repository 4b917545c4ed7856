//! Record CLI commands: add, last, edit, undo

use clap::Args;

use crate::cli::{confirm, parse_amount, parse_date};
use crate::config::Settings;
use crate::display::{format_record_line, format_record_table};
use crate::error::{TallyError, TallyResult};
use crate::services::{AddRecordInput, BalanceService, EditRecordInput, RecordService};
use crate::storage::Database;

/// Arguments for `tally add`
#[derive(Args)]
pub struct AddArgs {
    /// Amount, must be positive (e.g. 12.50)
    pub amount: String,
    /// Description of the entry
    pub label: String,
    /// Category name (partial match OK); uses the configured default if omitted
    #[arg(short = 'c', long = "category", visible_alias = "cat")]
    pub category: Option<String>,
    /// Account name (partial match OK); uses the configured default if omitted
    #[arg(short = 'a', long = "account", visible_alias = "acc")]
    pub account: Option<String>,
    /// Record as income instead of expense
    #[arg(short = 'i', long)]
    pub income: bool,
    /// Date: YYYY-MM-DD, 'today', 'yesterday', or '<N>d' (N days ago)
    #[arg(short = 'd', long)]
    pub date: Option<String>,
}

/// Arguments for `tally last`
#[derive(Args)]
pub struct LastArgs {
    /// Number of records to show
    #[arg(short = 'n', long = "num", default_value_t = 10, conflicts_with = "all")]
    pub num: usize,
    /// Show all records
    #[arg(short = 'a', long)]
    pub all: bool,
}

/// Arguments for `tally edit`
#[derive(Args)]
pub struct EditArgs {
    /// Which entry to edit (1 = most recent, 2 = second most recent, ...)
    #[arg(short = 'n', long = "num", default_value_t = 1)]
    pub num: usize,
    /// New amount
    #[arg(long)]
    pub amount: Option<String>,
    /// New label
    #[arg(long)]
    pub label: Option<String>,
    /// New category name (partial match OK)
    #[arg(short = 'c', long = "category", visible_alias = "cat")]
    pub category: Option<String>,
    /// New account name (partial match OK)
    #[arg(short = 'a', long = "account", visible_alias = "acc")]
    pub account: Option<String>,
    /// New date: YYYY-MM-DD, 'today', 'yesterday', or '<N>d'
    #[arg(short = 'd', long)]
    pub date: Option<String>,
    /// Change the entry to income
    #[arg(long, conflicts_with = "expense")]
    pub income: bool,
    /// Change the entry to an expense
    #[arg(long)]
    pub expense: bool,
}

/// Arguments for `tally undo`
#[derive(Args)]
pub struct UndoArgs {
    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Handle `tally add`
pub fn handle_add(db: &Database, settings: &Settings, args: AddArgs) -> TallyResult<()> {
    let amount = parse_amount(&args.amount)?;
    let date = parse_date(args.date.as_deref())?;

    let service = RecordService::new(db, settings);
    let detail = service.add(AddRecordInput {
        amount,
        label: args.label,
        category: args.category,
        account: args.account,
        income: args.income,
        date,
    })?;

    println!("{}", format_record_line(&detail));

    if settings.show_balance_after_add {
        let account = db
            .accounts()
            .get(detail.record.account_id)?
            .ok_or_else(|| TallyError::account_not_found(detail.account_name.clone()))?;
        let balance = BalanceService::new(db).balance_of(&account)?;
        println!("{} balance: {}", account.name, balance);
    }

    Ok(())
}

/// Handle `tally last`
pub fn handle_last(db: &Database, settings: &Settings, args: LastArgs) -> TallyResult<()> {
    let limit = if args.all { None } else { Some(args.num) };

    let service = RecordService::new(db, settings);
    let records = service.last(limit)?;

    println!("{}", format_record_table(&records));
    if !records.is_empty() {
        println!("\nShowing {} records", records.len());
    }

    Ok(())
}

/// Handle `tally edit`
pub fn handle_edit(db: &Database, settings: &Settings, args: EditArgs) -> TallyResult<()> {
    let amount = match args.amount.as_deref() {
        Some(s) => Some(parse_amount(s)?),
        None => None,
    };
    let date = match args.date.as_deref() {
        Some(s) => Some(parse_date(Some(s))?),
        None => None,
    };
    let income = if args.income {
        Some(true)
    } else if args.expense {
        Some(false)
    } else {
        None
    };

    let service = RecordService::new(db, settings);
    let (before, after) = service.edit(EditRecordInput {
        position: args.num,
        amount,
        label: args.label,
        category: args.category,
        account: args.account,
        date,
        income,
    })?;

    println!("Was: {}", format_record_line(&before));
    println!("Now: {}", format_record_line(&after));

    Ok(())
}

/// Handle `tally undo`
pub fn handle_undo(db: &Database, settings: &Settings, args: UndoArgs) -> TallyResult<()> {
    let service = RecordService::new(db, settings);
    let latest = service.latest()?;

    println!("Last entry: {}", format_record_line(&latest));
    if latest.record.is_transfer() {
        println!("(both halves of the transfer will be deleted)");
    }

    if !args.yes && settings.confirm_undo {
        if !confirm("Delete this entry?")? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    service.delete(&latest)?;
    println!("Deleted.");

    Ok(())
}

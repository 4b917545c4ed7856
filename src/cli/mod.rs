//! CLI command handlers
//!
//! This module bridges clap argument parsing with the service layer: one
//! submodule per command group, plus the input parsing shared between them.

use std::io::{self, Write};

use chrono::{Duration, Local, NaiveDate};

use crate::error::{TallyError, TallyResult};
use crate::models::Money;

pub mod balance;
pub mod config;
pub mod listing;
pub mod record;
pub mod transfer;

pub use balance::{handle_balance, BalanceCommands};
pub use config::{handle_config, ConfigCommands};
pub use listing::{handle_accs, handle_cats, handle_where};
pub use record::{
    handle_add, handle_edit, handle_last, handle_undo, AddArgs, EditArgs, LastArgs, UndoArgs,
};
pub use transfer::{handle_transfer, TransferArgs};

/// Parse a user-supplied date
///
/// Accepts `YYYY-MM-DD`, `today`, `yesterday`, or `<N>d` meaning N days ago.
/// `None` resolves to today.
pub fn parse_date(input: Option<&str>) -> TallyResult<NaiveDate> {
    let today = Local::now().date_naive();

    let Some(s) = input else {
        return Ok(today);
    };

    match s {
        "today" => Ok(today),
        "yesterday" => Ok(today - Duration::days(1)),
        _ => {
            if let Some(days) = s.strip_suffix('d').and_then(|n| n.parse::<u32>().ok()) {
                return Ok(today - Duration::days(i64::from(days)));
            }
            NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
                TallyError::Validation(format!(
                    "invalid date '{}'; use YYYY-MM-DD, 'today', 'yesterday', or '<N>d'",
                    s
                ))
            })
        }
    }
}

/// Parse a user-supplied amount
pub fn parse_amount(input: &str) -> TallyResult<Money> {
    Money::parse(input).map_err(|e| TallyError::Validation(e.to_string()))
}

/// Ask a yes/no question on stdin; anything but y/yes declines
pub fn confirm(prompt: &str) -> TallyResult<bool> {
    print!("{} [y/N]: ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(matches!(
        input.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

//! Account model
//!
//! Accounts are owned by the Satchel application; tally only reads them and
//! rewrites their starting balance for the `balance set`/`balance adjust`
//! commands.

use super::ids::AccountId;
use super::money::Money;

/// A financial account as stored in the shared database
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Row id in the shared database
    pub id: AccountId,

    /// Account name (e.g., "Chase Checking")
    pub name: String,

    /// Free-form description, if Satchel has one
    pub description: Option<String>,

    /// Baseline value before summing the account's records
    pub starting_balance: Money,
}

//! Account display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Account;

#[derive(Tabled)]
struct AccountRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Starting Balance")]
    starting_balance: String,
}

/// Format the account list as a table
pub fn format_account_table(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return "No accounts found. Create one in Satchel first.".to_string();
    }

    let rows: Vec<AccountRow> = accounts
        .iter()
        .map(|account| AccountRow {
            name: account.name.clone(),
            description: account
                .description
                .clone()
                .unwrap_or_else(|| "-".to_string()),
            starting_balance: account.starting_balance.to_string(),
        })
        .collect();

    Table::new(rows).with(Style::psql()).to_string()
}

//! Balance display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::services::BalanceSheet;

#[derive(Tabled)]
struct BalanceRow {
    #[tabled(rename = "Account")]
    account: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Starting")]
    starting: String,
}

/// Format all account balances plus the grand total
pub fn format_balance_sheet(sheet: &BalanceSheet) -> String {
    if sheet.balances.is_empty() {
        return "No accounts found. Create one in Satchel first.".to_string();
    }

    let mut rows: Vec<BalanceRow> = sheet
        .balances
        .iter()
        .map(|entry| BalanceRow {
            account: entry.account.name.clone(),
            balance: entry.balance.to_string(),
            starting: entry.account.starting_balance.to_string(),
        })
        .collect();

    rows.push(BalanceRow {
        account: "Total".into(),
        balance: sheet.total.to_string(),
        starting: String::new(),
    });

    Table::new(rows).with(Style::psql()).to_string()
}

#[cfg(test)]
mod tests {
    use crate::models::{Account, AccountId, Money};
    use crate::services::AccountBalance;

    use super::*;

    #[test]
    fn test_sheet_includes_total_row() {
        let sheet = BalanceSheet {
            balances: vec![AccountBalance {
                account: Account {
                    id: AccountId::new(1),
                    name: "Checking".into(),
                    description: None,
                    starting_balance: Money::from_cents(50_000),
                },
                balance: Money::from_cents(42_500),
            }],
            total: Money::from_cents(42_500),
        };

        let table = format_balance_sheet(&sheet);
        assert!(table.contains("Checking"));
        assert!(table.contains("425.00"));
        assert!(table.contains("Total"));
    }
}

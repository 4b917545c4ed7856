//! Balance service
//!
//! A balance is an account's starting balance plus the sum of its signed
//! record amounts. Transfers need no special handling: the outflow half
//! subtracts from one account and the inflow half adds to the other.

use crate::error::TallyResult;
use crate::models::{Account, Money};
use crate::services::resolve::resolve_account;
use crate::storage::Database;

/// Service for account balances
pub struct BalanceService<'a> {
    db: &'a Database,
}

/// One account with its computed balance
#[derive(Debug, Clone)]
pub struct AccountBalance {
    pub account: Account,
    pub balance: Money,
}

/// All account balances plus the grand total
#[derive(Debug, Clone)]
pub struct BalanceSheet {
    pub balances: Vec<AccountBalance>,
    pub total: Money,
}

/// The outcome of `balance set` / `balance adjust`
#[derive(Debug, Clone)]
pub struct BalanceChange {
    pub account_name: String,
    pub old_starting: Money,
    pub new_starting: Money,
    /// The computed balance after the change
    pub balance: Money,
}

impl<'a> BalanceService<'a> {
    /// Create a new balance service
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Compute one account's current balance
    pub fn balance_of(&self, account: &Account) -> TallyResult<Money> {
        let sum = self.db.records().sum_for_account(account.id)?;
        Ok(account.starting_balance + sum)
    }

    /// Balances for every live account, plus the grand total
    pub fn sheet(&self) -> TallyResult<BalanceSheet> {
        let accounts = self.db.accounts().all()?;
        let mut balances = Vec::with_capacity(accounts.len());
        let mut total = Money::zero();

        for account in accounts {
            let balance = self.balance_of(&account)?;
            total += balance;
            balances.push(AccountBalance { account, balance });
        }

        Ok(BalanceSheet { balances, total })
    }

    /// Rewrite the starting balance so the computed balance becomes `target`
    pub fn set(&self, account_fragment: &str, target: Money) -> TallyResult<BalanceChange> {
        let accounts = self.db.accounts().all()?;
        let account = resolve_account(&accounts, account_fragment)?;

        let sum = self.db.records().sum_for_account(account.id)?;
        let new_starting = target - sum;
        self.db
            .accounts()
            .set_starting_balance(account.id, new_starting)?;

        Ok(BalanceChange {
            account_name: account.name.clone(),
            old_starting: account.starting_balance,
            new_starting,
            balance: target,
        })
    }

    /// Add a signed delta to the starting balance
    pub fn adjust(&self, account_fragment: &str, delta: Money) -> TallyResult<BalanceChange> {
        let accounts = self.db.accounts().all()?;
        let account = resolve_account(&accounts, account_fragment)?;

        let new_starting = account.starting_balance + delta;
        self.db
            .accounts()
            .set_starting_balance(account.id, new_starting)?;

        let sum = self.db.records().sum_for_account(account.id)?;
        Ok(BalanceChange {
            account_name: account.name.clone(),
            old_starting: account.starting_balance,
            new_starting,
            balance: new_starting + sum,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::models::{AccountId, CategoryId};
    use crate::services::transfer::{TransferInput, TransferService};
    use crate::storage::testing::seeded_db;
    use crate::storage::NewRecord;

    use super::*;

    fn spend(db: &Database, account: i64, cents: i64) {
        db.records()
            .insert(&NewRecord {
                label: "entry".into(),
                amount: Money::from_cents(cents),
                date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
                account_id: AccountId::new(account),
                category_id: Some(CategoryId::new(2)),
            })
            .unwrap();
    }

    #[test]
    fn test_sheet_sums_signed_amounts() {
        let db = seeded_db();
        spend(&db, 1, -10_000); // Checking starts at 500.00
        spend(&db, 1, 25_000);
        spend(&db, 2, -5_000); // Savings starts at 2000.00

        let sheet = BalanceService::new(&db).sheet().unwrap();

        let checking = &sheet.balances[0];
        assert_eq!(checking.account.name, "Checking");
        assert_eq!(checking.balance, Money::from_cents(65_000));

        let savings = &sheet.balances[1];
        assert_eq!(savings.balance, Money::from_cents(195_000));

        // Credit Card has no records and a zero starting balance
        assert_eq!(sheet.balances[2].balance, Money::zero());
        assert_eq!(sheet.total, Money::from_cents(260_000));
    }

    #[test]
    fn test_transfers_move_balance_between_accounts() {
        let db = seeded_db();
        TransferService::new(&db)
            .create(TransferInput {
                amount: Money::from_cents(50_000),
                label: "Move".into(),
                from: "check".into(),
                to: "sav".into(),
                date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            })
            .unwrap();

        let sheet = BalanceService::new(&db).sheet().unwrap();
        assert_eq!(sheet.balances[0].balance, Money::zero()); // 500 - 500
        assert_eq!(sheet.balances[1].balance, Money::from_cents(250_000));
        // A transfer never changes the grand total
        assert_eq!(sheet.total, Money::from_cents(250_000));
    }

    #[test]
    fn test_set_makes_balance_exactly_target() {
        let db = seeded_db();
        spend(&db, 1, -12_345);
        spend(&db, 1, 678);

        let service = BalanceService::new(&db);
        let change = service.set("check", Money::from_cents(99_900)).unwrap();
        assert_eq!(change.balance, Money::from_cents(99_900));

        let sheet = service.sheet().unwrap();
        assert_eq!(sheet.balances[0].balance, Money::from_cents(99_900));
    }

    #[test]
    fn test_adjust_shifts_balance_by_delta() {
        let db = seeded_db();
        spend(&db, 1, -10_000);

        let service = BalanceService::new(&db);
        let change = service.adjust("check", Money::from_cents(-2_500)).unwrap();

        assert_eq!(change.old_starting, Money::from_cents(50_000));
        assert_eq!(change.new_starting, Money::from_cents(47_500));
        assert_eq!(change.balance, Money::from_cents(37_500));
    }

    #[test]
    fn test_set_unknown_account_is_not_found() {
        let db = seeded_db();
        let err = BalanceService::new(&db)
            .set("zzz", Money::zero())
            .unwrap_err();
        assert!(err.is_not_found());
    }
}

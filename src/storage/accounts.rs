//! Account storage operations
//!
//! Accounts are created and deleted by Satchel; tally lists them and
//! rewrites starting balances. Soft-deleted rows are invisible everywhere.

use chrono::Utc;
use log::debug;
use rusqlite::{Connection, OptionalExtension, Row};

use crate::error::TallyResult;
use crate::models::{Account, AccountId, Money};

/// Typed queries against the shared `account` table
pub struct AccountStore<'a> {
    conn: &'a Connection,
}

impl<'a> AccountStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn map_row(row: &Row) -> rusqlite::Result<Account> {
        Ok(Account {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            starting_balance: row.get(3)?,
        })
    }

    /// All live accounts, in the order Satchel created them
    pub fn all(&self) -> TallyResult<Vec<Account>> {
        self.conn
            .prepare(
                "SELECT id, name, description, starting_balance
                 FROM account
                 WHERE deleted_at IS NULL
                 ORDER BY id",
            )?
            .query_map([], Self::map_row)?
            .map(|account| account.map_err(Into::into))
            .collect()
    }

    /// Look up a single live account by id
    pub fn get(&self, id: AccountId) -> TallyResult<Option<Account>> {
        self.conn
            .prepare(
                "SELECT id, name, description, starting_balance
                 FROM account
                 WHERE id = :id AND deleted_at IS NULL",
            )?
            .query_row(&[(":id", &id)], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    /// Overwrite an account's starting balance
    pub fn set_starting_balance(&self, id: AccountId, balance: Money) -> TallyResult<()> {
        debug!("setting starting balance of account {} to {}", id, balance);
        self.conn.execute(
            "UPDATE account SET starting_balance = ?1, updated_at = ?2 WHERE id = ?3",
            (balance, Utc::now(), id),
        )?;
        Ok(())
    }
}

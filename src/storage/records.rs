//! Record storage operations
//!
//! Everything that touches the shared `record` table: inserts, the
//! nth-most-recent lookups behind `last`/`edit`/`undo`, partial updates,
//! and the transfer-pair insert. "Most recent" always means creation order,
//! i.e. descending row id; the record date is a display attribute.

use chrono::{NaiveDate, Utc};
use log::debug;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, OptionalExtension, Row};

use crate::error::TallyResult;
use crate::models::{AccountId, CategoryId, Money, Record, RecordDetail, RecordId};

const SELECT_DETAIL: &str = "
    SELECT r.id, r.label, r.amount, r.date, r.account_id, r.category_id,
           r.transfer_peer_id, r.created_at, r.updated_at,
           a.name, c.name, pa.name
    FROM record r
    JOIN account a ON a.id = r.account_id
    LEFT JOIN category c ON c.id = r.category_id
    LEFT JOIN record p ON p.id = r.transfer_peer_id
    LEFT JOIN account pa ON pa.id = p.account_id";

/// Fields for a record about to be inserted
#[derive(Debug, Clone)]
pub struct NewRecord {
    pub label: String,
    /// Signed amount; the caller has already applied the direction
    pub amount: Money,
    pub date: NaiveDate,
    pub account_id: AccountId,
    pub category_id: Option<CategoryId>,
}

/// A partial update; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct RecordChanges {
    pub label: Option<String>,
    pub amount: Option<Money>,
    pub date: Option<NaiveDate>,
    pub account_id: Option<AccountId>,
    pub category_id: Option<CategoryId>,
}

impl RecordChanges {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.amount.is_none()
            && self.date.is_none()
            && self.account_id.is_none()
            && self.category_id.is_none()
    }
}

/// Typed queries against the shared `record` table
pub struct RecordStore<'a> {
    conn: &'a Connection,
}

impl<'a> RecordStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn map_record(row: &Row) -> rusqlite::Result<Record> {
        Ok(Record {
            id: row.get(0)?,
            label: row.get(1)?,
            amount: row.get(2)?,
            date: row.get(3)?,
            account_id: row.get(4)?,
            category_id: row.get(5)?,
            transfer_peer_id: row.get(6)?,
            created_at: row.get(7)?,
            updated_at: row.get(8)?,
        })
    }

    fn map_detail(row: &Row) -> rusqlite::Result<RecordDetail> {
        Ok(RecordDetail {
            record: Self::map_record(row)?,
            account_name: row.get(9)?,
            category_name: row.get(10)?,
            peer_account_name: row.get(11)?,
        })
    }

    fn insert_row(&self, new: &NewRecord, peer: Option<RecordId>) -> TallyResult<RecordId> {
        let now = Utc::now();
        self.conn.execute(
            "INSERT INTO record (label, amount, date, account_id, category_id,
                                 transfer_peer_id, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            (
                &new.label,
                new.amount,
                new.date,
                new.account_id,
                new.category_id,
                peer,
                now,
                now,
            ),
        )?;
        Ok(RecordId::new(self.conn.last_insert_rowid()))
    }

    /// Insert a single record
    pub fn insert(&self, new: &NewRecord) -> TallyResult<RecordId> {
        let id = self.insert_row(new, None)?;
        debug!("inserted record {} ({})", id, new.label);
        Ok(id)
    }

    /// Insert both halves of a transfer and cross-link them, atomically
    ///
    /// If either insert fails, neither row is kept.
    pub fn insert_transfer_pair(
        &self,
        outflow: &NewRecord,
        inflow: &NewRecord,
    ) -> TallyResult<(RecordId, RecordId)> {
        let tx = self.conn.unchecked_transaction()?;

        let outflow_id = self.insert_row(outflow, None)?;
        let inflow_id = self.insert_row(inflow, Some(outflow_id))?;
        tx.execute(
            "UPDATE record SET transfer_peer_id = ?1 WHERE id = ?2",
            (inflow_id, outflow_id),
        )?;

        tx.commit()?;
        debug!("inserted transfer pair {} / {}", outflow_id, inflow_id);
        Ok((outflow_id, inflow_id))
    }

    /// The most recent records by creation order, newest first
    ///
    /// `limit: None` returns everything.
    pub fn last(&self, limit: Option<usize>) -> TallyResult<Vec<RecordDetail>> {
        let mut sql = format!("{} ORDER BY r.id DESC", SELECT_DETAIL);
        if let Some(limit) = limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        self.conn
            .prepare(&sql)?
            .query_map([], Self::map_detail)?
            .map(|detail| detail.map_err(Into::into))
            .collect()
    }

    /// The record at `offset` from the most recent (0 = most recent)
    pub fn nth_last(&self, offset: usize) -> TallyResult<Option<RecordDetail>> {
        let sql = format!("{} ORDER BY r.id DESC LIMIT 1 OFFSET ?1", SELECT_DETAIL);
        self.conn
            .prepare(&sql)?
            .query_row([offset as i64], Self::map_detail)
            .optional()
            .map_err(Into::into)
    }

    /// Look up one record with its joined names
    pub fn get_detail(&self, id: RecordId) -> TallyResult<Option<RecordDetail>> {
        let sql = format!("{} WHERE r.id = ?1", SELECT_DETAIL);
        self.conn
            .prepare(&sql)?
            .query_row([id], Self::map_detail)
            .optional()
            .map_err(Into::into)
    }

    /// Total number of records
    pub fn count(&self) -> TallyResult<usize> {
        self.conn
            .query_row("SELECT COUNT(id) FROM record", [], |row| row.get(0))
            .map_err(Into::into)
    }

    /// Sum of the signed amounts of all records on an account
    pub fn sum_for_account(&self, account_id: AccountId) -> TallyResult<Money> {
        self.conn
            .query_row(
                "SELECT COALESCE(SUM(amount), 0) FROM record WHERE account_id = ?1",
                [account_id],
                |row| row.get(0),
            )
            .map_err(Into::into)
    }

    /// Apply a partial update to one record
    pub fn update(&self, id: RecordId, changes: &RecordChanges) -> TallyResult<()> {
        let mut set_parts = Vec::new();
        let mut params: Vec<Value> = Vec::new();

        if let Some(label) = &changes.label {
            params.push(Value::Text(label.clone()));
            set_parts.push(format!("label = ?{}", params.len()));
        }
        if let Some(amount) = changes.amount {
            params.push(Value::Integer(amount.cents()));
            set_parts.push(format!("amount = ?{}", params.len()));
        }
        if let Some(date) = changes.date {
            params.push(Value::Text(date.to_string()));
            set_parts.push(format!("date = ?{}", params.len()));
        }
        if let Some(account_id) = changes.account_id {
            params.push(Value::Integer(account_id.as_i64()));
            set_parts.push(format!("account_id = ?{}", params.len()));
        }
        if let Some(category_id) = changes.category_id {
            params.push(Value::Integer(category_id.as_i64()));
            set_parts.push(format!("category_id = ?{}", params.len()));
        }

        params.push(Value::Text(Utc::now().to_rfc3339()));
        set_parts.push(format!("updated_at = ?{}", params.len()));

        params.push(Value::Integer(id.as_i64()));
        let sql = format!(
            "UPDATE record SET {} WHERE id = ?{}",
            set_parts.join(", "),
            params.len()
        );

        debug!("updating record {}: {}", id, set_parts.join(", "));
        self.conn.execute(&sql, params_from_iter(params.iter()))?;
        Ok(())
    }

    /// Delete a record and, for transfer halves, its peer, atomically
    pub fn delete(&self, id: RecordId, peer: Option<RecordId>) -> TallyResult<()> {
        let tx = self.conn.unchecked_transaction()?;

        match peer {
            Some(peer_id) => {
                // Break the cross-links before deleting so the pair can go
                // even when Satchel runs with foreign keys enforced.
                tx.execute(
                    "UPDATE record SET transfer_peer_id = NULL WHERE id IN (?1, ?2)",
                    (id, peer_id),
                )?;
                tx.execute("DELETE FROM record WHERE id IN (?1, ?2)", (id, peer_id))?;
            }
            None => {
                tx.execute("DELETE FROM record WHERE id = ?1", (id,))?;
            }
        }

        tx.commit()?;
        debug!("deleted record {} (peer: {:?})", id, peer);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::testing::seeded_db;

    use super::*;

    fn coffee(account: i64, cents: i64) -> NewRecord {
        NewRecord {
            label: "Coffee".into(),
            amount: Money::from_cents(cents),
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            account_id: AccountId::new(account),
            category_id: Some(CategoryId::new(3)),
        }
    }

    #[test]
    fn test_insert_then_latest_round_trip() {
        let db = seeded_db();
        let store = db.records();

        let id = store.insert(&coffee(1, -450)).unwrap();

        let detail = store.nth_last(0).unwrap().unwrap();
        assert_eq!(detail.record.id, id);
        assert_eq!(detail.record.label, "Coffee");
        assert_eq!(detail.record.amount, Money::from_cents(-450));
        assert_eq!(detail.account_name, "Checking");
        assert_eq!(detail.category_name.as_deref(), Some("Dining Out"));
        assert_eq!(detail.peer_account_name, None);
    }

    #[test]
    fn test_last_orders_by_creation_not_date() {
        let db = seeded_db();
        let store = db.records();

        let mut older_date = coffee(1, -100);
        older_date.label = "first".into();
        older_date.date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        store.insert(&older_date).unwrap();

        let mut newer = coffee(1, -200);
        newer.label = "second".into();
        newer.date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        store.insert(&newer).unwrap();

        let details = store.last(None).unwrap();
        let labels: Vec<_> = details.iter().map(|d| d.record.label.as_str()).collect();
        assert_eq!(labels, ["second", "first"]);
    }

    #[test]
    fn test_last_limit() {
        let db = seeded_db();
        let store = db.records();
        for _ in 0..5 {
            store.insert(&coffee(1, -100)).unwrap();
        }

        assert_eq!(store.last(Some(3)).unwrap().len(), 3);
        assert_eq!(store.last(None).unwrap().len(), 5);
    }

    #[test]
    fn test_nth_last_out_of_range() {
        let db = seeded_db();
        let store = db.records();
        store.insert(&coffee(1, -100)).unwrap();

        assert!(store.nth_last(0).unwrap().is_some());
        assert!(store.nth_last(1).unwrap().is_none());
    }

    #[test]
    fn test_transfer_pair_is_linked_and_zero_sum() {
        let db = seeded_db();
        let store = db.records();

        let outflow = NewRecord {
            label: "Move to savings".into(),
            amount: Money::from_cents(-5000),
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            account_id: AccountId::new(1),
            category_id: None,
        };
        let inflow = NewRecord {
            amount: Money::from_cents(5000),
            account_id: AccountId::new(2),
            ..outflow.clone()
        };

        let (out_id, in_id) = store.insert_transfer_pair(&outflow, &inflow).unwrap();

        let out = store.get_detail(out_id).unwrap().unwrap();
        let inn = store.get_detail(in_id).unwrap().unwrap();
        assert_eq!(out.record.transfer_peer_id, Some(in_id));
        assert_eq!(inn.record.transfer_peer_id, Some(out_id));
        assert_eq!(
            out.record.amount + inn.record.amount,
            Money::zero()
        );
        assert_eq!(out.peer_account_name.as_deref(), Some("Savings"));
        assert_eq!(inn.peer_account_name.as_deref(), Some("Checking"));
    }

    #[test]
    fn test_failed_inflow_insert_keeps_nothing() {
        let db = seeded_db();
        db.conn()
            .pragma_update(None, "foreign_keys", true)
            .unwrap();
        let store = db.records();

        let outflow = NewRecord {
            label: "Move".into(),
            amount: Money::from_cents(-5000),
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            account_id: AccountId::new(1),
            category_id: None,
        };
        let inflow = NewRecord {
            amount: Money::from_cents(5000),
            account_id: AccountId::new(999),
            ..outflow.clone()
        };

        assert!(store.insert_transfer_pair(&outflow, &inflow).is_err());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_update_changes_only_supplied_fields() {
        let db = seeded_db();
        let store = db.records();
        let id = store.insert(&coffee(1, -450)).unwrap();
        let before = store.get_detail(id).unwrap().unwrap().record;

        store
            .update(
                id,
                &RecordChanges {
                    amount: Some(Money::from_cents(-725)),
                    ..Default::default()
                },
            )
            .unwrap();

        let after = store.get_detail(id).unwrap().unwrap().record;
        assert_eq!(after.amount, Money::from_cents(-725));
        assert_eq!(after.label, before.label);
        assert_eq!(after.date, before.date);
        assert_eq!(after.account_id, before.account_id);
        assert_eq!(after.category_id, before.category_id);
    }

    #[test]
    fn test_delete_single() {
        let db = seeded_db();
        let store = db.records();
        let keep = store.insert(&coffee(1, -100)).unwrap();
        let gone = store.insert(&coffee(1, -200)).unwrap();

        store.delete(gone, None).unwrap();

        assert_eq!(store.count().unwrap(), 1);
        assert!(store.get_detail(keep).unwrap().is_some());
    }

    #[test]
    fn test_delete_removes_both_transfer_halves() {
        let db = seeded_db();
        let store = db.records();

        let outflow = NewRecord {
            label: "Move".into(),
            amount: Money::from_cents(-5000),
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            account_id: AccountId::new(1),
            category_id: None,
        };
        let inflow = NewRecord {
            amount: Money::from_cents(5000),
            account_id: AccountId::new(2),
            ..outflow.clone()
        };
        let (out_id, in_id) = store.insert_transfer_pair(&outflow, &inflow).unwrap();

        store.delete(in_id, Some(out_id)).unwrap();
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_sum_for_account() {
        let db = seeded_db();
        let store = db.records();
        store.insert(&coffee(1, -450)).unwrap();
        store.insert(&coffee(1, 10_000)).unwrap();
        store.insert(&coffee(2, -9999)).unwrap();

        assert_eq!(
            store.sum_for_account(AccountId::new(1)).unwrap(),
            Money::from_cents(9550)
        );
        assert_eq!(
            store.sum_for_account(AccountId::new(3)).unwrap(),
            Money::zero()
        );
    }
}

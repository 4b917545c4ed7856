//! Transfer service
//!
//! Transfers move value between two accounts as a linked pair of records:
//! an outflow (negative amount) on the source account and an inflow
//! (positive amount) on the destination, sharing label and date. The pair
//! persists atomically or not at all.

use chrono::NaiveDate;

use crate::error::{TallyError, TallyResult};
use crate::models::{Money, RecordDetail};
use crate::services::resolve::resolve_account;
use crate::storage::{Database, NewRecord};

/// Service for transfers between accounts
pub struct TransferService<'a> {
    db: &'a Database,
}

/// Input for creating a transfer
#[derive(Debug, Clone)]
pub struct TransferInput {
    /// Magnitude; must be positive
    pub amount: Money,
    pub label: String,
    /// Partial name of the source account
    pub from: String,
    /// Partial name of the destination account
    pub to: String,
    pub date: NaiveDate,
}

/// The two halves of a created transfer
#[derive(Debug, Clone)]
pub struct TransferResult {
    /// The outflow record (negative, on the source account)
    pub outflow: RecordDetail,
    /// The inflow record (positive, on the destination account)
    pub inflow: RecordDetail,
}

impl<'a> TransferService<'a> {
    /// Create a new transfer service
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Create a transfer between two accounts
    pub fn create(&self, input: TransferInput) -> TallyResult<TransferResult> {
        if !input.amount.is_positive() {
            return Err(TallyError::Validation("amount must be positive".into()));
        }

        let accounts = self.db.accounts().all()?;
        let from = resolve_account(&accounts, &input.from)?;
        let to = resolve_account(&accounts, &input.to)?;

        if from.id == to.id {
            return Err(TallyError::Validation(
                "source and destination accounts must be different".into(),
            ));
        }

        let outflow = NewRecord {
            label: input.label.clone(),
            amount: -input.amount,
            date: input.date,
            account_id: from.id,
            category_id: None,
        };
        let inflow = NewRecord {
            label: input.label,
            amount: input.amount,
            date: input.date,
            account_id: to.id,
            category_id: None,
        };

        let records = self.db.records();
        let (outflow_id, inflow_id) = records.insert_transfer_pair(&outflow, &inflow)?;

        let outflow = records.get_detail(outflow_id)?.ok_or_else(|| {
            TallyError::Persistence("transfer half disappeared right after insert".into())
        })?;
        let inflow = records.get_detail(inflow_id)?.ok_or_else(|| {
            TallyError::Persistence("transfer half disappeared right after insert".into())
        })?;

        Ok(TransferResult { outflow, inflow })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::storage::testing::seeded_db;

    use super::*;

    fn input(amount_cents: i64, from: &str, to: &str) -> TransferInput {
        TransferInput {
            amount: Money::from_cents(amount_cents),
            label: "Move".into(),
            from: from.into(),
            to: to.into(),
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        }
    }

    #[test]
    fn test_transfer_creates_zero_sum_pair() {
        let db = seeded_db();
        let service = TransferService::new(&db);

        let result = service.create(input(5000, "check", "sav")).unwrap();

        assert_eq!(result.outflow.record.amount, Money::from_cents(-5000));
        assert_eq!(result.inflow.record.amount, Money::from_cents(5000));
        assert_eq!(
            result.outflow.record.amount + result.inflow.record.amount,
            Money::zero()
        );
        assert_eq!(result.outflow.record.label, result.inflow.record.label);
        assert_eq!(result.outflow.record.date, result.inflow.record.date);
        assert_eq!(
            result.outflow.record.transfer_peer_id,
            Some(result.inflow.record.id)
        );
        assert_eq!(
            result.inflow.record.transfer_peer_id,
            Some(result.outflow.record.id)
        );
        assert_eq!(db.records().count().unwrap(), 2);
    }

    #[test]
    fn test_transfer_halves_have_no_category() {
        let db = seeded_db();
        let service = TransferService::new(&db);

        let result = service.create(input(5000, "check", "sav")).unwrap();
        assert_eq!(result.outflow.record.category_id, None);
        assert_eq!(result.inflow.record.category_id, None);
    }

    #[test]
    fn test_transfer_to_same_account_fails_with_no_rows_written() {
        let db = seeded_db();
        let service = TransferService::new(&db);

        let err = service.create(input(5000, "check", "check")).unwrap_err();
        assert!(matches!(err, TallyError::Validation(_)));
        assert_eq!(db.records().count().unwrap(), 0);
    }

    #[test]
    fn test_transfer_unknown_account_writes_nothing() {
        let db = seeded_db();
        let service = TransferService::new(&db);

        let err = service.create(input(5000, "check", "zzz")).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(db.records().count().unwrap(), 0);
    }

    #[test]
    fn test_transfer_rejects_non_positive_amount() {
        let db = seeded_db();
        let service = TransferService::new(&db);

        let err = service.create(input(0, "check", "sav")).unwrap_err();
        assert!(matches!(err, TallyError::Validation(_)));
    }
}

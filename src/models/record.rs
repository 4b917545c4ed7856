//! Record model
//!
//! A record is a single income or expense entry. The sign of the amount
//! carries direction: expenses are negative, income positive. Transfers are
//! pairs of records with opposite signs, cross-linked via `transfer_peer_id`.

use chrono::{DateTime, NaiveDate, Utc};

use super::ids::{AccountId, CategoryId, RecordId};
use super::money::Money;

/// A single row of the shared `record` table
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Row id; ascending ids define creation order
    pub id: RecordId,

    /// Description of the entry
    pub label: String,

    /// Signed amount (negative = expense/outflow, positive = income/inflow)
    pub amount: Money,

    /// Calendar date of the entry
    pub date: NaiveDate,

    /// Account the entry belongs to
    pub account_id: AccountId,

    /// Category; None for transfer halves
    pub category_id: Option<CategoryId>,

    /// The other half of a transfer pair, if this record is one
    pub transfer_peer_id: Option<RecordId>,

    /// When the row was created
    pub created_at: DateTime<Utc>,

    /// When the row was last modified
    pub updated_at: DateTime<Utc>,
}

impl Record {
    /// Check whether this record is half of a transfer pair
    pub fn is_transfer(&self) -> bool {
        self.transfer_peer_id.is_some()
    }

    /// Check whether this record is income (positive amount, not a transfer)
    pub fn is_income(&self) -> bool {
        !self.is_transfer() && self.amount.is_positive()
    }
}

/// A record joined with the names its foreign keys point at, for display
#[derive(Debug, Clone)]
pub struct RecordDetail {
    pub record: Record,

    /// Name of the record's account
    pub account_name: String,

    /// Name of the record's category, if any
    pub category_name: Option<String>,

    /// For transfer halves, the name of the peer record's account
    pub peer_account_name: Option<String>,
}

impl RecordDetail {
    /// Render the account column: `SRC -> DST` for transfer halves,
    /// the plain account name otherwise.
    pub fn account_display(&self) -> String {
        match &self.peer_account_name {
            Some(peer) if self.record.amount.is_negative() => {
                format!("{} -> {}", self.account_name, peer)
            }
            Some(peer) => format!("{} -> {}", peer, self.account_name),
            None => self.account_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(amount_cents: i64, peer: Option<RecordId>) -> Record {
        Record {
            id: RecordId::new(1),
            label: "Coffee".into(),
            amount: Money::from_cents(amount_cents),
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            account_id: AccountId::new(1),
            category_id: Some(CategoryId::new(2)),
            transfer_peer_id: peer,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_income_flag_follows_sign() {
        assert!(!sample(-450, None).is_income());
        assert!(sample(450, None).is_income());
    }

    #[test]
    fn test_transfer_halves_are_not_income() {
        assert!(!sample(450, Some(RecordId::new(9))).is_income());
    }

    #[test]
    fn test_account_display_direction() {
        let outflow = RecordDetail {
            record: sample(-500, Some(RecordId::new(9))),
            account_name: "Checking".into(),
            category_name: None,
            peer_account_name: Some("Savings".into()),
        };
        assert_eq!(outflow.account_display(), "Checking -> Savings");

        let inflow = RecordDetail {
            record: sample(500, Some(RecordId::new(9))),
            account_name: "Savings".into(),
            category_name: None,
            peer_account_name: Some("Checking".into()),
        };
        assert_eq!(inflow.account_display(), "Checking -> Savings");
    }
}

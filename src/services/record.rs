//! Record service
//!
//! Business logic for `add`, `last`, `edit`, and `undo`: resolves names,
//! applies the expense/income sign convention, and keeps transfer pairs
//! consistent. The CLI layer owns parsing and printing; everything here
//! deals in typed values.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::{TallyError, TallyResult};
use crate::models::{Money, RecordDetail};
use crate::services::resolve::{
    resolve_account, resolve_account_or_default, resolve_category, resolve_category_or_default,
};
use crate::storage::{Database, NewRecord, RecordChanges};

/// Service for record management
pub struct RecordService<'a> {
    db: &'a Database,
    settings: &'a Settings,
}

/// Input for creating a new record
#[derive(Debug, Clone)]
pub struct AddRecordInput {
    /// Magnitude; must be positive, sign comes from `income`
    pub amount: Money,
    pub label: String,
    /// Partial category name; falls back to the configured default
    pub category: Option<String>,
    /// Partial account name; falls back to the configured default
    pub account: Option<String>,
    /// Income stores a positive amount, expense (the default) a negative one
    pub income: bool,
    pub date: NaiveDate,
}

/// Input for editing the record at a given position from the end
#[derive(Debug, Clone, Default)]
pub struct EditRecordInput {
    /// 1 = most recent, 2 = second most recent, ...
    pub position: usize,
    /// New magnitude; the record keeps its sign unless `income` is also set
    pub amount: Option<Money>,
    pub label: Option<String>,
    pub category: Option<String>,
    pub account: Option<String>,
    pub date: Option<NaiveDate>,
    /// Some(true) makes the record income, Some(false) an expense
    pub income: Option<bool>,
}

impl EditRecordInput {
    /// True when at least one field would change
    pub fn has_changes(&self) -> bool {
        self.amount.is_some()
            || self.label.is_some()
            || self.category.is_some()
            || self.account.is_some()
            || self.date.is_some()
            || self.income.is_some()
    }
}

impl<'a> RecordService<'a> {
    /// Create a new record service
    pub fn new(db: &'a Database, settings: &'a Settings) -> Self {
        Self { db, settings }
    }

    /// Create a record from user input
    pub fn add(&self, input: AddRecordInput) -> TallyResult<RecordDetail> {
        if !input.amount.is_positive() {
            return Err(TallyError::Validation("amount must be positive".into()));
        }

        let accounts = self.db.accounts().all()?;
        let account =
            resolve_account_or_default(&accounts, input.account.as_deref(), self.settings)?;

        let categories = self.db.categories().all()?;
        let category =
            resolve_category_or_default(&categories, input.category.as_deref(), self.settings)?;

        let amount = if input.income {
            input.amount
        } else {
            -input.amount
        };

        let records = self.db.records();
        let id = records.insert(&NewRecord {
            label: input.label,
            amount,
            date: input.date,
            account_id: account.id,
            category_id: Some(category.id),
        })?;

        records.get_detail(id)?.ok_or_else(|| {
            TallyError::Persistence("record disappeared right after insert".into())
        })
    }

    /// The most recent records, newest first; `None` means all of them
    pub fn last(&self, limit: Option<usize>) -> TallyResult<Vec<RecordDetail>> {
        self.db.records().last(limit)
    }

    /// Edit the record at `input.position` from the most recent
    ///
    /// Only explicitly supplied fields change. Returns the record before and
    /// after the update.
    pub fn edit(&self, input: EditRecordInput) -> TallyResult<(RecordDetail, RecordDetail)> {
        if !input.has_changes() {
            return Err(TallyError::MissingInput(
                "specify at least one field to edit: --amount, --label, -c, -a, -d, \
                 --income/--expense"
                    .into(),
            ));
        }
        if input.position == 0 {
            return Err(TallyError::Validation("position must be at least 1".into()));
        }
        if let Some(magnitude) = input.amount {
            if !magnitude.is_positive() {
                return Err(TallyError::Validation("amount must be positive".into()));
            }
        }

        let records = self.db.records();
        let before = records.nth_last(input.position - 1)?.ok_or_else(|| {
            TallyError::NotFound {
                entity: "Record",
                input: format!("position {}", input.position),
            }
        })?;

        if before.record.is_transfer() {
            return self.edit_transfer_half(before, input);
        }

        let amount = match (input.amount, input.income) {
            (Some(magnitude), Some(true)) => Some(magnitude),
            (Some(magnitude), Some(false)) => Some(-magnitude),
            (Some(magnitude), None) => Some(if before.record.amount.is_negative() {
                -magnitude
            } else {
                magnitude
            }),
            (None, Some(true)) => Some(before.record.amount.abs()),
            (None, Some(false)) => Some(-before.record.amount.abs()),
            (None, None) => None,
        };

        let account_id = match input.account.as_deref() {
            Some(fragment) => {
                let accounts = self.db.accounts().all()?;
                Some(resolve_account(&accounts, fragment)?.id)
            }
            None => None,
        };

        let category_id = match input.category.as_deref() {
            Some(fragment) => {
                let categories = self.db.categories().all()?;
                Some(resolve_category(&categories, fragment)?.id)
            }
            None => None,
        };

        records.update(
            before.record.id,
            &RecordChanges {
                label: input.label,
                amount,
                date: input.date,
                account_id,
                category_id,
            },
        )?;

        let after = records.get_detail(before.record.id)?.ok_or_else(|| {
            TallyError::Persistence("record disappeared during edit".into())
        })?;

        Ok((before, after))
    }

    /// Label and date are shared by both halves of a transfer; anything else
    /// would desynchronize the pair.
    fn edit_transfer_half(
        &self,
        before: RecordDetail,
        input: EditRecordInput,
    ) -> TallyResult<(RecordDetail, RecordDetail)> {
        if input.amount.is_some()
            || input.account.is_some()
            || input.category.is_some()
            || input.income.is_some()
        {
            return Err(TallyError::Validation(format!(
                "the record at position {} is half of a transfer; only --label and -d can be \
                 edited. Undo it and run a new transfer instead.",
                input.position
            )));
        }

        let changes = RecordChanges {
            label: input.label,
            date: input.date,
            ..Default::default()
        };

        let records = self.db.records();
        let peer_id = before.record.transfer_peer_id.ok_or_else(|| {
            TallyError::Persistence("transfer half has no peer".into())
        })?;

        let tx = self.db.conn().unchecked_transaction()?;
        records.update(before.record.id, &changes)?;
        records.update(peer_id, &changes)?;
        tx.commit()?;

        let after = records.get_detail(before.record.id)?.ok_or_else(|| {
            TallyError::Persistence("record disappeared during edit".into())
        })?;

        Ok((before, after))
    }

    /// The most recently created record, for `undo` to show and delete
    pub fn latest(&self) -> TallyResult<RecordDetail> {
        self.db
            .records()
            .nth_last(0)?
            .ok_or_else(|| TallyError::NotFound {
                entity: "Record",
                input: "no records exist".into(),
            })
    }

    /// Delete a record; transfer halves take their peer with them
    pub fn delete(&self, detail: &RecordDetail) -> TallyResult<()> {
        self.db
            .records()
            .delete(detail.record.id, detail.record.transfer_peer_id)
    }
}

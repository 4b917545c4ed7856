//! Record display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::RecordDetail;

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Account")]
    account: String,
}

impl From<&RecordDetail> for RecordRow {
    fn from(detail: &RecordDetail) -> Self {
        Self {
            date: detail.record.date.to_string(),
            label: detail.record.label.clone(),
            amount: detail.record.amount.format_signed(),
            category: detail
                .category_name
                .clone()
                .unwrap_or_else(|| "-".to_string()),
            account: detail.account_display(),
        }
    }
}

/// Format a list of records as a table, newest first
pub fn format_record_table(records: &[RecordDetail]) -> String {
    if records.is_empty() {
        return "No records found.".to_string();
    }

    let rows: Vec<RecordRow> = records.iter().map(RecordRow::from).collect();
    Table::new(rows).with(Style::psql()).to_string()
}

/// Format one record as a single summary line, as `add`/`edit`/`undo` echo it
pub fn format_record_line(detail: &RecordDetail) -> String {
    let record = &detail.record;

    if record.is_transfer() {
        format!(
            "Transfer: {} - {} ({})",
            record.amount.abs(),
            record.label,
            detail.account_display()
        )
    } else {
        let kind = if record.amount.is_negative() {
            "Expense"
        } else {
            "Income"
        };
        let category = detail.category_name.as_deref().unwrap_or("-");
        format!(
            "{}: {} - {} [{}] ({})",
            kind,
            record.amount.format_signed(),
            record.label,
            category,
            detail.account_name
        )
    }
}

//! Terminal output formatting
//!
//! Every function here returns a `String`; the CLI handlers own the actual
//! printing.

pub mod account;
pub mod balance;
pub mod category;
pub mod config;
pub mod record;

pub use account::format_account_table;
pub use balance::format_balance_sheet;
pub use category::{format_category_table, format_category_tree};
pub use config::format_settings_table;
pub use record::{format_record_line, format_record_table};

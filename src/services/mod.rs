//! Business logic layer
//!
//! Services sit between the CLI handlers and the storage layer: they
//! resolve names, enforce the sign conventions, and keep multi-row
//! operations atomic.

pub mod balance;
pub mod record;
pub mod resolve;
pub mod transfer;

pub use balance::{AccountBalance, BalanceChange, BalanceService, BalanceSheet};
pub use record::{AddRecordInput, EditRecordInput, RecordService};
pub use transfer::{TransferInput, TransferResult, TransferService};

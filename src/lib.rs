//! tally - Command-line companion for the Satchel expense tracker
//!
//! Satchel owns a SQLite database of accounts, categories, and records;
//! tally adds, edits, and queries rows in it without opening the full
//! application. Each invocation opens one connection, runs a short
//! transaction or two, prints a result, and exits.
//!
//! # Architecture
//!
//! - `config`: file locations and the persisted settings document
//! - `error`: the error kinds every command can fail with
//! - `models`: domain types mirroring the shared schema
//! - `storage`: typed queries against the shared database
//! - `services`: name resolution and the record/transfer/balance logic
//! - `display`: table and tree rendering
//! - `cli`: clap argument types and command handlers

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TallyError, TallyResult};

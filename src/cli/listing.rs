//! Listing CLI commands: cats, accs, where

use crate::config::TallyPaths;
use crate::display::{format_account_table, format_category_table, format_category_tree};
use crate::error::TallyResult;
use crate::storage::Database;

/// Handle `tally cats`
pub fn handle_cats(db: &Database, flat: bool) -> TallyResult<()> {
    let categories = db.categories().all()?;

    let output = if flat {
        format_category_table(&categories)
    } else {
        format_category_tree(&categories)
    };
    println!("{}", output.trim_end());

    Ok(())
}

/// Handle `tally accs`
pub fn handle_accs(db: &Database) -> TallyResult<()> {
    let accounts = db.accounts().all()?;
    println!("{}", format_account_table(&accounts));

    Ok(())
}

/// Handle `tally where`
pub fn handle_where(paths: &TallyPaths) -> TallyResult<()> {
    let db_path = paths.db_path();
    if db_path.exists() {
        println!("Database: {}", db_path.display());
    } else {
        println!("Database: {} (not found)", db_path.display());
    }
    println!("Config:   {}", paths.settings_file().display());

    Ok(())
}

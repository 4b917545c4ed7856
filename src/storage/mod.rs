//! Shared-database access
//!
//! The database belongs to Satchel; tally opens one connection per
//! invocation, runs short transactions against the existing schema, and
//! never creates or migrates tables outside of test fixtures.

use std::path::Path;

use log::debug;
use rusqlite::{Connection, OpenFlags};

use crate::config::TallyPaths;
use crate::error::{TallyError, TallyResult};

pub mod accounts;
pub mod categories;
pub mod records;

pub use accounts::AccountStore;
pub use categories::CategoryStore;
pub use records::{NewRecord, RecordChanges, RecordStore};

/// Handle to the shared database, scoped to a single invocation
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the shared database at the resolved path
    ///
    /// The file must already exist; tally never creates it.
    pub fn open(paths: &TallyPaths) -> TallyResult<Self> {
        Self::open_path(paths.db_path())
    }

    /// Open the shared database at an explicit path
    pub fn open_path(path: &Path) -> TallyResult<Self> {
        if !path.exists() {
            return Err(TallyError::Persistence(format!(
                "Satchel database not found at {}. Set up Satchel first, or point TALLY_DB at its database.",
                path.display()
            )));
        }

        // Read-write but never create: an empty file here would just be a
        // schema mismatch waiting to happen.
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_WRITE)?;
        debug!("opened shared database at {}", path.display());

        Ok(Self { conn })
    }

    /// The underlying connection
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Record operations
    pub fn records(&self) -> RecordStore<'_> {
        RecordStore::new(&self.conn)
    }

    /// Account operations
    pub fn accounts(&self) -> AccountStore<'_> {
        AccountStore::new(&self.conn)
    }

    /// Category operations
    pub fn categories(&self) -> CategoryStore<'_> {
        CategoryStore::new(&self.conn)
    }
}

//! Category storage operations
//!
//! Read-only: categories are created and maintained in Satchel.

use rusqlite::{Connection, Row};

use crate::error::TallyResult;
use crate::models::Category;

/// Typed queries against the shared `category` table
pub struct CategoryStore<'a> {
    conn: &'a Connection,
}

impl<'a> CategoryStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn map_row(row: &Row) -> rusqlite::Result<Category> {
        Ok(Category {
            id: row.get(0)?,
            name: row.get(1)?,
            parent_id: row.get(2)?,
            kind: row.get(3)?,
        })
    }

    /// All live categories, top-level ones first, then by name
    pub fn all(&self) -> TallyResult<Vec<Category>> {
        self.conn
            .prepare(
                "SELECT id, name, parent_id, kind
                 FROM category
                 WHERE deleted_at IS NULL
                 ORDER BY parent_id IS NOT NULL, name",
            )?
            .query_map([], Self::map_row)?
            .map(|category| category.map_err(Into::into))
            .collect()
    }
}

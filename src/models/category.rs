//! Category model
//!
//! Categories form a one-level tree (top-level categories with optional
//! children). They are created and maintained by Satchel; tally only lists
//! and references them.

use super::ids::CategoryId;

/// A spending/income category as stored in the shared database
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// Row id in the shared database
    pub id: CategoryId,

    /// Category name (e.g., "Groceries")
    pub name: String,

    /// Parent category for subcategories, None for top-level ones
    pub parent_id: Option<CategoryId>,

    /// Satchel's classification tag (e.g., "expense", "income"); displayed verbatim
    pub kind: String,
}

impl Category {
    /// Check whether this is a top-level category
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }
}

//! Strongly-typed ID wrappers for all entity types
//!
//! The shared database owns identity, so these wrap the SQLite integer row
//! ids. Newtype wrappers prevent accidentally mixing up IDs from different
//! entity types at compile time.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap an existing row id
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the underlying row id
            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl rusqlite::types::ToSql for $name {
            fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
                self.0.to_sql()
            }
        }

        impl rusqlite::types::FromSql for $name {
            fn column_result(
                value: rusqlite::types::ValueRef<'_>,
            ) -> rusqlite::types::FromSqlResult<Self> {
                i64::column_result(value).map(Self)
            }
        }
    };
}

define_id!(RecordId);
define_id!(AccountId);
define_id!(CategoryId);

//! Filter conditions applied to the remote schemes table.

use std::fmt::Display;

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SchemeColumn {
    Scheme,
    Income,
    Education,
    Region,
    Organization,
}

impl SchemeColumn {
    pub fn column_name(&self) -> &'static str {
        match self {
            SchemeColumn::Scheme => "scheme",
            SchemeColumn::Income => "income",
            SchemeColumn::Education => "education",
            SchemeColumn::Region => "region",
            SchemeColumn::Organization => "organization",
        }
    }
}

/// A single condition. A query is the conjunction of all its predicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Predicate {
    /// Case-insensitive match of `pattern`, where `%` is the wildcard.
    ILike { column: SchemeColumn, pattern: String },
    /// `column <= value`
    Lte { column: SchemeColumn, value: i64 },
}

impl Predicate {
    /// Substring match: the value may appear anywhere in the column.
    pub fn contains(column: SchemeColumn, value: &str) -> Self {
        Predicate::ILike { column, pattern: format!("%{value}%") }
    }

    pub fn at_most(column: SchemeColumn, value: i64) -> Self {
        Predicate::Lte { column, value }
    }
}

impl Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Predicate::ILike { column, pattern } => write!(f, "{} ilike {}", column.column_name(), pattern),
            Predicate::Lte { column, value } => write!(f, "{} <= {}", column.column_name(), value),
        }
    }
}

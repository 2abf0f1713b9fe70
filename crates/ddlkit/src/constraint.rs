//! Constraint kinds.
//!
//! A [`Constraint`] is either appended to a column's own declaration line
//! (`` `id` INT(11) PRIMARY KEY ``) or rendered as a table-level clause
//! referencing explicit columns (`` UNIQUE (`email`) ``).

use std::fmt;

/// A column or table constraint.
///
/// # Example
/// ```
/// use ddlkit::Constraint;
///
/// assert_eq!(Constraint::NotNull.to_string(), "NOT NULL");
/// assert_eq!(Constraint::default_value("0").to_string(), "DEFAULT(0)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Constraint {
    /// `NOT NULL`
    NotNull,
    /// `NULL`
    #[cfg_attr(feature = "serde", serde(alias = "nullable"))]
    Null,
    /// `PRIMARY KEY`
    PrimaryKey,
    /// `UNIQUE`
    Unique,
    /// `AUTO_INCREMENT`
    AutoIncrement,
    /// `DEFAULT(value)`
    ///
    /// The value is inserted verbatim. Quote string literals yourself
    /// (`"'guest'"`); nothing is escaped.
    Default(String),
    /// `INDEX`
    Index,
    /// `UNSIGNED`
    Unsigned,
}

impl Constraint {
    /// Create a `DEFAULT(value)` constraint.
    pub fn default_value(value: impl Into<String>) -> Self {
        Self::Default(value.into())
    }

    /// SQL keyword (without any parameter).
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::NotNull => "NOT NULL",
            Self::Null => "NULL",
            Self::PrimaryKey => "PRIMARY KEY",
            Self::Unique => "UNIQUE",
            Self::AutoIncrement => "AUTO_INCREMENT",
            Self::Default(_) => "DEFAULT",
            Self::Index => "INDEX",
            Self::Unsigned => "UNSIGNED",
        }
    }

    /// Render the constraint text.
    pub fn to_sql(&self) -> String {
        let mut out = String::new();
        self.write_sql(&mut out);
        out
    }

    pub(crate) fn write_sql(&self, out: &mut String) {
        out.push_str(self.keyword());
        if let Self::Default(value) = self {
            out.push('(');
            out.push_str(value);
            out.push(')');
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

//! Error types for ddlkit

use thiserror::Error;

/// Result type alias for ddlkit operations
pub type DdlResult<T> = Result<T, DdlError>;

/// Problems detected while declaring a table.
///
/// Builders never fail while chaining. The first problem is recorded and
/// reported by [`DdlStatement::validate`](crate::DdlStatement::validate);
/// plain rendering ignores it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DdlError {
    /// The table name is empty
    #[error("Table name cannot be empty")]
    EmptyTableName,

    /// A column was declared with an empty name
    #[error("Column name cannot be empty")]
    EmptyColumnName,

    /// An ENUM column was declared without any allowed values
    #[error("ENUM column '{column}' has no values")]
    EmptyEnumValues { column: String },

    /// A sized column was declared with a zero length
    #[error("Invalid length {length} for column '{column}'")]
    InvalidLength { column: String, length: u32 },

    /// A column constraint was declared before any column
    #[error("Constraint '{constraint}' declared before any column")]
    MissingColumn { constraint: String },
}

impl DdlError {
    /// Create a missing-column error for a constraint
    pub fn missing_column(constraint: impl Into<String>) -> Self {
        Self::MissingColumn {
            constraint: constraint.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = DdlError::EmptyEnumValues {
            column: "role".to_string(),
        };
        assert_eq!(err.to_string(), "ENUM column 'role' has no values");

        let err = DdlError::missing_column("NOT NULL");
        assert_eq!(
            err.to_string(),
            "Constraint 'NOT NULL' declared before any column"
        );
    }

    #[test]
    fn length_and_name_messages() {
        let err = DdlError::InvalidLength {
            column: "code".to_string(),
            length: 0,
        };
        assert_eq!(err.to_string(), "Invalid length 0 for column 'code'");
        assert_eq!(
            DdlError::EmptyTableName.to_string(),
            "Table name cannot be empty"
        );
    }
}

//! # ddlkit
//!
//! A small, dependency-light builder for `CREATE TABLE` statements.
//!
//! ## Features
//!
//! - **Fluent**: chain column and constraint declarations, render on demand
//! - **Typed**: column types and constraint kinds are enums, not string constants
//! - **Deterministic**: output follows declaration order, renders are repeatable
//! - **Permissive by default**: values go into the SQL verbatim; opt into
//!   checks with [`DdlStatement::validate`]
//!
//! No connection handling, no execution: the output is just SQL text.
//!
//! ```rust
//! use ddlkit::DdlStatement;
//!
//! let sql = ddlkit::create_table("sessions")
//!     .string_with_length("token", 64)
//!     .primary_key()
//!     .int("user_id")
//!     .unsigned()
//!     .not_null()
//!     .timestamp("expires_at")
//!     .index_on("user_id")
//!     .to_sql();
//!
//! assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS `sessions` (\n"));
//! assert!(sql.contains("\t`user_id` INT(11) UNSIGNED NOT NULL"));
//! assert!(sql.ends_with("\tINDEX (`user_id`)\n);"));
//! ```

pub mod builder;
pub mod constraint;
pub mod error;
pub mod ident;
pub mod prelude;
pub mod types;

pub use builder::{ColumnDecl, DdlStatement, TableConstraint, TableDeclaration};
pub use constraint::Constraint;
pub use error::{DdlError, DdlResult};
pub use ident::IntoColumns;
pub use types::{ColumnType, DEFAULT_INT_LENGTH, DEFAULT_TEXT_LENGTH, DEFAULT_VARCHAR_LENGTH};

/// Start a `CREATE TABLE IF NOT EXISTS` declaration.
///
/// # Example
/// ```
/// use ddlkit::DdlStatement;
///
/// let sql = ddlkit::create_table("tags").string("name").to_sql();
/// assert_eq!(sql, "CREATE TABLE IF NOT EXISTS `tags` (\n\t`name` VARCHAR(50)\n);");
/// ```
pub fn create_table(table_name: &str) -> TableDeclaration {
    TableDeclaration::new(table_name)
}

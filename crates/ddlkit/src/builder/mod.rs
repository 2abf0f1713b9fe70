//! CREATE TABLE builder.
//!
//! ## Design
//!
//! - Declarations are accumulated in call order and rendered on demand.
//! - Column constraints without explicit columns attach to the most recently
//!   declared column; with explicit columns they become table-level clauses.
//! - Permissive by default: nothing is escaped and nothing fails while
//!   chaining. Use [`DdlStatement::validate`] to opt into checks.

pub mod table;
pub mod traits;

pub use table::{ColumnDecl, TableConstraint, TableDeclaration};
pub use traits::DdlStatement;

#[cfg(test)]
mod tests;

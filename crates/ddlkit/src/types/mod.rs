//! Column base types.
//!
//! Every column carries exactly one [`ColumnType`], rendered as the first
//! fragment of its declaration line (e.g. `VARCHAR(50)`).

mod column;

pub use column::{ColumnType, DEFAULT_INT_LENGTH, DEFAULT_TEXT_LENGTH, DEFAULT_VARCHAR_LENGTH};

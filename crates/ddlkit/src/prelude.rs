//! Convenient imports for typical `ddlkit` usage.
//!
//! ```ignore
//! use ddlkit::prelude::*;
//! ```

pub use crate::{
    ColumnType, Constraint, DdlError, DdlResult, DdlStatement, IntoColumns, TableDeclaration,
    create_table,
};

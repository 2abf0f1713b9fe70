//! Identifier quoting and column targets.
//!
//! Identifiers are wrapped in backticks as given. Nothing is validated or
//! escaped, so a name containing a backtick produces broken SQL; callers own
//! the naming.
//!
//! # Example
//! ```
//! use ddlkit::ident::{IntoColumns, quote};
//!
//! assert_eq!(quote("users"), "`users`");
//! assert_eq!("email".into_columns(), vec!["email".to_string()]);
//! assert_eq!(["a", "b"].into_columns().len(), 2);
//! ```

/// Wrap an identifier in backticks.
pub fn quote(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    write_quoted(name, &mut out);
    out
}

pub(crate) fn write_quoted(name: &str, out: &mut String) {
    out.push('`');
    out.push_str(name);
    out.push('`');
}

/// Write `` (`a`, `b`) `` for a column list.
pub(crate) fn write_column_list(columns: &[String], out: &mut String) {
    out.push('(');
    for (i, col) in columns.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_quoted(col, out);
    }
    out.push(')');
}

/// Convert an input into the explicit column list of a table-level
/// constraint.
///
/// A single name and any list of names are accepted, mainly for ergonomics
/// in builder APIs.
pub trait IntoColumns {
    fn into_columns(self) -> Vec<String>;
}

impl IntoColumns for &str {
    fn into_columns(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoColumns for String {
    fn into_columns(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoColumns for &String {
    fn into_columns(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl IntoColumns for &[&str] {
    fn into_columns(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl<const N: usize> IntoColumns for [&str; N] {
    fn into_columns(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl IntoColumns for Vec<&str> {
    fn into_columns(self) -> Vec<String> {
        self.into_iter().map(str::to_string).collect()
    }
}

impl IntoColumns for Vec<String> {
    fn into_columns(self) -> Vec<String> {
        self
    }
}

impl IntoColumns for &[String] {
    fn into_columns(self) -> Vec<String> {
        self.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_is_verbatim() {
        assert_eq!(quote("created_at"), "`created_at`");
        assert_eq!(quote("my table"), "`my table`");
        assert_eq!(quote(""), "``");
    }

    #[test]
    fn column_list_single() {
        let mut out = String::new();
        write_column_list(&["id".to_string()], &mut out);
        assert_eq!(out, "(`id`)");
    }

    #[test]
    fn column_list_many() {
        let mut out = String::new();
        write_column_list(&["a".to_string(), "b".to_string()], &mut out);
        assert_eq!(out, "(`a`, `b`)");
    }

    #[test]
    fn into_columns_variants() {
        assert_eq!("id".into_columns(), vec!["id"]);
        assert_eq!(String::from("id").into_columns(), vec!["id"]);
        assert_eq!(["a", "b"].into_columns(), vec!["a", "b"]);
        assert_eq!(vec!["a", "b"].into_columns(), vec!["a", "b"]);
        let cols: &[&str] = &["x"];
        assert_eq!(cols.into_columns(), vec!["x"]);
        assert!(Vec::<String>::new().into_columns().is_empty());
    }
}

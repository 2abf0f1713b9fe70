use std::fmt;

/// Default length of a `VARCHAR` column.
pub const DEFAULT_VARCHAR_LENGTH: u32 = 50;

/// Default display width of an `INT` column.
pub const DEFAULT_INT_LENGTH: u32 = 11;

/// Default length of a `TEXT` column.
pub const DEFAULT_TEXT_LENGTH: u32 = 65535;

/// SQL base type of a column.
///
/// # Example
/// ```
/// use ddlkit::ColumnType;
///
/// assert_eq!(ColumnType::VarChar(100).to_sql(), "VARCHAR(100)");
/// assert_eq!(ColumnType::Timestamp(Some(3)).to_sql(), "TIMESTAMP(3)");
/// assert_eq!(ColumnType::enumeration(["a", "b"]).to_sql(), "ENUM('a', 'b')");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnType {
    /// `VARCHAR(length)`
    VarChar(u32),
    /// `INT(length)`
    Int(u32),
    /// `TEXT(length)`
    Text(u32),
    /// `JSON`
    Json,
    /// `ENUM('v1', 'v2', ...)`
    ///
    /// Values are written verbatim between single quotes. Nothing is escaped:
    /// callers must pass SQL-safe values.
    Enum(Vec<String>),
    /// `TIMESTAMP` or `TIMESTAMP(fsp)`
    Timestamp(Option<u8>),
    /// `DECIMAL`
    ///
    /// `length` and `decimals` are kept for inspection but are not part of the
    /// rendered fragment.
    Decimal { length: u32, decimals: Option<u32> },
}

impl ColumnType {
    /// Build an `ENUM` type from any list of values.
    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Enum(values.into_iter().map(Into::into).collect())
    }

    /// Length parameter that must be non-zero, if this type has one.
    pub(crate) fn sized_length(&self) -> Option<u32> {
        match self {
            Self::VarChar(len) | Self::Int(len) | Self::Text(len) => Some(*len),
            _ => None,
        }
    }

    /// Render the type fragment.
    pub fn to_sql(&self) -> String {
        let mut out = String::new();
        self.write_sql(&mut out);
        out
    }

    pub(crate) fn write_sql(&self, out: &mut String) {
        match self {
            Self::VarChar(len) => {
                out.push_str("VARCHAR(");
                out.push_str(&len.to_string());
                out.push(')');
            }
            Self::Int(len) => {
                out.push_str("INT(");
                out.push_str(&len.to_string());
                out.push(')');
            }
            Self::Text(len) => {
                out.push_str("TEXT(");
                out.push_str(&len.to_string());
                out.push(')');
            }
            Self::Json => out.push_str("JSON"),
            Self::Enum(values) => {
                out.push_str("ENUM(");
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push('\'');
                    out.push_str(v);
                    out.push('\'');
                }
                out.push(')');
            }
            Self::Timestamp(None) => out.push_str("TIMESTAMP"),
            Self::Timestamp(Some(fsp)) => {
                out.push_str("TIMESTAMP(");
                out.push_str(&fsp.to_string());
                out.push(')');
            }
            Self::Decimal { .. } => out.push_str("DECIMAL"),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

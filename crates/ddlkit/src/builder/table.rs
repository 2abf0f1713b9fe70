use super::traits::DdlStatement;
use crate::constraint::Constraint;
use crate::error::{DdlError, DdlResult};
use crate::ident::{self, IntoColumns};
use crate::types::{ColumnType, DEFAULT_INT_LENGTH, DEFAULT_TEXT_LENGTH, DEFAULT_VARCHAR_LENGTH};
use std::fmt;

/// One column line: name, base type and the constraints attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDecl {
    pub name: String,
    pub column_type: ColumnType,
    pub constraints: Vec<Constraint>,
}

impl ColumnDecl {
    /// Render the column line (without indentation).
    pub fn to_sql(&self) -> String {
        let mut out = String::new();
        self.write_sql(&mut out);
        out
    }

    fn write_sql(&self, out: &mut String) {
        ident::write_quoted(&self.name, out);
        out.push(' ');
        self.column_type.write_sql(out);
        for c in &self.constraints {
            out.push(' ');
            c.write_sql(out);
        }
    }
}

/// A table-level clause: a constraint over an explicit column list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConstraint {
    pub constraint: Constraint,
    pub columns: Vec<String>,
}

impl TableConstraint {
    /// Render the clause (without indentation).
    pub fn to_sql(&self) -> String {
        let mut out = String::new();
        self.write_sql(&mut out);
        out
    }

    fn write_sql(&self, out: &mut String) {
        self.constraint.write_sql(out);
        out.push(' ');
        ident::write_column_list(&self.columns, out);
    }
}

/// Fluent `CREATE TABLE` builder.
///
/// Columns and table-level constraints render in declaration order. A column
/// constraint method (`not_null()`, `primary_key()`, ...) attaches to the most
/// recently declared column; its `*_on` twin records a table-level clause for
/// the given columns instead.
///
/// Free-text inputs (names, enum values, default values) are written into the
/// statement verbatim. Nothing is quoted or escaped for you.
///
/// # Example
///
/// ```rust
/// use ddlkit::{DdlStatement, TableDeclaration};
///
/// let sql = TableDeclaration::new("users")
///     .int("id")
///     .auto_increment()
///     .primary_key()
///     .string_with_length("name", 100)
///     .not_null()
///     .enumeration("role", ["admin", "user"])
///     .unique_on("name")
///     .to_sql();
///
/// assert_eq!(
///     sql,
///     "CREATE TABLE IF NOT EXISTS `users` (\n\
///      \t`id` INT(11) AUTO_INCREMENT PRIMARY KEY, \n\
///      \t`name` VARCHAR(100) NOT NULL, \n\
///      \t`role` ENUM('admin', 'user'), \n\
///      \tUNIQUE (`name`)\n\
///      );"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TableDeclaration {
    /// Table name
    table_name: String,
    /// Emit `IF NOT EXISTS`
    if_not_exists: bool,
    /// Target of column constraint methods
    last_column: Option<String>,
    /// Column lines, unique by name
    columns: Vec<ColumnDecl>,
    /// Table-level clauses, unique by constraint text
    constraints: Vec<TableConstraint>,
    /// First problem seen while building
    build_error: Option<DdlError>,
}

impl TableDeclaration {
    /// Create a builder for `CREATE TABLE IF NOT EXISTS`.
    pub fn new(table_name: &str) -> Self {
        Self::with_if_not_exists(table_name, true)
    }

    /// Create a builder, choosing whether `IF NOT EXISTS` is emitted.
    pub fn with_if_not_exists(table_name: &str, if_not_exists: bool) -> Self {
        let mut decl = Self {
            table_name: table_name.to_string(),
            if_not_exists,
            last_column: None,
            columns: Vec::new(),
            constraints: Vec::new(),
            build_error: None,
        };
        if table_name.is_empty() {
            decl.record_error(DdlError::EmptyTableName);
        }
        decl
    }

    /// Toggle `IF NOT EXISTS`.
    pub fn if_not_exists(mut self, if_not_exists: bool) -> Self {
        self.if_not_exists = if_not_exists;
        self
    }

    fn record_error(&mut self, err: DdlError) {
        if self.build_error.is_none() {
            self.build_error = Some(err);
        }
    }

    // ==================== Columns ====================

    /// Declare (or redeclare) a column with an explicit base type.
    ///
    /// Redeclaring an existing name replaces its type and drops the
    /// constraints attached to it; the column keeps its original position.
    pub fn column(mut self, name: &str, column_type: ColumnType) -> Self {
        if name.is_empty() {
            self.record_error(DdlError::EmptyColumnName);
        }
        if matches!(&column_type, ColumnType::Enum(values) if values.is_empty()) {
            self.record_error(DdlError::EmptyEnumValues {
                column: name.to_string(),
            });
        }
        if column_type.sized_length() == Some(0) {
            self.record_error(DdlError::InvalidLength {
                column: name.to_string(),
                length: 0,
            });
        }

        let decl = ColumnDecl {
            name: name.to_string(),
            column_type,
            constraints: Vec::new(),
        };
        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(existing) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    target: "ddlkit.ddl",
                    table = %self.table_name,
                    column = name,
                    "column redeclared, previous type and constraints replaced"
                );
                *existing = decl;
            }
            None => self.columns.push(decl),
        }
        self.last_column = Some(name.to_string());
        self
    }

    /// `VARCHAR(50)` column.
    pub fn string(self, name: &str) -> Self {
        self.string_with_length(name, DEFAULT_VARCHAR_LENGTH)
    }

    /// `VARCHAR(length)` column.
    pub fn string_with_length(self, name: &str, length: u32) -> Self {
        self.column(name, ColumnType::VarChar(length))
    }

    /// `INT(11)` column.
    pub fn int(self, name: &str) -> Self {
        self.int_with_length(name, DEFAULT_INT_LENGTH)
    }

    /// `INT(length)` column.
    pub fn int_with_length(self, name: &str, length: u32) -> Self {
        self.column(name, ColumnType::Int(length))
    }

    /// `TEXT(65535)` column.
    pub fn text(self, name: &str) -> Self {
        self.text_with_length(name, DEFAULT_TEXT_LENGTH)
    }

    /// `TEXT(length)` column.
    pub fn text_with_length(self, name: &str, length: u32) -> Self {
        self.column(name, ColumnType::Text(length))
    }

    /// `JSON` column.
    pub fn json(self, name: &str) -> Self {
        self.column(name, ColumnType::Json)
    }

    /// `ENUM('v1', 'v2', ...)` column.
    ///
    /// Values are inserted verbatim between single quotes.
    pub fn enumeration<I, S>(self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.column(name, ColumnType::enumeration(values))
    }

    /// `TIMESTAMP` column.
    pub fn timestamp(self, name: &str) -> Self {
        self.column(name, ColumnType::Timestamp(None))
    }

    /// `TIMESTAMP(fsp)` column with fractional-seconds precision.
    pub fn timestamp_with_precision(self, name: &str, fsp: u8) -> Self {
        self.column(name, ColumnType::Timestamp(Some(fsp)))
    }

    /// `DECIMAL` column.
    ///
    /// `length` and `decimals` are stored on the column type but are not
    /// rendered: the fragment is always plain `DECIMAL`.
    pub fn decimal(self, name: &str, length: u32, decimals: Option<u32>) -> Self {
        self.column(name, ColumnType::Decimal { length, decimals })
    }

    // ==================== Constraints ====================

    /// Attach a constraint to the most recently declared column.
    ///
    /// Before any column is declared this is a no-op for rendering;
    /// [`DdlStatement::validate`] reports it.
    pub fn constraint(mut self, constraint: Constraint) -> Self {
        let Some(last) = self.last_column.as_deref() else {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "ddlkit.ddl",
                table = %self.table_name,
                constraint = %constraint,
                "constraint dropped, no column declared yet"
            );
            self.record_error(DdlError::missing_column(constraint.to_sql()));
            return self;
        };
        if let Some(col) = self.columns.iter_mut().find(|c| c.name == last) {
            col.constraints.push(constraint);
        }
        self
    }

    /// Record a table-level constraint over explicit columns.
    ///
    /// Clauses are keyed by their constraint text: declaring the same text
    /// again replaces the earlier column list in place. An empty column list
    /// behaves like [`constraint`](Self::constraint).
    pub fn constraint_on(mut self, constraint: Constraint, columns: impl IntoColumns) -> Self {
        let columns = columns.into_columns();
        if columns.is_empty() {
            return self.constraint(constraint);
        }

        match self
            .constraints
            .iter_mut()
            .find(|c| c.constraint == constraint)
        {
            Some(existing) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    target: "ddlkit.ddl",
                    table = %self.table_name,
                    constraint = %constraint,
                    previous = ?existing.columns,
                    "table constraint redeclared, column list replaced"
                );
                existing.columns = columns;
            }
            None => self.constraints.push(TableConstraint {
                constraint,
                columns,
            }),
        }
        self
    }

    /// `NOT NULL` on the last column.
    pub fn not_null(self) -> Self {
        self.constraint(Constraint::NotNull)
    }

    /// `NOT NULL (cols)` table clause.
    pub fn not_null_on(self, columns: impl IntoColumns) -> Self {
        self.constraint_on(Constraint::NotNull, columns)
    }

    /// `NULL` on the last column.
    pub fn nullable(self) -> Self {
        self.constraint(Constraint::Null)
    }

    /// `NULL (cols)` table clause.
    pub fn nullable_on(self, columns: impl IntoColumns) -> Self {
        self.constraint_on(Constraint::Null, columns)
    }

    /// `PRIMARY KEY` on the last column.
    pub fn primary_key(self) -> Self {
        self.constraint(Constraint::PrimaryKey)
    }

    /// `PRIMARY KEY (cols)` table clause.
    pub fn primary_key_on(self, columns: impl IntoColumns) -> Self {
        self.constraint_on(Constraint::PrimaryKey, columns)
    }

    /// `UNIQUE` on the last column.
    pub fn unique(self) -> Self {
        self.constraint(Constraint::Unique)
    }

    /// `UNIQUE (cols)` table clause.
    pub fn unique_on(self, columns: impl IntoColumns) -> Self {
        self.constraint_on(Constraint::Unique, columns)
    }

    /// `AUTO_INCREMENT` on the last column.
    pub fn auto_increment(self) -> Self {
        self.constraint(Constraint::AutoIncrement)
    }

    /// `AUTO_INCREMENT (cols)` table clause.
    pub fn auto_increment_on(self, columns: impl IntoColumns) -> Self {
        self.constraint_on(Constraint::AutoIncrement, columns)
    }

    /// `DEFAULT(value)` on the last column. The value is not quoted.
    pub fn default_value(self, value: impl Into<String>) -> Self {
        self.constraint(Constraint::default_value(value))
    }

    /// `DEFAULT(value) (cols)` table clause. The value is not quoted.
    pub fn default_value_on(self, value: impl Into<String>, columns: impl IntoColumns) -> Self {
        self.constraint_on(Constraint::default_value(value), columns)
    }

    /// `INDEX` on the last column.
    pub fn index(self) -> Self {
        self.constraint(Constraint::Index)
    }

    /// `INDEX (cols)` table clause.
    pub fn index_on(self, columns: impl IntoColumns) -> Self {
        self.constraint_on(Constraint::Index, columns)
    }

    /// `UNSIGNED` on the last column.
    pub fn unsigned(self) -> Self {
        self.constraint(Constraint::Unsigned)
    }

    /// `UNSIGNED (cols)` table clause.
    pub fn unsigned_on(self, columns: impl IntoColumns) -> Self {
        self.constraint_on(Constraint::Unsigned, columns)
    }

    // ==================== Accessors ====================

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn is_if_not_exists(&self) -> bool {
        self.if_not_exists
    }

    /// Column that bare constraint methods currently target.
    pub fn last_column(&self) -> Option<&str> {
        self.last_column.as_deref()
    }

    pub fn columns(&self) -> &[ColumnDecl] {
        &self.columns
    }

    pub fn table_constraints(&self) -> &[TableConstraint] {
        &self.constraints
    }
}

impl DdlStatement for TableDeclaration {
    fn build_sql(&self) -> String {
        let mut sql = String::from("CREATE TABLE ");
        if self.if_not_exists {
            sql.push_str("IF NOT EXISTS ");
        }
        ident::write_quoted(&self.table_name, &mut sql);
        sql.push_str(" (\n");

        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                sql.push_str(", \n");
            }
            sql.push('\t');
            col.write_sql(&mut sql);
        }

        if !self.constraints.is_empty() {
            sql.push_str(", \n");
            for (i, c) in self.constraints.iter().enumerate() {
                if i > 0 {
                    sql.push_str(", \n");
                }
                sql.push('\t');
                c.write_sql(&mut sql);
            }
        }

        sql.push_str("\n);");

        #[cfg(feature = "tracing")]
        tracing::trace!(target: "ddlkit.ddl", table = %self.table_name, sql = %sql, "rendered");

        sql
    }

    fn validate(&self) -> DdlResult<()> {
        match &self.build_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl fmt::Display for TableDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build_sql())
    }
}

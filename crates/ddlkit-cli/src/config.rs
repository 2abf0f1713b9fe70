use ddlkit::{ColumnType, Constraint, TableDeclaration};
use serde::Deserialize;
use std::path::Path;

/// A table definition file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableFile {
    pub version: String,
    pub table: String,

    #[serde(default = "default_true")]
    pub if_not_exists: bool,

    #[serde(default)]
    pub columns: Vec<ColumnConfig>,

    #[serde(default)]
    pub constraints: Vec<TableConstraintConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    String,
    Int,
    Text,
    Json,
    Enum,
    Timestamp,
    Decimal,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ColumnKind,

    /// VARCHAR/INT/TEXT length, DECIMAL precision
    pub length: Option<u32>,
    /// DECIMAL scale
    pub decimals: Option<u32>,
    /// TIMESTAMP fractional-seconds precision
    pub precision: Option<u8>,
    /// ENUM values
    #[serde(default)]
    pub values: Vec<String>,

    /// Constraints attached to this column, in order.
    #[serde(default)]
    pub constraints: Vec<Constraint>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableConstraintConfig {
    pub constraint: Constraint,
    pub columns: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl TableFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read table file {}: {e}", path.display()))?;

        Self::parse(&raw)
            .map_err(|e| anyhow::anyhow!("invalid table file {}: {e:#}", path.display()))
    }

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let mut file: TableFile =
            toml::from_str(raw).map_err(|e| anyhow::anyhow!("failed to parse: {e}"))?;

        file.expand_env()?;
        file.validate()?;
        Ok(file)
    }

    fn expand_env(&mut self) -> anyhow::Result<()> {
        self.table = expand_env_vars(&self.table)?;

        for col in &mut self.columns {
            col.name = expand_env_vars(&col.name)?;
            for v in &mut col.values {
                *v = expand_env_vars(v)?;
            }
            for c in &mut col.constraints {
                expand_constraint(c)?;
            }
        }

        for tc in &mut self.constraints {
            expand_constraint(&mut tc.constraint)?;
            for name in &mut tc.columns {
                *name = expand_env_vars(name)?;
            }
        }

        Ok(())
    }

    /// Structural checks only. Problems the builder records itself (empty
    /// names, empty enum values, zero lengths) are left to
    /// [`DdlStatement::validate`](ddlkit::DdlStatement::validate) so that
    /// `render --strict` decides whether they are fatal.
    fn validate(&self) -> anyhow::Result<()> {
        if self.version.trim() != "1" {
            anyhow::bail!("unsupported table file version: {}", self.version);
        }

        let mut seen = std::collections::HashSet::<&str>::new();
        for col in &self.columns {
            if !seen.insert(col.name.as_str()) {
                anyhow::bail!("duplicate column: {}", col.name);
            }
            col.validate()?;
        }

        for tc in &self.constraints {
            if tc.columns.is_empty() {
                anyhow::bail!(
                    "constraints.columns must not be empty (constraint: {})",
                    tc.constraint
                );
            }
        }

        Ok(())
    }

    /// Build the declaration in file order: columns (each followed by its own
    /// constraints), then table-level constraints.
    pub fn to_declaration(&self) -> TableDeclaration {
        let mut decl = TableDeclaration::with_if_not_exists(&self.table, self.if_not_exists);

        for col in &self.columns {
            decl = decl.column(&col.name, col.column_type());
            for c in &col.constraints {
                decl = decl.constraint(c.clone());
            }
        }

        for tc in &self.constraints {
            decl = decl.constraint_on(tc.constraint.clone(), tc.columns.as_slice());
        }

        decl
    }
}

impl ColumnConfig {
    fn validate(&self) -> anyhow::Result<()> {
        let name = &self.name;
        if self.kind == ColumnKind::Decimal {
            match self.length {
                None => anyhow::bail!("decimal column {name} requires length"),
                Some(0) => anyhow::bail!("decimal column {name}: length must be greater than 0"),
                Some(_) => {}
            }
        }

        if self.length.is_some()
            && matches!(
                self.kind,
                ColumnKind::Json | ColumnKind::Enum | ColumnKind::Timestamp
            )
        {
            anyhow::bail!("column {name}: length is not supported for {:?}", self.kind);
        }
        if self.decimals.is_some() && self.kind != ColumnKind::Decimal {
            anyhow::bail!("column {name}: decimals is only supported for decimal columns");
        }
        if self.precision.is_some() && self.kind != ColumnKind::Timestamp {
            anyhow::bail!("column {name}: precision is only supported for timestamp columns");
        }
        if !self.values.is_empty() && self.kind != ColumnKind::Enum {
            anyhow::bail!("column {name}: values is only supported for enum columns");
        }

        Ok(())
    }

    fn column_type(&self) -> ColumnType {
        match self.kind {
            ColumnKind::String => {
                ColumnType::VarChar(self.length.unwrap_or(ddlkit::DEFAULT_VARCHAR_LENGTH))
            }
            ColumnKind::Int => ColumnType::Int(self.length.unwrap_or(ddlkit::DEFAULT_INT_LENGTH)),
            ColumnKind::Text => {
                ColumnType::Text(self.length.unwrap_or(ddlkit::DEFAULT_TEXT_LENGTH))
            }
            ColumnKind::Json => ColumnType::Json,
            ColumnKind::Enum => ColumnType::Enum(self.values.clone()),
            ColumnKind::Timestamp => ColumnType::Timestamp(self.precision),
            ColumnKind::Decimal => ColumnType::Decimal {
                length: self.length.unwrap_or_default(),
                decimals: self.decimals,
            },
        }
    }
}

fn expand_constraint(c: &mut Constraint) -> anyhow::Result<()> {
    if let Constraint::Default(value) = c {
        *value = expand_env_vars(value)?;
    }
    Ok(())
}

fn expand_env_vars(input: &str) -> anyhow::Result<String> {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '$' && chars.peek() == Some(&'{') {
            chars.next(); // consume '{'

            let mut key = String::new();
            let mut closed = false;
            for ch in chars.by_ref() {
                if ch == '}' {
                    closed = true;
                    break;
                }
                key.push(ch);
            }

            if !closed {
                anyhow::bail!("unterminated env var reference: ${{{key}");
            }
            if key.is_empty() {
                anyhow::bail!("invalid env var reference: ${{}}");
            }

            let v = std::env::var(&key)
                .map_err(|_| anyhow::anyhow!("missing env var for table file expansion: {key}"))?;
            out.push_str(&v);
            continue;
        }

        out.push(c);
    }

    Ok(out)
}

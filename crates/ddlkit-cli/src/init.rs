use crate::cli::InitArgs;
use std::path::Path;

pub fn run(args: InitArgs) -> anyhow::Result<()> {
    write_template(&args.path)
}

pub(crate) const TEMPLATE: &str = r#"
version = "1"
table = "users"
if_not_exists = true

# type: string | int | text | json | enum | timestamp | decimal
# constraints: not_null | null | primary_key | unique | auto_increment
#              | index | unsigned | { default = "<sql>" }
# Values are copied into the SQL verbatim: quote string defaults yourself.

[[columns]]
name = "id"
type = "int"
constraints = ["unsigned", "auto_increment", "primary_key"]

[[columns]]
name = "email"
type = "string"
length = 255
constraints = ["not_null"]

[[columns]]
name = "role"
type = "enum"
values = ["admin", "user"]
constraints = [{ default = "'user'" }]

[[columns]]
name = "created_at"
type = "timestamp"
constraints = [{ default = "CURRENT_TIMESTAMP" }]

# Table-level clauses reference explicit columns.
[[constraints]]
constraint = "unique"
columns = ["email"]
"#;

fn write_template(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        anyhow::bail!("refusing to overwrite existing file: {}", path.display());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!("failed to create directory {}: {e}", parent.display())
            })?;
        }
    }

    std::fs::write(path, TEMPLATE.trim_start_matches('\n'))
        .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))?;

    println!("wrote {}", path.display());
    Ok(())
}

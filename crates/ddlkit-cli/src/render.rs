use crate::cli::RenderArgs;
use crate::config::TableFile;
use crate::write::{WriteOptions, apply_output};
use ddlkit::DdlStatement;
use std::path::Path;

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    let mut rendered = Vec::with_capacity(args.files.len());
    for path in &args.files {
        rendered.push(render_file(path, args.strict)?);
    }

    match &args.out {
        Some(out) => {
            let mut content = rendered.concat();
            content.push('\n');
            let outcome = apply_output(
                out,
                &content,
                WriteOptions {
                    dry_run: args.dry_run,
                    check: args.check,
                },
            )?;
            tracing::info!(path = %out.display(), ?outcome, "output applied");
        }
        None => println!("{}", rendered.join("\n\n")),
    }

    Ok(())
}

fn render_file(path: &Path, strict: bool) -> anyhow::Result<String> {
    let file = TableFile::load(path)?;
    render_table(&file, &path.display().to_string(), strict)
}

/// Render one parsed table file.
///
/// Problems recorded by the builder fail the render when `strict` is set and
/// are logged as warnings otherwise.
fn render_table(file: &TableFile, label: &str, strict: bool) -> anyhow::Result<String> {
    let decl = file.to_declaration();

    let sql = if strict {
        decl.try_to_sql()
            .map_err(|e| anyhow::anyhow!("{label}: {e}"))?
    } else {
        if let Err(e) = decl.validate() {
            tracing::warn!(file = label, "{e}");
        }
        decl.to_sql()
    };

    tracing::info!(
        file = label,
        table = decl.table_name(),
        columns = decl.columns().len(),
        table_constraints = decl.table_constraints().len(),
        "rendered table"
    );
    Ok(sql)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_ENUM: &str = r#"
version = "1"
table = "tickets"

[[columns]]
name = "id"
type = "int"
constraints = ["primary_key"]

[[columns]]
name = "state"
type = "enum"
"#;

    #[test]
    fn lenient_render_keeps_permissive_output() {
        let file = TableFile::parse(EMPTY_ENUM).unwrap();
        let sql = render_table(&file, "tickets.toml", false).unwrap();
        assert_eq!(
            sql,
            "CREATE TABLE IF NOT EXISTS `tickets` (\n\
             \t`id` INT(11) PRIMARY KEY, \n\
             \t`state` ENUM()\n\
             );"
        );
    }

    #[test]
    fn strict_render_fails_on_recorded_problem() {
        let file = TableFile::parse(EMPTY_ENUM).unwrap();
        let err = render_table(&file, "tickets.toml", true).unwrap_err();
        assert_eq!(
            err.to_string(),
            "tickets.toml: ENUM column 'state' has no values"
        );
    }

    #[test]
    fn strict_render_accepts_clean_file() {
        let raw = "version = \"1\"\ntable = \"t\"\n[[columns]]\nname = \"a\"\ntype = \"json\"";
        let file = TableFile::parse(raw).unwrap();
        let sql = render_table(&file, "t.toml", true).unwrap();
        assert_eq!(sql, "CREATE TABLE IF NOT EXISTS `t` (\n\t`a` JSON\n);");
    }

    #[test]
    fn strict_render_rejects_empty_table_name() {
        let file = TableFile::parse("version = \"1\"\ntable = \"\"").unwrap();
        let err = render_table(&file, "blank.toml", true).unwrap_err();
        assert_eq!(err.to_string(), "blank.toml: Table name cannot be empty");
    }
}

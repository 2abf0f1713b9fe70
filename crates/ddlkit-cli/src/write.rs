use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    pub dry_run: bool,
    pub check: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Unchanged,
    WouldWrite,
    Written,
}

/// Write `content` to `path` if it differs from what is already there.
pub fn apply_output(
    path: &Path,
    content: &str,
    opts: WriteOptions,
) -> anyhow::Result<WriteOutcome> {
    let existing = std::fs::read_to_string(path).ok();
    if existing.as_deref() == Some(content) {
        tracing::debug!(path = %path.display(), "output up to date");
        return Ok(WriteOutcome::Unchanged);
    }

    if opts.dry_run {
        println!("would write {}", path.display());
        return Ok(WriteOutcome::WouldWrite);
    }

    if opts.check {
        anyhow::bail!("{} is out of date", path.display());
    }

    write_atomic(path, content)?;
    println!("wrote {}", path.display());
    Ok(WriteOutcome::Written)
}

fn write_atomic(path: &Path, content: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!("failed to create directory {}: {e}", parent.display())
            })?;
        }
    }

    let tmp = tmp_path(path);
    std::fs::write(&tmp, content)
        .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", tmp.display()))?;
    std::fs::rename(&tmp, path).map_err(|e| {
        anyhow::anyhow!(
            "failed to rename {} -> {}: {e}",
            tmp.display(),
            path.display()
        )
    })?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => path.with_extension(format!("{ext}.tmp")),
        None => path.with_extension("tmp"),
    }
}

//! Atomic output publishing: write a hidden temporary sibling, then rename.
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Write `bytes` to `dest` through a `.tmp` sibling and a final rename, so a
/// crash mid-write never leaves a truncated file at the destination.
pub fn publish_bytes(dest: &Path, bytes: &[u8]) -> Result<()> {
    let parent = dest.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(parent) = parent {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let file_name = dest
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("staged");
    let tmp_path = dest
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(format!(".{file_name}.tmp"));
    fs::write(&tmp_path, bytes).with_context(|| format!("write {}", tmp_path.display()))?;
    fs::rename(&tmp_path, dest).with_context(|| format!("publish {}", dest.display()))?;
    Ok(())
}

pub fn publish_text(dest: &Path, text: &str) -> Result<()> {
    publish_bytes(dest, text.as_bytes())
}

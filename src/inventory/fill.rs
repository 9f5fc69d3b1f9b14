//! Batch code assignment and the duplicate audit.
use super::table::Table;
use crate::ean;
use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// Assign a code to every row that does not carry a pinned one.
///
/// Unpinned rows always receive the code derived from their id, so repeated
/// fills leave an already-filled table unchanged. Pinned rows keep their
/// current `ean` untouched; a pinned row without one is an error because the
/// filled table must be fully populated. Returns how many rows changed.
pub(crate) fn fill_missing(table: &mut Table) -> Result<usize> {
    let mut changed = 0;
    for record in &mut table.records {
        if record.pinned() {
            if record.ean.is_empty() {
                bail!("row {} is pinned but has no ean", record.id);
            }
            continue;
        }
        let code = ean::create_ean13(&record.id)
            .with_context(|| format!("derive code for row {}", record.id))?;
        if record.ean != code {
            record.ean = code;
            changed += 1;
        }
    }
    Ok(changed)
}

/// A code carried by more than one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct DuplicateGroup {
    pub(crate) ean: String,
    pub(crate) ids: Vec<String>,
}

/// Collect non-empty codes held by more than one row, sorted by code.
pub(crate) fn duplicate_groups(table: &Table) -> Vec<DuplicateGroup> {
    let mut owners: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for record in &table.records {
        if record.ean.is_empty() {
            continue;
        }
        owners
            .entry(record.ean.as_str())
            .or_default()
            .push(record.id.as_str());
    }
    owners
        .into_iter()
        .filter(|(_, ids)| ids.len() > 1)
        .map(|(ean, ids)| DuplicateGroup {
            ean: ean.to_string(),
            ids: ids.into_iter().map(str::to_string).collect(),
        })
        .collect()
}

/// A filled table must carry pairwise-distinct codes.
pub(crate) fn audit_duplicates(table: &Table) -> Result<()> {
    let groups = duplicate_groups(table);
    if groups.is_empty() {
        return Ok(());
    }
    let rendered: Vec<String> = groups
        .iter()
        .map(|group| format!("{} (rows {})", group.ean, group.ids.join(", ")))
        .collect();
    bail!("duplicated ean codes: {}", rendered.join("; "));
}

#[cfg(test)]
#[path = "fill_tests.rs"]
mod tests;

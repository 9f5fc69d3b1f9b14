//! Labels step: extract and publish the print list only.
use crate::cli::LabelsArgs;
use crate::inventory::{load_table, print_list, render_print_list};
use crate::staging;
use anyhow::Result;

/// Extract the print list from an export whose codes are already assigned.
/// A contributing row without a code is an error; run `fill` first.
pub(crate) fn run_labels(args: &LabelsArgs) -> Result<()> {
    let table = load_table(&args.csv)?;
    tracing::debug!(rows = table.records.len(), "loaded {}", args.csv.display());
    let codes = print_list(&table)?;
    staging::publish_text(&args.out, &render_print_list(&codes))?;
    println!(
        "Wrote print list to {} ({} labels pending)",
        args.out.display(),
        codes.len()
    );
    Ok(())
}

//! Fill step: assign codes, audit them, and publish both outputs.
use crate::cli::FillArgs;
use crate::inventory::{
    audit_duplicates, fill_missing, load_table, print_list, render_print_list, table_to_csv,
};
use crate::staging;
use anyhow::Result;

/// Load the export, fill every unpinned row, and publish the filled table
/// plus the print list. Nothing is written when the duplicate audit fails.
pub(crate) fn run_fill(args: &FillArgs) -> Result<()> {
    let mut table = load_table(&args.csv)?;
    tracing::debug!(rows = table.records.len(), "loaded {}", args.csv.display());
    let changed = fill_missing(&mut table)?;
    audit_duplicates(&table)?;
    let codes = print_list(&table)?;
    staging::publish_bytes(&args.out, &table_to_csv(&table)?)?;
    tracing::debug!(changed, "published {}", args.out.display());
    staging::publish_text(&args.labels_out, &render_print_list(&codes))?;
    tracing::debug!(
        labels = codes.len(),
        "published {}",
        args.labels_out.display()
    );
    println!(
        "Wrote filled inventory to {} ({changed} rows updated)",
        args.out.display()
    );
    println!(
        "Wrote print list to {} ({} labels pending)",
        args.labels_out.display(),
        codes.len()
    );
    Ok(())
}

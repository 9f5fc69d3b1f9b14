//! Print-list extraction for rows still waiting to be labeled.
use super::table::Table;
use anyhow::{bail, Result};

/// Collect the codes to print: rows flagged labelable and not yet labeled
/// contribute their code `amount` times, in row order.
pub(crate) fn print_list(table: &Table) -> Result<Vec<String>> {
    let mut codes = Vec::new();
    for record in &table.records {
        if !record.labelable || record.is_labeled || record.amount == 0 {
            continue;
        }
        if record.ean.is_empty() {
            bail!("row {} has no ean to print", record.id);
        }
        codes.extend(std::iter::repeat_n(
            record.ean.clone(),
            record.amount as usize,
        ));
    }
    Ok(codes)
}

/// One code per line, trailing newline included; empty list renders empty.
pub(crate) fn render_print_list(codes: &[String]) -> String {
    let mut out = String::new();
    for code in codes {
        out.push_str(code);
        out.push('\n');
    }
    out
}

//! Check step: audit an inventory without writing anything.
use crate::cli::CheckArgs;
use crate::ean;
use crate::inventory::{duplicate_groups, load_table, DuplicateGroup, Table};
use anyhow::{bail, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct CheckSummary {
    rows: usize,
    pinned: usize,
    labels_pending: usize,
    missing_ean: Vec<String>,
    invalid_ean: Vec<InvalidCode>,
    duplicated_ean: Vec<DuplicateGroup>,
    clean: bool,
}

#[derive(Debug, Serialize)]
struct InvalidCode {
    id: String,
    ean: String,
    fault: String,
}

/// Report problems to stdout. The human form exits non-zero when the table
/// has problems; `--json` always exits zero and leaves the verdict to the
/// consumer.
pub(crate) fn run_check(args: &CheckArgs) -> Result<()> {
    let table = load_table(&args.csv)?;
    tracing::debug!(rows = table.records.len(), "loaded {}", args.csv.display());
    let summary = summarize(&table);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }
    render_human(&summary);
    if !summary.clean {
        bail!(
            "inventory has problems: {} rows missing a code, {} invalid, {} duplicated",
            summary.missing_ean.len(),
            summary.invalid_ean.len(),
            summary.duplicated_ean.len()
        );
    }
    Ok(())
}

fn summarize(table: &Table) -> CheckSummary {
    let mut missing = Vec::new();
    let mut invalid = Vec::new();
    let mut labels_pending = 0usize;
    let mut pinned = 0usize;
    for record in &table.records {
        if record.pinned() {
            pinned += 1;
        }
        if record.labelable && !record.is_labeled {
            labels_pending += record.amount as usize;
        }
        if record.ean.is_empty() {
            missing.push(record.id.clone());
            continue;
        }
        if let Err(fault) = ean::validate(&record.ean) {
            invalid.push(InvalidCode {
                id: record.id.clone(),
                ean: record.ean.clone(),
                fault: fault.to_string(),
            });
        }
    }
    let duplicated = duplicate_groups(table);
    let clean = missing.is_empty() && invalid.is_empty() && duplicated.is_empty();
    CheckSummary {
        rows: table.records.len(),
        pinned,
        labels_pending,
        missing_ean: missing,
        invalid_ean: invalid,
        duplicated_ean: duplicated,
        clean,
    }
}

fn render_human(summary: &CheckSummary) {
    println!("rows: {}", summary.rows);
    println!("pinned: {}", summary.pinned);
    println!("labels pending: {}", summary.labels_pending);
    for id in &summary.missing_ean {
        println!("missing ean: {id}");
    }
    for entry in &summary.invalid_ean {
        println!("invalid ean: {} has {} ({})", entry.id, entry.ean, entry.fault);
    }
    for group in &summary.duplicated_ean {
        println!(
            "duplicated ean: {} (rows {})",
            group.ean,
            group.ids.join(", ")
        );
    }
    if summary.clean {
        println!("ok");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::table::parse_table;

    fn summary_of(text: &str) -> CheckSummary {
        summarize(&parse_table(text.as_bytes()).expect("fixture table"))
    }

    #[test]
    fn clean_table_reports_counts_and_no_problems() {
        let summary = summary_of(
            "id;name;ean;fixed_ean;labelable;is_labeled;amount\n\
A-001;Bier;4006381333931;4006381333931;1;0;2\n\
A-002;Schraube;4195933260433;;1;0;3\n\
A-003;Riegel;1483270433669;;0;0;5\n",
        );
        assert!(summary.clean);
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.pinned, 1);
        assert_eq!(summary.labels_pending, 5);
        assert!(summary.missing_ean.is_empty());
        assert!(summary.invalid_ean.is_empty());
        assert!(summary.duplicated_ean.is_empty());
    }

    #[test]
    fn problems_land_in_their_buckets() {
        let summary = summary_of(
            "id;name;ean;fixed_ean;labelable;is_labeled;amount\n\
A-001;Bier;;;1;0;2\n\
A-002;Radler;1234567890181;;0;0;0\n\
A-003;Helles;4006381333931;4006381333931;1;1;1\n\
A-004;Dunkles;4006381333931;4006381333931;1;1;1\n",
        );
        assert!(!summary.clean);
        assert_eq!(summary.missing_ean, vec!["A-001".to_string()]);
        assert_eq!(summary.invalid_ean.len(), 1);
        assert_eq!(summary.invalid_ean[0].id, "A-002");
        assert!(summary.invalid_ean[0].fault.contains("check digit"));
        assert_eq!(summary.duplicated_ean.len(), 1);
        assert_eq!(summary.duplicated_ean[0].ean, "4006381333931");
        assert_eq!(summary.labels_pending, 2);
    }

    #[test]
    fn short_codes_are_reported_as_length_faults() {
        let summary = summary_of(
            "id;name;ean;fixed_ean;labelable;is_labeled;amount\n\
A-001;Bier;1234;1234;0;0;0\n",
        );
        assert_eq!(summary.invalid_ean.len(), 1);
        assert!(summary.invalid_ean[0].fault.contains("neither 8 nor 13"));
    }

    #[test]
    fn json_summary_serializes_with_stable_field_names() {
        let summary = summary_of(
            "id;name;ean;fixed_ean;labelable;is_labeled;amount\n\
A-001;Bier;4006381333931;4006381333931;1;0;2\n",
        );
        let value = serde_json::to_value(&summary).expect("serialize");
        assert_eq!(value["rows"], 1);
        assert_eq!(value["clean"], true);
        assert!(value["missing_ean"].as_array().expect("array").is_empty());
    }
}

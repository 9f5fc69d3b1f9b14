//! Inventory CSV load and store.
//!
//! Input follows the shop system's export dialect: semicolon-delimited,
//! latin-1 encoded, first column the row identifier. Output is plain
//! comma-delimited UTF-8 with header and identifier column included.
use super::types::{Header, Record};
use anyhow::{anyhow, bail, Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

pub(crate) const INPUT_DELIMITER: u8 = b';';

/// The inventory as loaded: the header row plus every record in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Table {
    pub(crate) header: Header,
    pub(crate) records: Vec<Record>,
}

pub(crate) fn load_table(path: &Path) -> Result<Table> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    parse_table(&bytes).with_context(|| format!("load {}", path.display()))
}

/// Parse a semicolon-delimited latin-1 export into a table.
pub(crate) fn parse_table(bytes: &[u8]) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .delimiter(INPUT_DELIMITER)
        .has_headers(false)
        .from_reader(bytes);
    let mut header: Option<Header> = None;
    let mut records = Vec::new();
    for result in reader.byte_records() {
        let raw = result.context("parse csv")?;
        let line = raw.position().map_or(0, |position| position.line());
        let cells: Vec<String> = raw.iter().map(decode_latin1).collect();
        match &header {
            None => header = Some(Header::from_names(cells).context("header row")?),
            Some(header) => {
                let record =
                    Record::from_cells(header, &cells).with_context(|| format!("row {line}"))?;
                records.push(record);
            }
        }
    }
    let Some(header) = header else {
        bail!("no header row");
    };
    Ok(Table { header, records })
}

/// Render the table as comma-delimited UTF-8 CSV bytes.
pub(crate) fn table_to_csv(table: &Table) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer
        .write_record(&table.header.names)
        .context("write header")?;
    for record in &table.records {
        writer
            .write_record(record.to_cells(&table.header))
            .with_context(|| format!("write row {}", record.id))?;
    }
    writer.into_inner().map_err(|err| anyhow!("flush csv: {err}"))
}

/// Latin-1 maps every byte to the Unicode scalar with the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;

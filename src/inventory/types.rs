//! Column roles and the typed inventory record.
use anyhow::{bail, Context, Result};

/// What a CSV column means to the batch steps.
///
/// The first column is always the row identifier regardless of its header
/// label; unrecognized columns ride along as `Extra` and are written back
/// verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
    Id,
    Ean,
    FixedEan,
    Labelable,
    IsLabeled,
    Amount,
    Extra(usize),
}

/// Header row as read, plus the resolved role of every column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Header {
    pub(crate) names: Vec<String>,
    pub(crate) roles: Vec<Role>,
}

impl Header {
    pub(crate) fn from_names(names: Vec<String>) -> Result<Self> {
        if names.is_empty() {
            bail!("header row is empty");
        }
        let mut roles = Vec::with_capacity(names.len());
        let mut extras = 0;
        roles.push(Role::Id);
        for name in &names[1..] {
            let role = match name.as_str() {
                "ean" => Role::Ean,
                "fixed_ean" => Role::FixedEan,
                "labelable" => Role::Labelable,
                "is_labeled" => Role::IsLabeled,
                "amount" => Role::Amount,
                _ => {
                    roles.push(Role::Extra(extras));
                    extras += 1;
                    continue;
                }
            };
            if roles.contains(&role) {
                bail!("duplicate column {name:?}");
            }
            roles.push(role);
        }
        for (role, name) in [
            (Role::Ean, "ean"),
            (Role::FixedEan, "fixed_ean"),
            (Role::Labelable, "labelable"),
            (Role::IsLabeled, "is_labeled"),
            (Role::Amount, "amount"),
        ] {
            if !roles.contains(&role) {
                bail!("missing column {name:?}");
            }
        }
        Ok(Self { names, roles })
    }
}

/// One inventory row with typed fields for the columns the batch steps read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Record {
    pub(crate) id: String,
    pub(crate) ean: String,
    pub(crate) fixed_ean: Option<String>,
    pub(crate) labelable: bool,
    pub(crate) is_labeled: bool,
    pub(crate) amount: u32,
    pub(crate) extras: Vec<String>,
}

impl Record {
    /// Build a record from one CSV row laid out per `header`.
    pub(crate) fn from_cells(header: &Header, cells: &[String]) -> Result<Self> {
        if cells.len() != header.roles.len() {
            bail!(
                "expected {} fields, found {}",
                header.roles.len(),
                cells.len()
            );
        }
        let mut record = Self {
            id: String::new(),
            ean: String::new(),
            fixed_ean: None,
            labelable: false,
            is_labeled: false,
            amount: 0,
            extras: Vec::new(),
        };
        for (role, cell) in header.roles.iter().zip(cells) {
            match role {
                Role::Id => record.id = cell.clone(),
                Role::Ean => record.ean = cell.clone(),
                Role::FixedEan => {
                    record.fixed_ean = (!cell.is_empty()).then(|| cell.clone());
                }
                Role::Labelable => {
                    record.labelable = parse_flag(cell).context("column labelable")?;
                }
                Role::IsLabeled => {
                    record.is_labeled = parse_flag(cell).context("column is_labeled")?;
                }
                Role::Amount => {
                    record.amount = parse_count(cell).context("column amount")?;
                }
                Role::Extra(_) => record.extras.push(cell.clone()),
            }
        }
        if record.id.is_empty() {
            bail!("empty row identifier");
        }
        Ok(record)
    }

    /// Render the record back into cells in the header's column order.
    pub(crate) fn to_cells(&self, header: &Header) -> Vec<String> {
        header
            .roles
            .iter()
            .map(|role| match role {
                Role::Id => self.id.clone(),
                Role::Ean => self.ean.clone(),
                Role::FixedEan => self.fixed_ean.clone().unwrap_or_default(),
                Role::Labelable => flag_cell(self.labelable),
                Role::IsLabeled => flag_cell(self.is_labeled),
                Role::Amount => self.amount.to_string(),
                Role::Extra(index) => self.extras[*index].clone(),
            })
            .collect()
    }

    /// A pinned row keeps its current code across fills.
    pub(crate) fn pinned(&self) -> bool {
        self.fixed_ean.is_some()
    }
}

/// Parse a 0/1 flag cell. Empty reads as unset, which means false.
pub(crate) fn parse_flag(raw: &str) -> Result<bool> {
    match parse_count(raw)? {
        0 => Ok(false),
        1 => Ok(true),
        other => bail!("flag value {other} is neither 0 nor 1"),
    }
}

/// Parse a non-negative count cell. Blank cells read as zero; integral
/// decimal-comma forms like `3,0` are accepted.
pub(crate) fn parse_count(raw: &str) -> Result<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    let integral = match raw.split_once(',') {
        Some((whole, frac)) if !frac.is_empty() && frac.bytes().all(|b| b == b'0') => whole,
        Some(_) => bail!("count {raw:?} is not a whole number"),
        None => raw,
    };
    integral
        .parse::<u32>()
        .with_context(|| format!("count {raw:?} is not a non-negative integer"))
}

fn flag_cell(value: bool) -> String {
    let cell = if value { "1" } else { "0" };
    cell.to_string()
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;

//! Typed model of the inventory table and its batch operations.
//!
//! Loading, filling, auditing, and print-list extraction are separate
//! functions over one `Table` value so each workflow step composes only the
//! pieces it needs.
mod fill;
mod labels;
pub(crate) mod table;
mod types;

pub(crate) use fill::{audit_duplicates, duplicate_groups, fill_missing, DuplicateGroup};
pub(crate) use labels::{print_list, render_print_list};
pub(crate) use table::{load_table, table_to_csv, Table};

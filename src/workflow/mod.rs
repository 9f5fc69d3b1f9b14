//! One workflow step per CLI subcommand.
//!
//! Each step is intentionally small so the CLI can remain thin and the fill
//! flow stays predictable.
mod check;
mod fill;
mod gen;
mod labels;

pub(crate) use check::run_check;
pub(crate) use fill::run_fill;
pub(crate) use gen::run_gen;
pub(crate) use labels::run_labels;

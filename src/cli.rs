//! CLI argument parsing for the inventory fill workflow.
//!
//! The CLI is intentionally thin: each subcommand maps onto one workflow
//! function without embedding policy, so the same core logic stays reusable
//! and testable on its own.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default inventory export read by the table-driven subcommands.
pub const DEFAULT_INVENTORY_CSV: &str = "data/inventory.csv";
/// Default destination for the filled table.
pub const DEFAULT_FILLED_CSV: &str = "data/filled_inventory.csv";
/// Default destination for the quantity-expanded print list.
pub const DEFAULT_PRINT_LIST_CSV: &str = "data/eans_to_be_printed.csv";

/// Root CLI entrypoint for the fill workflow.
///
/// Keeping a single `RootArgs` type makes command routing obvious and avoids
/// hidden defaults in subcommand constructors.
#[derive(Parser, Debug)]
#[command(
    name = "eanfill",
    version,
    about = "Assign EAN-13 codes to inventory rows and extract label print lists",
    after_help = "Commands:\n  fill --csv <FILE>    Fill missing codes, write the filled table and print list\n  labels --csv <FILE>  Extract the print list from an already-coded export\n  check --csv <FILE>   Audit codes without writing anything\n  gen [--seed <VALUE>] Print generated codes directly\n\nExamples:\n  eanfill fill --csv data/inventory.csv\n  eanfill fill --csv export.csv --out filled.csv --labels-out labels.csv\n  eanfill labels --csv data/inventory.csv\n  eanfill check --csv data/inventory.csv --json\n  eanfill gen --seed A-001\n  eanfill gen --count 5",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level workflow commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    Fill(FillArgs),
    Labels(LabelsArgs),
    Check(CheckArgs),
    Gen(GenArgs),
}

/// Fill command inputs.
#[derive(Parser, Debug)]
#[command(about = "Fill missing EAN codes and publish the filled inventory")]
pub struct FillArgs {
    /// Inventory export to read (semicolon-delimited, latin-1)
    #[arg(long, value_name = "FILE", default_value = DEFAULT_INVENTORY_CSV)]
    pub csv: PathBuf,

    /// Destination for the filled table (comma-delimited, UTF-8)
    #[arg(long, value_name = "FILE", default_value = DEFAULT_FILLED_CSV)]
    pub out: PathBuf,

    /// Destination for the print list, one code per pending label
    #[arg(long, value_name = "FILE", default_value = DEFAULT_PRINT_LIST_CSV)]
    pub labels_out: PathBuf,

    /// Emit a verbose transcript of the run
    #[arg(long)]
    pub verbose: bool,
}

/// Labels command inputs.
#[derive(Parser, Debug)]
#[command(about = "Extract the print list from an inventory whose codes are assigned")]
pub struct LabelsArgs {
    /// Inventory export to read (semicolon-delimited, latin-1)
    #[arg(long, value_name = "FILE", default_value = DEFAULT_INVENTORY_CSV)]
    pub csv: PathBuf,

    /// Destination for the print list, one code per pending label
    #[arg(long, value_name = "FILE", default_value = DEFAULT_PRINT_LIST_CSV)]
    pub out: PathBuf,

    /// Emit a verbose transcript of the run
    #[arg(long)]
    pub verbose: bool,
}

/// Check command inputs.
#[derive(Parser, Debug)]
#[command(about = "Audit inventory codes without writing anything")]
pub struct CheckArgs {
    /// Inventory export to read (semicolon-delimited, latin-1)
    #[arg(long, value_name = "FILE", default_value = DEFAULT_INVENTORY_CSV)]
    pub csv: PathBuf,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,

    /// Emit a verbose transcript of the run
    #[arg(long)]
    pub verbose: bool,
}

/// Gen command inputs.
#[derive(Parser, Debug)]
#[command(about = "Generate EAN-13 codes directly")]
pub struct GenArgs {
    /// Derive the code from this seed instead of a random draw
    #[arg(long, value_name = "VALUE", conflicts_with = "count")]
    pub seed: Option<String>,

    /// How many random codes to print
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub count: u32,
}

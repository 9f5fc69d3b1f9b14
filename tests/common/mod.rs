//! Shared test infrastructure for integration tests.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// A small inventory export covering the interesting row shapes: a pinned
/// row, unpinned rows with and without label work, and latin-1 text.
pub const STANDARD_INVENTORY: &[u8] = b"id;name;ean;fixed_ean;labelable;is_labeled;amount;price\n\
A-001;M\xE4rzen Br\xE4u;4006381333931;4006381333931;1;0;2;2,50\n\
A-002;Schraube M3;;;1;0;3;0,10\n\
A-003;M\xFCsli Riegel;;;0;0;5;1,20\n\
A-004;W\xFCrfel;;;1;1;4;0,99\n";

/// Scratch directory with one inventory export at `inventory.csv`.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn with_inventory(bytes: &[u8]) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        std::fs::write(dir.path().join("inventory.csv"), bytes).expect("write inventory");
        Self { dir }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn path_arg(&self, name: &str) -> String {
        self.path(name).display().to_string()
    }

    #[allow(dead_code)]
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).expect("read output")
    }
}

/// Run the compiled binary with the given arguments.
pub fn run_eanfill(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_eanfill"))
        .args(args)
        .output()
        .expect("run eanfill")
}

pub fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

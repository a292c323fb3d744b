//! Shared helpers for the slim_predict integration tests.
//!
//! Every test gets its own temporary directory holding empty stand-ins for
//! the model, old and test files; the interpreter only checks that they exist.

use std::fs::File;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

pub const MODEL: &str = "model.bin";
pub const OLD: &str = "old.csr";
pub const TEST: &str = "test.csr";

/// Heading only the full option reference carries
pub const HELP_MARKER: &str = "Parameters:";

/// Text only the short usage reminder carries
pub const SHORT_HELP_MARKER: &str = "use 'slim_predict -help' for a summary of the options.";

pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        for name in [MODEL, OLD, TEST] {
            File::create(dir.path().join(name)).expect("create fixture file");
        }
        Self { dir }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// The binary, running inside the workspace with the strict switch cleared.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("slim_predict").expect("binary is built");
        cmd.current_dir(self.dir.path())
            .env_remove("SLIM_PREDICT_STRICT_EXIT")
            .env_remove("RUST_LOG");
        cmd
    }
}

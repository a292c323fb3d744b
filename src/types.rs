//! Shared types used across the interpreter.
//! Includes the normalized `InputFormat` and the user-facing `FormatArg`
//! lookup table behind `-ifmt`.
use clap::ValueEnum;
use serde::Serialize;

/// Sparse matrix encoding of the model/old/test files, as stored in the
/// configuration. The no-ratings CSR variant is folded into `Csr` with
/// `read_values` cleared.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize)]
pub enum InputFormat {
    Csr,
    Cluto,
    Ijv,
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Csr => write!(f, "CSR"),
            InputFormat::Cluto => write!(f, "CLUTO"),
            InputFormat::Ijv => write!(f, "IJV"),
        }
    }
}

/// Names accepted by `-ifmt`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize)]
pub enum FormatArg {
    Csr,
    /// CSR without ratings
    Csrnv,
    Cluto,
    Ijv,
}

impl FormatArg {
    /// Case-sensitive name lookup, `None` for anything outside the table.
    pub fn lookup(name: &str) -> Option<Self> {
        <FormatArg as ValueEnum>::from_str(name, false).ok()
    }

    /// Storage format plus whether rating values are read from the file.
    pub fn resolve(self) -> (InputFormat, bool) {
        match self {
            FormatArg::Csr => (InputFormat::Csr, true),
            FormatArg::Csrnv => (InputFormat::Csr, false),
            FormatArg::Cluto => (InputFormat::Cluto, true),
            FormatArg::Ijv => (InputFormat::Ijv, true),
        }
    }
}

//! Crate-level error type and `Result` alias. Every variant is a validation
//! failure detected while interpreting the command line; the `Display` text is
//! the diagnostic shown to the user.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid -ifmt of {value}.")]
    InvalidInputFormat { value: String },

    #[error("The -{option} parameter should be non-negative.")]
    NegativeValue { option: &'static str, value: i64 },

    #[error("The -{option} parameter should be an integer, got '{value}'.")]
    InvalidInteger { option: &'static str, value: String },

    #[error("Input model file {} does not exist.", path.display())]
    MissingModelFile { path: PathBuf },

    #[error("Input old file {} does not exist.", path.display())]
    MissingOldFile { path: PathBuf },

    #[error("Input test file {} does not exist.", path.display())]
    MissingTestFile { path: PathBuf },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: &'static str },
}

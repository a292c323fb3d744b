//! Prediction configuration handed to the model loader and prediction engine.
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::types::InputFormat;

/// Values settable through options, before any positional file is seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictOptions {
    pub input_format: InputFormat,
    /// False only for the no-ratings CSR variant
    pub read_values: bool,
    pub binarize: bool,
    /// None means no predictions are written
    pub output_path: Option<PathBuf>,
    pub num_recommendations: usize,
    pub debug_level: u32,
}

impl Default for PredictOptions {
    fn default() -> Self {
        Self {
            input_format: InputFormat::Csr,
            read_values: true,
            binarize: false,
            output_path: None,
            num_recommendations: 10,
            debug_level: 0,
        }
    }
}

/// Validated configuration for one `slim_predict` run.
///
/// Only the interpreter builds one, after every referenced input file has
/// been found on disk; it is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    #[serde(flatten)]
    options: PredictOptions,
    model_path: PathBuf,
    reference_data_path: PathBuf,
    test_data_path: Option<PathBuf>,
}

impl Configuration {
    pub(crate) fn new(
        options: PredictOptions,
        model_path: PathBuf,
        reference_data_path: PathBuf,
        test_data_path: Option<PathBuf>,
    ) -> Self {
        Self {
            options,
            model_path,
            reference_data_path,
            test_data_path,
        }
    }

    pub fn options(&self) -> &PredictOptions {
        &self.options
    }

    pub fn input_format(&self) -> InputFormat {
        self.options.input_format
    }

    pub fn read_values(&self) -> bool {
        self.options.read_values
    }

    pub fn binarize(&self) -> bool {
        self.options.binarize
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.options.output_path.as_deref()
    }

    pub fn num_recommendations(&self) -> usize {
        self.options.num_recommendations
    }

    pub fn debug_level(&self) -> u32 {
        self.options.debug_level
    }

    /// Model produced by `slim_learn`.
    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    /// Historical interactions of each user.
    pub fn reference_data_path(&self) -> &Path {
        &self.reference_data_path
    }

    /// Hidden items of each user, when evaluating.
    pub fn test_data_path(&self) -> Option<&Path> {
        self.test_data_path.as_deref()
    }
}

fn path_or_none(path: Option<&Path>) -> String {
    path.map_or_else(|| "none".to_string(), |p| p.display().to_string())
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = if self.read_values() { "" } else { " (no values)" };
        writeln!(f, "Prediction parameters:")?;
        writeln!(f, "  model file:      {}", self.model_path.display())?;
        writeln!(f, "  old file:        {}", self.reference_data_path.display())?;
        writeln!(f, "  test file:       {}", path_or_none(self.test_data_path()))?;
        writeln!(f, "  input format:    {}{}", self.input_format(), values)?;
        writeln!(f, "  binarize:        {}", self.binarize())?;
        writeln!(f, "  output file:     {}", path_or_none(self.output_path()))?;
        writeln!(f, "  recommendations: {}", self.num_recommendations())?;
        write!(f, "  debug level:     {}", self.debug_level())
    }
}

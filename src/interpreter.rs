//! Turns the raw argument vector into a validated [`Configuration`].
//!
//! Interpretation never prints or exits. It returns an [`Outcome`] for the
//! non-fatal paths (help requested, option scanning failed, wrong number of
//! files) and an [`Error`] for validation failures; the caller decides what to
//! show and which exit status to use.
use std::ffi::OsString;
use std::path::PathBuf;

use tracing::debug;

use crate::args::{RawArgs, Scan, ScanFailure, Setting, scan};
use crate::config::{Configuration, PredictOptions};
use crate::error::{Error, Result};
use crate::types::FormatArg;

/// Non-fatal results of interpreting a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Everything validated; ready to predict.
    Run(Configuration),
    /// `-help` was given.
    Help,
    /// Option scanning failed (unknown or ambiguous option, missing value).
    UnknownOption { message: String },
    /// Number of positional files outside `1..=3`.
    Usage { count: usize },
}

const MIN_FILES: usize = 1;
const MAX_FILES: usize = 3;

/// Interpret a full argument vector, program name first.
pub fn parse<I, T>(args: I) -> Result<Outcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let Scan { args: raw, settings } = match scan(args) {
        Ok(scan) => scan,
        Err(ScanFailure { error, before }) => {
            debug!(kind = ?error.kind(), "option scanning failed");
            // Options given before the rejected token have already been acted on.
            if let Some(before) = before {
                if before.args.help_requested() {
                    return Ok(Outcome::Help);
                }
                apply_options(&before.args, &before.settings)?;
            }
            return Ok(Outcome::UnknownOption {
                message: error.to_string(),
            });
        }
    };

    if raw.help_requested() {
        return Ok(Outcome::Help);
    }

    let options = apply_options(&raw, &settings)?;

    let count = raw.files.len();
    if !(MIN_FILES..=MAX_FILES).contains(&count) {
        debug!(count, "wrong number of input files");
        return Ok(Outcome::Usage { count });
    }

    let mut files = raw.files.into_iter().map(PathBuf::from);
    let Some(model_path) = files.next() else {
        return Ok(Outcome::Usage { count });
    };
    let model_path = require_file(model_path, |path| Error::MissingModelFile { path })?;
    let reference_data_path = files.next().ok_or(Error::MissingArgument { arg: "old-file" })?;
    let reference_data_path =
        require_file(reference_data_path, |path| Error::MissingOldFile { path })?;
    let test_data_path = files
        .next()
        .map(|path| require_file(path, |path| Error::MissingTestFile { path }))
        .transpose()?;

    let config = Configuration::new(options, model_path, reference_data_path, test_data_path);
    debug!(?config, "command line accepted");
    Ok(Outcome::Run(config))
}

/// Fold the scanned options over the defaults in command-line order. The
/// first invalid value is fatal; otherwise the last occurrence wins.
fn apply_options(raw: &RawArgs, settings: &[Setting]) -> Result<PredictOptions> {
    let mut options = PredictOptions::default();

    for setting in settings {
        match setting {
            Setting::InputFormat(name) => {
                let format = FormatArg::lookup(name).ok_or_else(|| Error::InvalidInputFormat {
                    value: name.clone(),
                })?;
                (options.input_format, options.read_values) = format.resolve();
            }
            Setting::Recommendations(value) => {
                options.num_recommendations = non_negative("nrcmds", value)?;
            }
            Setting::DebugLevel(value) => {
                options.debug_level = non_negative("dbglvl", value)?;
            }
        }
    }

    options.binarize = raw.binarize_requested();
    // An empty name leaves predictions unwritten.
    options.output_path = raw
        .outfile
        .last()
        .filter(|path| !path.is_empty())
        .map(PathBuf::from);

    Ok(options)
}

fn non_negative<N: TryFrom<i64>>(option: &'static str, value: &str) -> Result<N> {
    let invalid = || Error::InvalidInteger {
        option,
        value: value.to_string(),
    };
    let parsed: i64 = value.trim().parse().map_err(|_| invalid())?;
    if parsed < 0 {
        return Err(Error::NegativeValue {
            option,
            value: parsed,
        });
    }
    N::try_from(parsed).map_err(|_| invalid())
}

fn require_file(path: PathBuf, missing: impl FnOnce(PathBuf) -> Error) -> Result<PathBuf> {
    if path.is_file() {
        Ok(path)
    } else {
        Err(missing(path))
    }
}

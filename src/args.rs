//! The `slim_predict` option table and its long-only front end.
//!
//! The tool takes its options in the single-dash long form (`-nrcmds=5`,
//! `-binarize`), also accepting `-name value`, `--name` and unambiguous
//! prefixes such as `-bin`. clap only understands the double-dash form, so
//! the raw vector is rewritten by [`to_gnu_style`] before clap sees it.
use std::ffi::OsString;

use clap::{ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser};
use tracing::trace;

#[derive(Parser, Debug)]
#[command(
    name = "slim_predict",
    disable_help_flag = true,
    disable_version_flag = true,
    infer_long_args = true
)]
pub struct RawArgs {
    /// Input file format (csr, csrnv, cluto, ijv)
    #[arg(long, allow_hyphen_values = true, action = ArgAction::Append)]
    pub ifmt: Vec<String>,

    /// Binarize the ratings
    #[arg(long, action = ArgAction::Count)]
    pub binarize: u8,

    /// File receiving the predictions
    #[arg(long, allow_hyphen_values = true, action = ArgAction::Append)]
    pub outfile: Vec<OsString>,

    /// Number of items to recommend for each user
    #[arg(long, allow_hyphen_values = true, action = ArgAction::Append)]
    pub nrcmds: Vec<String>,

    /// Debug level
    #[arg(long, allow_hyphen_values = true, action = ArgAction::Append)]
    pub dbglvl: Vec<String>,

    #[arg(long, action = ArgAction::Count)]
    pub help: u8,

    /// model-file old-file [test-file]
    #[arg(value_name = "FILE", action = ArgAction::Append)]
    pub files: Vec<OsString>,
}

impl RawArgs {
    pub fn help_requested(&self) -> bool {
        self.help > 0
    }

    pub fn binarize_requested(&self) -> bool {
        self.binarize > 0
    }
}

/// An option value that still has to be validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Setting {
    InputFormat(String),
    Recommendations(String),
    DebugLevel(String),
}

/// A successfully scanned command line.
#[derive(Debug)]
pub struct Scan {
    pub args: RawArgs,
    /// Value options in the order they were given
    pub settings: Vec<Setting>,
}

/// Scanning stopped at a token clap rejected.
#[derive(Debug)]
pub struct ScanFailure {
    pub error: clap::Error,
    /// Everything scanned before the rejected token
    pub before: Option<Scan>,
}

/// Scan a full argument vector (program name first) written in the
/// long-only style.
pub fn scan<I, T>(args: I) -> Result<Scan, ScanFailure>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args = to_gnu_style(args);
    trace!(?args, "normalized command line");
    scan_gnu(&args).map_err(|error| {
        // The longest prefix clap accepts ends right before the offending token.
        let before = (1..args.len()).rev().find_map(|end| scan_gnu(&args[..end]).ok());
        ScanFailure { error, before }
    })
}

fn scan_gnu(args: &[OsString]) -> Result<Scan, clap::Error> {
    let matches = RawArgs::command().try_get_matches_from(args)?;
    let settings = settings_in_order(&matches);
    let args = RawArgs::from_arg_matches(&matches)?;
    Ok(Scan { args, settings })
}

fn settings_in_order(matches: &ArgMatches) -> Vec<Setting> {
    let table: [(&str, fn(String) -> Setting); 3] = [
        ("ifmt", Setting::InputFormat),
        ("nrcmds", Setting::Recommendations),
        ("dbglvl", Setting::DebugLevel),
    ];
    let mut indexed: Vec<(usize, Setting)> = Vec::new();
    for (id, make) in table {
        let (Some(values), Some(indices)) =
            (matches.get_many::<String>(id), matches.indices_of(id))
        else {
            continue;
        };
        indexed.extend(indices.zip(values.map(|value| make(value.clone()))));
    }
    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, setting)| setting).collect()
}

/// Long option names and whether each one consumes a value.
fn long_options() -> Vec<(String, bool)> {
    RawArgs::command()
        .get_arguments()
        .filter_map(|arg| {
            arg.get_long()
                .map(|long| (long.to_string(), arg.get_action().takes_values()))
        })
        .collect()
}

/// Exact match first, then a unique prefix.
fn resolve<'a>(name: &str, table: &'a [(String, bool)]) -> Option<&'a (String, bool)> {
    if let Some(exact) = table.iter().find(|(long, _)| long == name) {
        return Some(exact);
    }
    let mut candidates = table.iter().filter(|(long, _)| long.starts_with(name));
    match (candidates.next(), candidates.next()) {
        (Some(only), None) => Some(only),
        _ => None,
    }
}

/// The part after the leading dashes, for tokens that look like options.
fn option_body(token: &str) -> Option<&str> {
    let body = token
        .strip_prefix("--")
        .or_else(|| token.strip_prefix('-'))?;
    body.starts_with(|c: char| c.is_ascii_alphabetic())
        .then_some(body)
}

/// Rewrite `-name[=value]` tokens into `--name[=value]`.
///
/// The first element is the program name and is kept as is. Everything after
/// a bare `--`, and the token following a value-taking option written without
/// `=`, is passed through untouched so values like `-1` reach clap verbatim.
pub fn to_gnu_style<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let table = long_options();
    let mut iter = args.into_iter().map(Into::into);
    let mut out: Vec<OsString> = iter.next().into_iter().collect();
    let mut value_pending = false;
    let mut options_done = false;

    for arg in iter {
        if options_done || value_pending {
            value_pending = false;
            out.push(arg);
            continue;
        }
        if arg.to_str() == Some("--") {
            options_done = true;
            out.push(arg);
            continue;
        }
        let Some(body) = arg.to_str().and_then(option_body) else {
            out.push(arg);
            continue;
        };
        if !body.contains('=') {
            value_pending = resolve(body, &table).is_some_and(|(_, takes_value)| *takes_value);
        }
        out.push(OsString::from(format!("--{body}")));
    }

    out
}

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use slim_predict::help::{HELP, SHORT_HELP};
use slim_predict::{Configuration, Outcome};

use super::errors::AppError;

/// Environment switch for [`ExitPolicy::Strict`].
pub const STRICT_EXIT_ENV: &str = "SLIM_PREDICT_STRICT_EXIT";

const EXIT_INVALID: u8 = 1;
const EXIT_USAGE: u8 = 2;

/// How help-like outcomes map onto exit statuses.
///
/// `Lenient` reports unknown options and a wrong number of files with status
/// 0, the way `slim_predict` always has. `Strict` reports them with status 2
/// so scripts can tell them apart from `-help`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ExitPolicy {
    #[default]
    Lenient,
    Strict,
}

impl ExitPolicy {
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(STRICT_EXIT_ENV).ok().as_deref())
    }

    fn from_value(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("1" | "true" | "yes" | "on") => ExitPolicy::Strict,
            _ => ExitPolicy::Lenient,
        }
    }

    fn status(self, outcome: &Outcome) -> u8 {
        match (outcome, self) {
            (Outcome::Run(_) | Outcome::Help, _) => 0,
            (_, ExitPolicy::Lenient) => 0,
            (_, ExitPolicy::Strict) => EXIT_USAGE,
        }
    }
}

fn level_for(debug_level: u32) -> LevelFilter {
    match debug_level {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// `RUST_LOG` wins over the debug level when set.
fn init_tracing(debug_level: u32) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level_for(debug_level).into()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Hand-off point to the prediction engine.
fn launch(config: &Configuration) -> Result<(), AppError> {
    init_tracing(config.debug_level());
    info!(
        "Predicting {} items per user from {:?}",
        config.num_recommendations(),
        config.model_path()
    );
    let json = serde_json::to_string(config)?;
    debug!(config = %json, "resolved configuration");

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{config}")?;
    stdout.flush()?;
    Ok(())
}

pub fn run<I, T>(args: I, policy: ExitPolicy) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let outcome = match slim_predict::parse(args) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(EXIT_INVALID);
        }
    };

    let status = policy.status(&outcome);
    match outcome {
        Outcome::Run(config) => {
            if let Err(e) = launch(&config) {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        }
        Outcome::Help => print!("{HELP}"),
        Outcome::UnknownOption { message } => {
            if policy == ExitPolicy::Strict {
                if let Some(first) = message.lines().next() {
                    eprintln!("{first}");
                }
            }
            print!("{HELP}");
        }
        Outcome::Usage { .. } => print!("{SHORT_HELP}"),
    }

    ExitCode::from(status)
}

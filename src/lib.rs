#![doc = r#"
slim_predict — command-line front end of the SLIM top-N prediction tool.

This crate turns the process arguments of `slim_predict` into a validated,
strongly-typed [`Configuration`] that the model loader and prediction engine
consume. Reading the model, computing predictions and writing them out are
not part of this crate.

Command line
------------
```text
slim_predict [options] model-file old-file [test-file]

  -ifmt=<csr|csrnv|cluto|ijv>   input format (default csr)
  -binarize                     binarize the ratings
  -outfile=<path>               where to store the predictions
  -nrcmds=<int>                 items to recommend per user (default 10)
  -dbglvl=<int>                 debug level (default 0)
  -help                         print the option reference
```

Options use the single-dash long form; `-name value`, `--name` and unique
prefixes (`-bin`) are accepted as well.

Quick start
-----------
```rust,no_run
use slim_predict::{parse, Outcome};

fn main() -> slim_predict::Result<()> {
    match parse(std::env::args_os())? {
        Outcome::Run(config) => {
            println!("recommending {} items per user", config.num_recommendations());
        }
        Outcome::Help | Outcome::UnknownOption { .. } => print!("{}", slim_predict::help::HELP),
        Outcome::Usage { .. } => print!("{}", slim_predict::help::SHORT_HELP),
    }
    Ok(())
}
```

Error handling
--------------
Validation failures (unknown `-ifmt`, negative or malformed numbers, missing
input files) are returned as [`Error`]; its `Display` text is the diagnostic
meant for the user. Help requests, unknown options and a wrong number of
files are not errors: they come back as [`Outcome`] variants so the caller
picks the exit status.

```rust,no_run
use slim_predict::{parse, Error};

match parse(["slim_predict", "-ifmt=bogus", "model.bin", "old.csr"]) {
    Err(Error::InvalidInputFormat { value }) => eprintln!("bad format {value}"),
    Err(other) => eprintln!("{other}"),
    Ok(_) => {}
}
```

Useful modules
--------------
- [`interpreter`] — `parse` and the `Outcome` it returns.
- [`config`] — `Configuration` and the option defaults (`PredictOptions`).
- [`types`] — `InputFormat` and the `-ifmt` lookup table.
- [`args`] — the option table and the long-only front end over clap.
- [`help`] — the static help texts.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod args;
pub mod config;
pub mod error;
pub mod help;
pub mod interpreter;
pub mod types;

pub use config::{Configuration, PredictOptions};
pub use error::{Error, Result};
pub use interpreter::{Outcome, parse};
pub use types::{FormatArg, InputFormat};

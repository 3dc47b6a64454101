//! Command-line interface for the cfmt front end.
//!
//! ## Commands
//!
//! - `dump <file>` - print the classified chunk table for one source file
//! - `check <file>` - tokenize and report diagnostics; non-zero exit when
//!   any are found
//!
//! ## Design
//!
//! Argument parsing uses clap derive macros. Command functions return a
//! `Result` instead of exiting; only the top-level [`run`] turns errors and
//! findings into an exit code, reporting failures through miette.

pub mod commands;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

use clap::{Parser, Subcommand};

use cfmt_core::Dialect;
use cfmt_syntax::diagnostics::ConfigError;

#[derive(Parser)]
#[command(name = "cfmt", version, about = "C-family formatter front end")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the classified chunk table for a source file
    Dump {
        file: PathBuf,
        /// Input dialect (c, cpp, d, cs, java, pawn, oc); inferred from the
        /// file extension when omitted
        #[arg(long)]
        lang: Option<String>,
    },
    /// Tokenize a source file and report diagnostics
    Check {
        file: PathBuf,
        #[arg(long)]
        lang: Option<String>,
    },
}

/// Parse arguments, dispatch, and translate the outcome into an exit code.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let outcome = match cli.command {
        Command::Dump { file, lang } => dialect_for(&file, lang.as_deref())
            .and_then(|dialect| commands::dump(&file, dialect)),
        Command::Check { file, lang } => dialect_for(&file, lang.as_deref())
            .and_then(|dialect| commands::check(&file, dialect)),
    };
    match outcome {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(err));
            ExitCode::FAILURE
        }
    }
}

/// Explicit `--lang` wins; otherwise the file extension decides.
fn dialect_for(file: &Path, lang: Option<&str>) -> Result<Dialect, ConfigError> {
    match lang {
        Some(name) => Ok(Dialect::from_str(name)?),
        None => file
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Dialect::from_extension)
            .ok_or_else(|| ConfigError::UnknownExtension {
                path: file.display().to_string(),
            }),
    }
}

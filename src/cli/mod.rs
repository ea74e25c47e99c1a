//! CLI module for the schema builder
//!
//! ## Commands
//!
//! - `enums <INDEX>` - Build enum type descriptors from a JSON class index and print them as JSON
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::errors::SchemaError;
use crate::helpers::AutoNameStrategy;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<SchemaError> for CliError {
    /// Render the error as a miette report so codes and help text reach the user.
    fn from(err: SchemaError) -> Self {
        let report = miette::Report::new(err);
        Self::failure(format!("{report:?}"))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Build GraphQL schema type descriptors from reflected classes
#[derive(Parser, Debug)]
#[command(name = "schema-builder")]
#[command(version = VERSION)]
#[command(about = "Build GraphQL schema type descriptors from reflected classes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build enum type descriptors and print them as JSON
    Enums {
        /// JSON class index (`{ "classes": [...], "directives": [...] }`)
        #[arg(value_name = "INDEX")]
        index: PathBuf,
        /// Only build these classes (default: every class marked `isEnum`)
        #[arg(long = "class", value_name = "NAME")]
        classes: Vec<String>,
        /// Auto-name strategy, overriding the config file
        #[arg(long, value_name = "STRATEGY", value_parser = parse_strategy)]
        strategy: Option<AutoNameStrategy>,
        /// JSON config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
        /// Print compact JSON instead of pretty-printed JSON
        #[arg(long)]
        compact: bool,
    },
}

fn parse_strategy(s: &str) -> Result<AutoNameStrategy, String> {
    s.parse()
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    if let Err(e) = execute(cli) {
        if !e.message.is_empty() {
            eprintln!("{}", e.message);
        }
        process::exit(e.exit_code.0);
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Enums {
            index,
            classes,
            strategy,
            config,
            compact,
        } => {
            let options = commands::EnumsOptions {
                classes,
                strategy,
                config,
                pretty: !compact,
            };
            let output = commands::build_enums(&index, &options)?;
            println!("{output}");
            Ok(())
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

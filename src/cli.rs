//! CLI interface for Stride.
//!
//! Turns sensor packages into training summaries from the command line.
//! Each subcommand is non-interactive: readings in, one summary line per
//! workout out. Summaries go to stdout; diagnostics go to stderr.

mod format;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::batch;
use crate::config::{Config, OutputFormat};
use crate::package::{self, Package};

use format::{format_codes, format_info};

/// Stride: workout summaries from raw sensor readings.
#[derive(Debug, Parser)]
#[command(name = "stride", after_long_help = USAGE_HELP)]
pub struct Cli {
    /// Output format. Defaults to the `format` key in ~/.stride/config.toml, then text.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

const USAGE_HELP: &str = r#"Readings are positional, in the order each workout type declares them:
  SWM  action, duration, weight, length_pool, count_pool
  RUN  action, duration, weight
  WLK  action, duration, weight, height

Examples:
  stride show RUN 15000 1 75
  stride show SWM 720 1 80 25 40 --format json
  stride batch packages.toml"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Summarize a single sensor package.
    Show {
        /// Workout code: SWM, RUN or WLK.
        code: String,

        /// Readings, in field order.
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Summarize every package listed in a TOML or JSON file.
    ///
    /// Packages that fail are reported on stderr and skipped;
    /// the command fails once all packages have been processed.
    Batch {
        /// Path to the batch file (`.json` for JSON, anything else is TOML).
        file: PathBuf,
    },

    /// Summarize the built-in sample packages, one per workout type.
    Demo,

    /// List supported workout codes and their fields.
    Codes,
}

/// Run the CLI, returning an error message on failure.
pub fn run(config: &Config) -> Result<(), String> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    execute(cli, config, &mut stdout.lock())
}

/// Execute a parsed command, writing summaries to `out`.
fn execute(cli: Cli, config: &Config, out: &mut impl Write) -> Result<(), String> {
    let format = cli.format.unwrap_or(config.format);

    match cli.command {
        Command::Show { code, values } => cmd_show(&code, &values, format, out),
        Command::Batch { file } => {
            let packages = batch::load_packages(&file).map_err(|e| e.to_string())?;
            cmd_summarize(&packages, format, out)
        }
        Command::Demo => cmd_summarize(&package::sample_packages(), format, out),
        Command::Codes => write_line(out, &format_codes()),
    }
}

fn cmd_show(
    code: &str,
    values: &[f64],
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), String> {
    let training = package::read_package(code, values).map_err(|e| e.to_string())?;
    let line = format_info(&training.show_training_info(), format)?;
    write_line(out, &line)
}

/// Summarize packages in order, reporting failures without stopping.
fn cmd_summarize(
    packages: &[Package],
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), String> {
    let mut failed = 0_usize;

    for (index, package) in packages.iter().enumerate() {
        match package.read() {
            Ok(training) => {
                let line = format_info(&training.show_training_info(), format)?;
                write_line(out, &line)?;
            }
            Err(e) => {
                failed += 1;
                debug!(index, workout = %package.workout, error = %e, "rejected package");
                eprintln!("package {index}: {e}");
            }
        }
    }

    if failed > 0 {
        return Err(format!(
            "{failed} of {} package(s) could not be read",
            packages.len()
        ));
    }
    Ok(())
}

fn write_line(out: &mut impl Write, line: &str) -> Result<(), String> {
    writeln!(out, "{line}").map_err(|e| format!("failed to write output: {e}"))
}

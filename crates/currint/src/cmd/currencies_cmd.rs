//! Shared implementation for the currint-currencies command.
//!
//! Lists the built-in ISO 4217 registry, or just the currencies named on the
//! command line. Codes may also be given as three-digit numeric codes.

use crate::cmd::completions::ShellType;
use crate::cmd::{init_tracing, OutputFormat};
use anyhow::Result;
use clap::Parser;
use currint_core::{registry, Currency, CurrencyError, MinorUnit};
use serde::Serialize;
use std::io::{self, Write};
use std::process::ExitCode;

/// List known currencies.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Only show these currencies (alphabetic or numeric codes)
    #[arg(value_name = "CODE")]
    pub codes: Vec<String>,

    /// Output format (text or json)
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Show debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL", hide = true)]
    pub generate_completions: Option<ShellType>,
}

/// A registry entry as written by `--format json`.
#[derive(Debug, Serialize)]
pub struct CurrencyReport {
    /// Alphabetic code
    pub code: String,
    /// Numeric code, if any
    pub numeric_code: Option<String>,
    /// English name, if any
    pub name: Option<String>,
    /// Decimal exponent, absent for non-decimal currencies
    pub exponent: Option<u32>,
    /// Minor units per major unit
    pub divisor: i64,
    /// Formatting prefix
    pub prefix: String,
    /// Formatting suffix
    pub suffix: String,
}

impl From<&Currency> for CurrencyReport {
    fn from(currency: &Currency) -> Self {
        Self {
            code: currency.code().to_string(),
            numeric_code: currency.numeric_code().map(str::to_string),
            name: currency.name().map(str::to_string),
            exponent: currency.exponent(),
            divisor: currency.divisor(),
            prefix: currency.prefix().to_string(),
            suffix: currency.suffix().into_owned(),
        }
    }
}

fn find(code: &str) -> Result<&'static Currency> {
    let code = code.trim();
    if !code.is_empty() && code.chars().all(|c| c.is_ascii_digit()) {
        return registry::by_numeric_code(code)
            .ok_or_else(|| CurrencyError::UnknownCurrency(code.to_string()).into());
    }
    Ok(registry::lookup(code)?)
}

fn unit_label(unit: MinorUnit) -> String {
    match unit {
        MinorUnit::Exponent(e) => format!("10^{e}"),
        MinorUnit::Divisor(d) => format!("/{d}"),
    }
}

/// Run the currencies command, writing the listing to `out`.
#[tracing::instrument(name = "currencies", skip_all)]
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let currencies: Vec<&Currency> = if args.codes.is_empty() {
        registry::all().collect()
    } else {
        args.codes
            .iter()
            .map(|code| find(code))
            .collect::<Result<_>>()?
    };
    tracing::debug!(count = currencies.len(), "listing currencies");

    match args.format {
        OutputFormat::Text => {
            for currency in &currencies {
                writeln!(
                    out,
                    "{:<4} {:>3} {:<5} {:<3} {}",
                    currency.code(),
                    currency.numeric_code().unwrap_or("-"),
                    unit_label(currency.minor_unit()),
                    currency.prefix(),
                    currency.name().unwrap_or(""),
                )?;
            }
        }
        OutputFormat::Json => {
            let reports: Vec<CurrencyReport> =
                currencies.iter().map(|c| CurrencyReport::from(*c)).collect();
            serde_json::to_writer_pretty(&mut *out, &reports)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Main entry point for the currencies command.
pub fn main() -> ExitCode {
    main_with_name("currint-currencies")
}

/// Main entry point with custom binary name.
pub fn main_with_name(bin_name: &str) -> ExitCode {
    let args = Args::parse();

    // Handle shell completion generation
    if let Some(shell) = args.generate_completions {
        crate::cmd::completions::generate_completions::<Args>(shell, bin_name);
        return ExitCode::SUCCESS;
    }

    init_tracing(args.verbose);

    let mut stdout = io::stdout().lock();
    match run(&args, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

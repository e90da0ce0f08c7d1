//! Shared implementation for the currint-convert command.
//!
//! Converts an amount into another currency at a given rate. Exact rates
//! like `0.92` stay exact; anything else that parses as a float, such as
//! `9.2e-1`, is applied as a float rate.

use crate::cmd::completions::ShellType;
use crate::cmd::{init_tracing, parse_amount, AmountReport, OutputFormat};
use anyhow::{Context, Result};
use clap::Parser;
use currint_core::Rate;
use serde::Serialize;
use std::io::{self, Write};
use std::process::ExitCode;

/// Convert an amount into another currency.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Currency code of the source amount
    #[arg(value_name = "CODE", required_unless_present = "generate_completions")]
    pub code: Option<String>,

    /// Source value in minor units, or major units with --major
    #[arg(
        value_name = "VALUE",
        allow_hyphen_values = true,
        required_unless_present = "generate_completions"
    )]
    pub value: Option<String>,

    /// Currency code to convert into
    #[arg(value_name = "TARGET", required_unless_present = "generate_completions")]
    pub target: Option<String>,

    /// Target minor units per source minor unit
    #[arg(
        value_name = "RATE",
        allow_hyphen_values = true,
        required_unless_present = "generate_completions"
    )]
    pub rate: Option<String>,

    /// Read VALUE as a decimal in major units
    #[arg(short, long)]
    pub major: bool,

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

/// JSON output for a conversion.
#[derive(Debug, Serialize)]
pub struct ConversionReport {
    /// The amount converted from
    pub from: AmountReport,
    /// The amount converted into
    pub to: AmountReport,
    /// The rate as given on the command line
    pub rate: String,
}

/// Run the convert command, writing the result to `out`.
#[tracing::instrument(name = "convert", skip_all)]
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let code = args.code.as_deref().context("missing currency code")?;
    let value = args.value.as_deref().context("missing value")?;
    let target = args.target.as_deref().context("missing target currency")?;
    let rate_text = args.rate.as_deref().context("missing rate")?;

    let source = parse_amount(code, value, args.major, false)?;
    let rate: Rate = rate_text
        .parse()
        .with_context(|| format!("invalid rate {rate_text:?}"))?;
    tracing::debug!(from = %source, to = target, rate = ?rate, "converting");

    let converted = source
        .convert_currency(target, rate)
        .with_context(|| format!("cannot convert {source} to {target}"))?;
    tracing::debug!(minor = converted.value(), "converted");

    match args.format {
        OutputFormat::Text => writeln!(out, "{converted}")?,
        OutputFormat::Json => {
            let report = ConversionReport {
                from: AmountReport::from(&source),
                to: AmountReport::from(&converted),
                rate: rate_text.trim().to_string(),
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Main entry point for the convert command.
pub fn main() -> ExitCode {
    main_with_name("currint-convert")
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

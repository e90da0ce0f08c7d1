//! Shared implementation for the currint-sum command.
//!
//! Adds up `CODE:VALUE` terms, starting from the currency-less zero. With no
//! terms the total is that zero and prints as `0`; a single currency mismatch
//! fails the whole sum.

use crate::cmd::completions::ShellType;
use crate::cmd::{init_tracing, parse_amount, AmountReport, OutputFormat};
use anyhow::{Context, Result};
use clap::Parser;
use currint_core::Amount;
use serde::Serialize;
use std::io::{self, Write};
use std::process::ExitCode;

/// Sum amounts of a single currency.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Terms to add, e.g. USD:1999 or GBP:-250 (or GBP:-2.50 with --major)
    #[arg(value_name = "CODE:VALUE")]
    pub terms: Vec<String>,

    /// Read every VALUE as a decimal in major units
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

/// JSON output for a sum.
#[derive(Debug, Serialize)]
pub struct SumReport {
    /// The parsed terms, in input order
    pub terms: Vec<AmountReport>,
    /// Their total
    pub total: AmountReport,
}

fn parse_term(term: &str, major: bool) -> Result<Amount> {
    let (code, value) = term
        .split_once(':')
        .with_context(|| format!("expected CODE:VALUE, got {term:?}"))?;
    parse_amount(code, value, major, false).with_context(|| format!("in term {term:?}"))
}

/// Run the sum command, writing the total to `out`.
#[tracing::instrument(name = "sum", skip_all)]
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let amounts = args
        .terms
        .iter()
        .map(|term| parse_term(term, args.major))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(terms = amounts.len(), "summing");

    let total = Amount::try_sum(&amounts)?;
    tracing::debug!(total = %total, "summed");

    match args.format {
        OutputFormat::Text => writeln!(out, "{total}")?,
        OutputFormat::Json => {
            let report = SumReport {
                terms: amounts.iter().map(AmountReport::from).collect(),
                total: AmountReport::from(&total),
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Main entry point for the sum command.
pub fn main() -> ExitCode {
    main_with_name("currint-sum")
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

#[cfg(test)]
mod tests {
    use super::*;

    fn sum(argv: &[&str]) -> Result<String> {
        let args = Args::parse_from(argv);
        let mut out = Vec::new();
        run(&args, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["currint-sum", "USD:100", "usd:-25", "-m"]);
        assert_eq!(args.terms, vec!["USD:100", "usd:-25"]);
        assert!(args.major);
    }

    #[test]
    fn test_sum_empty_is_zero() {
        assert_eq!(sum(&["currint-sum"]).unwrap(), "0\n");
    }

    #[test]
    fn test_sum_single_currency() {
        assert_eq!(
            sum(&["currint-sum", "USD:1999", "USD:500", "usd:-1"]).unwrap(),
            "$24.98\n"
        );
    }

    #[test]
    fn test_sum_major() {
        assert_eq!(
            sum(&["currint-sum", "GBP:3.00", "GBP:-0.5", "--major"]).unwrap(),
            "£2.50\n"
        );
    }

    #[test]
    fn test_sum_mismatch() {
        let err = sum(&["currint-sum", "USD:1", "EUR:1"]).unwrap_err();
        assert!(err
            .to_string()
            .contains("cannot combine amounts of different currencies (USD and EUR)"));
    }

    #[test]
    fn test_sum_bad_term() {
        assert!(sum(&["currint-sum", "USD100"]).is_err());
        assert!(sum(&["currint-sum", "USD:1.5"]).is_err());
    }

    #[test]
    fn test_sum_json() {
        let out = sum(&["currint-sum", "KWD:1500", "KWD:1", "-f", "json"]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["terms"].as_array().unwrap().len(), 2);
        assert_eq!(json["total"]["value"], 1501);
        assert_eq!(json["total"]["display"], "1.501 KWD");
    }

    #[test]
    fn test_sum_json_empty() {
        let out = sum(&["currint-sum", "--format", "json"]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(json["total"]["currency"].is_null());
        assert_eq!(json["total"]["value"], 0);
    }
}

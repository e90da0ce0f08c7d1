//! Command implementations for CLI tools.
//!
//! Each module contains the full implementation for a command,
//! which can be invoked by thin wrapper binaries.

pub mod completions;
pub mod convert_cmd;
pub mod currencies_cmd;
pub mod format_cmd;
pub mod sum_cmd;

use anyhow::{Context, Result};
use clap::ValueEnum;
use currint_core::Amount;
use serde::Serialize;
use std::io::{self, Write};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

/// Install a stderr tracing subscriber.
///
/// `--verbose` turns on everything at DEBUG; otherwise `RUST_LOG` is honoured
/// if set, and nothing is installed when it is not.
pub fn init_tracing(verbose: bool) {
    if verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(io::stderr)
            .init();
    } else if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }
}

/// An amount as written by `--format json`.
#[derive(Debug, Serialize)]
pub struct AmountReport {
    /// Currency code, or null for the currency-less zero
    pub currency: Option<String>,
    /// Value in minor units
    pub value: i64,
    /// Exact value in major units
    pub major: String,
    /// Formatted amount
    pub display: String,
}

impl From<&Amount> for AmountReport {
    fn from(amount: &Amount) -> Self {
        Self {
            currency: amount.code().map(str::to_string),
            value: amount.value(),
            major: amount.to_major_decimal().normalize().to_string(),
            display: amount.to_string(),
        }
    }
}

/// Build an amount from command-line text.
///
/// VALUE is an integer count of minor units, or a decimal in major units
/// when `major` is set.
pub fn parse_amount(code: &str, value: &str, major: bool, force_round: bool) -> Result<Amount> {
    if major {
        return Amount::from_code_and_major(code, value, force_round)
            .with_context(|| format!("invalid amount {value} {code}"));
    }
    let minor: i64 = value
        .trim()
        .parse()
        .with_context(|| format!("invalid minor-unit value {value:?}"))?;
    Ok(Amount::from_code_and_minor(code, minor)?)
}

/// Write a single amount in the requested format.
pub fn write_amount<W: Write>(out: &mut W, amount: &Amount, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{amount}")?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &AmountReport::from(amount))?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_minor() {
        let amount = parse_amount("usd", "-132", false, false).unwrap();
        assert_eq!(amount.code(), Some("USD"));
        assert_eq!(amount.value(), -132);
    }

    #[test]
    fn test_parse_amount_major() {
        assert_eq!(parse_amount("GBP", "3.00", true, false).unwrap().value(), 300);
        assert!(parse_amount("GBP", "12.432", true, false).is_err());
        assert_eq!(parse_amount("GBP", "12.432", true, true).unwrap().value(), 1243);
    }

    #[test]
    fn test_parse_amount_rejects() {
        assert!(parse_amount("USD", "1.5", false, false).is_err());
        assert!(parse_amount("XYZ", "1", false, false).is_err());
    }

    #[test]
    fn test_amount_report() {
        let amount = Amount::from_code_and_minor("MRO", 7).unwrap();
        let report = AmountReport::from(&amount);
        assert_eq!(report.currency.as_deref(), Some("MRO"));
        assert_eq!(report.major, "1.4");
        assert_eq!(report.display, "1.2 MRO");

        let zero = AmountReport::from(&Amount::ZERO);
        assert_eq!(zero.currency, None);
        assert_eq!(zero.display, "0");
    }

    #[test]
    fn test_write_amount_json() {
        let amount = Amount::from_code_and_minor("USD", 132).unwrap();
        let mut out = Vec::new();
        write_amount(&mut out, &amount, OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["currency"], "USD");
        assert_eq!(json["value"], 132);
        assert_eq!(json["major"], "1.32");
        assert_eq!(json["display"], "$1.32");
    }
}

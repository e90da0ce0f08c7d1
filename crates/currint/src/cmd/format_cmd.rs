//! Shared implementation for the currint-format command.
//!
//! Formats a value with a currency's prefix and suffix, e.g.
//! `currint-format USD -132` prints `$-1.32`.

use crate::cmd::completions::ShellType;
use crate::cmd::{init_tracing, parse_amount, write_amount, OutputFormat};
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;

/// Format an amount of money.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// ISO 4217 currency code (case-insensitive)
    #[arg(value_name = "CODE", required_unless_present = "generate_completions")]
    pub code: Option<String>,

    /// Value in minor units (cents), or major units with --major
    #[arg(
        value_name = "VALUE",
        allow_hyphen_values = true,
        required_unless_present = "generate_completions"
    )]
    pub value: Option<String>,

    /// Read VALUE as a decimal in major units (dollars)
    #[arg(short, long)]
    pub major: bool,

    /// Round a major value to the nearest minor unit instead of failing
    #[arg(short, long, requires = "major")]
    pub round: bool,

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

/// Run the format command, writing the result to `out`.
#[tracing::instrument(name = "format", skip_all)]
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let code = args.code.as_deref().context("missing currency code")?;
    let value = args.value.as_deref().context("missing value")?;
    tracing::debug!(code, value, major = args.major, round = args.round, "parsing amount");

    let amount = parse_amount(code, value, args.major, args.round)?;
    tracing::debug!(minor = amount.value(), "formatting");

    write_amount(out, &amount, args.format)
}

/// Main entry point for the format command.
pub fn main() -> ExitCode {
    main_with_name("currint-format")
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

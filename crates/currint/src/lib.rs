//! Currency CLI tools.
//!
//! This crate provides command-line tools built on `currint-core`:
//!
//! - `currint-format`: Format a value in minor or major units
//! - `currint-convert`: Convert an amount into another currency at a rate
//! - `currint-sum`: Add up amounts of one currency
//! - `currint-currencies`: List the built-in ISO 4217 registry
//!
//! # Example Usage
//!
//! ```bash
//! currint-format USD -132            # $-1.32
//! currint-format GBP 12.432 -m -r    # £12.43
//! currint-convert USD 2124 EUR 0.92  # €19.54
//! currint-sum USD:1999 USD:500       # $24.99
//! currint-currencies --format json KWD
//! ```
//!
//! Every command accepts `--format json` and `-v` for debug logging on
//! stderr. `RUST_LOG` is honoured when `-v` is not given.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cmd;

//! Command-line interface and orchestration for crux-check
//!
//! This module turns the command line and environment into a [`RuntimeConfig`], drives the
//! fetch and assessment of each URL, and hands the results to the report generators.
//!
//! # Implementation Model
//!
//! The `run` function parses command-line arguments using clap and calls `check_urls`,
//! which:
//!
//! 1. Validates the API key and URL list into a [`RuntimeConfig`]
//! 2. Sets up logging
//! 3. Fetches and assesses each URL in turn, reporting failures as they happen
//! 4. Renders the collected reports as a console table or JSON
//!
//! All output goes through a [`Host`] so tests can capture it and observe the exit code.

mod check;
mod common;
mod config;
mod host;
mod run;

pub use check::{CheckArgs, check_urls, collect_reports};
pub use common::{ColorMode, LogLevel, init_logging};
pub use config::{ConfigError, RuntimeConfig};
pub use host::Host;
pub use run::run;

//! A tool to check the Core Web Vitals of web pages using Chrome User Experience Report data.
//!
//! # Usage
//!
//! ```bash
//! export CRUX_API_KEY=...
//! crux-check -u https://example.com,https://example.org
//! ```
//!
//! For each URL, the 75th percentile of Cumulative Layout Shift, First Input Delay, and
//! Largest Contentful Paint is compared against the metric's "good" threshold.

use crux_check_lib::{Host, run};
use std::io::Write;
use std::io::{stderr, stdout};

/// Default host that writes to the real standard streams.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

#[tokio::main]
async fn main() -> Result<(), ohno::AppError> {
    run(&mut RealHost, std::env::args()).await
}

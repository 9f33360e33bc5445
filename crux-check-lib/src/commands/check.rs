use super::Host;
use super::common::{ColorMode, LogLevel, init_logging};
use super::config::RuntimeConfig;
use crate::Result;
use crate::crux::{FetchError, Fetcher};
use crate::reports::{UrlReport, decorator, generate_console, generate_json};
use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use core::error::Error;
use std::io::Write;

const LOG_TARGET: &str = "     check";

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "crux-check", author, version, long_about = None, display_name = "crux-check")]
#[command(about = "Check the Core Web Vitals of web pages using Chrome User Experience Report data")]
#[command(styles = CLAP_STYLES)]
pub struct CheckArgs {
    /// A ',' separated list of URLs to check the CrUX data for
    #[arg(short = 'u', long = "urls", value_name = "URL", value_delimiter = ',', required = true)]
    pub urls: Vec<String>,

    /// Log the requests sent to and the responses received from the CrUX API
    #[arg(short, long)]
    pub verbose: bool,

    /// CrUX API key
    #[arg(long, value_name = "KEY", env = "CRUX_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the CrUX API
    #[arg(long, value_name = "URL", hide = true)]
    pub api_url: Option<String>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,

    /// Output the assessments as JSON instead of a table
    #[arg(long, help_heading = "Report Output")]
    pub json: bool,

    /// Exit with status code 1 if any metric does not pass
    #[arg(long)]
    pub error_if_fail: bool,
}

/// Check every configured URL and report the results.
///
/// URLs are fetched one at a time in the order given. A URL that can't be fetched is
/// reported on the error stream and the remaining URLs are still checked; the run then ends
/// with exit code 1.
pub async fn check_urls<H: Host>(host: &mut H, args: &CheckArgs) -> Result<()> {
    let config = match RuntimeConfig::new(args.api_key.as_deref(), &args.urls, args.verbose) {
        Ok(config) => config,
        Err(e) => {
            let _ = writeln!(host.error(), "{e}");
            host.exit(1);
            return Ok(());
        }
    };

    init_logging(args.log_level.effective(config.verbose));

    let fetcher = Fetcher::new(args.api_url.as_deref())?;
    let (reports, failed) = collect_reports(host, &fetcher, &config).await;

    if !reports.is_empty() {
        let mut output = String::new();
        if args.json {
            generate_json(&reports, &mut output)?;
        } else {
            generate_console(&reports, decorator(args.color.use_colors()).as_ref(), &mut output)?;
        }
        let _ = write!(host.output(), "{output}");
    }

    if failed > 0 {
        let _ = writeln!(
            host.error(),
            "Unable to retrieve CrUX data for {failed} of {} URL(s)",
            config.urls.len()
        );
        host.exit(1);
        return Ok(());
    }

    if args.error_if_fail && reports.iter().flat_map(|r| &r.assessments).any(|a| a.score.is_failure()) {
        let _ = writeln!(host.error(), "One or more metrics did not pass");
        host.exit(1);
    }

    Ok(())
}

/// Fetch and assess each URL in order, returning the reports and how many URLs failed.
pub async fn collect_reports<H: Host>(host: &mut H, fetcher: &Fetcher, config: &RuntimeConfig) -> (Vec<UrlReport>, usize) {
    let mut reports = Vec::with_capacity(config.urls.len());
    let mut failed = 0;

    for url in &config.urls {
        log::info!(target: LOG_TARGET, "Checking CrUX data for {url}");

        match fetcher.fetch(&config.api_key, url, config.verbose).await {
            Ok(record) => reports.push(UrlReport::from_record(url.as_str(), &record)),
            Err(e) => {
                if e.is_timeout() {
                    log::warn!(target: LOG_TARGET, "Request for {url} timed out");
                }
                let _ = writeln!(host.error(), "Failed to get CrUX data for {url}: {}", describe(&e));
                failed += 1;
            }
        }
    }

    (reports, failed)
}

/// Render an error with all of its causes, outermost first.
fn describe(error: &FetchError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

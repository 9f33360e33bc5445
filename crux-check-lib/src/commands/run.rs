//! Command dispatch logic for crux-check

use super::{CheckArgs, check_urls};
use crate::{Host, Result};
use clap::Parser;
use std::io::Write;

/// Parse command-line arguments and run the check
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// Usage errors are printed to the error stream and end the process with exit code 1;
/// `--help` and `--version` are printed to the output stream.
///
/// # Errors
///
/// Returns an error if the HTTP client can't be created or a report can't be rendered
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let args = match CheckArgs::try_parse_from(args) {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            let _ = write!(host.error(), "{e}");
            host.exit(1);
            return Ok(());
        }
        Err(e) => {
            let _ = write!(host.output(), "{e}");
            return Ok(());
        }
    };

    check_urls(host, &args).await
}

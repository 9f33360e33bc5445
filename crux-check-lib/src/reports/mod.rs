//! Rendering of assessment results
//!
//! # Implementation Model
//!
//! Two report generators are provided, each accessed through a `generate` function:
//! - **Console**: A per-URL table of metric, p75, threshold, and status
//! - **JSON**: Machine-readable structured data
//!
//! Both operate on a slice of [`UrlReport`]. Colors are not baked into the console
//! generator; it asks a [`Decorator`] to dress each cell according to its [`Outcome`], so
//! the same code produces plain or ANSI-colored output.

mod console;
mod json;
mod style;
mod url_report;

pub use console::generate as generate_console;
pub use json::generate as generate_json;
pub use style::{AnsiDecorator, Decorator, Outcome, PlainDecorator, decorator};
pub use url_report::UrlReport;

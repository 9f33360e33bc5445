//! Retrieval of Chrome User Experience Report data
//!
//! # Implementation Model
//!
//! [`Fetcher`] sends one `POST` to the `CrUX` `queryRecord` endpoint per URL and decodes the
//! body into a [`CruxRecord`]. Requests are bounded by a fixed timeout and are never retried:
//! every failure surfaces as a [`FetchError`] for the caller to report.
//!
//! Numeric values in the record are kept as [`DecimalString`] so they are not rounded before
//! the assessment compares them. A metric the API has no data for decodes to an empty
//! histogram rather than a decode error.

mod decimal;
mod fetcher;
mod record;
mod web_vital;

pub use decimal::DecimalString;
pub use fetcher::{CRUX_BASE_URL, DEFAULT_REQUEST_TIMEOUT, FetchError, Fetcher};
pub use record::{CruxRecord, HistogramBucket, Metric, Metrics, Percentiles, RecordKey};
pub use web_vital::WebVital;

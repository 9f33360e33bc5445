//! Typed model of a `CrUX` `queryRecord` response.
//!
//! Every field is optional on the wire. Absent fields decode to their default value so
//! that a metric without data ends up with an empty histogram rather than a decode error.

use super::{DecimalString, WebVital};
use serde::{Deserialize, Serialize};

/// Top-level body returned by the `queryRecord` endpoint.
#[derive(Debug, Default, Deserialize)]
pub(super) struct QueryResponse {
    #[serde(default)]
    pub record: CruxRecord,
}

/// Body sent to the `queryRecord` endpoint.
#[derive(Debug, Serialize)]
pub(super) struct QueryRequest<'a> {
    pub url: &'a str,
}

/// `CrUX` data for a single URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CruxRecord {
    #[serde(default)]
    pub key: RecordKey,

    #[serde(default)]
    pub metrics: Metrics,
}

impl CruxRecord {
    /// Get the metric for a given web vital
    #[must_use]
    pub const fn metric(&self, vital: WebVital) -> &Metric {
        match vital {
            WebVital::Cls => &self.metrics.cumulative_layout_shift,
            WebVital::Fid => &self.metrics.first_input_delay,
            WebVital::Lcp => &self.metrics.largest_contentful_paint,
        }
    }
}

/// Identifies what a record describes
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RecordKey {
    /// Canonical URL the API resolved the query to
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Metrics {
    #[serde(default)]
    pub cumulative_layout_shift: Metric,

    #[serde(default)]
    pub first_input_delay: Metric,

    #[serde(default)]
    pub largest_contentful_paint: Metric,
}

/// Distribution and percentile data for one measurement
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Metric {
    /// Buckets in ascending order: good, needs improvement, poor
    #[serde(default)]
    pub histogram: Vec<HistogramBucket>,

    #[serde(default)]
    pub percentiles: Percentiles,
}

impl Metric {
    /// Upper bound of the first histogram bucket, which is the "good" threshold.
    #[must_use]
    pub fn threshold(&self) -> Option<&DecimalString> {
        self.histogram.first().and_then(|bucket| bucket.end.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HistogramBucket {
    #[serde(default)]
    pub density: DecimalString,

    #[serde(default)]
    pub start: DecimalString,

    /// Absent for the last, open-ended bucket
    #[serde(default)]
    pub end: Option<DecimalString>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Percentiles {
    #[serde(default)]
    pub p75: DecimalString,
}

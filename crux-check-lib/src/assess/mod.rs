//! Scoring of Core Web Vitals against their "good" thresholds
//!
//! Each metric is scored independently: the p75 value is compared against the upper bound
//! of the first histogram bucket. Values are converted from text only here, and a value that
//! fails to convert turns that one metric's score into an error without affecting the others.

mod assessment;
mod assessor;

pub use assessment::{ConversionError, MetricAssessment, Score};
pub use assessor::{assess, metric_score, valid_metric};

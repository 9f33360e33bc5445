use super::{ConversionError, MetricAssessment, Score};
use crate::crux::{CruxRecord, DecimalString, Metric, WebVital};
use strum::IntoEnumIterator;

/// Check the Core Web Vitals of a record against their "good" thresholds.
///
/// Always returns one assessment per [`WebVital`], in CLS, FID, LCP order.
#[must_use]
pub fn assess(record: &CruxRecord) -> Vec<MetricAssessment> {
    WebVital::iter().map(|vital| assess_metric(vital.name(), record.metric(vital))).collect()
}

/// A metric carries data only when its histogram has buckets.
#[must_use]
pub fn valid_metric(metric: &Metric) -> bool {
    !metric.histogram.is_empty()
}

/// Compare a p75 value against a threshold. Passing requires p75 to be strictly lower.
#[must_use]
pub fn metric_score(p75: &DecimalString, threshold: Option<&DecimalString>) -> Score {
    let Some(p75) = p75.to_f64() else {
        return Score::Error(ConversionError::P75);
    };

    let Some(threshold) = threshold.and_then(DecimalString::to_f64) else {
        return Score::Error(ConversionError::Threshold);
    };

    if p75 < threshold { Score::Pass } else { Score::Fail }
}

fn assess_metric(name: &'static str, metric: &Metric) -> MetricAssessment {
    if !valid_metric(metric) {
        return MetricAssessment {
            name,
            p75: String::new(),
            threshold: String::new(),
            score: Score::Unavailable,
        };
    }

    let threshold = metric.threshold();

    MetricAssessment {
        name,
        p75: metric.percentiles.p75.to_string(),
        threshold: threshold.map(ToString::to_string).unwrap_or_default(),
        score: metric_score(&metric.percentiles.p75, threshold),
    }
}

use crate::assess::{MetricAssessment, assess};
use crate::crux::CruxRecord;

/// Assessments for one queried URL, ready to be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlReport {
    /// URL as given on the command line
    pub url: String,

    /// Canonical URL reported by the API, empty if none was reported
    pub record_url: String,

    pub assessments: Vec<MetricAssessment>,
}

impl UrlReport {
    #[must_use]
    pub const fn new(url: String, record_url: String, assessments: Vec<MetricAssessment>) -> Self {
        Self {
            url,
            record_url,
            assessments,
        }
    }

    /// Assess `record` and wrap the result for rendering.
    #[must_use]
    pub fn from_record(url: impl Into<String>, record: &CruxRecord) -> Self {
        Self::new(url.into(), record.key.url.clone(), assess(record))
    }

    /// Canonical URL when it differs from the one that was queried
    #[must_use]
    pub fn normalized_url(&self) -> Option<&str> {
        (!self.record_url.is_empty() && self.record_url != self.url).then_some(self.record_url.as_str())
    }
}

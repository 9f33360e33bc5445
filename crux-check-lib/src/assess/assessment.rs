use core::fmt;

/// A numeric field of a metric that could not be converted for comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("ERROR - Failed to convert p75 value to number")]
    P75,

    #[error("ERROR - Failed to convert threshold value to number")]
    Threshold,
}

/// Outcome of comparing a metric's p75 value against its threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    /// p75 is strictly below the threshold
    Pass,

    /// p75 is at or above the threshold
    Fail,

    /// One of the values could not be compared
    Error(ConversionError),

    /// The API reported no data for the metric
    Unavailable,
}

impl Score {
    /// Returns `true` for scores that count against a page: failures and conversion errors.
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Fail | Self::Error(_))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => f.pad("Pass"),
            Self::Fail => f.pad("Fail"),
            Self::Error(e) => f.pad(&e.to_string()),
            Self::Unavailable => f.pad(""),
        }
    }
}

/// Evaluation of a single `CrUX` measurement against its target threshold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricAssessment {
    pub name: &'static str,

    /// Observed 75th percentile, as reported
    pub p75: String,

    /// Upper bound of the "good" bucket, as reported
    pub threshold: String,

    pub score: Score,
}

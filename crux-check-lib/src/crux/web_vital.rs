use strum::{Display, EnumIter, IntoStaticStr};

/// The Core Web Vitals tracked in a [`CruxRecord`](super::CruxRecord).
///
/// Declaration order is the order in which metrics are assessed and displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum WebVital {
    /// Cumulative Layout Shift
    #[strum(serialize = "CLS")]
    Cls,

    /// First Input Delay
    #[strum(serialize = "FID")]
    Fid,

    /// Largest Contentful Paint
    #[strum(serialize = "LCP")]
    Lcp,
}

impl WebVital {
    /// Short display name, e.g. `CLS`
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_iteration_order() {
        let names: Vec<_> = WebVital::iter().map(WebVital::name).collect();
        assert_eq!(names, ["CLS", "FID", "LCP"]);
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(WebVital::Lcp.to_string(), "LCP");
    }
}

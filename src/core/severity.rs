use colored::Color;
use serde::{Deserialize, Serialize};

/// Severity classification for a lead-leak audit.
///
/// Classifies the 0-100 severity score into four tiers:
/// - **Critical** (>=75): leads are hemorrhaging, act now
/// - **High** (>=50): serious leakage
/// - **Medium** (>=25): measurable leakage
/// - **Low** (<25): largely under control
///
/// # Examples
///
/// ```
/// use leadleak::core::Severity;
///
/// let sev = Severity::from_score(82);
/// assert_eq!(sev, Severity::Critical);
/// assert_eq!(sev.as_str(), "critical");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Pure function: score → severity.
    ///
    /// Lower bounds are inclusive on every tier:
    /// - score >= 75: Critical
    /// - score >= 50: High
    /// - score >= 25: Medium
    /// - score < 25: Low
    ///
    /// # Examples
    ///
    /// ```
    /// use leadleak::core::Severity;
    ///
    /// assert_eq!(Severity::from_score(75), Severity::Critical);
    /// assert_eq!(Severity::from_score(74), Severity::High);
    /// assert_eq!(Severity::from_score(25), Severity::Medium);
    /// assert_eq!(Severity::from_score(0), Severity::Low);
    /// ```
    #[inline]
    pub fn from_score(score: u32) -> Self {
        if score >= 75 {
            Self::Critical
        } else if score >= 50 {
            Self::High
        } else if score >= 25 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Returns the static string label for this severity level.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Returns the terminal color for this severity level.
    #[inline]
    pub const fn color(self) -> Color {
        match self {
            Self::Critical => Color::Red,
            Self::High => Color::Yellow,
            Self::Medium => Color::Blue,
            Self::Low => Color::Green,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_thresholds() {
        assert_eq!(Severity::from_score(100), Severity::Critical);
        assert_eq!(Severity::from_score(75), Severity::Critical);
        assert_eq!(Severity::from_score(74), Severity::High);
        assert_eq!(Severity::from_score(50), Severity::High);
        assert_eq!(Severity::from_score(49), Severity::Medium);
        assert_eq!(Severity::from_score(25), Severity::Medium);
        assert_eq!(Severity::from_score(24), Severity::Low);
        assert_eq!(Severity::from_score(0), Severity::Low);
    }

    #[test]
    fn severity_labels() {
        assert_eq!(Severity::Critical.as_str(), "critical");
        assert_eq!(Severity::High.as_str(), "high");
        assert_eq!(Severity::Medium.as_str(), "medium");
        assert_eq!(Severity::Low.as_str(), "low");
    }

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Severity::Critical).unwrap(),
            "\"critical\""
        );
        let parsed: Severity = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, Severity::Medium);
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }

    #[test]
    fn severity_is_monotonic() {
        let mut last = Severity::Low;
        for score in 0..=100 {
            let sev = Severity::from_score(score);
            assert!(
                sev >= last,
                "severity regressed between scores {} and {}",
                score.saturating_sub(1),
                score
            );
            last = sev;
        }
    }
}

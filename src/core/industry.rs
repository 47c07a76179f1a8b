use serde::{Deserialize, Serialize};

/// Per-industry defaults: typical customer value and the ceiling share of
/// lost revenue that process automation recovers in that vertical.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndustryProfile {
    pub avg_value: f64,
    pub recovery_rate: i32,
}

/// Label every unrecognized industry resolves to.
pub const FALLBACK_INDUSTRY: &str = "Other";

const FALLBACK_PROFILE: IndustryProfile = IndustryProfile {
    avg_value: 2000.0,
    recovery_rate: 65,
};

/// The built-in reference table, exposed read-only so callers can pre-fill
/// form defaults from `avg_value` without going through an audit.
pub static INDUSTRY_PROFILES: &[(&str, IndustryProfile)] = &[
    (
        "Law Firm",
        IndustryProfile {
            avg_value: 5000.0,
            recovery_rate: 75,
        },
    ),
    (
        "Healthcare",
        IndustryProfile {
            avg_value: 3000.0,
            recovery_rate: 70,
        },
    ),
    (
        "E-commerce",
        IndustryProfile {
            avg_value: 500.0,
            recovery_rate: 65,
        },
    ),
    (
        "SaaS",
        IndustryProfile {
            avg_value: 2000.0,
            recovery_rate: 80,
        },
    ),
    (
        "Real Estate",
        IndustryProfile {
            avg_value: 8000.0,
            recovery_rate: 70,
        },
    ),
    (FALLBACK_INDUSTRY, FALLBACK_PROFILE),
];

/// Pure function: industry label → profile. Falls back to the
/// [`FALLBACK_INDUSTRY`] row for any key not in the table, so the lookup
/// never fails.
///
/// # Examples
///
/// ```
/// use leadleak::core::industry_profile;
///
/// assert_eq!(industry_profile("SaaS").recovery_rate, 80);
/// assert_eq!(
///     industry_profile("Interplanetary Shipping").recovery_rate,
///     industry_profile("Other").recovery_rate
/// );
/// ```
pub fn industry_profile(name: &str) -> &'static IndustryProfile {
    INDUSTRY_PROFILES
        .iter()
        .find(|(label, _)| *label == name)
        .map(|(_, profile)| profile)
        .unwrap_or(&FALLBACK_PROFILE)
}

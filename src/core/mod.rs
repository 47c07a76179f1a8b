pub mod industry;
pub mod severity;
pub mod validation;

use im::Vector;
use serde::{Deserialize, Serialize};

pub use industry::{industry_profile, IndustryProfile, FALLBACK_INDUSTRY, INDUSTRY_PROFILES};
pub use severity::Severity;
pub use validation::validate_inputs;

/// Assumed close rate on followed-up leads when the caller has no measured
/// figure of their own.
pub const ASSUMED_CONVERSION_FACTOR: f64 = 0.25;

/// How the engine converts lost leads into lost revenue.
///
/// The two variants correspond to the two revenue-loss formulas the audit
/// supports: a fixed industry assumption, or the caller's own measured close
/// rate. The mode is part of the input record so a given audit is always
/// explicit about which formula produced its numbers.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ConversionModel {
    /// Fixed 25% close rate on followed-up leads.
    #[default]
    Assumed,
    /// Caller-supplied close rate, as a percentage in [0, 100].
    Measured { conversion_rate: f64 },
}

impl ConversionModel {
    /// The fraction of followed-up leads that convert under this model.
    ///
    /// # Examples
    ///
    /// ```
    /// use leadleak::core::ConversionModel;
    ///
    /// assert_eq!(ConversionModel::Assumed.factor(), 0.25);
    /// assert_eq!(
    ///     ConversionModel::Measured { conversion_rate: 50.0 }.factor(),
    ///     0.5
    /// );
    /// ```
    #[inline]
    pub fn factor(self) -> f64 {
        match self {
            Self::Assumed => ASSUMED_CONVERSION_FACTOR,
            Self::Measured { conversion_rate } => conversion_rate / 100.0,
        }
    }
}

/// One business's lead-handling picture, as collected by the caller.
///
/// The engine treats this record as pre-validated; see [`validate_inputs`]
/// for the checks callers are expected to apply first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuditInputs {
    /// Industry category. Unrecognized labels resolve to the "Other"
    /// profile; the lookup never fails.
    pub industry: String,
    pub monthly_marketing_spend: f64,
    pub leads_per_month: u32,
    /// Percentage of leads that receive no timely follow-up, 0-100.
    pub follow_up_missed_percent: f64,
    pub average_customer_value: f64,
    /// Distinct intake channels; order is irrelevant.
    pub lead_sources: Vec<String>,
    pub has_crm: bool,
    /// Used only for recommendation phrasing.
    #[serde(default)]
    pub crm_name: Option<String>,
    #[serde(default)]
    pub conversion: ConversionModel,
}

/// Everything the audit derives from one [`AuditInputs`] record.
///
/// Immutable once computed; recomputing from identical inputs yields
/// identical results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuditResults {
    pub leads_lost_monthly: u32,
    pub revenue_lost_monthly: f64,
    pub revenue_lost_annually: f64,
    /// Return on fixing the leak, as an integer percentage. Unbounded above.
    pub roi_of_fixing: i64,
    /// Composite risk index in [0, 100].
    pub severity_score: u32,
    pub severity_level: Severity,
    /// Share of lost revenue deemed recoverable. Industry-dependent,
    /// reduced by 15 points when no CRM is in place; no floor is applied.
    pub potential_recovery_percent: i32,
    /// At most five remediation steps, highest priority first.
    pub recommendations: Vector<String>,
}

impl AuditResults {
    /// Lost revenue per month that automation could claw back.
    pub fn recoverable_revenue_monthly(&self) -> f64 {
        if self.potential_recovery_percent <= 0 {
            return 0.0;
        }
        self.revenue_lost_monthly * f64::from(self.potential_recovery_percent) / 100.0
    }

    pub fn leads_lost_annually(&self) -> u32 {
        self.leads_lost_monthly * 12
    }
}

//! The audit pipeline: from one [`AuditInputs`] record to a full
//! [`AuditResults`] in five steps, from loss quantification through
//! recommendation selection.
//!
//! Every step is a pure function of the inputs plus earlier steps. No I/O,
//! no clock, no randomness: two calls with the same record produce
//! bit-identical results.

pub mod recommendations;

use crate::core::{industry_profile, AuditInputs, AuditResults, Severity};

/// Assumed cost of automating follow-up, as a share of the annual loss.
const AUTOMATION_COST_SHARE: f64 = 0.12;

/// Points per unit of the monthly loss-to-spend ratio.
const LOSS_RATIO_WEIGHT: f64 = 20.0;
const LOSS_RATIO_CAP: f64 = 40.0;

const MISSED_FOLLOW_UP_WEIGHT: f64 = 0.6;
const NO_CRM_PENALTY: f64 = 15.0;
const SCATTERED_SOURCES_PENALTY: f64 = 15.0;

/// Lead-source count at which juggling channels without a CRM starts
/// costing extra severity points.
const MULTI_SOURCE_THRESHOLD: usize = 3;

/// Run the full audit over one input record.
///
/// # Examples
///
/// ```
/// use leadleak::core::{AuditInputs, ConversionModel, Severity};
/// use leadleak::engine::compute_audit;
///
/// let inputs = AuditInputs {
///     industry: "Other".to_string(),
///     monthly_marketing_spend: 5000.0,
///     leads_per_month: 50,
///     follow_up_missed_percent: 20.0,
///     average_customer_value: 2000.0,
///     lead_sources: vec!["Web forms".to_string()],
///     has_crm: false,
///     crm_name: None,
///     conversion: ConversionModel::Assumed,
/// };
///
/// let results = compute_audit(&inputs);
/// assert_eq!(results.leads_lost_monthly, 10);
/// assert_eq!(results.revenue_lost_monthly, 5000.0);
/// assert_eq!(results.severity_score, 47);
/// assert_eq!(results.severity_level, Severity::Medium);
/// ```
pub fn compute_audit(inputs: &AuditInputs) -> AuditResults {
    let leads_lost =
        (f64::from(inputs.leads_per_month) * inputs.follow_up_missed_percent / 100.0).round();
    let revenue_lost_monthly =
        (leads_lost * inputs.average_customer_value * inputs.conversion.factor()).round();
    let revenue_lost_annually = revenue_lost_monthly * 12.0;

    let severity_score = severity_score(inputs, revenue_lost_monthly);
    let severity_level = Severity::from_score(severity_score);

    let profile = industry_profile(&inputs.industry);
    let potential_recovery_percent = if inputs.has_crm {
        profile.recovery_rate
    } else {
        profile.recovery_rate - 15
    };

    AuditResults {
        leads_lost_monthly: leads_lost as u32,
        revenue_lost_monthly,
        revenue_lost_annually,
        roi_of_fixing: roi_of_fixing(revenue_lost_annually),
        severity_score,
        severity_level,
        potential_recovery_percent,
        recommendations: recommendations::select(inputs, severity_score),
    }
}

/// Percentage return on automating follow-up, with cost modeled as a fixed
/// 12% of the annual loss.
///
/// Because the cost is defined as a fraction of the loss itself, the ratio
/// is a constant ~733% for any positive loss. That is the published
/// formula; it is reproduced as-is rather than normalized.
fn roi_of_fixing(revenue_lost_annually: f64) -> i64 {
    let automation_cost = revenue_lost_annually * AUTOMATION_COST_SHARE;
    if automation_cost <= 0.0 {
        // No loss means there is nothing to recover a return on.
        return 0;
    }
    ((revenue_lost_annually - automation_cost) / automation_cost * 100.0).round() as i64
}

/// Composite 0-100 risk index over four weighted factors.
fn severity_score(inputs: &AuditInputs, revenue_lost_monthly: f64) -> u32 {
    let mut score = loss_ratio_points(revenue_lost_monthly, inputs.monthly_marketing_spend);

    score += inputs.follow_up_missed_percent * MISSED_FOLLOW_UP_WEIGHT;

    if !inputs.has_crm {
        score += NO_CRM_PENALTY;
    }
    if inputs.lead_sources.len() >= MULTI_SOURCE_THRESHOLD && !inputs.has_crm {
        score += SCATTERED_SOURCES_PENALTY;
    }

    score.round().clamp(0.0, 100.0) as u32
}

/// Loss-to-spend ratio contribution, capped at [`LOSS_RATIO_CAP`] points.
///
/// Zero spend would make the ratio non-finite, so it is resolved directly:
/// any positive loss against no spend saturates the cap, zero loss
/// contributes nothing.
fn loss_ratio_points(revenue_lost_monthly: f64, monthly_spend: f64) -> f64 {
    if monthly_spend <= 0.0 {
        return if revenue_lost_monthly > 0.0 {
            LOSS_RATIO_CAP
        } else {
            0.0
        };
    }
    (revenue_lost_monthly / monthly_spend * LOSS_RATIO_WEIGHT).min(LOSS_RATIO_CAP)
}

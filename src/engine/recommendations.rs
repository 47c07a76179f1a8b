//! Remediation advice, selected by an ordered rule list.
//!
//! Rules are evaluated top to bottom; each appends at most one message.
//! The list is cut to the first five in rule order, so earlier rules always
//! win the last slot over later ones.

use crate::core::AuditInputs;
use im::Vector;

const MAX_RECOMMENDATIONS: usize = 5;

/// Miss rate above which an existing CRM is judged under-automated.
const CRM_TUNING_THRESHOLD: f64 = 15.0;
/// Miss rate above which automated sequences are recommended outright.
const AUTOMATION_THRESHOLD: f64 = 20.0;
/// Miss rate above which real-time alerts are worth the noise even with a
/// CRM in place.
const NOTIFICATION_THRESHOLD: f64 = 25.0;
const SOURCE_SPRAWL_THRESHOLD: usize = 3;
const ROUTING_VOLUME_THRESHOLD: u32 = 100;
const SCORING_SEVERITY_THRESHOLD: u32 = 50;

/// Select up to five recommendations for this audit, highest priority first.
pub fn select(inputs: &AuditInputs, severity_score: u32) -> Vector<String> {
    let mut picks = Vector::new();

    if !inputs.has_crm {
        picks.push_back(
            "Implement a CRM system immediately to track and manage all leads centrally"
                .to_string(),
        );
    } else if inputs.follow_up_missed_percent > CRM_TUNING_THRESHOLD {
        picks.push_back(format!(
            "Optimize your {} workflows with automated follow-up sequences",
            crm_label(inputs)
        ));
    }

    if inputs.follow_up_missed_percent > AUTOMATION_THRESHOLD {
        picks.push_back(
            "Set up automated follow-up sequences for all new leads within 5 minutes of inquiry"
                .to_string(),
        );
    }

    if inputs.lead_sources.len() >= SOURCE_SPRAWL_THRESHOLD {
        picks.push_back(
            "Integrate all lead sources into one central system to prevent leads from falling through the cracks"
                .to_string(),
        );
    }

    if inputs.leads_per_month > ROUTING_VOLUME_THRESHOLD {
        picks.push_back(
            "Implement intelligent lead routing to ensure leads reach the right team member instantly"
                .to_string(),
        );
    }

    if severity_score > SCORING_SEVERITY_THRESHOLD {
        picks.push_back(
            "Add lead scoring to prioritize high-value opportunities and reduce response times"
                .to_string(),
        );
    }

    if !inputs.has_crm || inputs.follow_up_missed_percent > NOTIFICATION_THRESHOLD {
        picks.push_back(
            "Set up real-time notifications (SMS/Slack) when high-priority leads come in"
                .to_string(),
        );
    }

    if inputs.industry == "Law Firm" || inputs.industry == "Real Estate" {
        picks.push_back(
            "Enable after-hours lead capture with automated intake forms and instant acknowledgment"
                .to_string(),
        );
    }

    if picks.len() > MAX_RECOMMENDATIONS {
        picks.truncate(MAX_RECOMMENDATIONS);
    }
    picks
}

/// The CRM name for message phrasing; an unset or blank name reads "CRM".
fn crm_label(inputs: &AuditInputs) -> &str {
    inputs
        .crm_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or("CRM")
}

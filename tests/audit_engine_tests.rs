use leadleak::{compute_audit, AuditInputs, ConversionModel, Severity};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn inputs(
    leads: u32,
    missed: f64,
    value: f64,
    spend: f64,
    has_crm: bool,
    sources: &[&str],
    industry: &str,
) -> AuditInputs {
    AuditInputs {
        industry: industry.to_string(),
        monthly_marketing_spend: spend,
        leads_per_month: leads,
        follow_up_missed_percent: missed,
        average_customer_value: value,
        lead_sources: sources.iter().map(|s| s.to_string()).collect(),
        has_crm,
        crm_name: None,
        conversion: ConversionModel::Assumed,
    }
}

#[test]
fn repeated_runs_are_bit_identical() {
    let record = inputs(50, 20.0, 2000.0, 5000.0, false, &["Web forms"], "Other");
    assert_eq!(compute_audit(&record), compute_audit(&record));
}

#[test]
fn baseline_no_crm_scenario() {
    let record = inputs(50, 20.0, 2000.0, 5000.0, false, &["Web forms"], "Other");
    let results = compute_audit(&record);

    assert_eq!(results.leads_lost_monthly, 10);
    assert_eq!(results.revenue_lost_monthly, 5000.0);
    assert_eq!(results.revenue_lost_annually, 60000.0);
    // 20 loss-ratio points + 12 follow-up points + 15 for no CRM.
    assert_eq!(results.severity_score, 47);
    assert_eq!(results.severity_level, Severity::Medium);
    assert_eq!(results.potential_recovery_percent, 50);
}

#[test]
fn crm_with_multiple_sources_scenario() {
    let record = inputs(
        50,
        20.0,
        2000.0,
        5000.0,
        true,
        &["Web forms", "Phone calls", "Email"],
        "Other",
    );
    let results = compute_audit(&record);

    // The multi-source factor only applies without a CRM.
    assert_eq!(results.severity_score, 32);
    assert_eq!(results.severity_level, Severity::Medium);
    // Full recovery rate, no 15-point penalty.
    assert_eq!(results.potential_recovery_percent, 65);
}

#[test]
fn unrecognized_industry_matches_other() {
    let unknown = compute_audit(&inputs(
        50,
        20.0,
        2000.0,
        5000.0,
        false,
        &["Web forms"],
        "Nonexistent",
    ));
    let other = compute_audit(&inputs(
        50,
        20.0,
        2000.0,
        5000.0,
        false,
        &["Web forms"],
        "Other",
    ));
    assert_eq!(unknown.potential_recovery_percent, other.potential_recovery_percent);
    assert_eq!(unknown, other);
}

#[test]
fn severity_levels_at_every_boundary_score() {
    for (score, expected) in [
        (0, Severity::Low),
        (24, Severity::Low),
        (25, Severity::Medium),
        (49, Severity::Medium),
        (50, Severity::High),
        (74, Severity::High),
        (75, Severity::Critical),
        (100, Severity::Critical),
    ] {
        assert_eq!(Severity::from_score(score), expected, "score {}", score);
    }
}

#[test]
fn recommendation_list_never_exceeds_five() {
    // Engineered to trip all seven rules.
    let record = inputs(
        200,
        40.0,
        6000.0,
        1000.0,
        false,
        &["Web forms", "Phone calls", "Live chat", "Email"],
        "Law Firm",
    );
    let results = compute_audit(&record);
    assert_eq!(results.recommendations.len(), 5);
}

#[test]
fn measured_conversion_rate_replaces_the_assumption() {
    let mut record = inputs(50, 20.0, 2000.0, 5000.0, false, &["Web forms"], "Other");
    record.conversion = ConversionModel::Measured {
        conversion_rate: 50.0,
    };
    let results = compute_audit(&record);
    // 10 lost leads * $2000 * 0.5 instead of * 0.25.
    assert_eq!(results.revenue_lost_monthly, 10000.0);
    assert_eq!(results.revenue_lost_annually, 120000.0);
}

proptest! {
    #[test]
    fn severity_score_is_always_in_bounds(
        leads in 0u32..10_000,
        missed in 0.0f64..=100.0,
        value in 1.0f64..1_000_000.0,
        spend in 0.0f64..1_000_000.0,
        has_crm in any::<bool>(),
        source_count in 0usize..6,
    ) {
        let sources: Vec<&str> = ["a", "b", "c", "d", "e"][..source_count.min(5)].to_vec();
        let record = inputs(leads, missed, value, spend, has_crm, &sources, "SaaS");
        let results = compute_audit(&record);

        prop_assert!(results.severity_score <= 100);
        prop_assert_eq!(
            results.severity_level,
            Severity::from_score(results.severity_score)
        );
        prop_assert!(results.recommendations.len() <= 5);
    }

    #[test]
    fn raising_the_miss_rate_never_shrinks_the_leak(
        leads in 1u32..10_000,
        missed_lo in 0.0f64..=100.0,
        missed_hi in 0.0f64..=100.0,
        value in 1.0f64..100_000.0,
        spend in 1.0f64..100_000.0,
    ) {
        let (lo, hi) = if missed_lo <= missed_hi {
            (missed_lo, missed_hi)
        } else {
            (missed_hi, missed_lo)
        };
        let low = compute_audit(&inputs(leads, lo, value, spend, false, &["a"], "Other"));
        let high = compute_audit(&inputs(leads, hi, value, spend, false, &["a"], "Other"));

        prop_assert!(high.leads_lost_monthly >= low.leads_lost_monthly);
        prop_assert!(high.revenue_lost_monthly >= low.revenue_lost_monthly);
        prop_assert!(high.severity_score >= low.severity_score);
    }

    #[test]
    fn lost_leads_never_exceed_captured_leads(
        leads in 0u32..10_000,
        missed in 0.0f64..=100.0,
    ) {
        let record = inputs(leads, missed, 2000.0, 5000.0, false, &["a"], "Other");
        let results = compute_audit(&record);
        prop_assert!(results.leads_lost_monthly <= leads);
    }
}

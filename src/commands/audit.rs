use crate::cli::OutputFormat;
use crate::config::{self, LeadleakConfig};
use crate::core::{
    industry_profile, validate_inputs, AuditInputs, ConversionModel, FALLBACK_INDUSTRY,
};
use crate::engine::compute_audit;
use crate::formatting::FormattingConfig;
use crate::io;
use crate::io::output::{create_writer, AuditReport};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Everything the `audit` subcommand collects before running.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    pub industry: Option<String>,
    pub spend: Option<f64>,
    pub leads: Option<u32>,
    pub missed: Option<f64>,
    pub value: Option<f64>,
    pub sources: Option<Vec<String>>,
    pub crm: bool,
    pub crm_name: Option<String>,
    pub conversion_rate: Option<f64>,
    pub input: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub plain: bool,
}

pub fn run_audit(config: AuditConfig) -> Result<()> {
    let inputs = resolve_inputs(&config, config::get_config())?;
    validate_inputs(&inputs)?;

    let results = compute_audit(&inputs);
    log::debug!(
        "audit complete: severity {} ({}/100), {} recommendations",
        results.severity_level.as_str(),
        results.severity_score,
        results.recommendations.len()
    );
    let report = AuditReport::new(inputs, results);

    let formatting = if config.plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    };
    let mut writer = create_writer(config.format.into(), config.output.as_deref(), formatting)?;
    writer.write_report(&report)
}

/// Build the input record for this run. A `--input` file wins outright;
/// otherwise each flag falls back to the stored config default, and the
/// customer value falls back once more to the industry figure.
fn resolve_inputs(config: &AuditConfig, stored: &LeadleakConfig) -> Result<AuditInputs> {
    if let Some(path) = &config.input {
        let contents = io::read_file(path)
            .with_context(|| format!("failed to read input file {}", path.display()))?;
        return serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse audit inputs from {}", path.display()));
    }

    let defaults = &stored.defaults;
    let industry = config
        .industry
        .clone()
        .or_else(|| defaults.industry.clone())
        .unwrap_or_else(|| FALLBACK_INDUSTRY.to_string());
    let average_customer_value = config
        .value
        .or(defaults.average_customer_value)
        .unwrap_or_else(|| industry_profile(&industry).avg_value);
    let conversion = match config.conversion_rate.or(stored.audit.conversion_rate) {
        Some(conversion_rate) => ConversionModel::Measured { conversion_rate },
        None => ConversionModel::Assumed,
    };

    Ok(AuditInputs {
        industry,
        monthly_marketing_spend: config
            .spend
            .or(defaults.monthly_marketing_spend)
            .unwrap_or(0.0),
        leads_per_month: config.leads.or(defaults.leads_per_month).unwrap_or(0),
        follow_up_missed_percent: config
            .missed
            .or(defaults.follow_up_missed_percent)
            .unwrap_or(0.0),
        average_customer_value,
        lead_sources: config
            .sources
            .clone()
            .or_else(|| defaults.lead_sources.clone())
            .unwrap_or_default(),
        has_crm: config.crm || defaults.has_crm.unwrap_or(false),
        crm_name: config.crm_name.clone().or_else(|| defaults.crm_name.clone()),
        conversion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    fn flag_config() -> AuditConfig {
        AuditConfig {
            industry: Some("SaaS".to_string()),
            spend: Some(5000.0),
            leads: Some(50),
            missed: Some(20.0),
            value: Some(2000.0),
            sources: Some(vec!["Web forms".to_string()]),
            crm: false,
            crm_name: None,
            conversion_rate: None,
            input: None,
            format: OutputFormat::Terminal,
            output: None,
            plain: true,
        }
    }

    #[test]
    fn flags_take_precedence_over_stored_defaults() {
        let stored = parse_config("[defaults]\nleads_per_month = 10\nindustry = \"Law Firm\"\n")
            .unwrap();
        let inputs = resolve_inputs(&flag_config(), &stored).unwrap();
        assert_eq!(inputs.leads_per_month, 50);
        assert_eq!(inputs.industry, "SaaS");
    }

    #[test]
    fn stored_defaults_fill_unset_flags() {
        let stored = parse_config(
            "[defaults]\nmonthly_marketing_spend = 9000.0\nhas_crm = true\ncrm_name = \"HubSpot\"\n",
        )
        .unwrap();
        let mut config = flag_config();
        config.spend = None;
        config.crm = false;
        let inputs = resolve_inputs(&config, &stored).unwrap();
        assert_eq!(inputs.monthly_marketing_spend, 9000.0);
        assert!(inputs.has_crm);
        assert_eq!(inputs.crm_name.as_deref(), Some("HubSpot"));
    }

    #[test]
    fn customer_value_falls_back_to_the_industry_figure() {
        let mut config = flag_config();
        config.industry = Some("Real Estate".to_string());
        config.value = None;
        let inputs = resolve_inputs(&config, &LeadleakConfig::default()).unwrap();
        assert_eq!(inputs.average_customer_value, 8000.0);
    }

    #[test]
    fn unset_industry_resolves_to_the_fallback_label() {
        let mut config = flag_config();
        config.industry = None;
        config.value = None;
        let inputs = resolve_inputs(&config, &LeadleakConfig::default()).unwrap();
        assert_eq!(inputs.industry, FALLBACK_INDUSTRY);
        assert_eq!(inputs.average_customer_value, 2000.0);
    }

    #[test]
    fn conversion_rate_flag_selects_the_measured_model() {
        let mut config = flag_config();
        config.conversion_rate = Some(40.0);
        let inputs = resolve_inputs(&config, &LeadleakConfig::default()).unwrap();
        assert_eq!(
            inputs.conversion,
            ConversionModel::Measured {
                conversion_rate: 40.0
            }
        );
    }

    #[test]
    fn stored_conversion_rate_applies_when_flag_is_unset() {
        let stored = parse_config("[audit]\nconversion_rate = 35.0\n").unwrap();
        let inputs = resolve_inputs(&flag_config(), &stored).unwrap();
        assert_eq!(
            inputs.conversion,
            ConversionModel::Measured {
                conversion_rate: 35.0
            }
        );
    }
}

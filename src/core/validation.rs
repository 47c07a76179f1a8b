use crate::core::{AuditInputs, ConversionModel};
use crate::errors::ValidationError;

/// Pre-flight checks the engine expects its callers to run.
///
/// The audit pipeline is deliberately unguarded (garbage in, garbage out);
/// this is the gate that keeps garbage out. The checks are the same ones the
/// intake form applies: at least one lead a month, a sane customer value,
/// and at least one lead source. A measured conversion rate must also be a
/// real percentage.
pub fn validate_inputs(inputs: &AuditInputs) -> Result<(), ValidationError> {
    if inputs.leads_per_month < 1 {
        return Err(ValidationError::NoLeads);
    }
    if inputs.average_customer_value < 1.0 {
        return Err(ValidationError::CustomerValueTooLow);
    }
    if inputs.lead_sources.is_empty() {
        return Err(ValidationError::NoLeadSources);
    }
    if let ConversionModel::Measured { conversion_rate } = inputs.conversion {
        if !(0.0..=100.0).contains(&conversion_rate) {
            return Err(ValidationError::ConversionRateOutOfRange(conversion_rate));
        }
    }
    Ok(())
}

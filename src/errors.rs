//! Error taxonomy for audit input validation.
//!
//! The engine itself never fails: it is a total function over well-formed
//! inputs. These variants cover the pre-flight checks callers apply before
//! invoking it, mirroring what an intake form would reject.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ValidationError {
    #[error("at least 1 lead per month is required")]
    NoLeads,

    #[error("average customer value must be at least 1")]
    CustomerValueTooLow,

    #[error("select at least one lead source")]
    NoLeadSources,

    #[error("conversion rate must be between 0 and 100, got {0}")]
    ConversionRateOutOfRange(f64),
}

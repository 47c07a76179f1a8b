// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod engine;
pub mod errors;
pub mod formatting;
pub mod io;

// Re-export commonly used types
pub use crate::core::{
    industry_profile, validate_inputs, AuditInputs, AuditResults, ConversionModel,
    IndustryProfile, Severity, FALLBACK_INDUSTRY, INDUSTRY_PROFILES,
};

pub use crate::engine::compute_audit;

pub use crate::errors::ValidationError;

pub use crate::formatting::{format_currency, format_number, ColorMode, FormattingConfig};

pub use crate::io::output::{create_writer, AuditReport, OutputFormat, OutputWriter};

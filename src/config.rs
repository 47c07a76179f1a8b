//! `.leadleak.toml` support: stored input defaults for CLI pre-fill and
//! standing audit options. Loaded at most once per process; a missing file
//! is normal and a malformed one warns and falls back to defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

pub const CONFIG_FILE: &str = ".leadleak.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeadleakConfig {
    #[serde(default)]
    pub defaults: InputDefaults,
    #[serde(default)]
    pub audit: AuditOptions,
}

/// Stored answers for the audit intake, used to pre-fill any CLI flag the
/// user leaves unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputDefaults {
    pub industry: Option<String>,
    pub monthly_marketing_spend: Option<f64>,
    pub leads_per_month: Option<u32>,
    pub follow_up_missed_percent: Option<f64>,
    pub average_customer_value: Option<f64>,
    pub lead_sources: Option<Vec<String>>,
    pub has_crm: Option<bool>,
    pub crm_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditOptions {
    /// Measured close rate to audit with by default, as a percentage in
    /// [0, 100]. Unset means the assumed 25% model.
    pub conversion_rate: Option<f64>,
}

static CONFIG: OnceLock<LeadleakConfig> = OnceLock::new();

/// The process-wide configuration, loading `.leadleak.toml` from the
/// working directory on first use.
pub fn get_config() -> &'static LeadleakConfig {
    CONFIG.get_or_init(|| load_config_from(Path::new(CONFIG_FILE)).unwrap_or_default())
}

/// Try loading configuration from a specific path. Returns `None` (and logs
/// or warns as appropriate) on any failure so callers can fall back to
/// defaults.
pub fn load_config_from(path: &Path) -> Option<LeadleakConfig> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read config file {}: {}", path.display(), e);
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {}. Using defaults.", e);
            None
        }
    }
}

/// Pure function to parse and validate config from a TOML string.
pub fn parse_config(contents: &str) -> Result<LeadleakConfig, String> {
    let config: LeadleakConfig = toml::from_str(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE, e))?;

    if let Some(rate) = config.audit.conversion_rate {
        if !(0.0..=100.0).contains(&rate) {
            return Err(format!(
                "conversion_rate must be between 0 and 100, got {}",
                rate
            ));
        }
    }

    Ok(config)
}

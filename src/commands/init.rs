use crate::config::CONFIG_FILE;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Leadleak Configuration
# Stored answers pre-fill any flag you leave off `leadleak audit`.

[defaults]
industry = "Other"
monthly_marketing_spend = 5000.0
leads_per_month = 50
follow_up_missed_percent = 20.0
# average_customer_value = 2000.0
lead_sources = ["Web forms"]
has_crm = false
# crm_name = "HubSpot"

[audit]
# Measured close rate on followed-up leads, as a percentage.
# Leave unset to audit with the assumed 25%.
# conversion_rate = 25.0
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {} configuration file", CONFIG_FILE);

    Ok(())
}

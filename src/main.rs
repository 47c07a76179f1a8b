use anyhow::Result;
use clap::Parser;
use leadleak::cli::{Cli, Commands};
use leadleak::commands::{self, AuditConfig};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Audit {
            industry,
            spend,
            leads,
            missed,
            value,
            sources,
            crm,
            crm_name,
            conversion_rate,
            input,
            format,
            output,
            plain,
        } => {
            let config = AuditConfig {
                industry,
                spend,
                leads,
                missed,
                value,
                sources,
                crm,
                crm_name,
                conversion_rate,
                input,
                format,
                output,
                plain,
            };
            commands::run_audit(config)
        }
        Commands::Industries { format } => commands::list_industries(format),
        Commands::Init { force } => commands::init_config(force),
    }
}

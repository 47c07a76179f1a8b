use crate::cli::OutputFormat;
use crate::core::INDUSTRY_PROFILES;
use crate::formatting::format_currency;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct IndustryRow {
    industry: &'static str,
    avg_value: f64,
    recovery_rate: i32,
}

/// Print the built-in industry reference table.
pub fn list_industries(format: OutputFormat) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Json => {
            let rows: Vec<IndustryRow> = INDUSTRY_PROFILES
                .iter()
                .map(|&(industry, ref profile)| IndustryRow {
                    industry,
                    avg_value: profile.avg_value,
                    recovery_rate: profile.recovery_rate,
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
        }
        OutputFormat::Markdown => {
            writeln!(out, "| Industry | Avg customer value | Recovery rate |")?;
            writeln!(out, "|----------|--------------------|---------------|")?;
            for (industry, profile) in INDUSTRY_PROFILES {
                writeln!(
                    out,
                    "| {} | {} | {}% |",
                    industry,
                    format_currency(profile.avg_value),
                    profile.recovery_rate
                )?;
            }
        }
        OutputFormat::Terminal => {
            for (industry, profile) in INDUSTRY_PROFILES {
                writeln!(
                    out,
                    "{:<12} avg value {:>7}   recovery {:>3}%",
                    industry,
                    format_currency(profile.avg_value),
                    profile.recovery_rate
                )?;
            }
        }
    }

    Ok(())
}

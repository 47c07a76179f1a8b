use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "leadleak")]
#[command(about = "Lead-leakage audit calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Audit lead handling and quantify the revenue leak
    Audit {
        /// Industry category; unrecognized labels audit as "Other"
        #[arg(long)]
        industry: Option<String>,

        /// Monthly marketing spend in dollars
        #[arg(long)]
        spend: Option<f64>,

        /// Leads captured per month
        #[arg(long)]
        leads: Option<u32>,

        /// Percentage of leads never followed up in time, 0-100
        #[arg(long)]
        missed: Option<f64>,

        /// Average customer value in dollars; defaults to the industry figure
        #[arg(long)]
        value: Option<f64>,

        /// Lead sources, comma separated
        #[arg(long, value_delimiter = ',')]
        sources: Option<Vec<String>>,

        /// The business already runs a CRM
        #[arg(long)]
        crm: bool,

        /// CRM product name, used in recommendation phrasing
        #[arg(long)]
        crm_name: Option<String>,

        /// Measured close rate on followed-up leads, 0-100; without it the
        /// audit assumes 25%
        #[arg(long)]
        conversion_rate: Option<f64>,

        /// Read the full input record from a JSON file instead of flags
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        plain: bool,
    },

    /// List the built-in industry profiles
    Industries {
        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Create a starter .leadleak.toml in the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => Self::Json,
            OutputFormat::Markdown => Self::Markdown,
            OutputFormat::Terminal => Self::Terminal,
        }
    }
}

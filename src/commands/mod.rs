//! CLI command implementations.
//!
//! - **audit**: assemble inputs from flags, config defaults, or a JSON
//!   file, validate them, run the engine, render the report
//! - **industries**: print the built-in industry reference table
//! - **init**: write a starter `.leadleak.toml`

pub mod audit;
pub mod industries;
pub mod init;

pub use audit::{run_audit, AuditConfig};
pub use industries::list_industries;
pub use init::init_config;

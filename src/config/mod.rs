pub mod catalog_file;

#[cfg(feature = "cli")]
use crate::core::render::OutputFormat;
#[cfg(feature = "cli")]
use crate::domain::device::Purpose;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "device-catalog")]
#[command(about = "Validate and describe a catalog of consumer devices")]
pub struct CliConfig {
    /// Path to the TOML catalog file
    #[arg(short, long, default_value = "catalog.toml")]
    pub catalog: String,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Only show devices with this purpose (learning, talking, music)
    #[arg(short, long)]
    pub purpose: Option<Purpose>,

    /// Report entries that compare equal to an earlier entry
    #[arg(long)]
    pub duplicates: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

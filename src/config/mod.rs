#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "svg-gallery")]
#[command(about = "Gallery client for remote SVG assets: list, preview, download, rasterize")]
pub struct CliConfig {
    /// Base URL of the gallery backend script.
    #[arg(long, default_value = "")]
    pub api_endpoint: String,

    /// Directory where downloaded files are written.
    #[arg(long, default_value = "./downloads")]
    pub output_path: String,

    /// HTTP timeout per request, in seconds.
    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    /// Read endpoint and output settings from a TOML file instead of flags.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: GalleryCommand,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum GalleryCommand {
    /// List gallery entries with their download counts.
    List,

    /// Fetch one SVG, repair it, and print the cleaned markup.
    Preview {
        /// Gallery entry identifier.
        id: String,
    },

    /// Download the original SVG file.
    Download {
        /// Gallery entry identifier.
        id: String,
    },

    /// Rasterize the SVG and save it as a PNG.
    Png {
        /// Gallery entry identifier.
        id: String,
    },
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validation::validate_url("api_endpoint", &self.api_endpoint)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_positive_number("timeout_secs", self.timeout_secs, 1)?;
        Ok(())
    }
}

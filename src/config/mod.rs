#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::{ArgGroup, Parser};
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use toml_config::{validate_formats, EstimatorConfig};

pub const DEFAULT_FILENAME: &str = "invoice";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "customs-estimator")]
#[command(about = "Estimate shipping and customs cost for a product")]
#[command(group(ArgGroup::new("product").required(true).args(["url", "name"])))]
pub struct CliConfig {
    #[arg(long, help = "Product page URL; the page title names the product")]
    pub url: Option<String>,

    #[arg(long, help = "Product name or description")]
    pub name: Option<String>,

    #[arg(long, default_value = "0", help = "Declared value in USD")]
    pub declared_value: f64,

    #[arg(long, help = "TOML file with rate, shipping and output settings")]
    pub config: Option<String>,

    #[arg(long, help = "Directory to write invoice files into")]
    pub output_path: Option<String>,

    #[arg(long, value_delimiter = ',', help = "Invoice formats: txt, json, csv")]
    pub formats: Vec<String>,

    #[arg(long, help = "Invoice file name without extension; supports {timestamp} and {category}")]
    pub filename: Option<String>,

    #[arg(long, help = "Product page request timeout")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Product page request User-Agent")]
    pub user_agent: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log as JSON lines")]
    pub log_json: bool,

    #[arg(long, help = "Show the resolved settings without fetching or writing anything")]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Fill unset flags from the config file; flags given on the command line win.
    pub fn merge_file(&mut self, file: &EstimatorConfig) {
        if self.output_path.is_none() {
            self.output_path = file.output.path.clone();
        }
        if self.formats.is_empty() {
            if let Some(formats) = &file.output.formats {
                self.formats = formats.clone();
            }
        }
        if self.filename.is_none() {
            self.filename = file.output.filename.clone();
        }
        if self.timeout_seconds.is_none() {
            self.timeout_seconds = file.identifier.timeout_seconds;
        }
        if self.user_agent.is_none() {
            self.user_agent = file.identifier.user_agent.clone();
        }
        if self.formats.is_empty() {
            self.formats = vec!["txt".to_string()];
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn declared_value(&self) -> f64 {
        self.declared_value
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn output_formats(&self) -> &[String] {
        &self.formats
    }

    fn filename_template(&self) -> &str {
        self.filename.as_deref().unwrap_or(DEFAULT_FILENAME)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_negative("declared_value", self.declared_value)?;

        if let Some(url) = &self.url {
            validation::validate_url("url", url)?;
        }
        if let Some(path) = &self.output_path {
            validation::validate_path("output_path", path)?;
        }
        if let Some(filename) = &self.filename {
            validation::validate_non_empty_string("filename", filename)?;
        }
        if let Some(timeout) = self.timeout_seconds {
            validation::validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        validate_formats("formats", &self.formats)
    }
}

pub mod cli;
pub mod toml_config;

use crate::core::loader::{DEFAULT_PROFILE_PATH, DEFAULT_TIMEOUT_SECONDS};
use crate::core::shell::DEFAULT_STYLESHEET;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number,
    validate_relative_resource, validate_url, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/";
pub const DEFAULT_OUTPUT_PATH: &str = "./dist";
pub const DEFAULT_OUTPUT_FILE: &str = "index.html";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "profile-page"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Render a resume page from a JSON profile served over HTTP")
)]
pub struct CliConfig {
    /// Site root that serves data/profile.json
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_BASE_URL))]
    pub base_url: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_PROFILE_PATH))]
    pub profile_path: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_OUTPUT_PATH))]
    pub output_path: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_OUTPUT_FILE))]
    pub output_file: String,

    /// Stylesheet href placed in the page head
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_STYLESHEET))]
    pub stylesheet: String,

    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS))]
    pub timeout_seconds: u64,

    /// Footer year (defaults to the current year)
    #[cfg_attr(feature = "cli", arg(long))]
    pub year: Option<i32>,

    /// Load settings from a TOML file instead of the flags above
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<String>,

    /// Print the page to stdout instead of writing it
    #[cfg_attr(feature = "cli", arg(long))]
    pub stdout: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON lines"))]
    pub log_json: bool,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            profile_path: DEFAULT_PROFILE_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            stylesheet: DEFAULT_STYLESHEET.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            year: None,
            config: None,
            stdout: false,
            log_json: false,
            verbose: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn profile_path(&self) -> &str {
        &self.profile_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn stylesheet(&self) -> &str {
        &self.stylesheet
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn year(&self) -> Option<i32> {
        self.year
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

/// Checks shared by every `ConfigProvider`.
pub fn validate_provider<C: ConfigProvider>(config: &C) -> Result<()> {
    validate_url("base_url", config.base_url())?;
    validate_relative_resource("profile_path", config.profile_path())?;
    validate_path("output_path", config.output_path())?;
    validate_non_empty_string("output_file", config.output_file())?;
    validate_positive_number("timeout_seconds", config.timeout_seconds(), 1)?;
    Ok(())
}

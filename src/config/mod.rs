#[cfg(feature = "cli")]
pub mod args;
pub mod cli;
pub mod toml_config;

use crate::core::loader::DEFAULT_TIMEOUT_SECS;
use crate::core::render::DEFAULT_CONTACT_NUMBER;
use crate::core::ConfigProvider;
use crate::domain::model::{DirectorySource, FilterMode};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::Serialize;
use self::toml_config::TomlConfig;

pub const DEFAULT_OUTPUT_PATH: &str = "./dist";
pub const DEFAULT_STATE_DIR: &str = "./.solar-directory";

/// Settings for one run, after merging the TOML file and command-line flags.
#[derive(Debug, Clone, Serialize)]
pub struct BuildConfig {
    pub source: DirectorySource,
    pub output_path: String,
    pub contact_number: String,
    pub query: Option<String>,
    pub filter_mode: FilterMode,
    pub timeout_secs: u64,
    pub bundle_zip: bool,
    pub state_dir: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source: DirectorySource::Inline,
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            contact_number: DEFAULT_CONTACT_NUMBER.to_string(),
            query: None,
            filter_mode: FilterMode::Fields,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            bundle_zip: false,
            state_dir: DEFAULT_STATE_DIR.to_string(),
        }
    }
}

impl From<TomlConfig> for BuildConfig {
    fn from(config: TomlConfig) -> Self {
        let defaults = BuildConfig::default();
        Self {
            source: config.source.source,
            output_path: config.site.output_path.unwrap_or(defaults.output_path),
            contact_number: config
                .site
                .contact_number
                .unwrap_or(defaults.contact_number),
            query: config.site.query,
            filter_mode: config.site.filter_mode.unwrap_or_default(),
            timeout_secs: config.source.timeout_seconds.unwrap_or(defaults.timeout_secs),
            bundle_zip: config.site.bundle_zip.unwrap_or(false),
            state_dir: config.preferences.state_dir.unwrap_or(defaults.state_dir),
        }
    }
}

impl Validate for BuildConfig {
    fn validate(&self) -> Result<()> {
        match &self.source {
            DirectorySource::Remote { url } => validation::validate_url("source", url)?,
            DirectorySource::File { path } | DirectorySource::Csv { path } => {
                validation::validate_path("source", path)?
            }
            DirectorySource::Inline => {}
        }
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_path("state_dir", &self.state_dir)?;
        validation::validate_non_empty_string("contact_number", &self.contact_number)?;
        validation::validate_positive_number("timeout", self.timeout_secs, 1)?;
        Ok(())
    }
}

impl ConfigProvider for BuildConfig {
    fn source(&self) -> &DirectorySource {
        &self.source
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn contact_number(&self) -> &str {
        &self.contact_number
    }

    fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    fn request_timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    fn bundle_zip(&self) -> bool {
        self.bundle_zip
    }
}

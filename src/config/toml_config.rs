use crate::domain::model::{DirectorySource, FilterMode};
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub preferences: PreferencesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(flatten)]
    pub source: DirectorySource,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    pub output_path: Option<String>,
    pub contact_number: Option<String>,
    pub query: Option<String>,
    pub filter_mode: Option<FilterMode>,
    pub bundle_zip: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferencesConfig {
    pub state_dir: Option<String>,
}

impl TomlConfig {
    /// Loads and parses a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DirectoryError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DirectoryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| {
            DirectoryError::ConfigValidationError {
                field: "environment".to_string(),
                message: e.to_string(),
            }
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        match &self.source.source {
            DirectorySource::Remote { url } => validation::validate_url("source.url", url)?,
            DirectorySource::File { path } => {
                validation::validate_path("source.path", path)?;
                validation::validate_file_extension("source.path", path, &["json"])?;
            }
            DirectorySource::Csv { path } => {
                validation::validate_path("source.path", path)?;
                validation::validate_file_extension("source.path", path, &["csv"])?;
            }
            DirectorySource::Inline => {}
        }

        if let Some(timeout) = self.source.timeout_seconds {
            validation::validate_positive_number("source.timeout_seconds", timeout, 1)?;
        }
        if let Some(path) = &self.site.output_path {
            validation::validate_path("site.output_path", path)?;
        }
        if let Some(contact) = &self.site.contact_number {
            validation::validate_non_empty_string("site.contact_number", contact)?;
        }
        if let Some(dir) = &self.preferences.state_dir {
            validation::validate_path("preferences.state_dir", dir)?;
        }
        Ok(())
    }
}

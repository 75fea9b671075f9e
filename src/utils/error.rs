use thiserror::Error;

/// Text shown in the list container whenever the directory cannot be loaded.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load companies.";

/// Why the directory data was unavailable.
///
/// Callers that only care about the user-facing outcome collapse every variant
/// into [`LOAD_FAILURE_MESSAGE`].
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Directory source answered with HTTP {status}")]
    Status { status: u16 },

    #[error("Directory data could not be parsed: {message}")]
    Parse { message: String },

    #[error("Directory file could not be read: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Parse {
            message: e.to_string(),
        }
    }
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        LoadError::Parse {
            message: e.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Directory unavailable: {0}")]
    Load(#[from] LoadError),

    #[error("Directory has not been loaded yet")]
    NotLoaded,

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    TemplateError(#[from] minijinja::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Configuration,
    Output,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DirectoryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DirectoryError::Load(_) | DirectoryError::NotLoaded => ErrorCategory::Data,
            DirectoryError::ConfigValidationError { .. }
            | DirectoryError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DirectoryError::ValidationError { .. } => ErrorCategory::Input,
            DirectoryError::ZipError(_)
            | DirectoryError::IoError(_)
            | DirectoryError::SerializationError(_)
            | DirectoryError::TemplateError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DirectoryError::Load(_) | DirectoryError::NotLoaded => {
                LOAD_FAILURE_MESSAGE.to_string()
            }
            DirectoryError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            DirectoryError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            DirectoryError::ValidationError { message } => message.clone(),
            other => format!("Could not write the site: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DirectoryError::Load(LoadError::Network(_)) => {
                "Check the network connection and the source URL"
            }
            DirectoryError::Load(LoadError::Status { .. }) => {
                "Make sure the directory resource exists on the server"
            }
            DirectoryError::Load(LoadError::Parse { .. }) => {
                "Make sure the source is a JSON array (or CSV with a company column) and every entry has a name"
            }
            DirectoryError::Load(LoadError::Io(_)) => "Check that the source file exists and is readable",
            DirectoryError::NotLoaded => "Load the directory before searching it",
            DirectoryError::ConfigValidationError { .. }
            | DirectoryError::InvalidConfigValueError { .. } => {
                "Review the command-line flags and the TOML configuration file"
            }
            DirectoryError::ValidationError { .. } => "Fix the input values and try again",
            _ => "Check that the output directory is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;

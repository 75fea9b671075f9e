use crate::core::Storage;
use crate::domain::model::LanguagePreference;
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::validate_locale;
use serde::{Deserialize, Serialize};

pub const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(default)]
    language: LanguagePreference,
}

/// The one persisted key/value pair: the chosen language.
pub struct PreferenceStore<S: Storage> {
    storage: S,
}

impl<S: Storage> PreferenceStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns the stored language, or `en` on a first visit.
    pub async fn load(&self) -> Result<LanguagePreference> {
        let bytes = match self.storage.read_file(PREFERENCES_FILE).await {
            Ok(bytes) => bytes,
            Err(DirectoryError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No stored preferences, using defaults");
                return Ok(LanguagePreference::default());
            }
            Err(e) => return Err(e),
        };

        match serde_json::from_slice::<Preferences>(&bytes) {
            Ok(prefs) => Ok(prefs.language),
            Err(e) => {
                tracing::warn!("⚠️ Ignoring unreadable {}: {}", PREFERENCES_FILE, e);
                Ok(LanguagePreference::default())
            }
        }
    }

    /// Overwrites the stored language.
    pub async fn switch(&self, code: &str) -> Result<LanguagePreference> {
        validate_locale("language", code)?;

        let prefs = Preferences {
            language: LanguagePreference(code.to_string()),
        };
        let data = serde_json::to_vec_pretty(&prefs)?;
        self.storage.write_file(PREFERENCES_FILE, &data).await?;

        tracing::info!("🌐 Language set to {}", code);
        Ok(prefs.language)
    }
}

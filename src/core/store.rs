use crate::core::filter::filter_entries;
use crate::domain::model::{DirectoryEntry, FilterMode};
use crate::utils::error::{DirectoryError, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Pending,
    Ready(Vec<DirectoryEntry>),
    Failed { reason: String },
}

/// Owns the full list. It is written when a load completes and only read
/// afterwards; every search derives a new view.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    state: LoadState,
}

impl DirectoryStore {
    pub fn new() -> Self {
        Self {
            state: LoadState::Pending,
        }
    }

    pub fn with_entries(entries: Vec<DirectoryEntry>) -> Self {
        Self {
            state: LoadState::Ready(entries),
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, LoadState::Ready(_))
    }

    pub fn set_entries(&mut self, entries: Vec<DirectoryEntry>) {
        if self.is_loaded() {
            tracing::debug!("Replacing previously loaded directory");
        }
        self.state = LoadState::Ready(entries);
    }

    pub fn set_failed(&mut self, reason: impl Into<String>) {
        self.state = LoadState::Failed {
            reason: reason.into(),
        };
    }

    /// The full list, or `NotLoaded` while pending or after a failed load.
    pub fn entries(&self) -> Result<&[DirectoryEntry]> {
        match &self.state {
            LoadState::Ready(entries) => Ok(entries.as_slice()),
            _ => Err(DirectoryError::NotLoaded),
        }
    }

    pub fn search(&self, query: &str, mode: FilterMode) -> Result<Vec<&DirectoryEntry>> {
        Ok(filter_entries(self.entries()?, query, mode))
    }
}

impl Default for DirectoryStore {
    fn default() -> Self {
        Self::new()
    }
}

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, BuildConfig};
pub use crate::core::{
    engine::SiteEngine, loader::DirectoryLoader, page::DirectoryPage, pipeline::SitePipeline,
    preferences::PreferenceStore,
};
pub use crate::domain::model::{DirectoryEntry, DirectorySource, FilterMode};
pub use crate::utils::error::{DirectoryError, LoadError, Result};

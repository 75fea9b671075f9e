pub mod calculator;
pub mod engine;
pub mod filter;
pub mod i18n;
pub mod loader;
pub mod page;
pub mod pipeline;
pub mod preferences;
pub mod render;
pub mod store;
pub mod templates;

pub use crate::domain::model::{DirectoryEntry, SiteBundle, SitePage};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;

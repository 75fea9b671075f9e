use crate::domain::model::{DirectoryEntry, DirectorySource, FilterMode, SiteBundle};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source(&self) -> &DirectorySource;
    fn output_path(&self) -> &str;
    fn contact_number(&self) -> &str;
    fn query(&self) -> Option<&str>;
    fn filter_mode(&self) -> FilterMode;
    fn request_timeout_secs(&self) -> u64;
    fn bundle_zip(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<DirectoryEntry>>;
    async fn transform(&self, entries: Vec<DirectoryEntry>) -> Result<SiteBundle>;
    async fn load(&self, bundle: SiteBundle) -> Result<String>;
}

use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct SiteEngine<P: Pipeline> {
    pipeline: P,
}

#[derive(Debug, Clone)]
pub struct BuildReport {
    pub output_path: String,
    pub total_entries: usize,
    pub listed_entries: usize,
    pub files_written: usize,
}

impl<P: Pipeline> SiteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<BuildReport> {
        let started = Instant::now();
        tracing::info!("Starting site build...");

        tracing::info!("Loading directory...");
        let entries = self.pipeline.extract().await?;
        tracing::info!("Loaded {} entries", entries.len());

        tracing::info!("Rendering pages...");
        let bundle = self.pipeline.transform(entries).await?;
        let (total_entries, listed_entries, files_written) =
            (bundle.total_entries, bundle.listed_entries, bundle.pages.len());
        tracing::info!("Rendered {} files", files_written);

        tracing::info!("Writing site...");
        let output_path = self.pipeline.load(bundle).await?;
        tracing::info!(
            "Site saved to: {} ({:?})",
            output_path,
            started.elapsed()
        );

        Ok(BuildReport {
            output_path,
            total_entries,
            listed_entries,
            files_written,
        })
    }
}

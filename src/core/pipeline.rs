use crate::core::i18n::Language;
use crate::core::loader::DirectoryLoader;
use crate::core::page::DirectoryPage;
use crate::core::render::Renderer;
use crate::core::templates::PageTemplates;
use crate::core::{ConfigProvider, DirectoryEntry, Pipeline, SiteBundle, SitePage, Storage};
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;
use zip::write::{FileOptions, ZipWriter};

pub const INDEX_FILE: &str = "index.html";
pub const THANKS_FILE: &str = "asante.html";
pub const DATA_FILE: &str = "companies.json";
pub const MANIFEST_FILE: &str = "manifest.json";
pub const ARCHIVE_FILE: &str = "site.zip";

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    generated_at: chrono::DateTime<chrono::Utc>,
    language: &'a str,
    query: Option<&'a str>,
    total_entries: usize,
    listed_entries: usize,
}

/// Builds the static directory site: index, one profile per company, the
/// thank-you page and the published data file.
pub struct SitePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    loader: DirectoryLoader,
    language: Language,
}

impl<S: Storage, C: ConfigProvider> SitePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let loader =
            DirectoryLoader::with_timeout(Duration::from_secs(config.request_timeout_secs()));
        Self {
            storage,
            config,
            loader,
            language: Language::En,
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    fn build_pages(&self, entries: Vec<DirectoryEntry>) -> Result<SiteBundle> {
        let templates = PageTemplates::new(self.language)?;
        let renderer = Renderer::new(self.config.contact_number(), self.language.texts());
        let mut page = DirectoryPage::new(renderer, self.config.filter_mode());

        let total_entries = page.show_entries(entries);
        let query = self.config.query().unwrap_or_default();
        let listed_entries = if query.is_empty() {
            total_entries
        } else {
            page.on_search_input(query)?
        };
        tracing::info!(
            "🔎 Listing {} of {} companies{}",
            listed_entries,
            total_entries,
            if query.is_empty() {
                String::new()
            } else {
                format!(" matching {:?}", query)
            }
        );

        let mut pages = vec![SitePage {
            path: INDEX_FILE.to_string(),
            contents: templates
                .render_index(page.container(), query, total_entries)?
                .into_bytes(),
        }];

        // Profiles exist for every company so links stay valid under any query.
        let all = page.store().entries()?;
        for entry in all {
            let card = page.renderer().card(entry);
            pages.push(SitePage {
                path: entry.profile_page(),
                contents: templates.render_profile(entry, &card)?.into_bytes(),
            });
        }

        pages.push(SitePage {
            path: THANKS_FILE.to_string(),
            contents: templates.render_thanks()?.into_bytes(),
        });
        pages.push(SitePage {
            path: DATA_FILE.to_string(),
            contents: serde_json::to_vec_pretty(all)?,
        });

        let manifest = Manifest {
            generated_at: chrono::Utc::now(),
            language: self.language.code(),
            query: self.config.query(),
            total_entries,
            listed_entries,
        };
        pages.push(SitePage {
            path: MANIFEST_FILE.to_string(),
            contents: serde_json::to_vec_pretty(&manifest)?,
        });

        Ok(SiteBundle {
            pages,
            total_entries,
            listed_entries,
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SitePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<DirectoryEntry>> {
        let entries = self.loader.load(self.config.source()).await?;
        Ok(entries)
    }

    async fn transform(&self, entries: Vec<DirectoryEntry>) -> Result<SiteBundle> {
        self.build_pages(entries)
    }

    async fn load(&self, bundle: SiteBundle) -> Result<String> {
        tracing::debug!("Writing {} files", bundle.pages.len());
        for page in &bundle.pages {
            self.storage.write_file(&page.path, &page.contents).await?;
        }

        if self.config.bundle_zip() {
            let zip_data = {
                let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
                for page in &bundle.pages {
                    zip.start_file::<_, ()>(page.path.as_str(), FileOptions::default())?;
                    zip.write_all(&page.contents)?;
                }
                let cursor = zip.finish()?;
                cursor.into_inner()
            };

            tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
            self.storage.write_file(ARCHIVE_FILE, &zip_data).await?;
        }

        Ok(self.config.output_path().to_string())
    }
}

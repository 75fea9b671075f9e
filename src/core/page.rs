use crate::core::loader::DirectoryLoader;
use crate::core::render::{ListContainer, Renderer};
use crate::core::store::DirectoryStore;
use crate::domain::model::{DirectoryEntry, DirectorySource, FilterMode};
use crate::utils::error::{LoadError, Result, LOAD_FAILURE_MESSAGE};

/// The directory screen: the owned store, the list container and the renderer
/// that fills it.
pub struct DirectoryPage {
    store: DirectoryStore,
    container: ListContainer,
    renderer: Renderer,
    mode: FilterMode,
}

impl DirectoryPage {
    pub fn new(renderer: Renderer, mode: FilterMode) -> Self {
        Self {
            store: DirectoryStore::new(),
            container: ListContainer::new(),
            renderer: renderer.with_filter_mode(mode),
            mode,
        }
    }

    pub fn store(&self) -> &DirectoryStore {
        &self.store
    }

    pub fn container(&self) -> &ListContainer {
        &self.container
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Loads the list and renders it. On failure the container shows the
    /// generic failure text; the cause is still returned to the caller.
    pub async fn load(
        &mut self,
        loader: &DirectoryLoader,
        source: &DirectorySource,
    ) -> std::result::Result<usize, LoadError> {
        match loader.load(source).await {
            Ok(entries) => Ok(self.show_entries(entries)),
            Err(e) => {
                self.show_failure(&e);
                Err(e)
            }
        }
    }

    /// Stores a freshly loaded list and renders all of it.
    pub fn show_entries(&mut self, entries: Vec<DirectoryEntry>) -> usize {
        self.store.set_entries(entries);
        self.render_all()
    }

    pub fn show_failure(&mut self, error: &LoadError) {
        tracing::error!("❌ Directory unavailable: {}", error);
        self.store.set_failed(error.to_string());
        self.container.show_message(LOAD_FAILURE_MESSAGE);
    }

    /// Re-renders the entries matching `query`. Returns how many are shown.
    pub fn on_search_input(&mut self, query: &str) -> Result<usize> {
        let view = self.store.search(query, self.mode)?;
        let shown = view.len();
        tracing::debug!("Query {:?} matched {} entries", query, shown);
        self.renderer.render(&mut self.container, view);
        Ok(shown)
    }

    fn render_all(&mut self) -> usize {
        match self.store.entries() {
            Ok(entries) => {
                self.renderer.render(&mut self.container, entries);
                entries.len()
            }
            Err(_) => 0,
        }
    }
}

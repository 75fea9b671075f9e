use crate::core::filter::search_terms;
use crate::core::i18n::Texts;
use crate::domain::model::{DirectoryEntry, EntryId, FilterMode};
use serde::Serialize;
use url::Url;

pub const DEFAULT_CONTACT_NUMBER: &str = "255700000000";

/// What one company looks like in the list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub id: EntryId,
    pub name: String,
    pub location: String,
    pub services: String,
    /// Profile page, derived from the entry's slug so it survives filtering.
    pub profile_href: String,
    /// WhatsApp deep link to the directory's contact number.
    pub contact_href: String,
    /// What the in-page search matches against, same terms as `filter_entries`.
    pub search_terms: Vec<String>,
    /// `search_terms` as a JSON array, for the card's `data-search` attribute.
    pub search_json: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ContainerContent {
    Cards(Vec<Card>),
    Message(String),
}

/// The list area of the page. Every update replaces its whole content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListContainer {
    content: ContainerContent,
}

impl ListContainer {
    pub fn new() -> Self {
        Self {
            content: ContainerContent::Cards(Vec::new()),
        }
    }

    pub fn content(&self) -> &ContainerContent {
        &self.content
    }

    pub fn cards(&self) -> &[Card] {
        match &self.content {
            ContainerContent::Cards(cards) => cards,
            ContainerContent::Message(_) => &[],
        }
    }

    pub fn message(&self) -> Option<&str> {
        match &self.content {
            ContainerContent::Message(text) => Some(text),
            ContainerContent::Cards(_) => None,
        }
    }

    pub fn replace_cards(&mut self, cards: Vec<Card>) {
        self.content = ContainerContent::Cards(cards);
    }

    pub fn show_message(&mut self, text: impl Into<String>) {
        self.content = ContainerContent::Message(text.into());
    }
}

impl Default for ListContainer {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Renderer {
    contact_number: String,
    texts: &'static Texts,
    mode: FilterMode,
}

impl Renderer {
    pub fn new(contact_number: impl Into<String>, texts: &'static Texts) -> Self {
        Self {
            contact_number: contact_number.into(),
            texts,
            mode: FilterMode::Fields,
        }
    }

    /// Which terms the cards carry for the in-page search.
    pub fn with_filter_mode(mut self, mode: FilterMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn texts(&self) -> &'static Texts {
        self.texts
    }

    /// Tears down the container and rebuilds one card per entry, in order.
    pub fn render<'a, I>(&self, container: &mut ListContainer, entries: I)
    where
        I: IntoIterator<Item = &'a DirectoryEntry>,
    {
        let cards: Vec<Card> = entries.into_iter().map(|e| self.card(e)).collect();
        tracing::debug!("Rendering {} cards", cards.len());
        container.replace_cards(cards);
    }

    pub fn card(&self, entry: &DirectoryEntry) -> Card {
        let search_terms = search_terms(entry, self.mode);
        let search_json =
            serde_json::to_string(&search_terms).unwrap_or_else(|_| "[]".to_string());
        Card {
            id: entry.id,
            name: entry.company.name.clone(),
            location: entry.company.location.clone(),
            services: entry.company.services.clone(),
            profile_href: entry.profile_page(),
            contact_href: self.contact_link(&entry.company.name),
            search_terms,
            search_json,
        }
    }

    fn contact_link(&self, company: &str) -> String {
        let text = format!("{} {}", self.texts.contact_message, company);
        let base = format!("https://wa.me/{}", self.contact_number);
        match Url::parse_with_params(&base, &[("text", text.as_str())]) {
            Ok(url) => url.to_string(),
            Err(e) => {
                tracing::warn!("⚠️ Invalid contact number '{}': {}", self.contact_number, e);
                base
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::filter_entries;
    use crate::core::i18n::Language;
    use crate::domain::model::{assign_identities, Company};

    fn renderer() -> Renderer {
        Renderer::new(DEFAULT_CONTACT_NUMBER, Language::En.texts())
    }

    fn entries() -> Vec<DirectoryEntry> {
        assign_identities(vec![
            Company::new("A", "X", "solar"),
            Company::new("B", "Y", "pumps"),
            Company::new("C", "Z", "solar pumps"),
        ])
    }

    #[test]
    fn test_one_card_per_entry_in_order() {
        let entries = entries();
        let mut container = ListContainer::new();
        renderer().render(&mut container, &entries);

        let names: Vec<&str> = container.cards().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_rendering_twice_does_not_accumulate() {
        let entries = entries();
        let renderer = renderer();
        let mut container = ListContainer::new();

        renderer.render(&mut container, &entries);
        let first = container.clone();
        renderer.render(&mut container, &entries);

        assert_eq!(container, first);
        assert_eq!(container.cards().len(), 3);
    }

    #[test]
    fn test_render_replaces_message() {
        let entries = entries();
        let mut container = ListContainer::new();
        container.show_message("Failed to load companies.");

        renderer().render(&mut container, &entries[..1]);
        assert!(container.message().is_none());
        assert_eq!(container.cards().len(), 1);
    }

    #[test]
    fn test_profile_link_follows_entry_not_position() {
        let entries = entries();
        let view = filter_entries(&entries, "pumps", FilterMode::Fields);
        let mut container = ListContainer::new();
        renderer().render(&mut container, view);

        assert_eq!(container.cards()[0].name, "B");
        assert_eq!(container.cards()[0].profile_href, "b.html");
        assert_eq!(container.cards()[1].profile_href, "c.html");
    }

    #[test]
    fn test_cards_carry_search_terms_for_mode() {
        let entries = entries();
        let card = renderer().card(&entries[0]);
        assert_eq!(card.search_terms, vec!["a", "x", "solar"]);
        assert_eq!(card.search_json, r#"["a","x","solar"]"#);

        let serialized = renderer().with_filter_mode(FilterMode::Serialized).card(&entries[0]);
        assert_eq!(serialized.search_terms.len(), 1);
        assert!(serialized.search_terms[0].contains("\"services\":\"solar\""));
    }

    #[test]
    fn test_contact_link_is_encoded() {
        let entries = entries();
        let card = renderer().card(&entries[0]);
        assert!(card
            .contact_href
            .starts_with("https://wa.me/255700000000?text="));
        assert!(!card.contact_href.contains(' '));
    }
}

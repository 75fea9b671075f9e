use crate::core::calculator::{MISSING_INPUT_MESSAGE, RATE_TSH};
use crate::core::i18n::Language;
use crate::core::render::{Card, ListContainer};
use crate::domain::model::DirectoryEntry;
use crate::utils::error::Result;
use minijinja::{context, Environment};

const CARDS_TEMPLATE: &str = include_str!("../templates/cards.html.jinja");
const INDEX_TEMPLATE: &str = include_str!("../templates/index.html.jinja");
const PROFILE_TEMPLATE: &str = include_str!("../templates/profile.html.jinja");
const THANKS_TEMPLATE: &str = include_str!("../templates/asante.html.jinja");

/// Header colours for profile pages, picked by entry id.
pub const PROFILE_COLOURS: [&str; 6] = [
    "#f4b400", "#2e7d32", "#1565c0", "#c62828", "#6a1b9a", "#ef6c00",
];

/// Template names end in `.html` so minijinja escapes every value.
pub struct PageTemplates {
    env: Environment<'static>,
    language: Language,
}

impl PageTemplates {
    pub fn new(language: Language) -> Result<Self> {
        let mut env = Environment::new();
        env.add_template("cards.html", CARDS_TEMPLATE)?;
        env.add_template("index.html", INDEX_TEMPLATE)?;
        env.add_template("profile.html", PROFILE_TEMPLATE)?;
        env.add_template("asante.html", THANKS_TEMPLATE)?;
        Ok(Self { env, language })
    }

    /// HTML of the list area alone.
    pub fn render_container(&self, container: &ListContainer) -> Result<String> {
        let html = self.env.get_template("cards.html")?.render(context! {
            content => container.content(),
            texts => self.language.texts(),
        })?;
        Ok(html)
    }

    pub fn render_index(
        &self,
        container: &ListContainer,
        query: &str,
        total: usize,
    ) -> Result<String> {
        let html = self.env.get_template("index.html")?.render(context! {
            lang => self.language.code(),
            texts => self.language.texts(),
            content => container.content(),
            query => query,
            listed => container.cards().len(),
            total => total,
            calc_missing => MISSING_INPUT_MESSAGE,
            rate => RATE_TSH,
        })?;
        Ok(html)
    }

    pub fn render_profile(&self, entry: &DirectoryEntry, card: &Card) -> Result<String> {
        let texts = self.language.texts();
        let description = entry
            .company
            .extra
            .get("about")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| texts.fallback_description(&entry.company.name));

        let html = self.env.get_template("profile.html")?.render(context! {
            lang => self.language.code(),
            texts => texts,
            entry => &entry.company,
            card => card,
            description => description,
            colour => profile_colour(entry),
        })?;
        Ok(html)
    }

    pub fn render_thanks(&self) -> Result<String> {
        let html = self.env.get_template("asante.html")?.render(context! {
            lang => self.language.code(),
            texts => self.language.texts(),
        })?;
        Ok(html)
    }
}

pub fn profile_colour(entry: &DirectoryEntry) -> &'static str {
    let index = entry.id.0.saturating_sub(1) as usize % PROFILE_COLOURS.len();
    PROFILE_COLOURS[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::{Renderer, DEFAULT_CONTACT_NUMBER};
    use crate::domain::model::{assign_identities, Company, FilterMode};
    use crate::utils::error::LOAD_FAILURE_MESSAGE;

    fn setup() -> (PageTemplates, Renderer, Vec<DirectoryEntry>) {
        let templates = PageTemplates::new(Language::En).unwrap();
        let renderer = Renderer::new(DEFAULT_CONTACT_NUMBER, Language::En.texts());
        let entries = assign_identities(vec![
            Company::new("A & B <Solar>", "Arusha", "Kits"),
            Company::new("Moon Co", "Mbeya", "Pumps"),
        ]);
        (templates, renderer, entries)
    }

    #[test]
    fn test_container_html_escapes_values() {
        let (templates, renderer, entries) = setup();
        let mut container = ListContainer::new();
        renderer.render(&mut container, &entries);

        let html = templates.render_container(&container).unwrap();
        assert_eq!(html.matches("class=\"card\"").count(), 2);
        assert!(html.contains("A &amp; B &lt;Solar&gt;"));
        assert!(!html.contains("<Solar>"));
    }

    #[test]
    fn test_cards_emit_search_terms_separately() {
        let (templates, renderer, _) = setup();
        let entries = assign_identities(vec![Company::new("A", "X", "solar")]);
        let mut container = ListContainer::new();
        renderer.render(&mut container, &entries);

        let html = templates.render_container(&container).unwrap();
        assert!(html.contains("data-search=\"[&quot;a&quot;,&quot;x&quot;,&quot;solar&quot;]\""));
        assert!(!html.contains("a x solar"));
    }

    #[test]
    fn test_serialized_cards_emit_json_text() {
        let (templates, renderer, _) = setup();
        let renderer = renderer.with_filter_mode(FilterMode::Serialized);
        let entries = assign_identities(vec![Company::new("A", "X", "solar")]);
        let mut container = ListContainer::new();
        renderer.render(&mut container, &entries);

        let html = templates.render_container(&container).unwrap();
        assert!(html.contains("data-search=\"[&quot;{"));
        assert!(html.contains("\\&quot;services\\&quot;:\\&quot;solar\\&quot;"));
    }

    #[test]
    fn test_failure_message_replaces_cards() {
        let (templates, _, _) = setup();
        let mut container = ListContainer::new();
        container.show_message(LOAD_FAILURE_MESSAGE);

        let html = templates.render_container(&container).unwrap();
        assert!(html.contains(LOAD_FAILURE_MESSAGE));
        assert!(!html.contains("class=\"card\""));
    }

    #[test]
    fn test_profile_page_has_quote_form() {
        let (templates, renderer, entries) = setup();
        let card = renderer.card(&entries[1]);
        let html = templates.render_profile(&entries[1], &card).unwrap();

        assert!(html.contains("data-netlify=\"true\""));
        assert!(html.contains("value=\"Moon Co\""));
        assert!(html.contains("Welcome to quality solar services from Moon Co."));
        assert!(html.contains(PROFILE_COLOURS[1]));
    }

    #[test]
    fn test_swahili_thanks_page() {
        let templates = PageTemplates::new(Language::Sw).unwrap();
        let html = templates.render_thanks().unwrap();
        assert!(html.contains("Asante Sana!"));
        assert!(html.contains("lang=\"sw\""));
    }
}

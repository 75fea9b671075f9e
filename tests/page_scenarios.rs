use httpmock::prelude::*;
use solar_directory::core::calculator::{estimate, Estimate};
use solar_directory::core::i18n::Language;
use solar_directory::core::render::{Renderer, DEFAULT_CONTACT_NUMBER};
use solar_directory::utils::error::LOAD_FAILURE_MESSAGE;
use solar_directory::{
    DirectoryLoader, DirectoryPage, DirectorySource, FilterMode, LocalStorage, PreferenceStore,
};
use tempfile::TempDir;

fn page(mode: FilterMode) -> DirectoryPage {
    DirectoryPage::new(
        Renderer::new(DEFAULT_CONTACT_NUMBER, Language::En.texts()),
        mode,
    )
}

#[tokio::test]
async fn test_load_then_filter_by_keystroke() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/companies.json");
        then.status(200).json_body(serde_json::json!([
            {"name": "A", "location": "X", "services": "solar"},
            {"name": "B", "location": "Y", "services": "pumps"}
        ]));
    });

    let mut page = page(FilterMode::Fields);
    let loaded = page
        .load(
            &DirectoryLoader::new(),
            &DirectorySource::Remote {
                url: server.url("/companies.json"),
            },
        )
        .await
        .unwrap();
    assert_eq!(loaded, 2);
    assert_eq!(page.container().cards().len(), 2);

    let mut shown = Vec::new();
    for query in ["s", "so", "sol", "sola", "solar"] {
        shown.push(page.on_search_input(query).unwrap());
    }
    assert_eq!(shown, vec![2, 1, 1, 1, 1]);

    let cards = page.container().cards();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name, "A");
    assert_eq!(cards[0].profile_href, "a.html");

    assert_eq!(page.on_search_input("").unwrap(), 2);
}

#[tokio::test]
async fn test_malformed_resource_shows_failure_text() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/companies.json");
        then.status(200).body("{\"name\": ");
    });

    let mut page = page(FilterMode::Fields);
    let result = page
        .load(
            &DirectoryLoader::new(),
            &DirectorySource::Remote {
                url: server.url("/companies.json"),
            },
        )
        .await;

    assert!(result.is_err());
    assert_eq!(page.container().message(), Some(LOAD_FAILURE_MESSAGE));
    assert!(page.container().cards().is_empty());
    assert!(page.on_search_input("solar").is_err());
}

#[tokio::test]
async fn test_serialized_search_over_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("companies.json");
    std::fs::write(
        &path,
        r#"[
            {"name": "Offgrid Africa", "location": "Dar es Salaam", "services": "Solar kits", "email": "info@offgrid.example"},
            {"name": "Zanzibar Green Power", "location": "Zanzibar", "services": "Hotels"}
        ]"#,
    )
    .unwrap();

    let mut page = page(FilterMode::Serialized);
    page.load(
        &DirectoryLoader::new(),
        &DirectorySource::File {
            path: path.to_str().unwrap().to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(page.on_search_input("OFFGRID.EXAMPLE").unwrap(), 1);
    assert_eq!(page.container().cards()[0].name, "Offgrid Africa");
}

#[tokio::test]
async fn test_language_preference_survives_reload() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let state_dir = temp_dir.path().to_str().unwrap().to_string();

    let first_visit = PreferenceStore::new(LocalStorage::new(state_dir.clone()));
    assert_eq!(first_visit.load().await?.as_str(), "en");
    first_visit.switch("sw").await?;

    let after_reload = PreferenceStore::new(LocalStorage::new(state_dir));
    let preference = after_reload.load().await?;
    assert_eq!(preference.as_str(), "sw");
    assert_eq!(Language::from_code(preference.as_str()), Language::Sw);
    Ok(())
}

#[test]
fn test_calculator_scenario() {
    let result = estimate("100", "5").unwrap();
    assert_eq!(result, Estimate::Cost(2500.0));
    assert_eq!(result.message(), "Estimated basic system cost: Tsh 2,500");
}

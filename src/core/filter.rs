use crate::domain::model::{DirectoryEntry, FilterMode};

/// Keeps the entries containing `query`, case-insensitively, in their original
/// order. The empty query keeps everything.
pub fn filter_entries<'a>(
    entries: &'a [DirectoryEntry],
    query: &str,
    mode: FilterMode,
) -> Vec<&'a DirectoryEntry> {
    if query.is_empty() {
        return entries.iter().collect();
    }

    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| matches(entry, &needle, mode))
        .collect()
}

/// `needle` must already be lowercase.
fn matches(entry: &DirectoryEntry, needle: &str, mode: FilterMode) -> bool {
    search_terms(entry, mode)
        .iter()
        .any(|term| term.contains(needle))
}

/// The lowercase texts a query is matched against, one per searched field, or
/// the whole JSON text in serialized mode. A match never spans two terms.
pub fn search_terms(entry: &DirectoryEntry, mode: FilterMode) -> Vec<String> {
    match mode {
        FilterMode::Fields => [
            &entry.company.name,
            &entry.company.location,
            &entry.company.services,
        ]
        .iter()
        .map(|field| field.to_lowercase())
        .collect(),
        FilterMode::Serialized => serde_json::to_string(&entry.company)
            .map(|text| vec![text.to_lowercase()])
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{assign_identities, Company};

    fn sample() -> Vec<DirectoryEntry> {
        let mut with_phone = Company::new("Tanga Energy", "Tanga", "Inverters");
        with_phone
            .extra
            .insert("phone".to_string(), serde_json::json!("0755123456"));

        assign_identities(vec![
            Company::new("A", "X", "solar"),
            Company::new("B", "Y", "pumps"),
            Company::new("Solar Hub", "Arusha", "Installations"),
            with_phone,
        ])
    }

    fn names(view: &[&DirectoryEntry]) -> Vec<String> {
        view.iter().map(|e| e.company.name.clone()).collect()
    }

    #[test]
    fn test_query_matches_any_field_case_insensitively() {
        let entries = sample();
        let view = filter_entries(&entries, "SOLAR", FilterMode::Fields);
        assert_eq!(names(&view), vec!["A", "Solar Hub"]);
    }

    #[test]
    fn test_only_matching_entry_is_kept() {
        let entries = sample();
        let view = filter_entries(&entries[..2], "solar", FilterMode::Fields);
        assert_eq!(names(&view), vec!["A"]);
    }

    #[test]
    fn test_empty_query_returns_full_list_in_order() {
        let entries = sample();
        let view = filter_entries(&entries, "", FilterMode::Fields);
        assert_eq!(names(&view), vec!["A", "B", "Solar Hub", "Tanga Energy"]);
    }

    #[test]
    fn test_whitespace_query_is_not_trimmed() {
        let entries = sample();
        let view = filter_entries(&entries, " ", FilterMode::Fields);
        assert_eq!(names(&view), vec!["Solar Hub", "Tanga Energy"]);
    }

    #[test]
    fn test_query_never_spans_two_fields() {
        let entries = sample();
        assert!(filter_entries(&entries, "a x", FilterMode::Fields).is_empty());
        assert_eq!(
            search_terms(&entries[0], FilterMode::Fields),
            vec!["a", "x", "solar"]
        );
    }

    #[test]
    fn test_serialized_mode_searches_extra_fields() {
        let entries = sample();
        assert!(filter_entries(&entries, "0755", FilterMode::Fields).is_empty());

        let view = filter_entries(&entries, "0755", FilterMode::Serialized);
        assert_eq!(names(&view), vec!["Tanga Energy"]);
    }

    #[test]
    fn test_filtering_keeps_stable_ids() {
        let entries = sample();
        let view = filter_entries(&entries, "pumps", FilterMode::Fields);
        assert_eq!(view[0].id.0, 2);
        assert_eq!(view[0].slug, "b");
    }
}

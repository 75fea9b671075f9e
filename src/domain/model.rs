use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Stable identifier assigned at load time: the 1-based position in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u32);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One company as it appears in the source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(
        default,
        alias = "description",
        alias = "specialty",
        deserialize_with = "null_as_empty"
    )]
    pub services: String,
    /// Fields the directory does not display; kept for the serialized search.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Company {
    pub fn new(name: &str, location: &str, services: &str) -> Self {
        Self {
            name: name.to_string(),
            location: location.to_string(),
            services: services.to_string(),
            extra: BTreeMap::new(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

/// A company with the identity it received when the directory was loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryEntry {
    pub id: EntryId,
    pub slug: String,
    #[serde(flatten)]
    pub company: Company,
}

impl DirectoryEntry {
    /// File name of the profile page, e.g. `offgrid_africa.html`.
    pub fn profile_page(&self) -> String {
        format!("{}.html", self.slug)
    }
}

/// Page stems the site writes itself; no profile may take them.
pub const RESERVED_PAGE_STEMS: [&str; 2] = ["index", "asante"];

/// Assigns ids (source order) and unique slugs to freshly loaded companies.
pub fn assign_identities(companies: Vec<Company>) -> Vec<DirectoryEntry> {
    let mut used: HashSet<String> = RESERVED_PAGE_STEMS.iter().map(|s| s.to_string()).collect();

    companies
        .into_iter()
        .enumerate()
        .map(|(index, company)| {
            let base = slugify(&company.name);
            let mut slug = base.clone();
            let mut suffix = 2;
            while used.contains(&slug) {
                slug = format!("{}_{}", base, suffix);
                suffix += 1;
            }
            used.insert(slug.clone());

            DirectoryEntry {
                id: EntryId(index as u32 + 1),
                slug,
                company,
            }
        })
        .collect()
}

/// Lowercases the name and joins its words with `_`, dropping anything that is
/// not safe in a file name.
pub fn slugify(name: &str) -> String {
    let slug = name
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_");

    if slug.is_empty() {
        "company".to_string()
    } else {
        slug
    }
}

/// Where the directory list comes from. Exactly one source is used per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DirectorySource {
    /// Same-origin style JSON resource fetched over HTTP.
    Remote { url: String },
    /// Local JSON array.
    File { path: String },
    /// CSV export with a company column.
    Csv { path: String },
    /// The built-in list.
    Inline,
}

impl fmt::Display for DirectorySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectorySource::Remote { url } => write!(f, "remote JSON at {}", url),
            DirectorySource::File { path } => write!(f, "JSON file {}", path),
            DirectorySource::Csv { path } => write!(f, "CSV file {}", path),
            DirectorySource::Inline => write!(f, "built-in list"),
        }
    }
}

/// Which text of an entry a query is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum FilterMode {
    /// `name`, `location` and `services`.
    #[default]
    Fields,
    /// The whole JSON text of the company, extra fields included.
    Serialized,
}

/// Persisted locale code, `en` unless the user switched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguagePreference(pub String);

impl Default for LanguagePreference {
    fn default() -> Self {
        Self("en".to_string())
    }
}

impl LanguagePreference {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One generated file, path relative to the output directory.
#[derive(Debug, Clone, PartialEq)]
pub struct SitePage {
    pub path: String,
    pub contents: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct SiteBundle {
    pub pages: Vec<SitePage>,
    pub total_entries: usize,
    pub listed_entries: usize,
}

use crate::domain::model::{assign_identities, Company, DirectoryEntry, DirectorySource};
use crate::utils::error::LoadError;
use reqwest::Client;
use std::collections::BTreeMap;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The list shipped with the site when no data file is published.
pub fn inline_companies() -> Vec<Company> {
    vec![
        Company::new(
            "Offgrid Africa",
            "Dar es Salaam",
            "Solar kits, lithium batteries, installations",
        ),
        Company::new(
            "Zanzibar Green Power",
            "Zanzibar",
            "Hotels, backup systems, tourism solar",
        ),
        Company::new(
            "Mwanza Sun Solutions",
            "Mwanza",
            "Water pumps, agri-solar systems",
        ),
    ]
}

pub struct DirectoryLoader {
    client: Client,
    timeout: Duration,
}

impl DirectoryLoader {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            timeout,
        }
    }

    /// Loads the full list from `source`. Nothing is retried and nothing partial
    /// is returned: either every usable entry or a tagged failure.
    pub async fn load(
        &self,
        source: &DirectorySource,
    ) -> std::result::Result<Vec<DirectoryEntry>, LoadError> {
        tracing::info!("📥 Loading directory from {}", source);

        let companies = match source {
            DirectorySource::Remote { url } => self.fetch_remote(url).await?,
            DirectorySource::File { path } => {
                let bytes = tokio::fs::read(path).await?;
                parse_json(&bytes)?
            }
            DirectorySource::Csv { path } => {
                let bytes = tokio::fs::read(path).await?;
                parse_csv(&bytes)?
            }
            DirectorySource::Inline => inline_companies(),
        };

        let entries = assign_identities(keep_named(companies));
        tracing::info!("✅ Loaded {} companies", entries.len());
        Ok(entries)
    }

    async fn fetch_remote(&self, url: &str) -> std::result::Result<Vec<Company>, LoadError> {
        tracing::debug!("Making request to: {}", url);
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        parse_json(&bytes)
    }
}

impl Default for DirectoryLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a JSON array of company objects.
pub fn parse_json(bytes: &[u8]) -> std::result::Result<Vec<Company>, LoadError> {
    let companies: Vec<Company> = serde_json::from_slice(strip_bom(bytes))?;
    Ok(companies)
}

/// Parses a CSV export. The name column is the first header mentioning
/// "company" (falling back to a plain "name" header).
pub fn parse_csv(bytes: &[u8]) -> std::result::Result<Vec<Company>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(strip_bom(bytes));

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let name_col = headers
        .iter()
        .position(|h| h.contains("company"))
        .or_else(|| headers.iter().position(|h| h == "name"))
        .ok_or_else(|| LoadError::Parse {
            message: "CSV has no company or name column".to_string(),
        })?;
    let location_col = headers.iter().position(|h| h == "location");
    let services_col = headers
        .iter()
        .position(|h| h == "specialty" || h == "services" || h == "description");

    let mut companies = Vec::new();
    for row in reader.records() {
        let row = row?;
        let cell = |col: Option<usize>| {
            col.and_then(|i| row.get(i))
                .unwrap_or_default()
                .to_string()
        };

        let mut extra = BTreeMap::new();
        for (i, header) in headers.iter().enumerate() {
            if i == name_col || Some(i) == location_col || Some(i) == services_col {
                continue;
            }
            if let Some(value) = row.get(i) {
                extra.insert(header.clone(), serde_json::Value::String(value.to_string()));
            }
        }

        companies.push(Company {
            name: cell(Some(name_col)),
            location: cell(location_col),
            services: cell(services_col),
            extra,
        });
    }

    Ok(companies)
}

fn keep_named(companies: Vec<Company>) -> Vec<Company> {
    companies
        .into_iter()
        .enumerate()
        .filter_map(|(index, company)| {
            if company.name.trim().is_empty() {
                tracing::warn!("⚠️ Skipping entry #{} without a name", index + 1);
                None
            } else {
                Some(company)
            }
        })
        .collect()
}

fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_inline_source_keeps_order() {
        let entries = DirectoryLoader::new()
            .load(&DirectorySource::Inline)
            .await
            .unwrap();

        let names: Vec<&str> = entries.iter().map(|e| e.company.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Offgrid Africa", "Zanzibar Green Power", "Mwanza Sun Solutions"]
        );
        assert_eq!(entries[1].slug, "zanzibar_green_power");
    }

    #[tokio::test]
    async fn test_remote_source_success() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/companies.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"name": "A", "location": "X", "services": "solar"},
                    {"name": "B", "location": "Y", "description": "pumps"}
                ]));
        });

        let entries = DirectoryLoader::new()
            .load(&DirectorySource::Remote {
                url: server.url("/companies.json"),
            })
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].company.services, "pumps");
    }

    #[tokio::test]
    async fn test_remote_source_missing_is_status_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/companies.json");
            then.status(404);
        });

        let result = DirectoryLoader::new()
            .load(&DirectorySource::Remote {
                url: server.url("/companies.json"),
            })
            .await;

        assert!(matches!(result, Err(LoadError::Status { status: 404 })));
    }

    #[tokio::test]
    async fn test_remote_source_malformed_is_parse_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/companies.json");
            then.status(200).body("<html>not json</html>");
        });

        let result = DirectoryLoader::new()
            .load(&DirectorySource::Remote {
                url: server.url("/companies.json"),
            })
            .await;

        assert!(matches!(result, Err(LoadError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let result = DirectoryLoader::with_timeout(Duration::from_secs(2))
            .load(&DirectorySource::Remote {
                url: "http://127.0.0.1:1/companies.json".to_string(),
            })
            .await;

        assert!(matches!(result, Err(LoadError::Network(_))));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let result = DirectoryLoader::new()
            .load(&DirectorySource::File {
                path: "/definitely/not/here/companies.json".to_string(),
            })
            .await;

        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn test_parse_json_rejects_objects() {
        assert!(parse_json(br#"{"name": "A"}"#).is_err());
        assert_eq!(parse_json(b"[]").unwrap().len(), 0);
    }

    #[test]
    fn test_parse_csv_finds_company_column() {
        let data = "\u{feff}Company Name,location,specialty,phone\n\
                    Jua Power,Arusha,Solar kits,0700111222\n\
                    ,Dodoma,Pumps,\n";
        let companies = parse_csv(data.as_bytes()).unwrap();

        assert_eq!(companies.len(), 2);
        assert_eq!(companies[0].name, "Jua Power");
        assert_eq!(companies[0].services, "Solar kits");
        assert_eq!(companies[0].extra.get("phone").unwrap(), "0700111222");
        assert!(keep_named(companies).len() == 1);
    }

    #[test]
    fn test_parse_csv_without_name_column() {
        let result = parse_csv(b"city,specialty\nArusha,kits\n");
        assert!(matches!(result, Err(LoadError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_csv_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "company,location,specialty").unwrap();
        writeln!(file, "Sun Co,Tanga,Backup systems").unwrap();

        let entries = DirectoryLoader::new()
            .load(&DirectorySource::Csv {
                path: file.path().to_str().unwrap().to_string(),
            })
            .await
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company.location, "Tanga");
    }
}

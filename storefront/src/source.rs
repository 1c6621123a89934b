//! Where a catalog is read from.
//!
//! A catalog is a static JSON document. It is either a file on disk or an
//! http(s) resource fetched with the `reqwest` blocking client; there is no
//! retry and no cache, the document is read once per load.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use tracing::debug;

use crate::product::{parse_catalog, Product};

/// Default request timeout for http sources.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Location of a catalog document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// JSON file on disk
    File(PathBuf),
    /// http(s) URL
    Http(String),
}

impl CatalogSource {
    /// Interpret a location string. `http://` and `https://` prefixes select
    /// an http source; anything else is a path.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::Http(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }

    /// Like [`CatalogSource::parse`], resolving relative paths against `base_dir`.
    pub fn resolve(location: &str, base_dir: Option<&Path>) -> Self {
        match (Self::parse(location), base_dir) {
            (Self::File(path), Some(base)) if path.is_relative() => Self::File(base.join(path)),
            (source, _) => source,
        }
    }

    /// Read and parse the catalog.
    ///
    /// Network, I/O and JSON errors are all reported the same way: as an
    /// error with the location attached.
    pub fn fetch(&self, timeout: Duration) -> anyhow::Result<Vec<Product>> {
        let products = match self {
            Self::File(path) => fetch_file(path)?,
            Self::Http(url) => fetch_http(url, timeout)?,
        };
        debug!(source = %self, count = products.len(), "catalog fetched");
        Ok(products)
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Http(url) => f.write_str(url),
        }
    }
}

fn fetch_file(path: &Path) -> anyhow::Result<Vec<Product>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    parse_catalog(&text).with_context(|| format!("parsing catalog {}", path.display()))
}

fn fetch_http(url: &str, timeout: Duration) -> anyhow::Result<Vec<Product>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .context("building http client")?;

    let response = client
        .get(url)
        .send()
        .and_then(reqwest::blocking::Response::error_for_status)
        .with_context(|| format!("requesting catalog {url}"))?;

    let text = response
        .text()
        .with_context(|| format!("reading catalog body {url}"))?;
    parse_catalog(&text).with_context(|| format!("parsing catalog {url}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_catalog(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("storefront_{}_{}.json", name, std::process::id()));
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_parse_location() {
        assert_eq!(
            CatalogSource::parse("https://example.com/todos.json"),
            CatalogSource::Http("https://example.com/todos.json".to_string())
        );
        assert_eq!(
            CatalogSource::parse("json/todos.json"),
            CatalogSource::File(PathBuf::from("json/todos.json"))
        );
    }

    #[test]
    fn test_resolve_relative_paths() {
        let base = Path::new("/srv/tienda");
        assert_eq!(
            CatalogSource::resolve("json/todos.json", Some(base)),
            CatalogSource::File(PathBuf::from("/srv/tienda/json/todos.json"))
        );
        assert_eq!(
            CatalogSource::resolve("/data/todos.json", Some(base)),
            CatalogSource::File(PathBuf::from("/data/todos.json"))
        );
        assert_eq!(
            CatalogSource::resolve("http://localhost/todos.json", Some(base)),
            CatalogSource::Http("http://localhost/todos.json".to_string())
        );
    }

    #[test]
    fn test_fetch_file() {
        let path = temp_catalog("fetch_ok", r#"[{"Producto": "Yerba"}, {"Producto": "Termo"}]"#);
        let products = CatalogSource::File(path.clone())
            .fetch(Duration::from_millis(DEFAULT_TIMEOUT_MS))
            .unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].name, "Termo");
    }

    #[test]
    fn test_fetch_errors_mention_location() {
        let missing = CatalogSource::File(PathBuf::from("/nonexistent/todos.json"));
        let err = missing.fetch(Duration::from_millis(100)).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/todos.json"));

        let path = temp_catalog("fetch_bad", "{ not json");
        let err = CatalogSource::File(path.clone())
            .fetch(Duration::from_millis(100))
            .unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert!(format!("{err:#}").contains("parsing catalog"));
    }

    // Needs a reachable server; skipped in normal test runs
    #[test]
    #[ignore]
    fn test_fetch_http_real_network() {
        let source = CatalogSource::Http("http://127.0.0.1:8000/json/productos_todos.json".to_string());
        if let Ok(products) = source.fetch(Duration::from_millis(DEFAULT_TIMEOUT_MS)) {
            println!("fetched {} products", products.len());
        }
    }
}

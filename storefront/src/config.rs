//! Listing and storefront configuration, loadable from TOML.

use std::path::Path;

use anyhow::Context;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use catalog_core::DEFAULT_CURRENCY;

/// Listing configuration that extends the pagination `Config` from core.
///
/// Each storefront listing (featured, best sellers, all products) is the
/// same component with a different `ListingConfig`:
/// - pagination fields from `catalog_core::Config` (flattened via serde)
/// - where the catalog is read from
/// - which mount points receive the cards and the control strip
/// - currency and error message shown to the user
///
/// # Example
///
/// ```rust
/// use storefront::StorefrontConfig;
///
/// let config = StorefrontConfig::default();
/// let all = config.listing("todos").unwrap();
/// assert_eq!(all.base.page_size, 30);
/// assert!(all.base.windowed);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Name used to pick the listing from the command line
    pub name: String,

    /// Catalog location: a path (relative to the config's base directory) or an http(s) URL
    pub source: String,

    /// Mount selectors for the product cards and the control strip
    pub mount: String,
    pub pagination_mount: String,

    /// ISO 4217 code used to format prices
    pub currency: String,

    /// Message shown in place of the cards when the catalog cannot be loaded
    pub error_message: String,
    pub error_class: String,

    /// Request timeout for http sources
    pub fetch_timeout_ms: u64,

    /// Pagination fields (page_size, sibling_count, windowed)
    #[serde(flatten)]
    pub base: catalog_core::Config,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            source: String::new(),
            mount: String::new(),
            pagination_mount: String::new(),
            currency: DEFAULT_CURRENCY.to_string(),
            error_message: "No se pudieron cargar los productos.".to_string(),
            error_class: String::new(),
            fetch_timeout_ms: 5000,
            base: catalog_core::Config::default(),
        }
    }
}

impl ListingConfig {
    /// Featured products: three per page, every page number shown.
    pub fn featured() -> Self {
        Self {
            name: "destacados".to_string(),
            source: "json/productos_destacados.json".to_string(),
            mount: "#contenedor-destacados".to_string(),
            pagination_mount: "#pagination-nav-destacados".to_string(),
            base: catalog_core::Config {
                page_size: 3,
                windowed: false,
                ..catalog_core::Config::default()
            },
            ..Self::default()
        }
    }

    /// Best sellers: three per page, every page number shown.
    pub fn best_sellers() -> Self {
        Self {
            name: "mas-vendidos".to_string(),
            source: "json/productos_mas_vendidos.json".to_string(),
            mount: "#contenedor-mas-vendidos".to_string(),
            pagination_mount: "#pagination-nav".to_string(),
            base: catalog_core::Config {
                page_size: 3,
                windowed: false,
                ..catalog_core::Config::default()
            },
            ..Self::default()
        }
    }

    /// Whole catalog: thirty per page, windowed control strip.
    pub fn all_products() -> Self {
        Self {
            name: "todos".to_string(),
            source: "json/productos_todos.json".to_string(),
            mount: "#contenedor-todos".to_string(),
            pagination_mount: "#pagination-nav-todos".to_string(),
            error_message: "Hubo un error al cargar los productos. Por favor, intenta más tarde."
                .to_string(),
            error_class: "text-red-500".to_string(),
            base: catalog_core::Config::default(),
            ..Self::default()
        }
    }
}

static PRESETS: Lazy<Vec<ListingConfig>> = Lazy::new(|| {
    vec![
        ListingConfig::featured(),
        ListingConfig::best_sellers(),
        ListingConfig::all_products(),
    ]
});

/// All listings of the storefront.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorefrontConfig {
    #[serde(default = "preset_listings")]
    pub listings: Vec<ListingConfig>,
}

fn preset_listings() -> Vec<ListingConfig> {
    PRESETS.clone()
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            listings: preset_listings(),
        }
    }
}

impl StorefrontConfig {
    /// Look up a listing by name.
    pub fn listing(&self, name: &str) -> Option<&ListingConfig> {
        self.listings.iter().find(|listing| listing.name == name)
    }

    /// Names of all configured listings, in file order.
    pub fn names(&self) -> Vec<&str> {
        self.listings.iter().map(|l| l.name.as_str()).collect()
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading storefront config {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("parsing storefront config {}", path.display()))
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content)
            .with_context(|| format!("writing storefront config {}", path.display()))?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

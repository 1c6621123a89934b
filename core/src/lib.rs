//! catalog-core
//!
//! Pagination logic shared by every storefront listing.
//!
//! Public API:
//! - `compute_window` / `compute_simple` - control strips for a page
//! - `ControlEntry` - one page number, ellipsis or previous/next control
//! - `PageState`, `Listing` - explicit listing state and page transitions
//! - `render` - visible slice plus controls for the current page
//! - `format_currency` - es-AR price formatting
//! - `Config` - page size, sibling count and layout flag
use anyhow::Context;
use serde::{Deserialize, Serialize};

pub mod window;
pub use window::{
    clamp_page, compute_simple, compute_window, page_count, ControlEntry, Layout, NavDirection,
    DEFAULT_SIBLING_COUNT, DENSE_PAGE_LIMIT,
};

pub mod listing;
pub use listing::{page_range, page_slice, render, transition, Listing, PageState, PageView};

pub mod currency;
pub use currency::{currency_symbol, format_currency, format_default, DEFAULT_CURRENCY};

/// Pagination configuration of a listing.
///
/// Front-end crates flatten this into their own listing configuration
/// (see `storefront::ListingConfig`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Items per page
    pub page_size: usize,
    /// Page numbers shown on each side of the current page (windowed layout only)
    pub sibling_count: usize,
    /// Windowed layout with ellipsis and previous/next, or every page listed
    pub windowed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: 30,
            sibling_count: DEFAULT_SIBLING_COUNT,
            windowed: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content)
            .with_context(|| format!("writing config {}", path.display()))?;
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

    /// Control-strip layout selected by this configuration.
    pub fn layout(&self) -> Layout {
        Layout::from_flag(self.windowed, self.sibling_count)
    }

    /// Initial page state (page 1).
    pub fn page_state(&self) -> PageState {
        PageState::new(self.page_size)
    }
}

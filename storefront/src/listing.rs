//! The listing component: one catalog, one page state, one mount.
//!
//! Featured products, best sellers and the full catalog are all a
//! `ListingView` with a different [`ListingConfig`]. The view loads its
//! catalog once, then reacts to control activations by re-rendering the
//! whole mount.

use std::time::Duration;

use tracing::{error, info, warn};

use catalog_core::{ControlEntry, Listing};

use crate::config::ListingConfig;
use crate::product::{Product, ProductCard};
use crate::render::Renderer;
use crate::source::CatalogSource;

/// Rendered output of a listing. Both parts are replaced on every render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mount {
    /// Cards, or the error message when loading failed
    pub content: String,
    /// Control strip; empty before load and after a failed load
    pub controls: String,
    /// Set when the last render came from a page change
    pub scroll_to_top: bool,
}

/// Load state of a listing.
#[derive(Debug, Clone)]
enum Catalog {
    Pending,
    Loaded(Listing<Product>),
    Failed,
}

/// A configured listing bound to a renderer.
#[derive(Debug)]
pub struct ListingView<R> {
    config: ListingConfig,
    renderer: R,
    catalog: Catalog,
    controls: Vec<ControlEntry>,
    mount: Mount,
}

impl<R: Renderer> ListingView<R> {
    /// Create a listing; nothing is shown until the catalog is loaded.
    pub fn new(config: ListingConfig, renderer: R) -> Self {
        Self {
            config,
            renderer,
            catalog: Catalog::Pending,
            controls: Vec::new(),
            mount: Mount::default(),
        }
    }

    pub fn config(&self) -> &ListingConfig {
        &self.config
    }

    pub fn mount(&self) -> &Mount {
        &self.mount
    }

    /// Controls currently rendered, in display order.
    pub fn controls(&self) -> &[ControlEntry] {
        &self.controls
    }

    /// The loaded catalog and its page state.
    pub fn listing(&self) -> Option<&Listing<Product>> {
        match &self.catalog {
            Catalog::Loaded(listing) => Some(listing),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.catalog, Catalog::Loaded(_))
    }

    pub fn has_failed(&self) -> bool {
        matches!(self.catalog, Catalog::Failed)
    }

    /// Fetch the catalog from `source` and render page 1.
    ///
    /// On failure the error is logged, the mount shows the configured error
    /// message without controls, and the error is returned to the caller.
    pub fn load(&mut self, source: &CatalogSource) -> anyhow::Result<()> {
        let timeout = Duration::from_millis(self.config.fetch_timeout_ms);
        let fetched = source.fetch(timeout);
        self.finish_load(fetched)
    }

    /// Install the outcome of a catalog fetch.
    pub fn finish_load(&mut self, fetched: anyhow::Result<Vec<Product>>) -> anyhow::Result<()> {
        match fetched {
            Ok(products) => {
                info!(
                    listing = %self.config.name,
                    count = products.len(),
                    "catalog loaded"
                );
                self.catalog = Catalog::Loaded(Listing::new(
                    products,
                    self.config.base.page_size,
                    self.config.base.layout(),
                ));
                self.render(false)
            }
            Err(err) => {
                error!(listing = %self.config.name, error = %format!("{err:#}"), "error loading products");
                self.catalog = Catalog::Failed;
                self.controls.clear();
                let content = self
                    .renderer
                    .error(&self.config.error_message, &self.config.error_class)
                    .unwrap_or_else(|render_err| {
                        warn!(listing = %self.config.name, error = %render_err, "error message render failed");
                        self.config.error_message.clone()
                    });
                self.mount = Mount {
                    content,
                    controls: String::new(),
                    scroll_to_top: false,
                };
                Err(err)
            }
        }
    }

    /// Activate the `index`-th rendered control.
    ///
    /// Returns true when the page changed (and the mount was re-rendered).
    /// Out-of-range indexes, ellipsis, disabled and active controls are no-ops.
    pub fn activate(&mut self, index: usize) -> anyhow::Result<bool> {
        let Some(entry) = self.controls.get(index).copied() else {
            return Ok(false);
        };
        self.change_page(|listing| listing.activate(&entry))
    }

    /// Jump to `page`, clamped into range.
    pub fn go_to(&mut self, page: usize) -> anyhow::Result<bool> {
        self.change_page(|listing| listing.go_to(page))
    }

    pub fn next_page(&mut self) -> anyhow::Result<bool> {
        self.change_page(Listing::next_page)
    }

    pub fn previous_page(&mut self) -> anyhow::Result<bool> {
        self.change_page(Listing::previous_page)
    }

    fn change_page(&mut self, step: impl FnOnce(&mut Listing<Product>) -> bool) -> anyhow::Result<bool> {
        let Catalog::Loaded(listing) = &mut self.catalog else {
            return Ok(false);
        };
        if !step(listing) {
            return Ok(false);
        }
        self.render(true)?;
        Ok(true)
    }

    /// Display records for the current page.
    pub fn visible_cards(&self) -> Vec<ProductCard> {
        self.listing()
            .map(|listing| {
                listing
                    .view()
                    .visible
                    .iter()
                    .map(|product| product.card(&self.config.currency))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn render(&mut self, scroll_to_top: bool) -> anyhow::Result<()> {
        let Catalog::Loaded(listing) = &self.catalog else {
            return Ok(());
        };
        let controls = listing.controls();
        let content = self.renderer.cards(&self.visible_cards())?;
        let strip = self.renderer.controls(&controls)?;
        self.controls = controls;
        self.mount = Mount {
            content,
            controls: strip,
            scroll_to_top,
        };
        Ok(())
    }
}

//! storefront crate root
//!
//! Product listings built on `catalog-core`: catalog records, where they are
//! read from, how each listing is configured and how its mount is rendered.
//!
//! Public API exported here:
//! - `ListingView` and `Mount` from `listing`
//! - `ListingConfig` and `StorefrontConfig` from `config`
//! - `Product`, `ProductCard` from `product`
//! - `CatalogSource` from `source`
//! - `Renderer`, `HtmlRenderer`, `TextRenderer` from `render`

pub mod config;
pub mod listing;
pub mod product;
pub mod render;
pub mod source;

// Re-export the pagination core for callers that only depend on this crate.
pub use catalog_core::{
    compute_simple, compute_window, format_currency, ControlEntry, Layout, Listing, NavDirection,
    PageState,
};

pub use config::{ListingConfig, StorefrontConfig};
pub use listing::{ListingView, Mount};
pub use product::{parse_catalog, Product, ProductCard};
pub use render::{ControlStyle, HtmlRenderer, Renderer, TextRenderer};
pub use source::CatalogSource;

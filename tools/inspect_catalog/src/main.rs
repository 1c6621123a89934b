//! Summarize a catalog file and show the control strip for a page
//!
//! Usage:
//!   cargo run -p inspect_catalog -- --catalog storefront/json/productos_todos.json --page 4
//!   cargo run -p inspect_catalog -- --total 300 --page-size 30 --page 5 --siblings 2
//!   cargo run -p inspect_catalog -- --total 300 --page 5 --json

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use catalog_core::{clamp_page, compute_simple, compute_window, page_count, page_range, PageState};
use storefront::{CatalogSource, Renderer, TextRenderer};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "inspect_catalog")]
#[command(about = "Summarize a catalog and print the control strip for a page")]
struct Args {
    /// Catalog file or http(s) URL
    #[arg(short, long, conflicts_with = "total")]
    catalog: Option<String>,

    /// Synthetic item count instead of a catalog
    #[arg(short, long)]
    total: Option<usize>,

    /// Items per page
    #[arg(long, default_value_t = 30)]
    page_size: usize,

    /// Page to inspect (clamped into range)
    #[arg(short, long, default_value_t = 1)]
    page: usize,

    /// Page numbers on each side of the current page
    #[arg(short, long, default_value_t = 1)]
    siblings: usize,

    /// Show every page number instead of the windowed strip
    #[arg(long)]
    simple: bool,

    /// Print the control entries as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .try_init();
    let args = Args::parse();
    let page_size = args.page_size.max(1);

    let (total, names) = match (&args.catalog, args.total) {
        (Some(location), _) => {
            let source = CatalogSource::parse(location);
            let products = source
                .fetch(Duration::from_secs(10))
                .with_context(|| format!("loading {source}"))?;
            let names: Vec<String> = products.into_iter().map(|p| p.name).collect();
            (names.len(), Some(names))
        }
        (None, Some(total)) => (total, None),
        (None, None) => anyhow::bail!("Pass either --catalog or --total"),
    };

    let pages = page_count(total, page_size);
    let page = clamp_page(args.page, pages);
    let controls = if args.simple {
        compute_simple(total, page_size, page)
    } else {
        compute_window(total, page_size, page, args.siblings)
    };

    println!("Items:      {total}");
    println!("Page size:  {page_size}");
    println!("Pages:      {pages}");
    println!("Page:       {page}");

    let range = page_range(total, PageState::new(page_size).with_page(page));
    if range.is_empty() {
        println!("Visible:    (none)");
    } else {
        println!("Visible:    items {}..={}", range.start + 1, range.end);
    }
    if let Some(names) = names {
        for (offset, name) in names[range.clone()].iter().enumerate() {
            println!("  {:>4}. {}", range.start + offset + 1, name);
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&controls)?);
    } else {
        println!("Controls:   {}", TextRenderer.controls(&controls)?);
    }
    Ok(())
}

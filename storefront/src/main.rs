//! Render a page of a storefront listing.
//!
//! Usage:
//!   storefront --listing todos --page 5
//!   storefront --config tienda.toml --listing mas-vendidos --format html
//!   storefront --listing todos --interactive

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use storefront::{
    CatalogSource, HtmlRenderer, ListingView, Mount, Renderer, StorefrontConfig, TextRenderer,
};

#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Render a page of a product listing")]
struct Args {
    /// Storefront configuration (TOML); the built-in listings are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listing to render
    #[arg(short, long, default_value = "todos")]
    listing: String,

    /// Page to show (clamped into range)
    #[arg(short, long, default_value_t = 1)]
    page: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Catalog location overriding the configured source
    #[arg(long)]
    source: Option<String>,

    /// Directory relative catalog paths are resolved against
    /// (defaults to the config file's directory, else the current directory)
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// Read page changes from stdin: a page number, `n`, `p` or `q`
    #[arg(short, long)]
    interactive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Html,
}

fn init_tracing() {
    let default_level = "warn";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => StorefrontConfig::load_toml(path)?,
        None => StorefrontConfig::default(),
    };
    let Some(listing) = config.listing(&args.listing).cloned() else {
        anyhow::bail!(
            "Unknown listing: {}. Available: {}",
            args.listing,
            config.names().join(", ")
        );
    };

    let base_dir = args
        .base_dir
        .clone()
        .or_else(|| args.config.as_deref().and_then(Path::parent).map(Path::to_path_buf));
    let location = args.source.as_deref().unwrap_or(&listing.source);
    let source = CatalogSource::resolve(location, base_dir.as_deref());

    match args.format {
        Format::Text => run(ListingView::new(listing, TextRenderer), &source, &args),
        Format::Html => {
            let renderer = HtmlRenderer::for_layout(listing.base.layout());
            run(ListingView::new(listing, renderer), &source, &args)
        }
    }
}

fn run<R: Renderer>(mut view: ListingView<R>, source: &CatalogSource, args: &Args) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(err) = view.load(source) {
        print_mount(&mut out, view.mount())?;
        return Err(err.context(format!("listing '{}' could not be loaded", view.config().name)));
    }
    view.go_to(args.page)?;
    print_mount(&mut out, view.mount())?;

    if !args.interactive {
        return Ok(());
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let changed = match line.trim() {
            "" => continue,
            "q" => break,
            "n" => view.next_page()?,
            "p" => view.previous_page()?,
            other => match other.parse::<usize>() {
                Ok(page) => view.go_to(page)?,
                Err(_) => {
                    writeln!(out, "  → expected a page number, n, p or q")?;
                    continue;
                }
            },
        };
        if changed {
            print_mount(&mut out, view.mount())?;
        } else {
            writeln!(out, "  → (page unchanged)")?;
        }
    }
    Ok(())
}

fn print_mount(out: &mut impl Write, mount: &Mount) -> io::Result<()> {
    writeln!(out, "{}", mount.content)?;
    if !mount.controls.is_empty() {
        writeln!(out, "{}", mount.controls)?;
    }
    out.flush()
}

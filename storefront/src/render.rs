//! Rendering adapters: turn display records and control entries into the
//! content of a mount.
//!
//! The listing component only knows the [`Renderer`] trait. `HtmlRenderer`
//! produces the storefront markup through askama templates, which escape
//! every interpolated field. `TextRenderer` is the terminal view used by the
//! command line.

use askama::Template;

use catalog_core::{ControlEntry, Layout, NavDirection};

use crate::product::ProductCard;

pub const PREVIOUS_LABEL: &str = "Anterior";
pub const NEXT_LABEL: &str = "Siguiente";
pub const ELLIPSIS_LABEL: &str = "...";

/// Produces mount content for one listing.
pub trait Renderer {
    /// Content of the cards mount for the visible products.
    fn cards(&self, cards: &[ProductCard]) -> anyhow::Result<String>;

    /// Content of the pagination mount.
    fn controls(&self, controls: &[ControlEntry]) -> anyhow::Result<String>;

    /// Content of the cards mount when the catalog could not be loaded.
    fn error(&self, message: &str, class: &str) -> anyhow::Result<String>;
}

/// Class sets of the two control strips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlStyle {
    /// Small buttons used next to the simple layout
    Compact,
    /// Larger buttons with disabled state, used by the windowed layout
    Regular,
}

impl ControlStyle {
    pub fn for_layout(layout: Layout) -> Self {
        match layout {
            Layout::Simple => ControlStyle::Compact,
            Layout::Windowed { .. } => ControlStyle::Regular,
        }
    }

    fn class(self, entry: &ControlEntry) -> String {
        let (base, active, idle, disabled, ellipsis) = match self {
            ControlStyle::Compact => (
                "px-3 py-1 mx-1 border rounded",
                "bg-[#1b140e] text-white",
                "text-[#1b140e] bg-white",
                "text-gray-400 bg-gray-100 cursor-not-allowed",
                "px-3 py-1 mx-1 text-gray-500",
            ),
            ControlStyle::Regular => (
                "px-4 py-2 mx-1 border rounded-md transition-colors duration-200",
                "bg-[#1b140e] text-white border-[#1b140e] cursor-default",
                "text-[#1b140e] bg-white hover:bg-gray-100",
                "text-gray-400 bg-gray-100 cursor-not-allowed",
                "px-4 py-2 mx-1 text-gray-500",
            ),
        };
        match entry {
            ControlEntry::Ellipsis => ellipsis.to_string(),
            ControlEntry::Page { disabled: true, .. } | ControlEntry::Nav { disabled: true, .. } => {
                format!("{base} {disabled}")
            }
            ControlEntry::Page { active: true, .. } => format!("{base} {active}"),
            _ => format!("{base} {idle}"),
        }
    }
}

#[derive(Debug)]
struct ControlLink {
    label: String,
    class: String,
    target: usize,
    actionable: bool,
    ellipsis: bool,
}

#[derive(Debug)]
struct CardFields<'a> {
    image_url: String,
    name: &'a str,
    code: &'a str,
    category: &'a str,
    description: &'a str,
    public_price: &'a str,
    wholesale_price: &'a str,
    status: &'a str,
}

#[derive(Template)]
#[template(path = "cards.html")]
struct CardsTemplate<'a> {
    cards: Vec<CardFields<'a>>,
    image_class: &'a str,
}

#[derive(Template)]
#[template(path = "controls.html")]
struct ControlsTemplate {
    links: Vec<ControlLink>,
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate<'a> {
    message: &'a str,
    class: &'a str,
}

/// HTML fragments in the storefront markup.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    style: ControlStyle,
    image_class: String,
}

impl HtmlRenderer {
    pub fn new(style: ControlStyle) -> Self {
        let image_class = match style {
            ControlStyle::Compact => {
                "w-full bg-center bg-no-repeat aspect-square bg-cover rounded-lg flex flex-col"
            }
            ControlStyle::Regular => "w-full h-48 bg-center bg-cover",
        };
        Self {
            style,
            image_class: image_class.to_string(),
        }
    }

    /// Renderer whose control classes match `layout`.
    pub fn for_layout(layout: Layout) -> Self {
        Self::new(ControlStyle::for_layout(layout))
    }

    fn link(&self, entry: &ControlEntry, current_page: usize) -> ControlLink {
        let (label, target) = match *entry {
            ControlEntry::Page { number, .. } => (number.to_string(), number),
            ControlEntry::Ellipsis => (ELLIPSIS_LABEL.to_string(), 0),
            ControlEntry::Nav { direction: NavDirection::Previous, .. } => {
                (PREVIOUS_LABEL.to_string(), current_page.saturating_sub(1))
            }
            ControlEntry::Nav { direction: NavDirection::Next, .. } => {
                (NEXT_LABEL.to_string(), current_page + 1)
            }
        };
        ControlLink {
            label,
            class: self.style.class(entry),
            target,
            actionable: !entry.is_inert(),
            ellipsis: matches!(entry, ControlEntry::Ellipsis),
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(ControlStyle::Regular)
    }
}

impl Renderer for HtmlRenderer {
    fn cards(&self, cards: &[ProductCard]) -> anyhow::Result<String> {
        let template = CardsTemplate {
            cards: cards
                .iter()
                .map(|card| CardFields {
                    image_url: css_url(&card.image),
                    name: &card.name,
                    code: &card.code,
                    category: &card.category,
                    description: &card.description,
                    public_price: &card.public_price,
                    wholesale_price: &card.wholesale_price,
                    status: &card.status,
                })
                .collect(),
            image_class: &self.image_class,
        };
        Ok(template.render()?)
    }

    fn controls(&self, controls: &[ControlEntry]) -> anyhow::Result<String> {
        let current_page = controls
            .iter()
            .find(|entry| entry.is_active())
            .and_then(ControlEntry::page_number)
            .unwrap_or(1);
        let template = ControlsTemplate {
            links: controls.iter().map(|entry| self.link(entry, current_page)).collect(),
        };
        Ok(template.render()?)
    }

    fn error(&self, message: &str, class: &str) -> anyhow::Result<String> {
        Ok(ErrorTemplate { message, class }.render()?)
    }
}

/// Plain-text view for terminals.
///
/// `[5]` marks the active page, parentheses mark disabled navigation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn cards(&self, cards: &[ProductCard]) -> anyhow::Result<String> {
        let mut out = String::new();
        for card in cards {
            out.push_str(&format!(
                "{} ({} | {})\n  {}\n  Público {} | Mayorista {}\n  {}\n",
                card.name,
                card.code,
                card.category,
                card.description,
                card.public_price,
                card.wholesale_price,
                card.status
            ));
        }
        Ok(out)
    }

    fn controls(&self, controls: &[ControlEntry]) -> anyhow::Result<String> {
        let parts: Vec<String> = controls
            .iter()
            .map(|entry| match *entry {
                ControlEntry::Page { number, active: true, .. } => format!("[{number}]"),
                ControlEntry::Page { number, .. } => number.to_string(),
                ControlEntry::Ellipsis => ELLIPSIS_LABEL.to_string(),
                ControlEntry::Nav { direction, disabled } => {
                    let label = match direction {
                        NavDirection::Previous => PREVIOUS_LABEL,
                        NavDirection::Next => NEXT_LABEL,
                    };
                    if disabled {
                        format!("({label})")
                    } else {
                        label.to_string()
                    }
                }
            })
            .collect();
        Ok(parts.join(" "))
    }

    fn error(&self, message: &str, _class: &str) -> anyhow::Result<String> {
        Ok(message.to_string())
    }
}

/// Make an image URL safe inside `url('...')`.
fn css_url(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '\'' => out.push_str("%27"),
            '"' => out.push_str("%22"),
            '(' => out.push_str("%28"),
            ')' => out.push_str("%29"),
            '\\' => out.push_str("%5C"),
            c if c.is_whitespace() => out.push_str("%20"),
            c => out.push(c),
        }
    }
    out
}

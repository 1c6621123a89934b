//! Page-window computation for listing control strips.
//!
//! Given the number of items, the page size and the current page, these
//! functions decide which page numbers are rendered as clickable controls and
//! which ranges collapse into an ellipsis marker.
//!
//! Pages are 1-based everywhere in this module.

use serde::{Deserialize, Serialize};

/// Number of page numbers shown on each side of the current page.
pub const DEFAULT_SIBLING_COUNT: usize = 1;

/// Up to this many pages every page number is shown, without ellipsis.
pub const DENSE_PAGE_LIMIT: usize = 5;

/// Direction of a previous/next navigation control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavDirection {
    Previous,
    Next,
}

/// One control in a pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ControlEntry {
    Page {
        number: usize,
        active: bool,
        disabled: bool,
    },
    Ellipsis,
    Nav {
        direction: NavDirection,
        disabled: bool,
    },
}

impl ControlEntry {
    fn page(number: usize, current_page: usize) -> Self {
        ControlEntry::Page {
            number,
            active: number == current_page,
            disabled: false,
        }
    }

    /// The page number if this entry is a `Page`.
    pub fn page_number(&self) -> Option<usize> {
        match self {
            ControlEntry::Page { number, .. } => Some(*number),
            _ => None,
        }
    }

    /// True for the active page entry.
    pub fn is_active(&self) -> bool {
        matches!(self, ControlEntry::Page { active: true, .. })
    }

    /// True when activating the entry can never change the page.
    pub fn is_inert(&self) -> bool {
        match self {
            ControlEntry::Page { active, disabled, .. } => *active || *disabled,
            ControlEntry::Ellipsis => true,
            ControlEntry::Nav { disabled, .. } => *disabled,
        }
    }
}

/// Compute the number of pages for `total_items` split into `page_size` chunks.
///
/// A zero page size is treated as one item per page.
pub fn page_count(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1))
}

/// Clamp a requested page into `1..=page_count` (page 1 when there are no pages).
pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.clamp(1, page_count.max(1))
}

/// Compute the windowed control strip.
///
/// The first and last pages are always visible; `sibling_count` pages are
/// shown on each side of `current_page`, and the gaps between the edges and
/// that window collapse into `ControlEntry::Ellipsis`. With
/// [`DENSE_PAGE_LIMIT`] pages or fewer every page is listed. The strip is
/// wrapped by previous/next navigation controls.
///
/// ```
/// use catalog_core::window::{compute_window, ControlEntry};
///
/// let strip = compute_window(300, 30, 5, 1);
/// let pages: Vec<_> = strip.iter().filter_map(ControlEntry::page_number).collect();
/// assert_eq!(pages, vec![1, 4, 5, 6, 10]);
/// ```
pub fn compute_window(
    total_items: usize,
    page_size: usize,
    current_page: usize,
    sibling_count: usize,
) -> Vec<ControlEntry> {
    let pages = page_count(total_items, page_size);
    if pages == 0 {
        return vec![
            ControlEntry::Nav {
                direction: NavDirection::Previous,
                disabled: true,
            },
            ControlEntry::Nav {
                direction: NavDirection::Next,
                disabled: true,
            },
        ];
    }

    let mut entries = Vec::with_capacity(sibling_count * 2 + 7);
    entries.push(ControlEntry::Nav {
        direction: NavDirection::Previous,
        disabled: current_page == 1,
    });

    if pages <= DENSE_PAGE_LIMIT {
        entries.extend((1..=pages).map(|number| ControlEntry::page(number, current_page)));
    } else {
        entries.push(ControlEntry::page(1, current_page));

        // Gap between page 1 and the sibling window.
        if current_page > sibling_count.saturating_add(2) {
            entries.push(ControlEntry::Ellipsis);
        }

        let start = current_page.saturating_sub(sibling_count).max(2);
        let end = current_page.saturating_add(sibling_count).min(pages - 1);
        entries.extend((start..=end).map(|number| ControlEntry::page(number, current_page)));

        // Gap between the sibling window and the last page.
        if current_page.saturating_add(sibling_count).saturating_add(1) < pages {
            entries.push(ControlEntry::Ellipsis);
        }

        if pages > 1 {
            entries.push(ControlEntry::page(pages, current_page));
        }
    }

    entries.push(ControlEntry::Nav {
        direction: NavDirection::Next,
        disabled: current_page == pages,
    });
    entries
}

/// Compute the simple control strip: every page number, no ellipsis and no
/// previous/next controls.
pub fn compute_simple(total_items: usize, page_size: usize, current_page: usize) -> Vec<ControlEntry> {
    (1..=page_count(total_items, page_size))
        .map(|number| ControlEntry::page(number, current_page))
        .collect()
}

/// Control-strip layout used by a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Every page listed, no navigation controls.
    Simple,
    /// Edges pinned, `sibling_count` pages around the current one.
    Windowed { sibling_count: usize },
}

impl Layout {
    /// Build a layout from the `windowed` flag of a listing configuration.
    pub fn from_flag(windowed: bool, sibling_count: usize) -> Self {
        if windowed {
            Layout::Windowed { sibling_count }
        } else {
            Layout::Simple
        }
    }

    /// Compute the control strip for this layout.
    pub fn controls(&self, total_items: usize, page_size: usize, current_page: usize) -> Vec<ControlEntry> {
        match *self {
            Layout::Simple => compute_simple(total_items, page_size, current_page),
            Layout::Windowed { sibling_count } => {
                compute_window(total_items, page_size, current_page, sibling_count)
            }
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::Windowed {
            sibling_count: DEFAULT_SIBLING_COUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(entries: &[ControlEntry]) -> Vec<String> {
        entries
            .iter()
            .filter_map(|entry| match entry {
                ControlEntry::Page { number, .. } => Some(number.to_string()),
                ControlEntry::Ellipsis => Some("...".to_string()),
                ControlEntry::Nav { .. } => None,
            })
            .collect()
    }

    fn nav(entries: &[ControlEntry], wanted: NavDirection) -> Option<bool> {
        entries.iter().find_map(|entry| match entry {
            ControlEntry::Nav { direction, disabled } if *direction == wanted => Some(*disabled),
            _ => None,
        })
    }

    fn active_pages(entries: &[ControlEntry]) -> Vec<usize> {
        entries
            .iter()
            .filter(|e| e.is_active())
            .filter_map(ControlEntry::page_number)
            .collect()
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 30), 0);
        assert_eq!(page_count(1, 30), 1);
        assert_eq!(page_count(30, 30), 1);
        assert_eq!(page_count(31, 30), 2);
        assert_eq!(page_count(7, 0), 7);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 4), 1);
        assert_eq!(clamp_page(9, 4), 4);
        assert_eq!(clamp_page(3, 4), 3);
        assert_eq!(clamp_page(1, 0), 1);
        assert_eq!(clamp_page(5, 0), 1);
    }

    #[test]
    fn test_small_catalog_lists_every_page() {
        let strip = compute_window(9, 3, 1, 1);
        assert_eq!(shape(&strip), vec!["1", "2", "3"]);
        assert_eq!(active_pages(&strip), vec![1]);
        assert_eq!(nav(&strip, NavDirection::Previous), Some(true));
        assert_eq!(nav(&strip, NavDirection::Next), Some(false));
        assert!(strip
            .iter()
            .all(|e| !matches!(e, ControlEntry::Page { disabled: true, .. })));
    }

    #[test]
    fn test_window_in_the_middle() {
        let strip = compute_window(300, 30, 5, 1);
        assert_eq!(shape(&strip), vec!["1", "...", "4", "5", "6", "...", "10"]);
        assert_eq!(active_pages(&strip), vec![5]);
        assert_eq!(nav(&strip, NavDirection::Previous), Some(false));
        assert_eq!(nav(&strip, NavDirection::Next), Some(false));
    }

    #[test]
    fn test_window_at_first_page() {
        let strip = compute_window(300, 30, 1, 1);
        assert_eq!(shape(&strip), vec!["1", "2", "...", "10"]);
        assert_eq!(active_pages(&strip), vec![1]);
        assert_eq!(nav(&strip, NavDirection::Previous), Some(true));
    }

    #[test]
    fn test_window_at_last_page() {
        let strip = compute_window(300, 30, 10, 1);
        assert_eq!(shape(&strip), vec!["1", "...", "9", "10"]);
        assert_eq!(active_pages(&strip), vec![10]);
        assert_eq!(nav(&strip, NavDirection::Next), Some(true));
    }

    #[test]
    fn test_window_next_to_edges() {
        // Page 3: 3 > siblings + 2 is false, so no leading ellipsis.
        assert_eq!(shape(&compute_window(300, 30, 3, 1)), vec!["1", "2", "3", "4", "...", "10"]);
        assert_eq!(shape(&compute_window(300, 30, 4, 1)), vec!["1", "...", "3", "4", "5", "...", "10"]);
        assert_eq!(shape(&compute_window(300, 30, 8, 1)), vec!["1", "...", "7", "8", "9", "10"]);
    }

    #[test]
    fn test_empty_catalog() {
        let strip = compute_window(0, 30, 1, 1);
        assert_eq!(strip.len(), 2);
        assert!(shape(&strip).is_empty());
        assert_eq!(nav(&strip, NavDirection::Previous), Some(true));
        assert_eq!(nav(&strip, NavDirection::Next), Some(true));
    }

    #[test]
    fn test_wider_sibling_count() {
        let strip = compute_window(200, 10, 10, 2);
        assert_eq!(shape(&strip), vec!["1", "...", "8", "9", "10", "11", "12", "...", "20"]);
    }

    #[test]
    fn test_zero_sibling_count() {
        let strip = compute_window(100, 10, 5, 0);
        assert_eq!(shape(&strip), vec!["1", "...", "5", "...", "10"]);
        let strip = compute_window(100, 10, 1, 0);
        assert_eq!(shape(&strip), vec!["1", "...", "10"]);
    }

    #[test]
    fn test_huge_sibling_count_lists_every_page() {
        let strip = compute_window(100, 10, 5, usize::MAX);
        assert_eq!(shape(&strip), vec!["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);
    }

    #[test]
    fn test_simple_layout_has_no_navigation() {
        let strip = compute_simple(10, 3, 2);
        assert_eq!(shape(&strip), vec!["1", "2", "3", "4"]);
        assert_eq!(active_pages(&strip), vec![2]);
        assert_eq!(nav(&strip, NavDirection::Previous), None);
        assert!(compute_simple(0, 3, 1).is_empty());
    }

    #[test]
    fn test_layout_dispatch() {
        assert_eq!(Layout::from_flag(false, 1), Layout::Simple);
        assert_eq!(Layout::from_flag(true, 2), Layout::Windowed { sibling_count: 2 });
        assert_eq!(Layout::default().controls(300, 30, 5), compute_window(300, 30, 5, 1));
        assert_eq!(Layout::Simple.controls(9, 3, 1), compute_simple(9, 3, 1));
    }

    #[test]
    fn test_inert_entries() {
        assert!(ControlEntry::Ellipsis.is_inert());
        assert!(ControlEntry::Page { number: 2, active: true, disabled: false }.is_inert());
        assert!(!ControlEntry::Page { number: 2, active: false, disabled: false }.is_inert());
        assert!(ControlEntry::Nav { direction: NavDirection::Next, disabled: true }.is_inert());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(compute_window(9, 3, 2, 1)).unwrap();
        assert_eq!(json[0], serde_json::json!({"kind": "nav", "direction": "previous", "disabled": false}));
        assert_eq!(json[2], serde_json::json!({"kind": "page", "number": 2, "active": true, "disabled": false}));
    }
}

//! Listing state, page slicing and page transitions.
//!
//! `PageState` is the only mutable piece of a listing. The free functions in
//! this module take it by value and hand back a new one, so the slicing and
//! control computation can be tested without any rendering surface.
//! `Listing` bundles a catalog with its state for callers that want a single
//! owner.

use std::ops::Range;

use tracing::debug;

use crate::window::{clamp_page, page_count, ControlEntry, Layout, NavDirection};

/// Current page and page size of one listing. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: usize,
    pub page_size: usize,
}

impl PageState {
    /// Start on page 1 with the given page size (at least 1).
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Same page size, different page.
    pub fn with_page(self, current_page: usize) -> Self {
        Self { current_page, ..self }
    }
}

/// The visible slice of a catalog plus the controls to render next to it.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a, T> {
    pub visible: &'a [T],
    pub controls: Vec<ControlEntry>,
    pub current_page: usize,
    pub page_count: usize,
}

/// Index range of `state.current_page` within a catalog of `total_items`.
///
/// The trailing page may be shorter than the page size; a page past the end
/// yields an empty range.
pub fn page_range(total_items: usize, state: PageState) -> Range<usize> {
    let page_size = state.page_size.max(1);
    let start = state
        .current_page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(total_items);
    let end = start.saturating_add(page_size).min(total_items);
    start..end
}

/// Items shown on the current page.
pub fn page_slice<T>(catalog: &[T], state: PageState) -> &[T] {
    &catalog[page_range(catalog.len(), state)]
}

/// Slice the catalog and compute the control strip for the current page.
pub fn render<T>(catalog: &[T], state: PageState, layout: Layout) -> PageView<'_, T> {
    PageView {
        visible: page_slice(catalog, state),
        controls: layout.controls(catalog.len(), state.page_size, state.current_page),
        current_page: state.current_page,
        page_count: page_count(catalog.len(), state.page_size),
    }
}

/// Page state after activating `entry`, or `None` when the activation is a
/// no-op (ellipsis, disabled or active controls, targets outside `1..=page_count`).
pub fn transition(state: PageState, entry: &ControlEntry, page_count: usize) -> Option<PageState> {
    if entry.is_inert() {
        return None;
    }
    let target = match *entry {
        ControlEntry::Page { number, .. } => number,
        ControlEntry::Nav {
            direction: NavDirection::Previous,
            ..
        } => state.current_page.checked_sub(1)?,
        ControlEntry::Nav {
            direction: NavDirection::Next,
            ..
        } => state.current_page + 1,
        ControlEntry::Ellipsis => return None,
    };
    if target == 0 || target > page_count || target == state.current_page {
        return None;
    }
    Some(state.with_page(target))
}

/// A catalog together with its page state.
#[derive(Debug, Clone)]
pub struct Listing<T> {
    items: Vec<T>,
    state: PageState,
    layout: Layout,
}

impl<T> Listing<T> {
    /// Create a listing positioned on page 1.
    pub fn new(items: Vec<T>, page_size: usize, layout: Layout) -> Self {
        Self {
            items,
            state: PageState::new(page_size),
            layout,
        }
    }

    /// All items of the catalog.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    pub fn page_size(&self) -> usize {
        self.state.page_size
    }

    /// Total number of pages (0 for an empty catalog).
    pub fn page_count(&self) -> usize {
        page_count(self.items.len(), self.state.page_size)
    }

    /// Render the current page.
    pub fn view(&self) -> PageView<'_, T> {
        render(&self.items, self.state, self.layout)
    }

    /// Controls of the current page without slicing.
    pub fn controls(&self) -> Vec<ControlEntry> {
        self.layout
            .controls(self.items.len(), self.state.page_size, self.state.current_page)
    }

    /// Activate a control. Returns true if the page changed.
    pub fn activate(&mut self, entry: &ControlEntry) -> bool {
        match transition(self.state, entry, self.page_count()) {
            Some(next) => {
                debug!(from = self.state.current_page, to = next.current_page, "page transition");
                self.state = next;
                true
            }
            None => false,
        }
    }

    /// Jump to a page, clamped into range. Returns true if the page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        let target = clamp_page(page, self.page_count());
        if target == self.state.current_page {
            return false;
        }
        debug!(from = self.state.current_page, to = target, "page jump");
        self.state = self.state.with_page(target);
        true
    }

    /// Move to the next page. Returns true if the page changed.
    pub fn next_page(&mut self) -> bool {
        self.activate(&ControlEntry::Nav {
            direction: NavDirection::Next,
            disabled: false,
        })
    }

    /// Move to the previous page. Returns true if the page changed.
    pub fn previous_page(&mut self) -> bool {
        self.activate(&ControlEntry::Nav {
            direction: NavDirection::Previous,
            disabled: false,
        })
    }

    /// Go back to the first page.
    pub fn reset(&mut self) {
        self.state = self.state.with_page(1);
    }
}

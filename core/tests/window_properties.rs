// core/tests/window_properties.rs
//
// Exhaustive checks of the control-strip invariants over small inputs.
//
// Tests cover:
// - exactly one active page whenever there are pages
// - strictly increasing, unique page numbers
// - no ellipsis standing in for zero hidden pages
// - previous/next disabled exactly at the edges
// - slicing and controls agree through `Listing`

use catalog_core::{compute_window, page_count, ControlEntry, Layout, Listing, NavDirection};

fn for_each_input(mut check: impl FnMut(usize, usize, usize, usize)) {
    for total in 0..=120 {
        for page_size in 1..=12 {
            let pages = page_count(total, page_size);
            for current in 1..=pages.max(1) {
                for siblings in 0..=3 {
                    check(total, page_size, current, siblings);
                }
            }
        }
    }
}

#[test]
fn exactly_one_active_page() {
    for_each_input(|total, size, current, siblings| {
        let strip = compute_window(total, size, current, siblings);
        let active: Vec<_> = strip.iter().filter(|e| e.is_active()).collect();
        let expected = if page_count(total, size) > 0 { 1 } else { 0 };
        assert_eq!(
            active.len(),
            expected,
            "total={total} size={size} current={current} siblings={siblings}: {strip:?}"
        );
        if let Some(entry) = active.first() {
            assert_eq!(entry.page_number(), Some(current));
        }
    });
}

#[test]
fn page_numbers_strictly_increase() {
    for_each_input(|total, size, current, siblings| {
        let numbers: Vec<usize> = compute_window(total, size, current, siblings)
            .iter()
            .filter_map(ControlEntry::page_number)
            .collect();
        assert!(
            numbers.windows(2).all(|w| w[0] < w[1]),
            "total={total} size={size} current={current} siblings={siblings}: {numbers:?}"
        );
        let pages = page_count(total, size);
        if pages > 0 {
            assert_eq!(numbers.first(), Some(&1));
            assert_eq!(numbers.last(), Some(&pages));
        }
    });
}

#[test]
fn ellipsis_always_hides_pages() {
    for_each_input(|total, size, current, siblings| {
        let strip = compute_window(total, size, current, siblings);
        for (i, entry) in strip.iter().enumerate() {
            if *entry != ControlEntry::Ellipsis {
                continue;
            }
            let before = strip[i - 1].page_number().expect("page before ellipsis");
            let after = strip[i + 1].page_number().expect("page after ellipsis");
            assert!(
                after > before + 1,
                "total={total} size={size} current={current} siblings={siblings}: {strip:?}"
            );
        }
        // Consecutive page entries leave no gap unmarked.
        let pages: Vec<_> = strip.iter().filter(|e| !matches!(e, ControlEntry::Nav { .. })).collect();
        for pair in pages.windows(2) {
            if let (Some(a), Some(b)) = (pair[0].page_number(), pair[1].page_number()) {
                assert_eq!(b, a + 1, "gap without ellipsis: {strip:?}");
            }
        }
    });
}

#[test]
fn navigation_disabled_at_edges() {
    for_each_input(|total, size, current, siblings| {
        let strip = compute_window(total, size, current, siblings);
        let pages = page_count(total, size);
        assert_eq!(
            strip.first(),
            Some(&ControlEntry::Nav {
                direction: NavDirection::Previous,
                disabled: current == 1,
            })
        );
        assert_eq!(
            strip.last(),
            Some(&ControlEntry::Nav {
                direction: NavDirection::Next,
                disabled: pages == 0 || current == pages,
            })
        );
    });
}

#[test]
fn walking_forward_visits_every_item_once() {
    for total in 0..=40 {
        for size in 1..=7 {
            let items: Vec<usize> = (0..total).collect();
            let mut listing = Listing::new(items, size, Layout::default());
            let mut seen = listing.view().visible.to_vec();
            while listing.next_page() {
                seen.extend_from_slice(listing.view().visible);
            }
            assert_eq!(seen, (0..total).collect::<Vec<_>>());
        }
    }
}

//! Page-button layout for the record list pagination control.
//!
//! Layout keeps `BOUNDARY_COUNT` pages at each end and `SIBLING_COUNT` pages on
//! either side of the current page, collapsing gaps into ellipses. The number
//! of slots stays constant while the current page moves, so the control does
//! not jitter.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

const BOUNDARY_COUNT: i64 = 1;
const SIBLING_COUNT: i64 = 1;

/// One slot in the pagination control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Compute the slots for `current` (1-based) out of `total` pages.
pub fn page_items(current: u32, total: u32) -> Vec<PageItem> {
    let count = i64::from(total);
    let page = i64::from(current.clamp(1, total.max(1)));

    let start_pages = range(1, BOUNDARY_COUNT.min(count));
    let end_pages = range((count - BOUNDARY_COUNT + 1).max(BOUNDARY_COUNT + 1), count);

    let siblings_start = (page - SIBLING_COUNT)
        .min(count - BOUNDARY_COUNT - SIBLING_COUNT * 2 - 1)
        .max(BOUNDARY_COUNT + 2);
    let siblings_end_cap = end_pages.first().map_or(count - 1, |first| first - 2);
    let siblings_end = (page + SIBLING_COUNT)
        .max(BOUNDARY_COUNT + SIBLING_COUNT * 2 + 2)
        .min(siblings_end_cap);

    let mut items: Vec<PageItem> = start_pages.iter().map(|p| page_item(*p)).collect();

    if siblings_start > BOUNDARY_COUNT + 2 {
        items.push(PageItem::Ellipsis);
    } else if BOUNDARY_COUNT + 1 < count - BOUNDARY_COUNT {
        items.push(page_item(BOUNDARY_COUNT + 1));
    }

    items.extend(range(siblings_start, siblings_end).into_iter().map(page_item));

    if siblings_end < count - BOUNDARY_COUNT - 1 {
        items.push(PageItem::Ellipsis);
    } else if count - BOUNDARY_COUNT > BOUNDARY_COUNT {
        items.push(page_item(count - BOUNDARY_COUNT));
    }

    items.extend(end_pages.into_iter().map(page_item));
    items
}

/// Whether a "previous" control should be enabled.
pub fn has_previous(current: u32) -> bool {
    current > 1
}

/// Whether a "next" control should be enabled.
pub fn has_next(current: u32, total: u32) -> bool {
    current < total
}

fn range(start: i64, end: i64) -> Vec<i64> {
    if end < start { Vec::new() } else { (start..=end).collect() }
}

fn page_item(page: i64) -> PageItem {
    PageItem::Page(u32::try_from(page).unwrap_or(u32::MAX))
}

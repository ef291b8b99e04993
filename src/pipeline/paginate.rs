//! Fixed-size pagination
//!
//! The paginator owns no state. It takes the sorted subset plus a requested
//! page number and returns the slice for that page together with the metadata
//! the table footer needs. A stale page number (the subset shrank, the client
//! remembered page 9) clamps to the last real page and the clamped value is
//! reported back, so the shell can resynchronize instead of showing an empty
//! table.

use serde::{Deserialize, Serialize};

/// Most page-number buttons shown at once.
const WINDOW_SIZE: usize = 5;

/// One page of items plus the footer metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// The page actually served, after clamping into `[1, max(total_pages, 1)]`.
    pub page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    /// 1-based index of the first item on this page, 0 when empty.
    pub range_start: usize,
    /// 1-based index of the last item on this page, 0 when empty.
    pub range_end: usize,
}

/// Slice `items` into the requested page.
pub fn paginate<T>(items: Vec<T>, per_page: usize, requested_page: usize) -> Page<T> {
    // Config validation rejects a zero page size; keep the math total anyway.
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);
    let page = requested_page.clamp(1, total_pages.max(1));

    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total_items);
    let page_items: Vec<T> = items.into_iter().skip(start).take(per_page).collect();

    Page {
        items: page_items,
        page,
        total_items,
        total_pages,
        range_start: if total_items == 0 { 0 } else { start + 1 },
        range_end: end,
    }
}

// ============================================================================
// Page-number window
// ============================================================================

/// The run of page buttons to render, plus whether an ellipsis gap separates
/// it from the first / last page shortcut.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    pub pages: Vec<usize>,
    pub leading_gap: bool,
    pub trailing_gap: bool,
}

/// Up to five consecutive page numbers centered on `current`, shifted inward
/// at either boundary.
pub fn page_window(current: usize, total_pages: usize) -> PageWindow {
    if total_pages == 0 {
        return PageWindow::default();
    }

    let current = current.clamp(1, total_pages);
    let start = if current <= 2 {
        1
    } else {
        // Center, then pull back so the window never overruns the last page.
        (current - 2).min(total_pages.saturating_sub(WINDOW_SIZE - 1).max(1))
    };
    let end = (start + WINDOW_SIZE - 1).min(total_pages);

    PageWindow {
        pages: (start..=end).collect(),
        leading_gap: start > 1,
        trailing_gap: end < total_pages,
    }
}

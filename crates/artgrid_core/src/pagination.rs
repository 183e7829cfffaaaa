//! Pure pagination math for the grid's paginator.

/// Fixed page size of the grid.
pub const ROWS_PER_PAGE: usize = 10;

/// Number of pages needed for `total` records. Zero records means zero pages.
pub fn total_pages(total: u64, per_page: usize) -> u32 {
    let per_page = per_page.max(1) as u64;
    u32::try_from(total.div_ceil(per_page)).unwrap_or(u32::MAX)
}

/// Clamp a requested 1-based page into `1..=total_pages`.
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

/// 1-based indices of the first and last record shown, for "Showing a to b of n".
///
/// Returns `None` when the page shows nothing.
pub fn page_window(page: u32, per_page: usize, shown: usize) -> Option<(u64, u64)> {
    if shown == 0 {
        return None;
    }
    let first = u64::from(page.max(1) - 1) * per_page as u64 + 1;
    Some((first, first + shown as u64 - 1))
}

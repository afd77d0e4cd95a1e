pub fn total_pages(total_count: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    let pages = total_count.div_ceil(u64::from(per_page));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Largest valid 0-indexed page for the given page count.
pub fn last_page_index(total_pages: u32) -> u32 {
    total_pages.saturating_sub(1)
}

pub fn clamp_page_index(page: u32, total_pages: u32) -> u32 {
    page.min(last_page_index(total_pages))
}

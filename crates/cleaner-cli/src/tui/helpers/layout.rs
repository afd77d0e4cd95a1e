use super::*;

pub(in crate::tui) fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 { 0 } else { index.min(len - 1) }
}

pub(in crate::tui) fn adjust_scroll(
    selected: usize,
    scroll: usize,
    height: usize,
    len: usize,
) -> usize {
    if len == 0 || height == 0 {
        return 0;
    }
    if selected < scroll {
        return selected;
    }
    let last_visible = scroll.saturating_add(height).saturating_sub(1);
    if selected > last_visible {
        let new_scroll = selected.saturating_sub(height - 1);
        return new_scroll.min(len.saturating_sub(1));
    }
    scroll
}

/// A rectangle of `width` x `height` cells centred in `area`, clipped to it.
pub(in crate::tui) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Next entry of the page-size cycle; unknown sizes restart the cycle.
pub(in crate::tui) fn next_page_size(current: u32) -> u32 {
    match PAGE_SIZE_OPTIONS.iter().position(|size| *size == current) {
        Some(index) => PAGE_SIZE_OPTIONS[(index + 1) % PAGE_SIZE_OPTIONS.len()],
        None => PAGE_SIZE_OPTIONS[0],
    }
}

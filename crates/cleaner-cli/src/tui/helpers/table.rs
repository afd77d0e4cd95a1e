use super::*;

const STARS_WIDTH: usize = 6;
const LANGUAGE_WIDTH: usize = 12;
const UPDATED_WIDTH: usize = 10;
const STATUS_WIDTH: usize = 8;

pub(in crate::tui) fn name_column_width(total_width: usize) -> usize {
    // marker, separators and fixed columns
    let fixed = 4 + 3 + STATUS_WIDTH + 3 + STARS_WIDTH + 3 + LANGUAGE_WIDTH + 3 + UPDATED_WIDTH + 2;
    total_width.saturating_sub(fixed).max(20)
}

pub(in crate::tui) fn select_all_marker(state: SelectAllState) -> &'static str {
    match state {
        SelectAllState::Checked => "[x]",
        SelectAllState::Indeterminate => "[-]",
        SelectAllState::Unchecked => "[ ]",
    }
}

pub(in crate::tui) fn row_marker(repo: &Repository, selected: bool) -> &'static str {
    if repo.archived {
        " - "
    } else if selected {
        "[x]"
    } else {
        "[ ]"
    }
}

pub(in crate::tui) fn format_repo_header(marker: &str, name_width: usize) -> String {
    format!(
        "{marker} {:<name_width$} | {:<STATUS_WIDTH$} | {:>STARS_WIDTH$} | {:<LANGUAGE_WIDTH$} | {:<UPDATED_WIDTH$}",
        "name", "status", "stars", "language", "updated",
    )
}

pub(in crate::tui) fn format_repo_row(repo: &Repository, selected: bool, name_width: usize) -> String {
    let name = truncate_with_ellipsis(&repo.full_name, name_width);
    let status = if repo.archived { "archived" } else { "active" };
    let language = truncate_with_ellipsis(repo.language.as_deref().unwrap_or("-"), LANGUAGE_WIDTH);
    format!(
        "{} {:<name_width$} | {:<STATUS_WIDTH$} | {:>STARS_WIDTH$} | {:<LANGUAGE_WIDTH$} | {:<UPDATED_WIDTH$}",
        row_marker(repo, selected),
        name,
        status,
        repo.stars,
        language,
        date_label(&repo.updated_at),
    )
}

/// Indented description shown under a repository name, if it has one.
pub(in crate::tui) fn description_line(repo: &Repository, width: usize) -> Option<String> {
    let description = repo.description.as_deref()?.trim();
    if description.is_empty() {
        return None;
    }
    Some(format!(
        "    {}",
        truncate_with_ellipsis(description, width.saturating_sub(4))
    ))
}

/// Gray bar drawn in place of a row while the first page loads.
pub(in crate::tui) fn skeleton_row(width: usize) -> String {
    "░".repeat(width.saturating_sub(2).min(60))
}

/// `YYYY-MM-DD` prefix of an RFC 3339 timestamp.
pub(in crate::tui) fn date_label(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}

pub(in crate::tui) fn truncate_with_ellipsis(value: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if value.chars().count() <= max {
        return value.to_string();
    }
    if max <= 1 {
        return "…".to_string();
    }
    let mut truncated = value.chars().take(max - 1).collect::<String>();
    truncated.push('…');
    truncated
}

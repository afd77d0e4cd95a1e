//! Repository browser state: the current page of rows, pagination, search,
//! selection and the archive action.
//!
//! The browser performs no I/O. Operations that need the network return a
//! [`Command`]; the caller executes it and feeds the result back through
//! [`RepositoryBrowser::apply_fetch`] or [`RepositoryBrowser::apply_archive`].

use crate::model::{
    ArchiveOutcome, ListQuery, RepoId, Repository, RepositoryPage, RequestFailure, SortField,
    SortOrder,
};
use crate::paging::{clamp_page_index, last_page_index, total_pages};
use crate::selection::{SelectAllState, Selection};
use tracing::{debug, info, warn};

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch repositories";
pub const ARCHIVE_FAILED_MESSAGE: &str = "Failed to archive repositories";
pub const EMPTY_NOTICE: &str = "No repositories found";
pub const MAX_PLACEHOLDER_ROWS: usize = 10;
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 25, 50, 100];

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FetchRequest {
    pub seq: u64,
    pub query: ListQuery,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Fetch(FetchRequest),
    Archive(Vec<RepoId>),
    Logout,
}

#[derive(Clone, Debug)]
pub struct RepositoryBrowser {
    rows: Vec<Repository>,
    selection: Selection,
    page: u32,
    rows_per_page: u32,
    total_count: u64,
    search_text: String,
    committed_search: String,
    sort: Option<SortField>,
    order: Option<SortOrder>,
    loading: bool,
    archiving: bool,
    error: Option<String>,
    latest_seq: u64,
}

impl RepositoryBrowser {
    pub fn new(rows_per_page: u32) -> Self {
        Self {
            rows: Vec::new(),
            selection: Selection::default(),
            page: 0,
            rows_per_page: rows_per_page.max(1),
            total_count: 0,
            search_text: String::new(),
            committed_search: String::new(),
            sort: None,
            order: None,
            loading: false,
            archiving: false,
            error: None,
            latest_seq: 0,
        }
    }

    pub fn with_sort(mut self, sort: Option<SortField>, order: Option<SortOrder>) -> Self {
        self.sort = sort;
        self.order = order;
        self
    }

    pub fn rows(&self) -> &[Repository] {
        &self.rows
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// 0-indexed page currently displayed.
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn rows_per_page(&self) -> u32 {
        self.rows_per_page
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_count, self.rows_per_page)
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn committed_search(&self) -> &str {
        &self.committed_search
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_archiving(&self) -> bool {
        self.archiving
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Begins a fetch of the current page with the committed search.
    pub fn start_fetch(&mut self) -> FetchRequest {
        self.loading = true;
        self.error = None;
        self.latest_seq += 1;
        let search = Some(self.committed_search.as_str());
        let query = ListQuery::new(self.page + 1, self.rows_per_page)
            .with_search(search)
            .with_sort(self.sort, self.order);
        debug!(seq = self.latest_seq, page = query.page, per_page = query.per_page, "Fetch started");
        FetchRequest {
            seq: self.latest_seq,
            query,
        }
    }

    pub fn apply_fetch(
        &mut self,
        seq: u64,
        result: Result<RepositoryPage, RequestFailure>,
    ) -> Option<Command> {
        if seq < self.latest_seq {
            debug!(seq, latest = self.latest_seq, "Discarding stale fetch response");
            return None;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                info!(
                    count = page.repositories.len(),
                    total = page.total_count,
                    page = self.page + 1,
                    "Repositories loaded"
                );
                self.rows = page.repositories;
                self.total_count = page.total_count;
                self.selection.retain_selectable(&self.rows);
                let pages = self.total_pages();
                if pages > 0 && self.page > last_page_index(pages) {
                    self.page = clamp_page_index(self.page, pages);
                    self.selection.clear();
                    return Some(Command::Fetch(self.start_fetch()));
                }
                None
            }
            Err(RequestFailure::Unauthorized) => {
                warn!("Repository listing rejected the session");
                Some(Command::Logout)
            }
            Err(RequestFailure::Other(cause)) => {
                warn!(error = %cause, "Repository listing failed");
                self.error = Some(FETCH_FAILED_MESSAGE.to_string());
                None
            }
        }
    }

    pub fn refresh(&mut self) -> Option<Command> {
        if self.loading {
            return None;
        }
        Some(Command::Fetch(self.start_fetch()))
    }

    pub fn next_page(&mut self) -> Option<Command> {
        if self.loading || self.page + 1 >= self.total_pages() {
            return None;
        }
        self.page += 1;
        self.selection.clear();
        Some(Command::Fetch(self.start_fetch()))
    }

    pub fn prev_page(&mut self) -> Option<Command> {
        if self.loading || self.page == 0 {
            return None;
        }
        self.page -= 1;
        self.selection.clear();
        Some(Command::Fetch(self.start_fetch()))
    }

    pub fn set_rows_per_page(&mut self, rows_per_page: u32) -> Option<Command> {
        let rows_per_page = rows_per_page.max(1);
        if self.loading || rows_per_page == self.rows_per_page {
            return None;
        }
        self.rows_per_page = rows_per_page;
        self.page = 0;
        self.selection.clear();
        Some(Command::Fetch(self.start_fetch()))
    }

    pub fn set_search_text(&mut self, text: &str) {
        if self.search_text != text {
            self.search_text = text.to_string();
        }
    }

    pub fn push_search(&mut self, ch: char) {
        self.search_text.push(ch);
    }

    pub fn pop_search(&mut self) {
        self.search_text.pop();
    }

    pub fn can_submit_search(&self) -> bool {
        !self.loading && !self.search_text.trim().is_empty()
    }

    /// Commits the live search text. Identical text is a no-op.
    pub fn submit_search(&mut self) -> Option<Command> {
        if !self.can_submit_search() {
            return None;
        }
        let trimmed = self.search_text.trim();
        if trimmed == self.committed_search {
            return None;
        }
        self.committed_search = trimmed.to_string();
        self.page = 0;
        self.selection.clear();
        info!(search = %self.committed_search, "Search applied");
        Some(Command::Fetch(self.start_fetch()))
    }

    pub fn clear_search(&mut self) -> Option<Command> {
        if self.loading {
            return None;
        }
        let changed = !self.committed_search.is_empty() || self.page != 0;
        self.search_text.clear();
        self.committed_search.clear();
        self.page = 0;
        if !changed {
            return None;
        }
        self.selection.clear();
        Some(Command::Fetch(self.start_fetch()))
    }

    pub fn toggle(&mut self, id: RepoId) -> bool {
        self.selection.toggle(&self.rows, id)
    }

    pub fn toggle_all(&mut self, checked: bool) {
        if self.loading {
            return;
        }
        self.selection.toggle_all(&self.rows, checked);
    }

    pub fn select_all_state(&self) -> SelectAllState {
        self.selection.select_all_state(&self.rows)
    }

    pub fn can_archive(&self) -> bool {
        !self.selection.is_empty() && !self.archiving
    }

    pub fn start_archive(&mut self) -> Option<Command> {
        if !self.can_archive() {
            return None;
        }
        self.archiving = true;
        self.error = None;
        let ids = self.selection.ids();
        info!(count = ids.len(), "Archive started");
        Some(Command::Archive(ids))
    }

    pub fn apply_archive(
        &mut self,
        result: Result<ArchiveOutcome, RequestFailure>,
    ) -> Option<Command> {
        if !self.archiving {
            return None;
        }
        self.archiving = false;
        match result {
            Ok(outcome) if outcome.success => {
                info!(archived = outcome.archived_count, "Archive completed");
                self.selection.clear();
                Some(Command::Fetch(self.start_fetch()))
            }
            Ok(outcome) => {
                let failed = outcome.failed_repositories.len();
                warn!(failed, archived = outcome.archived_count, "Archive partially failed");
                self.error = Some(format!("Failed to archive {failed} repositories"));
                None
            }
            Err(RequestFailure::Unauthorized) => {
                warn!("Archive rejected the session");
                Some(Command::Logout)
            }
            Err(RequestFailure::Other(cause)) => {
                warn!(error = %cause, "Archive request failed");
                self.error = Some(ARCHIVE_FAILED_MESSAGE.to_string());
                None
            }
        }
    }

    /// Skeleton rows to draw while the first page is loading.
    pub fn placeholder_rows(&self) -> usize {
        if self.loading && self.rows.is_empty() {
            MAX_PLACEHOLDER_ROWS.min(self.rows_per_page as usize)
        } else {
            0
        }
    }

    pub fn is_refreshing(&self) -> bool {
        self.loading && !self.rows.is_empty()
    }

    pub fn shows_empty_notice(&self) -> bool {
        !self.loading && self.rows.is_empty()
    }

    /// Pagination label in the form `1-100 of 250`.
    pub fn range_label(&self) -> String {
        if self.total_count == 0 {
            return "0-0 of 0".to_string();
        }
        let per_page = u64::from(self.rows_per_page);
        let from = u64::from(self.page) * per_page + 1;
        let to = (u64::from(self.page + 1) * per_page).min(self.total_count);
        format!("{from}-{to} of {}", self.total_count)
    }
}

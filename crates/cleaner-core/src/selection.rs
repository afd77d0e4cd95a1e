use crate::model::{RepoId, Repository};
use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SelectAllState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Checked repository ids for the page currently on screen.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Selection {
    ids: BTreeSet<RepoId>,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: RepoId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> Vec<RepoId> {
        self.ids.iter().copied().collect()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Flips one row. Archived or unknown rows are inert.
    pub fn toggle(&mut self, rows: &[Repository], id: RepoId) -> bool {
        let selectable = rows.iter().any(|repo| repo.id == id && !repo.archived);
        if !selectable {
            return false;
        }
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
        true
    }

    pub fn toggle_all(&mut self, rows: &[Repository], checked: bool) {
        self.ids.clear();
        if checked {
            self.ids
                .extend(rows.iter().filter(|repo| !repo.archived).map(|repo| repo.id));
        }
    }

    /// Drops ids that are no longer selectable on the given page.
    pub fn retain_selectable(&mut self, rows: &[Repository]) {
        self.ids
            .retain(|id| rows.iter().any(|repo| repo.id == *id && !repo.archived));
    }

    pub fn select_all_state(&self, rows: &[Repository]) -> SelectAllState {
        let selectable = selectable_count(rows);
        if self.ids.is_empty() {
            SelectAllState::Unchecked
        } else if self.ids.len() == selectable {
            SelectAllState::Checked
        } else {
            SelectAllState::Indeterminate
        }
    }
}

pub fn selectable_count(rows: &[Repository]) -> usize {
    rows.iter().filter(|repo| !repo.archived).count()
}

use super::*;

impl TuiApp {
    /// Returns `true` when the app should exit.
    pub(in crate::tui) fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(true);
        }
        match self.view {
            View::Gate => self.handle_gate(key),
            View::Browser if self.search_active => self.handle_search(key),
            View::Browser => self.handle_browser(key),
            View::ArchiveConfirm => self.handle_archive_confirm(key),
        }
    }
}

use super::*;

impl TuiApp {
    pub(in crate::tui) fn handle_browser(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        let command = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = clamp_index(self.cursor + 1, self.browser.rows().len());
                None
            }
            KeyCode::Char(' ') => {
                if let Some(id) = self.cursor_repo().map(|repo| repo.id) {
                    self.browser.toggle(id);
                }
                None
            }
            KeyCode::Char('a') => {
                let checked = self.browser.select_all_state() != SelectAllState::Checked;
                self.browser.toggle_all(checked);
                None
            }
            KeyCode::Char('/') => {
                self.search_active = true;
                None
            }
            KeyCode::Char('c') => self.browser.clear_search(),
            KeyCode::Right | KeyCode::PageDown => self.browser.next_page(),
            KeyCode::Left | KeyCode::PageUp => self.browser.prev_page(),
            KeyCode::Char('p') => {
                let next = next_page_size(self.browser.rows_per_page());
                self.browser.set_rows_per_page(next)
            }
            KeyCode::Char('r') => self.browser.refresh(),
            KeyCode::Char('x') => {
                if self.browser.can_archive() {
                    self.view = View::ArchiveConfirm;
                }
                None
            }
            KeyCode::Char('l') => {
                info!("Logging out");
                self.logout(false);
                None
            }
            _ => None,
        };
        if let Some(command) = command {
            self.cursor = 0;
            self.scroll = 0;
            self.run_command(command);
        }
        Ok(false)
    }

    pub(in crate::tui) fn handle_search(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        match key.code {
            KeyCode::Esc => self.search_active = false,
            KeyCode::Enter => {
                self.search_active = false;
                if let Some(command) = self.browser.submit_search() {
                    self.cursor = 0;
                    self.scroll = 0;
                    self.run_command(command);
                }
            }
            KeyCode::Backspace => self.browser.pop_search(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.browser.push_search(ch)
            }
            _ => {}
        }
        Ok(false)
    }

    pub(in crate::tui) fn handle_archive_confirm(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                self.view = View::Browser;
                if let Some(command) = self.browser.start_archive() {
                    self.run_command(command);
                }
            }
            KeyCode::Char('n') | KeyCode::Esc => self.view = View::Browser,
            _ => {}
        }
        Ok(false)
    }
}

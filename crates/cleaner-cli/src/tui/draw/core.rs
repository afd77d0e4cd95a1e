use super::*;

impl TuiApp {
    pub(in crate::tui) fn draw(&mut self, frame: &mut ratatui::Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(LOG_PANEL_HEIGHT),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let header = Paragraph::new(self.header_text())
            .block(Block::default().borders(Borders::ALL).title("Repository Cleaner"));
        frame.render_widget(header, layout[0]);

        match self.view {
            View::Gate => self.draw_gate(frame, layout[1]),
            View::Browser => self.draw_browser(frame, layout[1]),
            View::ArchiveConfirm => {
                self.draw_browser(frame, layout[1]);
                self.draw_archive_confirm(frame, layout[1]);
            }
        }

        self.draw_log_panel(frame, layout[2]);

        let footer = Paragraph::new(self.footer_text())
            .block(Block::default().borders(Borders::ALL).title("Help"));
        frame.render_widget(footer, layout[3]);
    }

    pub(in crate::tui) fn header_text(&self) -> String {
        let api = self.client.base_url().as_str().trim_end_matches('/');
        if self.shell.is_authenticated() {
            format!("API: {api} | signed in")
        } else {
            format!("API: {api}")
        }
    }

    pub(in crate::tui) fn footer_text(&self) -> String {
        match self.view {
            View::Gate => "Type token | Enter: validate | Esc: quit".to_string(),
            View::Browser if self.search_active => {
                "Type search | Enter: apply | Esc: stop editing".to_string()
            }
            View::Browser => {
                "Up/Down: move | Space: select | a: all | /: search | c: clear | Left/Right: page | p: page size | r: refresh | x: archive | l: logout | q: quit"
                    .to_string()
            }
            View::ArchiveConfirm => "y/Enter: archive | n/Esc: cancel".to_string(),
        }
    }

    pub(in crate::tui) fn draw_log_panel(&self, frame: &mut ratatui::Frame, area: Rect) {
        let max_lines = area.height.saturating_sub(LOG_PANEL_BORDER_HEIGHT) as usize;
        if max_lines == 0 {
            return;
        }
        let mut lines = vec![Line::from(Span::styled(
            "time     level target message",
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        if self.log_buffer.is_empty() {
            lines.push(Line::from(Span::raw("No log messages yet.")));
        } else if max_lines > LOG_HEADER_LINES {
            let entries = self.log_buffer.latest(max_lines - LOG_HEADER_LINES);
            for entry in entries {
                lines.push(Line::from(Span::raw(entry.format_compact())));
            }
        }
        let widget = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Logs"));
        frame.render_widget(widget, area);
    }
}

use super::*;

impl TuiApp {
    pub(in crate::tui) fn draw_browser(&mut self, frame: &mut ratatui::Frame, area: Rect) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        self.draw_toolbar(frame, layout[0]);
        self.draw_repo_table(frame, layout[1]);

        let status = match self.browser.error() {
            Some(error) => Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(Color::Red),
            )),
            None => Line::from(Span::raw(format!(
                "{} | page {}/{}",
                self.browser.range_label(),
                self.browser.page() + 1,
                self.browser.total_pages().max(1)
            ))),
        };
        frame.render_widget(Paragraph::new(status), layout[2]);
    }

    fn draw_toolbar(&self, frame: &mut ratatui::Frame, area: Rect) {
        let caret = if self.search_active { "_" } else { "" };
        let mut spans = vec![Span::raw(format!(
            "Search: {}{caret}",
            self.browser.search_text()
        ))];
        if !self.browser.committed_search().is_empty() {
            spans.push(Span::styled(
                format!("  (showing \"{}\")", self.browser.committed_search()),
                Style::default().fg(Color::DarkGray),
            ));
        }
        spans.push(Span::raw(format!(
            "  | selected: {} | rows per page: {}",
            self.browser.selection().len(),
            self.browser.rows_per_page()
        )));
        let border_style = if self.search_active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let widget = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Filter"),
        );
        frame.render_widget(widget, area);
    }

    fn draw_repo_table(&mut self, frame: &mut ratatui::Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2) as usize;
        let name_width = name_column_width(inner_width);
        let marker = select_all_marker(self.browser.select_all_state());
        let mut items = vec![ListItem::new(Line::from(Span::styled(
            format_repo_header(marker, name_width),
            Style::default().add_modifier(Modifier::BOLD),
        )))];

        let placeholders = self.browser.placeholder_rows();
        if placeholders > 0 {
            for _ in 0..placeholders {
                items.push(ListItem::new(Line::from(Span::styled(
                    skeleton_row(inner_width),
                    Style::default().fg(Color::DarkGray),
                ))));
            }
        } else if self.browser.shows_empty_notice() {
            items.push(ListItem::new(Line::from(Span::styled(
                cleaner_core::browser::EMPTY_NOTICE,
                Style::default().add_modifier(Modifier::ITALIC),
            ))));
        } else {
            let len = self.browser.rows().len();
            self.cursor = clamp_index(self.cursor, len);
            let description = self
                .cursor_repo()
                .and_then(|repo| description_line(repo, inner_width));
            // borders, the header line and the cursor's description line
            let reserved = if description.is_some() { 4 } else { 3 };
            let body_height = area.height.saturating_sub(reserved) as usize;
            self.scroll = adjust_scroll(self.cursor, self.scroll, body_height, len);
            for (index, repo) in self
                .browser
                .rows()
                .iter()
                .enumerate()
                .skip(self.scroll)
                .take(body_height)
            {
                let selected = self.browser.selection().contains(repo.id);
                let mut style = if repo.archived {
                    Style::default().fg(Color::DarkGray)
                } else if selected {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                };
                if index == self.cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                items.push(ListItem::new(Line::from(Span::styled(
                    format_repo_row(repo, selected, name_width),
                    style,
                ))));
                if index == self.cursor
                    && let Some(line) = description.as_deref()
                {
                    items.push(ListItem::new(Line::from(Span::styled(
                        line.to_string(),
                        Style::default().fg(Color::DarkGray),
                    ))));
                }
            }
        }

        let title = if self.browser.is_archiving() {
            "Repositories (archiving...)"
        } else if self.browser.is_refreshing() {
            "Repositories (refreshing...)"
        } else {
            "Repositories"
        };
        let widget = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(widget, area);
    }

    pub(in crate::tui) fn draw_archive_confirm(&self, frame: &mut ratatui::Frame, area: Rect) {
        let selected: Vec<&Repository> = self
            .browser
            .rows()
            .iter()
            .filter(|repo| self.browser.selection().contains(repo.id))
            .collect();
        let mut lines = vec![
            Line::from(Span::styled(
                format!("Archive {} selected repositories?", selected.len()),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for repo in selected.iter().take(8) {
            lines.push(Line::from(Span::raw(format!("  {}", repo.full_name))));
            if let Some(line) = description_line(repo, 56) {
                lines.push(Line::from(Span::styled(
                    line,
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
        if selected.len() > 8 {
            lines.push(Line::from(Span::raw(format!(
                "  ... and {} more",
                selected.len() - 8
            ))));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::raw("y: archive | n: cancel")));

        let popup = centered_rect(60, lines.len() as u16 + 2, area);
        frame.render_widget(Clear, popup);
        let widget = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Confirm archive"));
        frame.render_widget(widget, popup);
    }
}

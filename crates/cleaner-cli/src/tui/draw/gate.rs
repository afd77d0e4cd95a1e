use super::*;

impl TuiApp {
    pub(in crate::tui) fn draw_gate(&self, frame: &mut ratatui::Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled(
                "Enter your GitHub personal access token",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::raw(
                "The token needs the repo scope. It is kept in memory for this session only.",
            )),
            Line::from(""),
            Line::from(Span::raw(format!("> Token: {}", self.gate.masked()))),
            Line::from(""),
        ];
        match self.gate.status() {
            GateStatus::Submitting => {
                lines.push(Line::from(Span::styled(
                    "Validating token...",
                    Style::default().fg(Color::Cyan),
                )));
            }
            GateStatus::Idle | GateStatus::Authenticated => {
                if let Some(message) = self.gate.message() {
                    lines.push(Line::from(Span::styled(
                        message.text.clone(),
                        severity_style(message.severity),
                    )));
                } else if !self.gate.can_submit() {
                    lines.push(Line::from(Span::styled(
                        "Validate is disabled until a token is entered.",
                        Style::default().fg(Color::DarkGray),
                    )));
                }
            }
        }
        let widget = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Sign in"));
        frame.render_widget(widget, area);
    }
}

fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Warning => Style::default().fg(Color::Yellow),
        Severity::Error => Style::default().fg(Color::Red),
    }
}

use super::*;

impl TuiApp {
    pub(in crate::tui) fn handle_gate(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        match key.code {
            KeyCode::Esc => return Ok(true),
            KeyCode::Enter => self.start_validation(),
            KeyCode::Backspace => self.gate.pop(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.gate.push(ch)
            }
            _ => {}
        }
        Ok(false)
    }
}

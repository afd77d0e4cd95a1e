use super::*;

impl TuiApp {
    pub(in crate::tui) fn poll_job_events(&mut self) {
        while let Ok(event) = self.job_rx.try_recv() {
            self.apply_job_event(event);
        }
    }

    pub(in crate::tui) fn apply_job_event(&mut self, event: JobEvent) {
        let current = self.session().epoch();
        if event.epoch() != current {
            debug!(
                event_epoch = event.epoch(),
                current, "Discarding result from an ended session"
            );
            return;
        }
        match event {
            JobEvent::Validated { result, .. } => {
                if let Some(token) = self.gate.apply_validation(result) {
                    self.login(&token);
                }
            }
            JobEvent::Listed { seq, result, .. } => {
                let command = self.browser.apply_fetch(seq, result);
                self.cursor = clamp_index(self.cursor, self.browser.rows().len());
                if let Some(command) = command {
                    self.run_command(command);
                }
            }
            JobEvent::Archived { result, .. } => {
                if let Some(command) = self.browser.apply_archive(result) {
                    self.run_command(command);
                }
            }
        }
    }
}

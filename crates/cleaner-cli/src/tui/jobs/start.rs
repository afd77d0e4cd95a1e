use super::*;

impl TuiApp {
    pub(in crate::tui) fn start_validation(&mut self) {
        let Some(token) = self.gate.submit() else {
            return;
        };
        info!("Validating token");
        let client = self.client.clone();
        let tx = self.job_tx.clone();
        let epoch = self.session().epoch();
        self.runtime.spawn(async move {
            let result = client
                .validate_token(&token)
                .await
                .map_err(|err| err.to_string());
            let _ = tx.send(JobEvent::Validated { epoch, result });
        });
    }

    /// Executes a browser command: network work goes to the job runtime.
    pub(in crate::tui) fn run_command(&mut self, command: Command) {
        let epoch = self.session().epoch();
        match command {
            Command::Fetch(request) => {
                let client = self.client.clone();
                let tx = self.job_tx.clone();
                self.runtime.spawn(async move {
                    let result = client
                        .get_repositories(&request.query)
                        .await
                        .map_err(RequestFailure::from);
                    let _ = tx.send(JobEvent::Listed {
                        epoch,
                        seq: request.seq,
                        result,
                    });
                });
            }
            Command::Archive(ids) => {
                let client = self.client.clone();
                let tx = self.job_tx.clone();
                self.runtime.spawn(async move {
                    let result = client
                        .archive_repositories(&ids)
                        .await
                        .map_err(RequestFailure::from);
                    let _ = tx.send(JobEvent::Archived { epoch, result });
                });
            }
            Command::Logout => {
                warn!("Session rejected by backend; returning to token entry");
                self.logout(true);
            }
        }
    }
}

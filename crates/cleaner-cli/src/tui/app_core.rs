use super::*;

impl TuiApp {
    pub(super) fn new(
        config: AppConfig,
        client: ApiClient,
        log_buffer: LogBuffer,
    ) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("repo-cleaner-jobs")
            .enable_all()
            .build()
            .context("create job runtime")?;
        let shell = AppShell::new(client.session().clone());
        let browser = Self::fresh_browser(&config);
        let (job_tx, job_rx) = mpsc::channel();
        Ok(Self {
            config,
            shell,
            client,
            runtime,
            view: View::Gate,
            gate: TokenGate::new(),
            browser,
            cursor: 0,
            scroll: 0,
            search_active: false,
            log_buffer,
            job_tx,
            job_rx,
        })
    }

    fn fresh_browser(config: &AppConfig) -> RepositoryBrowser {
        RepositoryBrowser::new(config.per_page).with_sort(config.sort, config.order)
    }

    pub(in crate::tui) fn session(&self) -> &Session {
        self.shell.session()
    }

    /// Switches to the browser and loads the first page.
    pub(in crate::tui) fn login(&mut self, token: &str) {
        self.shell.on_token_validated(token);
        self.reset_browser();
        self.view = View::Browser;
        let request = self.browser.start_fetch();
        self.run_command(Command::Fetch(request));
    }

    /// Returns to the gate. `expired` marks a logout forced by a rejected token.
    pub(in crate::tui) fn logout(&mut self, expired: bool) {
        self.shell.on_logout();
        self.reset_browser();
        self.gate = TokenGate::new();
        if expired {
            self.gate.expire_session();
        }
        self.view = View::Gate;
    }

    fn reset_browser(&mut self) {
        self.browser = Self::fresh_browser(&self.config);
        self.cursor = 0;
        self.scroll = 0;
        self.search_active = false;
    }

    pub(in crate::tui) fn cursor_repo(&self) -> Option<&Repository> {
        self.browser.rows().get(self.cursor)
    }
}

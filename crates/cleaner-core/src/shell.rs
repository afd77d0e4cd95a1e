use crate::session::Session;
use tracing::info;

/// Switches between the token gate and the repository browser.
#[derive(Clone, Debug)]
pub struct AppShell {
    session: Session,
}

impl AppShell {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn on_token_validated(&self, token: &str) {
        self.session.login(token);
        info!("Session started");
    }

    pub fn on_logout(&self) {
        self.session.logout();
        info!("Session ended");
    }
}

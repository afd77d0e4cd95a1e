use crate::model::TokenValidation;
use std::fmt;
use tracing::{info, warn};

pub const INVALID_TOKEN_MESSAGE: &str = "Invalid token. Please check and try again.";
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please enter your token again.";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GateStatus {
    Idle,
    Submitting,
    Authenticated,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GateMessage {
    pub text: String,
    pub severity: Severity,
}

impl GateMessage {
    fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        // Display hint only: server-side problems get the softer treatment.
        let severity = if text.contains("server") {
            Severity::Warning
        } else {
            Severity::Error
        };
        Self { text, severity }
    }
}

/// Token entry form. The token lives here and in the session only.
#[derive(Clone)]
pub struct TokenGate {
    token: String,
    status: GateStatus,
    message: Option<GateMessage>,
}

impl Default for TokenGate {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenGate {
    pub fn new() -> Self {
        Self {
            token: String::new(),
            status: GateStatus::Idle,
            message: None,
        }
    }

    pub fn status(&self) -> GateStatus {
        self.status
    }

    pub fn message(&self) -> Option<&GateMessage> {
        self.message.as_ref()
    }

    pub fn masked(&self) -> String {
        "*".repeat(self.token.chars().count())
    }

    pub fn push(&mut self, ch: char) {
        if self.status == GateStatus::Idle {
            self.token.push(ch);
        }
    }

    pub fn pop(&mut self) {
        if self.status == GateStatus::Idle {
            self.token.pop();
        }
    }

    pub fn can_submit(&self) -> bool {
        self.status == GateStatus::Idle && !self.token.trim().is_empty()
    }

    /// Returns the token to validate, or `None` when submission is disabled.
    pub fn submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.status = GateStatus::Submitting;
        self.message = None;
        Some(self.token.trim().to_string())
    }

    /// Consumes a validation result. Returns the token once it is accepted.
    pub fn apply_validation(&mut self, result: Result<TokenValidation, String>) -> Option<String> {
        if self.status != GateStatus::Submitting {
            return None;
        }
        self.status = GateStatus::Idle;
        match result {
            Ok(validation) if validation.valid => {
                info!(username = ?validation.username, "Token accepted");
                self.status = GateStatus::Authenticated;
                Some(self.token.trim().to_string())
            }
            Ok(_) => {
                warn!("Token rejected");
                self.message = Some(GateMessage::new(INVALID_TOKEN_MESSAGE));
                None
            }
            Err(message) => {
                warn!(error = %message, "Token validation failed");
                self.message = Some(GateMessage::new(message));
                None
            }
        }
    }

    pub fn expire_session(&mut self) {
        self.token.clear();
        self.status = GateStatus::Idle;
        self.message = Some(GateMessage::new(SESSION_EXPIRED_MESSAGE));
    }
}

impl fmt::Debug for TokenGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenGate")
            .field("token", &self.masked())
            .field("status", &self.status)
            .field("message", &self.message)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate_with(token: &str) -> TokenGate {
        let mut gate = TokenGate::new();
        for ch in token.chars() {
            gate.push(ch);
        }
        gate
    }

    #[test]
    fn empty_token_cannot_submit() {
        let mut gate = gate_with("   ");
        assert!(!gate.can_submit());
        assert_eq!(gate.submit(), None);
        assert_eq!(gate.status(), GateStatus::Idle);
    }

    #[test]
    fn valid_token_authenticates() {
        let mut gate = gate_with("ghp_abc");
        assert_eq!(gate.submit().as_deref(), Some("ghp_abc"));
        assert_eq!(gate.status(), GateStatus::Submitting);
        let accepted = gate.apply_validation(Ok(TokenValidation {
            valid: true,
            username: Some("me".to_string()),
        }));
        assert_eq!(accepted.as_deref(), Some("ghp_abc"));
        assert_eq!(gate.status(), GateStatus::Authenticated);
    }

    #[test]
    fn rejected_token_shows_fixed_message() {
        let mut gate = gate_with("bad");
        gate.submit();
        assert_eq!(gate.apply_validation(Ok(TokenValidation::invalid())), None);
        assert_eq!(gate.status(), GateStatus::Idle);
        let message = gate.message().unwrap();
        assert_eq!(message.text, INVALID_TOKEN_MESSAGE);
        assert_eq!(message.severity, Severity::Error);
    }

    #[test]
    fn error_message_is_shown_verbatim_with_severity_hint() {
        let mut gate = gate_with("tok");
        gate.submit();
        let text = "Unable to connect to server. Please check if the server is running.";
        gate.apply_validation(Err(text.to_string()));
        let message = gate.message().unwrap();
        assert_eq!(message.text, text);
        assert_eq!(message.severity, Severity::Warning);

        gate.submit();
        gate.apply_validation(Err("An unexpected error occurred".to_string()));
        assert_eq!(gate.message().unwrap().severity, Severity::Error);
    }

    #[test]
    fn editing_is_locked_while_submitting() {
        let mut gate = gate_with("ab");
        gate.submit();
        gate.push('c');
        gate.pop();
        assert_eq!(gate.masked(), "**");
    }

    #[test]
    fn debug_masks_token() {
        let gate = gate_with("ghp_secret");
        assert!(!format!("{gate:?}").contains("ghp_secret"));
    }
}

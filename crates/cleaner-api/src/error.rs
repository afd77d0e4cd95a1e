use cleaner_core::model::RequestFailure;
use reqwest::StatusCode;
use thiserror::Error;

pub const UNKNOWN_SERVER_ERROR: &str = "An unknown error occurred";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unable to connect to server. Please check if the server is running.")]
    Connectivity(#[source] reqwest::Error),
    #[error("Server error: {0}")]
    Server(String),
    #[error("request was not authorized")]
    Unauthorized,
    #[error("request failed with status {status}")]
    Status {
        status: StatusCode,
        detail: Option<String>,
    },
    #[error("decode response")]
    Decode(#[source] reqwest::Error),
    #[error("invalid API URL")]
    InvalidUrl(#[from] url::ParseError),
    #[error("An unexpected error occurred")]
    Unexpected(String),
}

impl ApiError {
    /// Classifies a failure that happened before any response arrived.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() || err.is_request() {
            ApiError::Connectivity(err)
        } else {
            ApiError::Unexpected(err.to_string())
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<ApiError> for RequestFailure {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized => RequestFailure::Unauthorized,
            ApiError::Status {
                status,
                detail: Some(detail),
            } => RequestFailure::Other(format!("status {status}: {detail}")),
            other => RequestFailure::Other(format!("{other:#}")),
        }
    }
}

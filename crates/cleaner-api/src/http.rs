use crate::error::ApiError;
use reqwest::StatusCode;
use reqwest::{RequestBuilder, Response};
use serde_json::Value;
use tracing::debug;

/// Sends once and turns non-2xx responses into errors. No retries.
pub(crate) async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let response = builder.send().await.map_err(ApiError::from_transport)?;
    ensure_success(response).await
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::UNAUTHORIZED {
        debug!(url = %response.url(), "Request rejected as unauthorized");
        return Err(ApiError::Unauthorized);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status,
        detail: detail_from_body(&body),
    })
}

/// Extracts the `detail` field of a JSON error body.
pub(crate) fn detail_from_body(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::Null => None,
        Value::String(detail) if detail.trim().is_empty() => None,
        Value::String(detail) => Some(detail.clone()),
        other => Some(other.to_string()),
    }
}

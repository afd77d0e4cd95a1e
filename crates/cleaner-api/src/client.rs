use crate::error::{ApiError, UNKNOWN_SERVER_ERROR};
use crate::http::send;
use anyhow::Context;
use cleaner_core::model::{
    ArchiveOutcome, ArchiveRequest, ListQuery, RepoId, RepositoryPage, TokenValidation,
};
use cleaner_core::session::Session;
use reqwest::{Client, RequestBuilder};
use tracing::{debug, info, warn};
use url::Url;

const USER_AGENT: &str = concat!("repo-cleaner/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the repository-cleaner backend.
///
/// The bearer token is read from the shared [`Session`] every time a request
/// is built, so clearing the session affects every later request.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    session: Session,
}

impl ApiClient {
    pub fn new(base_url: &str, session: Session) -> anyhow::Result<Self> {
        let base_url = normalize_base(base_url).context("parse API base URL")?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("build HTTP client")?;
        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn set_auth_token(&self, token: &str) {
        self.session.set_token(token);
    }

    pub fn clear_auth_token(&self) {
        self.session.clear_token();
    }

    /// Checks a token with the backend. A 401 is an ordinary `valid: false`.
    /// The token stays set only when the backend accepts it.
    pub async fn validate_token(&self, token: &str) -> Result<TokenValidation, ApiError> {
        self.set_auth_token(token);
        let outcome = match self.request_validation().await {
            Ok(validation) => Ok(validation),
            Err(ApiError::Unauthorized) => Ok(TokenValidation::invalid()),
            Err(ApiError::Status { status, detail }) => {
                warn!(status = %status, "Token validation returned an error status");
                Err(ApiError::Server(
                    detail.unwrap_or_else(|| UNKNOWN_SERVER_ERROR.to_string()),
                ))
            }
            Err(ApiError::Decode(err)) => Err(ApiError::Unexpected(err.to_string())),
            Err(err) => Err(err),
        };
        match &outcome {
            Ok(validation) if validation.valid => {
                info!(username = ?validation.username, "Token validated");
            }
            Ok(_) => {
                info!("Token rejected by backend");
                self.clear_auth_token();
            }
            Err(err) => {
                warn!(error = %err, "Token validation failed");
                self.clear_auth_token();
            }
        }
        outcome
    }

    async fn request_validation(&self) -> Result<TokenValidation, ApiError> {
        let url = self.endpoint("validate-token")?;
        debug!(url = %url, "POST validate-token");
        let response = send(self.authorized(self.http.post(url))).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    pub async fn get_repositories(&self, query: &ListQuery) -> Result<RepositoryPage, ApiError> {
        let url = self.repositories_url(query)?;
        debug!(url = %url, "GET repositories");
        let response = send(self.authorized(self.http.get(url))).await?;
        let page: RepositoryPage = response.json().await.map_err(ApiError::Decode)?;
        debug!(
            count = page.repositories.len(),
            total = page.total_count,
            "Repositories received"
        );
        Ok(page)
    }

    pub async fn archive_repositories(&self, ids: &[RepoId]) -> Result<ArchiveOutcome, ApiError> {
        let url = self.endpoint("archive")?;
        let body = ArchiveRequest {
            repository_ids: ids.to_vec(),
        };
        debug!(url = %url, count = ids.len(), "POST archive");
        let response = send(self.authorized(self.http.post(url).json(&body))).await?;
        let outcome: ArchiveOutcome = response.json().await.map_err(ApiError::Decode)?;
        info!(
            success = outcome.success,
            archived = outcome.archived_count,
            failed = outcome.failed_repositories.len(),
            "Archive response received"
        );
        Ok(outcome)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }

    fn repositories_url(&self, query: &ListQuery) -> Result<Url, ApiError> {
        let mut url = self.endpoint("repositories")?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.query_pairs() {
                pairs.append_pair(key, &value);
            }
        }
        Ok(url)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.bearer() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

/// Ensures the base path ends with `/` so endpoints resolve beneath it.
fn normalize_base(raw: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(raw.trim())?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

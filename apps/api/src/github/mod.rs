//! GitHub REST client: profile, repository list, and per-repository languages.
//!
//! All calls are read-only. A bearer token is optional; it only raises the
//! rate limit.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::{header, Client, StatusCode, Url};
use thiserror::Error;

pub mod aggregator;
pub mod handlers;
pub mod types;

use types::{GithubRepo, Profile};

/// Topics are only included in repository payloads under this media type.
const ACCEPT_TOPICS: &str = "application/vnd.github.mercy-preview+json";
const USER_AGENT: &str = "careerlens/0.1";
/// Single page; no further pagination.
pub const REPOS_PER_PAGE: u32 = 100;

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("GitHub user '{0}' not found")]
    NotFound(String),

    #[error("GitHub API rate limit exceeded")]
    RateLimited,

    #[error("GitHub API error (status {status})")]
    Upstream { status: u16 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid GitHub URL: {0}")]
    InvalidUrl(String),
}

#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl GithubClient {
    /// Builds a client against `base_url` (the public API in production, a
    /// mock server in tests).
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, GithubError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()?;

        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| GithubError::InvalidUrl(format!("{base_url}: {e}")))?;

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// `GET /users/{handle}`. 404 → `NotFound`, 403/429 → `RateLimited`.
    pub async fn fetch_profile(&self, handle: &str) -> Result<Profile, GithubError> {
        let url = self.endpoint(&["users", handle])?;
        let response = self.get(url).send().await?;

        match response.status() {
            s if s.is_success() => Ok(response.json::<Profile>().await?),
            StatusCode::NOT_FOUND => Err(GithubError::NotFound(handle.to_string())),
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => Err(GithubError::RateLimited),
            s => {
                let body = response.text().await.unwrap_or_default();
                tracing::error!(handle, status = s.as_u16(), body = %body, "GitHub profile fetch failed");
                Err(GithubError::Upstream { status: s.as_u16() })
            }
        }
    }

    /// `GET /users/{handle}/repos?per_page=100`. Any non-2xx is `Upstream`.
    pub async fn list_repositories(&self, handle: &str) -> Result<Vec<GithubRepo>, GithubError> {
        let mut url = self.endpoint(&["users", handle, "repos"])?;
        url.query_pairs_mut()
            .append_pair("per_page", &REPOS_PER_PAGE.to_string());

        let response = self.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GithubError::Upstream {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<Vec<GithubRepo>>().await?)
    }

    /// Fetches the `{language: bytes}` breakdown at a repository's `languages_url`.
    pub async fn fetch_languages(
        &self,
        languages_url: &str,
    ) -> Result<BTreeMap<String, u64>, GithubError> {
        let url = Url::parse(languages_url)
            .map_err(|e| GithubError::InvalidUrl(format!("{languages_url}: {e}")))?;

        let response = self.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GithubError::Upstream {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<BTreeMap<String, u64>>().await?)
    }

    fn get(&self, url: Url) -> reqwest::RequestBuilder {
        let request = self.client.get(url).header(header::ACCEPT, ACCEPT_TOPICS);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, GithubError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GithubError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

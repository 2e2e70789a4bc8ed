//! HTTP client wrapper - authenticated typed GETs against the portal API

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::Config;
use crate::constants::REQUEST_TIMEOUT_SECS;
use crate::messages::{FetchKind, Payload};
use crate::models::{Book, DashboardSnapshot, IssuedBook, Subject, User};

/// Why a fetch failed. Only ever logged; the screens keep their prior data.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("server returned HTTP {0}")]
    Http(u16),
    #[error("response body did not match the expected shape: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("request timed out")]
    Timeout,
    #[error("connection failed: {0}")]
    Connect(#[source] reqwest::Error),
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
}

fn classify(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else if e.is_connect() {
        FetchError::Connect(e)
    } else {
        FetchError::Transport(e)
    }
}

/// Client for the student-portal backend. Cheap to clone; the inner reqwest
/// client is shared.
#[derive(Clone)]
pub struct PortalClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl PortalClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(PortalClient {
            http,
            base_url: config.base_url_trimmed().to_string(),
            token: config.token.clone(),
        })
    }

    async fn get_json<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.get(&url).bearer_auth(&self.token);
        if let Some(q) = query {
            request = request.query(q);
        }

        let response = request.send().await.map_err(classify)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http(status.as_u16()));
        }

        let body = response.text().await.map_err(classify)?;
        serde_json::from_str(&body).map_err(FetchError::Decode)
    }

    /// `GET /auth/me` - session bootstrap
    pub async fn me(&self) -> Result<User, FetchError> {
        self.get_json::<User, ()>("/auth/me", None).await
    }

    /// `GET /dashboard`
    pub async fn dashboard(&self) -> Result<DashboardSnapshot, FetchError> {
        self.get_json::<DashboardSnapshot, ()>("/dashboard", None).await
    }

    /// `GET /subjects`
    pub async fn subjects(&self) -> Result<Vec<Subject>, FetchError> {
        self.get_json::<Vec<Subject>, ()>("/subjects", None).await
    }

    /// `GET /library/books?query=<q>`
    pub async fn search_books(&self, query: &str) -> Result<Vec<Book>, FetchError> {
        self.get_json("/library/books", Some(&[("query", query)]))
            .await
    }

    /// `GET /library/issued`
    pub async fn issued_books(&self) -> Result<Vec<IssuedBook>, FetchError> {
        self.get_json::<Vec<IssuedBook>, ()>("/library/issued", None)
            .await
    }

    /// Dispatch a fetch command to its endpoint, tagging the decoded body
    pub async fn fetch(&self, kind: &FetchKind) -> Result<Payload, FetchError> {
        match kind {
            FetchKind::Dashboard => self.dashboard().await.map(Payload::Dashboard),
            FetchKind::Subjects => self.subjects().await.map(Payload::Subjects),
            FetchKind::BookSearch { query } => {
                self.search_books(query).await.map(Payload::Books)
            }
            FetchKind::IssuedBooks => self.issued_books().await.map(Payload::IssuedBooks),
        }
    }
}

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::errors::AppError;

static REPO_URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"github\.com/([^/]+)/([^/?#]+)").expect("valid repo URL pattern"));

/// Extracts `{owner, repo}` from a GitHub repository URL. A URL that does not
/// match the host pattern is a field-level error on `repo_url`, never a
/// silent no-op.
pub fn parse_repo_url(url: &str) -> Result<(String, String), AppError> {
    let captures = REPO_URL_PATTERN
        .captures(url)
        .ok_or_else(|| AppError::field("repo_url", "Must be a GitHub repository URL"))?;

    let owner = captures[1].to_string();
    let repo = captures[2].trim_end_matches(".git").to_string();

    if owner.is_empty() || repo.is_empty() {
        return Err(AppError::field("repo_url", "Must be a GitHub repository URL"));
    }

    Ok((owner, repo))
}

/// Subset of `GET /repos/{owner}/{repo}` used to pre-fill a project record.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoMetadata {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub homepage: Option<String>,
}

#[async_trait]
pub trait RepoMetadataClient: Send + Sync {
    async fn fetch_repo(&self, owner: &str, repo: &str) -> Result<RepoMetadata, AppError>;
}

#[derive(Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
}

impl GithubClient {
    pub fn new(base_url: String) -> Self {
        // GitHub rejects requests without a User-Agent.
        let http = reqwest::Client::builder()
            .user_agent(concat!("portfolio-api/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        GithubClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RepoMetadataClient for GithubClient {
    async fn fetch_repo(&self, owner: &str, repo: &str) -> Result<RepoMetadata, AppError> {
        let url = format!("{}/repos/{}/{}", self.base_url, owner, repo);

        let response = self.http
            .get(&url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Repository lookup failed for {}/{}: {}", owner, repo, e);
                AppError::from(e)
            })?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                Err(AppError::NotFound(format!("Repository {}/{} not found", owner, repo)))
            }
            status if !status.is_success() => {
                tracing::warn!("GitHub returned {} for {}/{}", status, owner, repo);
                Err(AppError::ExternalService(format!(
                    "Repository metadata request failed with status {}", status
                )))
            }
            _ => Ok(response.json::<RepoMetadata>().await?),
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub tech_stack: Vec<String>,
    pub demo_url: Option<String>,
    pub github_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, PartialEq)]
pub struct ProjectInsert {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub tech_stack: Vec<String>,
    pub demo_url: Option<String>,
    pub github_url: String,
    pub created_at: DateTime<Utc>,
}

/// Admin input for the repository-lookup-assisted create. Everything except
/// the repository URL is optional; lookup results fill the gaps.
#[derive(Debug, Deserialize, Validate)]
pub struct NewProjectRequest {
    #[validate(custom(function = validate_github_url))]
    pub repo_url: String,

    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    pub description: Option<String>,

    #[validate(custom(function = validate_optional_url))]
    pub demo_url: Option<String>,

    #[validate(custom(function = validate_optional_url))]
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProjectCreatedResponse {
    pub id: Uuid,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
    pub total: i64,
}

fn validate_github_url(url: &str) -> Result<(), ValidationError> {
    let parsed = Url::parse(url).map_err(|_| {
        let mut err = ValidationError::new("invalid_url");
        err.message = Some("Please enter a valid URL".into());
        err
    })?;

    let is_github = parsed
        .host_str()
        .map(|host| host == "github.com" || host.ends_with(".github.com"))
        .unwrap_or(false);

    if !is_github {
        let mut err = ValidationError::new("not_github");
        err.message = Some("Must be a GitHub repository URL".into());
        return Err(err);
    }

    Ok(())
}

fn validate_optional_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Ok(());
    }

    Url::parse(url).map_err(|_| {
        let mut err = ValidationError::new("invalid_url");
        err.message = Some("Please enter a valid URL".into());
        err
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(repo_url: &str) -> NewProjectRequest {
        NewProjectRequest {
            repo_url: repo_url.to_string(),
            description: None,
            demo_url: None,
            image_url: None,
        }
    }

    #[test]
    fn accepts_github_repository_url() {
        assert!(request("https://github.com/alice/tool").validate().is_ok());
    }

    #[test]
    fn rejects_non_github_host() {
        assert!(request("https://gitlab.com/alice/tool").validate().is_err());
    }

    #[test]
    fn rejects_malformed_url() {
        assert!(request("not a url").validate().is_err());
    }

    #[test]
    fn short_description_is_rejected() {
        let mut req = request("https://github.com/alice/tool");
        req.description = Some("too short".to_string());
        assert!(req.description.as_deref().unwrap().len() < 10);
        assert!(req.validate().is_err());
    }

    #[test]
    fn empty_demo_url_passes() {
        let mut req = request("https://github.com/alice/tool");
        req.demo_url = Some(String::new());
        assert!(req.validate().is_ok());
    }
}

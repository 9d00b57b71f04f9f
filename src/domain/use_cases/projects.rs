use chrono::Utc;
use validator::Validate;

use crate::{
    constants::{DEFAULT_PROJECT_IMAGE, NO_DESCRIPTION_FALLBACK, UNKNOWN_LANGUAGE_FALLBACK},
    entities::project::{NewProjectRequest, ProjectCreatedResponse, ProjectInsert, ProjectListResponse},
    errors::AppError,
    github::client::{parse_repo_url, RepoMetadata, RepoMetadataClient},
    repositories::project::ProjectRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct ProjectHandler<R, C>
where
    R: ProjectRepository,
    C: RepoMetadataClient,
{
    pub project_repo: R,
    pub repo_client: C,
}

impl<R, C> ProjectHandler<R, C>
where
    R: ProjectRepository,
    C: RepoMetadataClient,
{
    pub fn new(project_repo: R, repo_client: C) -> Self {
        ProjectHandler {
            project_repo,
            repo_client,
        }
    }

    /// Lists all projects, newest first
    pub async fn list_projects(&self) -> Result<ProjectListResponse, AppError> {
        let projects = self.project_repo.list_projects().await?;
        let total = self.project_repo.count_projects().await?;

        Ok(ProjectListResponse { projects, total })
    }

    /// Repository-lookup-assisted create. The insert runs only after the
    /// lookup succeeds, so a lookup failure leaves no project behind.
    pub async fn create_project(
        &self,
        request: NewProjectRequest,
    ) -> Result<ProjectCreatedResponse, AppError> {
        request.validate()?;

        let (owner, repo) = parse_repo_url(&request.repo_url)?;
        let metadata = self.repo_client.fetch_repo(&owner, &repo).await?;

        let insert = draft_from_metadata(&request, metadata);
        let id = self.project_repo.create_project(&insert).await?;

        Ok(ProjectCreatedResponse {
            id,
            message: format!("Project '{}' created", insert.title),
        })
    }

    /// Deletes a project by its ID
    pub async fn delete_project(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;

        self.project_repo.delete_project(&valid_id).await
            .map_err(|e| match e {
                AppError::NotFound(_) => AppError::NotFound("Project not found".to_string()),
                _ => e,
            })
    }
}

/// Maps repository metadata onto a project draft. An admin-supplied
/// description wins over the repository's; the demo URL falls back from
/// homepage to the admin's value to nothing.
pub fn draft_from_metadata(request: &NewProjectRequest, metadata: RepoMetadata) -> ProjectInsert {
    let description = request
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .map(str::to_string)
        .or(metadata.description)
        .unwrap_or_else(|| NO_DESCRIPTION_FALLBACK.to_string());

    let tech_stack = vec![
        metadata.language.unwrap_or_else(|| UNKNOWN_LANGUAGE_FALLBACK.to_string()),
    ];

    let demo_url = metadata
        .homepage
        .filter(|h| !h.trim().is_empty())
        .or_else(|| request.demo_url.clone().filter(|d| !d.trim().is_empty()));

    let image_url = request
        .image_url
        .clone()
        .filter(|i| !i.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PROJECT_IMAGE.to_string());

    ProjectInsert {
        title: metadata.name,
        description,
        image_url,
        tech_stack,
        demo_url,
        github_url: request.repo_url.clone(),
        created_at: Utc::now(),
    }
}

use async_trait::async_trait;
use mockall::{mock, predicate::*};
use uuid::Uuid;

use portfolio_api::{
    entities::project::{NewProjectRequest, Project, ProjectInsert},
    errors::AppError,
    github::client::RepoMetadata,
    use_cases::projects::ProjectHandler,
};

mock! {
    ProjectRepo {}

    #[async_trait]
    impl portfolio_api::repositories::project::ProjectRepository for ProjectRepo {
        async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
        async fn count_projects(&self) -> Result<i64, AppError>;
        async fn create_project(&self, project: &ProjectInsert) -> Result<Uuid, AppError>;
        async fn delete_project(&self, id: &Uuid) -> Result<(), AppError>;
    }
}

mock! {
    RepoClient {}

    #[async_trait]
    impl portfolio_api::github::client::RepoMetadataClient for RepoClient {
        async fn fetch_repo(&self, owner: &str, repo: &str) -> Result<RepoMetadata, AppError>;
    }
}

fn request() -> NewProjectRequest {
    NewProjectRequest {
        repo_url: "https://github.com/alice/tool".to_string(),
        description: Some("my project".to_string()),
        demo_url: None,
        image_url: None,
    }
}

#[tokio::test]
async fn create_maps_repo_metadata_onto_draft() {
    let mut repo = MockProjectRepo::new();
    let mut client = MockRepoClient::new();

    client
        .expect_fetch_repo()
        .with(eq("alice"), eq("tool"))
        .returning(|_, _| {
            Ok(RepoMetadata {
                name: "tool".to_string(),
                description: Some("A CLI tool".to_string()),
                language: Some("Rust".to_string()),
                homepage: Some(String::new()),
            })
        });

    repo.expect_create_project()
        .withf(|insert| {
            insert.title == "tool"
                && insert.description == "my project"
                && insert.tech_stack == vec!["Rust".to_string()]
                && insert.demo_url.is_none()
                && insert.github_url == "https://github.com/alice/tool"
        })
        .returning(|_| Ok(Uuid::new_v4()));

    let result = ProjectHandler::new(repo, client).create_project(request()).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn lookup_failure_leaves_no_project_behind() {
    let mut repo = MockProjectRepo::new();
    let mut client = MockRepoClient::new();

    client
        .expect_fetch_repo()
        .returning(|owner, name| Err(AppError::NotFound(format!("Repository {}/{} not found", owner, name))));
    repo.expect_create_project().times(0);

    let result = ProjectHandler::new(repo, client).create_project(request()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn non_github_url_fails_validation_before_lookup() {
    let mut repo = MockProjectRepo::new();
    let mut client = MockRepoClient::new();

    client.expect_fetch_repo().times(0);
    repo.expect_create_project().times(0);

    let mut req = request();
    req.repo_url = "https://gitlab.com/alice/tool".to_string();

    let result = ProjectHandler::new(repo, client).create_project(req).await;

    match result {
        Err(AppError::ValidationError(fields)) => assert_eq!(fields[0].field, "repo_url"),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn short_description_fails_validation_before_lookup() {
    let mut repo = MockProjectRepo::new();
    let mut client = MockRepoClient::new();

    client.expect_fetch_repo().times(0);
    repo.expect_create_project().times(0);

    let mut req = request();
    req.description = Some("too short".to_string());

    let result = ProjectHandler::new(repo, client).create_project(req).await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn delete_missing_project_is_not_found() {
    let mut repo = MockProjectRepo::new();
    repo.expect_delete_project()
        .returning(|_| Err(AppError::NotFound("Project not found".to_string())));

    let handler = ProjectHandler::new(repo, MockRepoClient::new());
    let result = handler.delete_project(&Uuid::new_v4().to_string()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn delete_rejects_malformed_id() {
    let mut repo = MockProjectRepo::new();
    repo.expect_delete_project().times(0);

    let handler = ProjectHandler::new(repo, MockRepoClient::new());
    let result = handler.delete_project("not-a-uuid").await;

    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[tokio::test]
async fn list_reports_projects_newest_first_with_total() {
    let mut repo = MockProjectRepo::new();
    repo.expect_list_projects().returning(|| Ok(vec![]));
    repo.expect_count_projects().returning(|| Ok(0));

    let handler = ProjectHandler::new(repo, MockRepoClient::new());
    let result = handler.list_projects().await.unwrap();

    assert!(result.projects.is_empty());
    assert_eq!(result.total, 0);
}

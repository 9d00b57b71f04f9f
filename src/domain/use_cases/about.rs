use validator::Validate;

use crate::{
    entities::about::{AboutContent, UpdateAboutRequest},
    errors::AppError,
    repositories::about::AboutRepository,
};

pub struct AboutHandler<R>
where
    R: AboutRepository,
{
    pub about_repo: R,
}

impl<R> AboutHandler<R>
where
    R: AboutRepository,
{
    pub fn new(about_repo: R) -> Self {
        AboutHandler { about_repo }
    }

    /// Retrieves the singleton about content
    pub async fn get_about(&self) -> Result<AboutContent, AppError> {
        self.about_repo.get_about()
            .await?
            .ok_or_else(|| AppError::NotFound("About content not found".to_string()))
    }

    /// Commits new about content. The upsert is idempotent on content, so a
    /// duplicate in-flight save commits the same row; last writer wins.
    pub async fn save_about(&self, request: UpdateAboutRequest) -> Result<AboutContent, AppError> {
        request.validate()?;

        self.about_repo.upsert_about(&request.content).await
    }
}

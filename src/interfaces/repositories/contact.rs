use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::contact::ContactInsert,
    errors::AppError,
    repositories::sqlx_repo::SqlxContactRepo,
};

/// Write-only from the public form; the site exposes no read path.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create_submission(&self, submission: &ContactInsert) -> Result<Uuid, AppError>;
}

impl SqlxContactRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxContactRepo { pool }
    }
}

#[async_trait]
impl ContactRepository for SqlxContactRepo {
    async fn create_submission(&self, submission: &ContactInsert) -> Result<Uuid, AppError> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO contact_submissions (name, email, message, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(&submission.message)
        .bind(submission.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(id)
    }
}

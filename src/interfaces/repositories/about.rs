use async_trait::async_trait;

use crate::{
    entities::about::{AboutContent, ABOUT_CONTENT_ID},
    errors::AppError,
    repositories::sqlx_repo::SqlxAboutRepo,
};

#[async_trait]
pub trait AboutRepository: Send + Sync {
    /// Reads the singleton record; `None` when it has never been written.
    async fn get_about(&self) -> Result<Option<AboutContent>, AppError>;

    /// Upsert keyed by the fixed singleton id, so exactly one row ever exists.
    async fn upsert_about(&self, content: &str) -> Result<AboutContent, AppError>;
}

impl SqlxAboutRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxAboutRepo { pool }
    }
}

#[async_trait]
impl AboutRepository for SqlxAboutRepo {
    async fn get_about(&self) -> Result<Option<AboutContent>, AppError> {
        let about = sqlx::query_as::<_, AboutContent>(
            "SELECT id, content, updated_at FROM about_content WHERE id = $1"
        )
        .bind(ABOUT_CONTENT_ID)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(about)
    }

    async fn upsert_about(&self, content: &str) -> Result<AboutContent, AppError> {
        let about = sqlx::query_as::<_, AboutContent>(
            r#"
            INSERT INTO about_content (id, content, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (id) DO UPDATE
            SET content = EXCLUDED.content, updated_at = NOW()
            RETURNING id, content, updated_at
            "#,
        )
        .bind(ABOUT_CONTENT_ID)
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(about)
    }
}

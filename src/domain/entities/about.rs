use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// The about section is a singleton row; every write is an upsert on this id.
pub const ABOUT_CONTENT_ID: i32 = 1;

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct AboutContent {
    pub id: i32,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAboutRequest {
    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_content_is_rejected() {
        let request = UpdateAboutRequest { content: String::new() };
        assert!(request.validate().is_err());
    }

    #[test]
    fn non_empty_content_passes() {
        let request = UpdateAboutRequest { content: "Hello there.".to_string() };
        assert!(request.validate().is_ok());
    }
}

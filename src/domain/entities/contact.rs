use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct NewContactForm {
    #[validate(length(min = 2, max = 100, message = "Name must be at least 2 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 10, max = 2000, message = "Message must be at least 10 characters"))]
    pub message: String,
}

#[derive(Debug)]
pub struct ContactInsert {
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<NewContactForm> for ContactInsert {
    fn from(form: NewContactForm) -> Self {
        ContactInsert {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_lowercase(),
            message: form.message,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub id: Uuid,
    pub message: String,
}

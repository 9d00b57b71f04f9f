use validator::Validate;

use crate::{
    entities::contact::{ContactInsert, ContactResponse, NewContactForm},
    errors::AppError,
    repositories::contact::ContactRepository,
};

pub struct ContactHandler<R>
where
    R: ContactRepository,
{
    pub contact_repo: R,
}

impl<R> ContactHandler<R>
where
    R: ContactRepository,
{
    pub fn new(contact_repo: R) -> Self {
        ContactHandler { contact_repo }
    }

    /// Handles a submission from the public contact form. Validation failure
    /// blocks the write entirely; there is no partial submission.
    pub async fn submit(&self, form: NewContactForm) -> Result<ContactResponse, AppError> {
        form.validate()?;

        let submission = ContactInsert::from(form);
        let id = self.contact_repo.create_submission(&submission).await?;

        Ok(ContactResponse {
            id,
            message: "Your message has been received.".to_string(),
        })
    }
}

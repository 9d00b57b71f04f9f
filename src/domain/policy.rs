use crate::settings::AppConfig;

/// Decides who may mutate portfolio content. Built once at startup from
/// configuration; the email list is never compiled into logic.
#[derive(Debug, Clone)]
pub struct AdminPolicy {
    emails: Vec<String>,
}

impl AdminPolicy {
    pub fn new(emails: Vec<String>) -> Self {
        let emails = emails
            .into_iter()
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();

        AdminPolicy { emails }
    }

    /// Pure predicate: an unresolved identity is never an admin.
    pub fn is_admin(&self, email: Option<&str>) -> bool {
        match email {
            Some(email) => {
                let normalized = email.trim().to_lowercase();
                self.emails.iter().any(|e| e == &normalized)
            }
            None => false,
        }
    }
}

impl From<&AppConfig> for AdminPolicy {
    fn from(config: &AppConfig) -> Self {
        AdminPolicy::new(config.admin_list())
    }
}

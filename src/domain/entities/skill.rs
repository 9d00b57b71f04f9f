use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "skill_category", rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    DevOps,
    Other,
}

impl FromStr for SkillCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Frontend" => Ok(SkillCategory::Frontend),
            "Backend" => Ok(SkillCategory::Backend),
            "DevOps" => Ok(SkillCategory::DevOps),
            "Other" => Ok(SkillCategory::Other),
            _ => Err(format!("Unknown skill category: {}", s)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub proficiency: i16,
    pub category: SkillCategory,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct SkillInsert {
    pub name: String,
    pub proficiency: i16,
    pub category: SkillCategory,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewSkillRequest {
    #[validate(length(min = 2, max = 100, message = "Skill name must be at least 2 characters"))]
    pub name: String,

    #[validate(range(min = 0, max = 100, message = "Proficiency must be between 0 and 100"))]
    pub proficiency: i16,

    pub category: SkillCategory,
}

impl NewSkillRequest {
    pub fn prepare_for_insert(&self) -> SkillInsert {
        SkillInsert {
            name: self.name.trim().to_string(),
            proficiency: self.proficiency,
            category: self.category,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SkillCreatedResponse {
    pub id: Uuid,
    pub message: String,
}

/// Query string for the skill list. An absent or `All` category means no filter.
#[derive(Debug, Deserialize)]
pub struct SkillListQuery {
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, proficiency: i16) -> NewSkillRequest {
        NewSkillRequest {
            name: name.to_string(),
            proficiency,
            category: SkillCategory::Frontend,
        }
    }

    #[test]
    fn one_character_name_is_rejected() {
        assert!(request("R", 50).validate().is_err());
    }

    #[test]
    fn proficiency_above_100_is_rejected() {
        assert!(request("React", 101).validate().is_err());
    }

    #[test]
    fn negative_proficiency_is_rejected() {
        assert!(request("React", -1).validate().is_err());
    }

    #[test]
    fn boundary_values_pass() {
        assert!(request("React", 0).validate().is_ok());
        assert!(request("React", 100).validate().is_ok());
    }

    #[test]
    fn category_parses_from_display_name() {
        assert_eq!("DevOps".parse::<SkillCategory>(), Ok(SkillCategory::DevOps));
        assert!("Databases".parse::<SkillCategory>().is_err());
    }
}

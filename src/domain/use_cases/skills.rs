use validator::Validate;

use crate::{
    entities::skill::{NewSkillRequest, Skill, SkillCategory, SkillCreatedResponse},
    errors::AppError,
    repositories::skill::SkillRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct SkillHandler<R>
where
    R: SkillRepository,
{
    pub skill_repo: R,
}

impl<R> SkillHandler<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repo: R) -> Self {
        SkillHandler { skill_repo }
    }

    /// Lists skills, optionally narrowed to one category. `None` is the
    /// "All" view and returns the full set.
    pub async fn list_skills(&self, category: Option<SkillCategory>) -> Result<Vec<Skill>, AppError> {
        let skills = self.skill_repo.list_skills().await?;

        Ok(match category {
            Some(category) => skills
                .into_iter()
                .filter(|skill| skill.category == category)
                .collect(),
            None => skills,
        })
    }

    /// Creates a new skill entry
    pub async fn create_skill(&self, request: NewSkillRequest) -> Result<SkillCreatedResponse, AppError> {
        request.validate()?;

        let insert = request.prepare_for_insert();
        let id = self.skill_repo.create_skill(&insert).await?;

        Ok(SkillCreatedResponse {
            id,
            message: format!("Skill '{}' created", insert.name),
        })
    }

    /// Deletes a skill by its ID
    pub async fn delete_skill(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;

        self.skill_repo.delete_skill(&valid_id).await
            .map_err(|e| match e {
                AppError::NotFound(_) => AppError::NotFound("Skill not found".to_string()),
                _ => e,
            })
    }
}

/// Translates the list query's `category` value. `All` and an absent value
/// mean no filter; anything else must name a known category.
pub fn parse_category_filter(raw: Option<&str>) -> Result<Option<SkillCategory>, AppError> {
    match raw {
        None => Ok(None),
        Some("All") => Ok(None),
        Some(value) => value
            .parse::<SkillCategory>()
            .map(Some)
            .map_err(|_| AppError::field("category", "Unknown skill category")),
    }
}

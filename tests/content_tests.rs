use async_trait::async_trait;
use chrono::Utc;
use mockall::{mock, predicate::*};
use uuid::Uuid;

use portfolio_api::{
    entities::{
        about::{AboutContent, UpdateAboutRequest, ABOUT_CONTENT_ID},
        contact::{ContactInsert, NewContactForm},
        skill::{NewSkillRequest, Skill, SkillCategory, SkillInsert},
    },
    errors::AppError,
    use_cases::{about::AboutHandler, contact::ContactHandler, skills::SkillHandler},
};

mock! {
    AboutRepo {}

    #[async_trait]
    impl portfolio_api::repositories::about::AboutRepository for AboutRepo {
        async fn get_about(&self) -> Result<Option<AboutContent>, AppError>;
        async fn upsert_about(&self, content: &str) -> Result<AboutContent, AppError>;
    }
}

mock! {
    SkillRepo {}

    #[async_trait]
    impl portfolio_api::repositories::skill::SkillRepository for SkillRepo {
        async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;
        async fn create_skill(&self, skill: &SkillInsert) -> Result<Uuid, AppError>;
        async fn delete_skill(&self, id: &Uuid) -> Result<(), AppError>;
    }
}

mock! {
    ContactRepo {}

    #[async_trait]
    impl portfolio_api::repositories::contact::ContactRepository for ContactRepo {
        async fn create_submission(&self, submission: &ContactInsert) -> Result<Uuid, AppError>;
    }
}

fn skill(name: &str, category: SkillCategory) -> Skill {
    Skill {
        id: Uuid::new_v4(),
        name: name.to_string(),
        proficiency: 80,
        category,
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn about_returns_saved_content() {
    let mut repo = MockAboutRepo::new();
    repo.expect_get_about().returning(|| {
        Ok(Some(AboutContent {
            id: ABOUT_CONTENT_ID,
            content: "I build things.".to_string(),
            updated_at: Utc::now(),
        }))
    });

    let about = AboutHandler::new(repo).get_about().await.unwrap();
    assert_eq!(about.content, "I build things.");
}

#[tokio::test]
async fn about_is_not_found_before_first_save() {
    let mut repo = MockAboutRepo::new();
    repo.expect_get_about().returning(|| Ok(None));

    let result = AboutHandler::new(repo).get_about().await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn save_about_commits_the_submitted_draft() {
    let mut repo = MockAboutRepo::new();
    repo.expect_upsert_about()
        .with(eq("Updated bio."))
        .returning(|content| {
            Ok(AboutContent {
                id: ABOUT_CONTENT_ID,
                content: content.to_string(),
                updated_at: Utc::now(),
            })
        });

    let about = AboutHandler::new(repo)
        .save_about(UpdateAboutRequest { content: "Updated bio.".to_string() })
        .await
        .unwrap();

    assert_eq!(about.content, "Updated bio.");
}

#[tokio::test]
async fn empty_about_draft_never_reaches_storage() {
    let mut repo = MockAboutRepo::new();
    repo.expect_upsert_about().times(0);

    let result = AboutHandler::new(repo)
        .save_about(UpdateAboutRequest { content: String::new() })
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn category_filter_returns_only_matching_skills() {
    let mut repo = MockSkillRepo::new();
    repo.expect_list_skills().returning(|| {
        Ok(vec![
            skill("React", SkillCategory::Frontend),
            skill("Rust", SkillCategory::Backend),
            skill("Docker", SkillCategory::DevOps),
            skill("PostgreSQL", SkillCategory::Backend),
        ])
    });

    let skills = SkillHandler::new(repo)
        .list_skills(Some(SkillCategory::Backend))
        .await
        .unwrap();

    assert_eq!(skills.len(), 2);
    assert!(skills.iter().all(|s| s.category == SkillCategory::Backend));
}

#[tokio::test]
async fn no_filter_returns_every_skill() {
    let mut repo = MockSkillRepo::new();
    repo.expect_list_skills().returning(|| {
        Ok(vec![
            skill("React", SkillCategory::Frontend),
            skill("Rust", SkillCategory::Backend),
        ])
    });

    let skills = SkillHandler::new(repo).list_skills(None).await.unwrap();
    assert_eq!(skills.len(), 2);
}

#[tokio::test]
async fn create_skill_trims_name() {
    let mut repo = MockSkillRepo::new();
    repo.expect_create_skill()
        .withf(|insert| insert.name == "React" && insert.proficiency == 90)
        .returning(|_| Ok(Uuid::new_v4()));

    let result = SkillHandler::new(repo)
        .create_skill(NewSkillRequest {
            name: "  React  ".to_string(),
            proficiency: 90,
            category: SkillCategory::Frontend,
        })
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn out_of_range_proficiency_never_reaches_storage() {
    let mut repo = MockSkillRepo::new();
    repo.expect_create_skill().times(0);

    let result = SkillHandler::new(repo)
        .create_skill(NewSkillRequest {
            name: "React".to_string(),
            proficiency: 101,
            category: SkillCategory::Frontend,
        })
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn delete_missing_skill_is_not_found() {
    let mut repo = MockSkillRepo::new();
    repo.expect_delete_skill()
        .returning(|_| Err(AppError::NotFound("Skill not found".to_string())));

    let result = SkillHandler::new(repo)
        .delete_skill(&Uuid::new_v4().to_string())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn contact_submission_is_stored_and_acknowledged() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_submission()
        .withf(|s| s.name == "Alice" && s.email == "alice@example.com")
        .returning(|_| Ok(Uuid::new_v4()));

    let response = ContactHandler::new(repo)
        .submit(NewContactForm {
            name: "Alice".to_string(),
            email: "Alice@Example.com".to_string(),
            message: "I would like to work with you.".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response.message, "Your message has been received.");
}

#[tokio::test]
async fn nine_character_message_blocks_the_write() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_submission().times(0);

    let result = ContactHandler::new(repo)
        .submit(NewContactForm {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            message: "only9char".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

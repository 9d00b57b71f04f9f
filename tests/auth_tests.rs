use async_trait::async_trait;
use mockall::{mock, predicate::*};
use uuid::Uuid;

use portfolio_api::{
    auth::{jwt::JwtService, password::hash_password},
    entities::user::{LoginUser, NewUser, User, UserInsert},
    errors::{AppError, AuthError},
    policy::AdminPolicy,
    settings::{AppConfig, AppEnvironment},
    use_cases::auth::AuthHandler,
};

mock! {
    UserRepo {}

    #[async_trait]
    impl portfolio_api::repositories::user::UserRepository for UserRepo {
        async fn check_connection(&self) -> Result<(), AppError>;
        async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
        async fn get_user_by_id(&self, id: &Uuid) -> Result<Option<User>, AppError>;
        async fn create_user(&self, user: &UserInsert) -> Result<Uuid, AppError>;
    }
}

const ADMIN_EMAIL: &str = "owner@example.com";
const PASSWORD: &str = "c0rrect-H0rse-battery!";

fn test_config() -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        name: "Portfolio API Test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        worker_count: 1,
        database_url: "postgres://localhost/unused".to_string(),
        cors_allowed_origins: vec!["*".to_string()],
        admin_emails: vec![ADMIN_EMAIL.to_string()],
        github_api_base: "https://api.github.com".to_string(),
        jwt_secret: "test_jwt_secret_that_is_long_enough_for_hs512_1234567890".to_string(),
        jwt_expiration_minutes: 15,
        refresh_token_secret: "test_refresh_secret_that_is_long_enough_1234567890".to_string(),
        refresh_token_exp_days: 7,
    }
}

fn test_user(email: &str) -> User {
    let now = chrono::Utc::now();
    User {
        id: Uuid::new_v4(),
        email: email.to_string(),
        username: None,
        password_hash: hash_password(PASSWORD).unwrap(),
        is_verified: false,
        created_at: now,
        updated_at: now,
    }
}

fn handler(repo: MockUserRepo) -> AuthHandler<MockUserRepo, JwtService> {
    let config = test_config();
    AuthHandler::new(repo, JwtService::new(&config), AdminPolicy::from(&config))
}

#[tokio::test]
async fn register_creates_user_for_valid_input() {
    let mut repo = MockUserRepo::new();
    let id = Uuid::new_v4();

    repo.expect_create_user()
        .withf(|insert| insert.email == "viewer@example.com" && !insert.is_verified)
        .returning(move |_| Ok(id));

    let result = handler(repo)
        .register(NewUser {
            email: "Viewer@Example.com".to_string(),
            password: PASSWORD.to_string(),
        })
        .await
        .unwrap();

    assert_eq!(result.id, id);
}

#[tokio::test]
async fn register_rejects_weak_password_without_touching_repo() {
    let mut repo = MockUserRepo::new();
    repo.expect_create_user().times(0);

    let result = handler(repo)
        .register(NewUser {
            email: "viewer@example.com".to_string(),
            password: "password".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn register_surfaces_email_conflict() {
    let mut repo = MockUserRepo::new();
    repo.expect_create_user()
        .returning(|_| Err(AppError::Conflict("User with this email already exists".to_string())));

    let result = handler(repo)
        .register(NewUser {
            email: "viewer@example.com".to_string(),
            password: PASSWORD.to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn login_returns_tokens_for_valid_credentials() {
    let mut repo = MockUserRepo::new();
    repo.expect_get_user_by_email()
        .with(eq("viewer@example.com"))
        .returning(|email| Ok(Some(test_user(email))));

    let auth = handler(repo)
        .login(LoginUser {
            email: "viewer@example.com".to_string(),
            password: PASSWORD.to_string(),
        })
        .await
        .unwrap();

    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
    assert_eq!(auth.token_type, "Bearer");
}

#[tokio::test]
async fn login_rejects_wrong_password() {
    let mut repo = MockUserRepo::new();
    repo.expect_get_user_by_email()
        .returning(|email| Ok(Some(test_user(email))));

    let result = handler(repo)
        .login(LoginUser {
            email: "viewer@example.com".to_string(),
            password: "not-the-password".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AuthError::WrongCredentials)));
}

#[tokio::test]
async fn login_rejects_unknown_email() {
    let mut repo = MockUserRepo::new();
    repo.expect_get_user_by_email().returning(|_| Ok(None));

    let result = handler(repo)
        .login(LoginUser {
            email: "nobody@example.com".to_string(),
            password: PASSWORD.to_string(),
        })
        .await;

    assert!(matches!(result, Err(AuthError::WrongCredentials)));
}

#[tokio::test]
async fn policy_email_gets_admin_claim() {
    let mut repo = MockUserRepo::new();
    repo.expect_get_user_by_email()
        .returning(|email| Ok(Some(test_user(email))));

    let auth = handler(repo)
        .login(LoginUser {
            email: ADMIN_EMAIL.to_string(),
            password: PASSWORD.to_string(),
        })
        .await
        .unwrap();

    let jwt = JwtService::new(&test_config());
    let decoded = jwt.decode_jwt(&auth.access_token).unwrap();
    assert!(decoded.claims.admin);
    assert_eq!(decoded.claims.email, ADMIN_EMAIL);
}

#[tokio::test]
async fn other_email_gets_viewer_claim() {
    let mut repo = MockUserRepo::new();
    repo.expect_get_user_by_email()
        .returning(|email| Ok(Some(test_user(email))));

    let auth = handler(repo)
        .login(LoginUser {
            email: "viewer@example.com".to_string(),
            password: PASSWORD.to_string(),
        })
        .await
        .unwrap();

    let jwt = JwtService::new(&test_config());
    let decoded = jwt.decode_jwt(&auth.access_token).unwrap();
    assert!(!decoded.claims.admin);
}

#[tokio::test]
async fn refresh_token_round_trip_re_derives_admin_flag() {
    let user = test_user(ADMIN_EMAIL);
    let user_id = user.id;

    let mut repo = MockUserRepo::new();
    repo.expect_get_user_by_id()
        .with(eq(user_id))
        .returning(move |_| {
            let mut u = test_user(ADMIN_EMAIL);
            u.id = user_id;
            Ok(Some(u))
        });

    let config = test_config();
    let jwt = JwtService::new(&config);
    let refresh_token = jwt.create_refresh_jwt(&user.id).unwrap();

    let auth = handler(repo).refresh_token(&refresh_token).await.unwrap();

    let decoded = jwt.decode_jwt(&auth.access_token).unwrap();
    assert!(decoded.claims.admin);
}

#[tokio::test]
async fn refresh_rejects_garbage_token() {
    let repo = MockUserRepo::new();

    let result = handler(repo).refresh_token("not-a-jwt").await;

    assert!(matches!(result, Err(AuthError::InvalidToken)));
}

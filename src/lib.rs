mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, password, policy, use_cases};
pub use interfaces::{handlers, repositories, middlewares, routes};
pub use infrastructure::{auth, db, github, utils};

use auth::jwt::JwtService;
use github::client::GithubClient;
use policy::AdminPolicy;
use repositories::sqlx_repo::{SqlxAboutRepo, SqlxContactRepo, SqlxProjectRepo, SqlxSkillRepo, SqlxUserRepo};
use use_cases::{
    about::AboutHandler, auth::AuthHandler, contact::ContactHandler,
    projects::ProjectHandler, skills::SkillHandler,
};

pub type AppAuthHandler = AuthHandler<SqlxUserRepo, JwtService>;
pub type AppAboutHandler = AboutHandler<SqlxAboutRepo>;
pub type AppProjectHandler = ProjectHandler<SqlxProjectRepo, GithubClient>;
pub type AppSkillHandler = SkillHandler<SqlxSkillRepo>;
pub type AppContactHandler = ContactHandler<SqlxContactRepo>;

pub struct AppState {
    pub auth_handler: AppAuthHandler,
    pub about_handler: AppAboutHandler,
    pub project_handler: AppProjectHandler,
    pub skill_handler: AppSkillHandler,
    pub contact_handler: AppContactHandler,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let admin_policy = AdminPolicy::from(config);
        let jwt_service = JwtService::new(config);
        let github_client = GithubClient::new(config.github_api_base.clone());

        AppState {
            auth_handler: AuthHandler::new(SqlxUserRepo::new(pool.clone()), jwt_service, admin_policy),
            about_handler: AboutHandler::new(SqlxAboutRepo::new(pool.clone())),
            project_handler: ProjectHandler::new(SqlxProjectRepo::new(pool.clone()), github_client),
            skill_handler: SkillHandler::new(SqlxSkillRepo::new(pool.clone())),
            contact_handler: ContactHandler::new(SqlxContactRepo::new(pool)),
        }
    }
}

use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::skill::{NewSkillRequest, SkillListQuery},
    errors::AppError,
    use_cases::{extractors::AdminClaims, skills::parse_category_filter},
    AppState,
};

#[instrument(skip(state, query))]
pub async fn list_skills(
    state: web::Data<AppState>,
    query: web::Query<SkillListQuery>,
) -> Result<impl Responder, AppError> {
    let filter = parse_category_filter(query.category.as_deref())?;
    let skills = state.skill_handler.list_skills(filter).await?;

    Ok(HttpResponse::Ok().json(skills))
}

#[instrument(skip(_claims, state, data))]
pub async fn create_skill(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    data: web::Json<NewSkillRequest>,
) -> Result<impl Responder, AppError> {
    let response = state.skill_handler.create_skill(data.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(_claims, state))]
pub async fn delete_skill(
    _claims: AdminClaims,
    skill_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.skill_handler.delete_skill(&skill_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

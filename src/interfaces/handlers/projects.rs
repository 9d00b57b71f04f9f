use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::project::NewProjectRequest, errors::AppError, use_cases::extractors::AdminClaims, AppState};

#[instrument(skip(state))]
pub async fn list_projects(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let projects = state.project_handler.list_projects().await?;

    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(_claims, state, data))]
pub async fn create_project(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    data: web::Json<NewProjectRequest>,
) -> Result<impl Responder, AppError> {
    let response = state.project_handler.create_project(data.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(_claims, state))]
pub async fn delete_project(
    _claims: AdminClaims,
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.project_handler.delete_project(&project_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

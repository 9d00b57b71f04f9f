use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::about::UpdateAboutRequest, errors::AppError, use_cases::extractors::AdminClaims, AppState};

#[instrument(skip(state))]
pub async fn get_about(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let about = state.about_handler.get_about().await?;

    Ok(HttpResponse::Ok().json(about))
}

#[instrument(skip(_claims, state, data))]
pub async fn update_about(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    data: web::Json<UpdateAboutRequest>,
) -> Result<impl Responder, AppError> {
    let about = state.about_handler.save_about(data.into_inner()).await?;

    Ok(HttpResponse::Ok().json(about))
}

use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;
use uuid::Uuid;

use crate::{entities::skill::NewSkill, errors::AppError, AppState};

#[instrument(skip(state))]
pub async fn list_skills(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let skills = state.skill_handler.reload().await?;
    Ok(HttpResponse::Ok().json(skills))
}

/// Options for the project form's tech-stack picker, ordered by name.
#[instrument(skip(state))]
pub async fn list_skill_options(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let options = state.skill_handler.options().await?;
    Ok(HttpResponse::Ok().json(options))
}

#[instrument(skip(state, data))]
pub async fn create_skill(
    state: web::Data<AppState>,
    data: web::Json<NewSkill>,
) -> Result<impl Responder, AppError> {
    let created = state.skill_handler.create(data.into_inner()).await?;

    Ok(HttpResponse::Created().json(created))
}

#[instrument(skip(skill_id, state, data))]
pub async fn rename_skill(
    skill_id: web::Path<Uuid>,
    state: web::Data<AppState>,
    data: web::Json<NewSkill>,
) -> Result<impl Responder, AppError> {
    let skills = state
        .skill_handler
        .rename(skill_id.into_inner(), data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(skills))
}

#[instrument(skip(skill_id, state, query))]
pub async fn delete_skill(
    skill_id: web::Path<Uuid>,
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let confirmed = query.get("confirm").map_or(false, |v| v == "true");
    if !confirmed {
        return Err(AppError::InvalidInput(
            "Deleting a skill requires confirm=true".to_string(),
        ));
    }

    state.skill_handler.delete(skill_id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

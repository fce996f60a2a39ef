use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    entities::experience::{ExperienceAdminResponse, ExperienceRequest, ExperienceResponse},
    errors::AppError,
    AppState,
};

/// Public timeline: formatted periods, nulls flattened for display.
#[instrument(skip(state))]
pub async fn public_experiences(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let experiences = state.experience_handler.reload().await?;

    let mapped: Vec<ExperienceResponse> =
        experiences.iter().map(ExperienceResponse::from).collect();

    Ok(HttpResponse::Ok().json(mapped))
}

#[instrument(skip(state))]
pub async fn admin_list_experiences(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let experiences = state.experience_handler.reload().await?;

    let mapped: Vec<ExperienceAdminResponse> = experiences
        .into_iter()
        .map(ExperienceAdminResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(mapped))
}

#[instrument(skip(state, data))]
pub async fn create_experience(
    state: web::Data<AppState>,
    data: web::Json<ExperienceRequest>,
) -> Result<impl Responder, AppError> {
    let experiences = state.experience_handler.create(data.into_inner()).await?;

    Ok(HttpResponse::Created().json(experiences))
}

#[instrument(skip(experience_id, state, data))]
pub async fn update_experience(
    experience_id: web::Path<Uuid>,
    state: web::Data<AppState>,
    data: web::Json<ExperienceRequest>,
) -> Result<impl Responder, AppError> {
    let experiences = state
        .experience_handler
        .update(experience_id.into_inner(), data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(experiences))
}

#[instrument(skip(experience_id, state, query))]
pub async fn delete_experience(
    experience_id: web::Path<Uuid>,
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let confirmed = query.get("confirm").map_or(false, |v| v == "true");
    if !confirmed {
        return Err(AppError::InvalidInput(
            "Deleting an experience requires confirm=true".to_string(),
        ));
    }

    state
        .experience_handler
        .delete(experience_id.into_inner())
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

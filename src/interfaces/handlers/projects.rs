use std::collections::HashMap;

use actix_multipart::form::MultipartForm;
use actix_web::{web, Either, HttpResponse, Responder};
use futures::try_join;
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    constants::MAX_THUMBNAIL_BYTES,
    entities::project::{ProjectCardResponse, ProjectRequest, ProjectUploadForm},
    errors::AppError,
    use_cases::projects::NewThumbnail,
    utils::image::read_image_file,
    AppState,
};

/// Page of public project cards; mirrors the page-size-5 slicing the
/// public projects page performs.
#[derive(Debug, Serialize)]
struct ProjectPage {
    items: Vec<ProjectCardResponse>,
    page: u32,
    per_page: u32,
    total: usize,
    total_pages: u32,
}

#[instrument(skip(state, query))]
pub async fn public_projects(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let page = query.get("page").and_then(|v| v.parse::<u32>().ok()).unwrap_or(1).max(1);
    let per_page = query.get("per_page")
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(5)
        .clamp(1, 100);

    let projects = state.project_handler.reload().await?;

    let total = projects.len();
    let total_pages = ((total as u32).div_ceil(per_page)).max(1);
    let page = page.min(total_pages);

    let start = ((page - 1) * per_page) as usize;
    let items: Vec<ProjectCardResponse> = projects
        .iter()
        .skip(start)
        .take(per_page as usize)
        .map(ProjectCardResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(ProjectPage {
        items,
        page,
        per_page,
        total,
        total_pages,
    }))
}

/// Admin listing: the project records and the name-ordered skill options
/// the edit form's tech-stack picker needs, loaded concurrently.
#[instrument(skip(state))]
pub async fn admin_list_projects(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let (projects, skill_options) = try_join!(
        state.project_handler.reload(),
        state.skill_handler.options()
    )?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "projects": projects,
        "skills": skill_options
    })))
}

type ProjectInput = Either<MultipartForm<ProjectUploadForm>, web::Json<ProjectRequest>>;

pub async fn create_project(
    state: web::Data<AppState>,
    data_input: Result<ProjectInput, actix_web::Error>,
) -> impl Responder {
    let either = match data_input {
        Ok(either) => either,
        Err(e) => return unsupported_media_type(e),
    };

    let (request, new_thumbnail) = match resolve_project_input(either).await {
        Ok(resolved) => resolved,
        Err(response) => return response,
    };

    match state.project_handler.create(request, new_thumbnail).await {
        Ok(projects) => HttpResponse::Created().json(projects),
        Err(e) => e.to_http_response(),
    }
}

pub async fn update_project(
    project_id: web::Path<Uuid>,
    state: web::Data<AppState>,
    data_input: Result<ProjectInput, actix_web::Error>,
) -> impl Responder {
    let either = match data_input {
        Ok(either) => either,
        Err(e) => return unsupported_media_type(e),
    };

    let (request, new_thumbnail) = match resolve_project_input(either).await {
        Ok(resolved) => resolved,
        Err(response) => return response,
    };

    match state
        .project_handler
        .update(project_id.into_inner(), request, new_thumbnail)
        .await
    {
        Ok(projects) => HttpResponse::Ok().json(projects),
        Err(e) => e.to_http_response(),
    }
}

#[instrument(skip(project_id, state, query))]
pub async fn delete_project(
    project_id: web::Path<Uuid>,
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let confirmed = query.get("confirm").map_or(false, |v| v == "true");
    if !confirmed {
        return Err(AppError::InvalidInput(
            "Deleting a project requires confirm=true".to_string(),
        ));
    }

    state.project_handler.delete(project_id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Splits either input into the metadata request and, for the multipart
/// case, the validated thumbnail file read off disk.
async fn resolve_project_input(
    either: ProjectInput,
) -> Result<(ProjectRequest, Option<NewThumbnail>), HttpResponse> {
    match either {
        Either::Left(file_input) => {
            let form = file_input.into_inner();
            let request = form.metadata.0;

            let file_name = form.thumbnail.file_name;
            let file_path = form.thumbnail.file.path();

            let image = match read_image_file(
                file_name.as_deref(),
                file_path,
                MAX_THUMBNAIL_BYTES,
            ).await {
                Ok(image) => image,
                Err(e) => {
                    return Err(HttpResponse::BadRequest().json(
                        serde_json::json!({
                            "error": "Thumbnail file error",
                            "details": e.to_string()
                        })
                    ));
                }
            };

            let new_thumbnail = NewThumbnail {
                file_name: file_name.unwrap_or_else(|| "thumbnail".to_string()),
                content_type: image.content_type,
                bytes: image.bytes,
            };

            Ok((request, Some(new_thumbnail)))
        }
        Either::Right(json_input) => Ok((json_input.into_inner(), None)),
    }
}

fn unsupported_media_type(e: actix_web::Error) -> HttpResponse {
    HttpResponse::UnsupportedMediaType().json(
        serde_json::json!({
            "error": "Content type error",
            "message": "Request must be either application/json or multipart/form-data",
            "details": e.to_string()
        })
    )
}

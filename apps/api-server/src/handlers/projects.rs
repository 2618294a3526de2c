//! Project handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::domain::Project;
use blog_shared::dto::CreateProjectRequest;

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/projects
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let projects = state.projects.find_all().await?;
    Ok(HttpResponse::Ok().json(projects))
}

/// GET /api/projects/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let project = state
        .projects
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No project with id {id}")))?;

    Ok(HttpResponse::Ok().json(project))
}

/// POST /api/projects - protected
pub async fn create(
    state: web::Data<AppState>,
    _identity: Identity,
    body: web::Json<CreateProjectRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Project name must not be empty".to_string(),
        ));
    }

    let mut project = Project::new(req.name, req.description);
    project.image_url = req.image_url;

    let saved = state.projects.insert(project).await?;
    Ok(HttpResponse::Created().json(saved))
}

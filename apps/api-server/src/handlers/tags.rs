//! Tag handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::Tag;
use blog_shared::dto::CreateTagRequest;

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/tags
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let tags = state.tags.find_all().await?;
    Ok(HttpResponse::Ok().json(tags))
}

/// POST /api/tags - protected
pub async fn create(
    state: web::Data<AppState>,
    _identity: Identity,
    body: web::Json<CreateTagRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest("Tag name must not be empty".to_string()));
    }

    let tag = state.tags.insert(Tag::new(req.name)).await?;
    Ok(HttpResponse::Created().json(tag))
}

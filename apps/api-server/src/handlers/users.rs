//! User handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_shared::dto::UserResponse;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/users/{id} - public user info, no password hash.
pub async fn get(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No user with id {id}")))?;

    Ok(HttpResponse::Ok().json(UserResponse {
        id: user.id.to_string(),
        email: user.email,
        created_at: user.created_at.to_rfc3339(),
    }))
}

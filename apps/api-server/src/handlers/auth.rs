//! Authentication handlers.

use actix_web::{HttpResponse, web};
use std::sync::Arc;

use blog_core::domain::User;
use blog_core::ports::{PasswordService, TokenService};
use blog_shared::dto::{AuthResponse, LoginRequest, RegisterUserRequest, UserResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<RegisterUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.email.is_empty() || !req.email.contains('@') {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }
    if req.password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    if state.users.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    let password_hash = password_service
        .hash(&req.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let user = User::new(req.email, password_hash);
    let saved = state.users.insert(user).await?;

    let token = token_service
        .generate_token(saved.id, &saved.email, vec!["author".to_string()])
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Created().json(AuthResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: token_service.expiration_seconds() as u64,
    }))
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let user = state
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let valid = password_service
        .verify(&req.password, &user.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !valid {
        return Err(AppError::Unauthorized);
    }

    let token = token_service
        .generate_token(user.id, &user.email, vec!["author".to_string()])
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: token_service.expiration_seconds() as u64,
    }))
}

/// GET /api/auth/me - protected
pub async fn me(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let user = state
        .users
        .find_by_id(identity.user_id)
        .await?
        .ok_or(AppError::Unauthorized)?;

    Ok(HttpResponse::Ok().json(UserResponse {
        id: user.id.to_string(),
        email: user.email,
        created_at: user.created_at.to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::http::header;
    use actix_web::{App, test, web};
    use blog_shared::dto::AuthResponse;

    use crate::handlers::configure_routes;
    use crate::handlers::test_util::{test_password_service, test_state, test_token_service};

    #[actix_web::test]
    async fn test_register_login_me() {
        let state = test_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .app_data(web::Data::new(test_token_service()))
                .app_data(web::Data::new(test_password_service()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "email": "me@kuzzmi.com",
                "password": "secure_password_123"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "email": "me@kuzzmi.com",
                "password": "secure_password_123"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let auth: AuthResponse = test::read_body_json(resp).await;

        let req = test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header((
                header::AUTHORIZATION,
                format!("Bearer {}", auth.access_token),
            ))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_login_wrong_password_unauthorized() {
        let state = test_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .app_data(web::Data::new(test_token_service()))
                .app_data(web::Data::new(test_password_service()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "email": "me@kuzzmi.com",
                "password": "secure_password_123"
            }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "email": "me@kuzzmi.com",
                "password": "wrong"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}

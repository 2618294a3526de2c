//! Post handlers.
//!
//! Writes run the pre-save hook, so slugs and rendered bodies are always
//! derived server-side from the submitted title and markdown.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use blog_core::domain::Post;
use blog_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub(crate) fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        markdown: post.markdown,
        body: post.body,
        description: post.description,
        slug: post.slug,
        date_created: post.date_created.to_rfc3339(),
        is_published: post.is_published,
        tags: post.tags,
        project: post.project,
    }
}

#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    #[serde(default)]
    published: bool,
}

/// GET /api/posts
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let posts = if query.published {
        state.posts.find_published().await?
    } else {
        state.posts.find_all().await?
    };

    let response: Vec<PostResponse> = posts.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/posts/{slug}
pub async fn get_by_slug(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let post = state
        .posts
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No post with slug '{slug}'")))?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /api/posts - protected
pub async fn create(
    state: web::Data<AppState>,
    _identity: Identity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let mut post = Post::new(req.title, req.markdown);
    if let Some(description) = req.description {
        post.description = description;
    }
    post.is_published = req.is_published;
    post.tags = req.tags;
    post.project = req.project;

    post.prepare_for_save(true)?;
    let saved = state.posts.insert(post).await?;

    Ok(HttpResponse::Created().json(to_response(saved)))
}

/// PUT /api/posts/{id} - protected
pub async fn update(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    let mut post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No post with id {id}")))?;

    if let Some(title) = req.title {
        post.title = title;
    }
    if let Some(markdown) = req.markdown {
        post.markdown = markdown;
    }
    if let Some(description) = req.description {
        post.description = description;
    }
    if let Some(is_published) = req.is_published {
        post.is_published = is_published;
    }
    if let Some(tags) = req.tags {
        post.tags = tags;
    }
    if let Some(project) = req.project {
        post.project = project;
    }

    post.prepare_for_save(false)?;
    let saved = state.posts.update(post).await?;

    Ok(HttpResponse::Ok().json(to_response(saved)))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::http::header;
    use actix_web::{App, test, web};
    use blog_shared::dto::PostResponse;

    use crate::handlers::test_util::{bearer, test_state, test_token_service};
    use crate::handlers::configure_routes;

    macro_rules! test_app {
        ($state:expr, $tokens:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state.clone()))
                    .app_data(web::Data::new($tokens.clone()))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_create_derives_slug_and_body() {
        let state = test_state();
        let tokens = test_token_service();
        let app = test_app!(state, tokens);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header((header::AUTHORIZATION, bearer(&tokens)))
            .set_json(serde_json::json!({
                "title": "Hello World",
                "markdown": "# Hi"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let post: PostResponse = test::read_body_json(resp).await;
        assert_eq!(post.slug, "hello-world");
        assert!(post.body.contains("<h1>Hi</h1>"));
        assert_eq!(post.description, "To be done");
        assert!(post.project.is_none());
    }

    #[actix_web::test]
    async fn test_create_rejects_empty_markdown() {
        let state = test_state();
        let tokens = test_token_service();
        let app = test_app!(state, tokens);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header((header::AUTHORIZATION, bearer(&tokens)))
            .set_json(serde_json::json!({
                "title": "Hello World",
                "markdown": ""
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(state.posts.find_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_create_requires_auth() {
        let state = test_state();
        let tokens = test_token_service();
        let app = test_app!(state, tokens);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(serde_json::json!({
                "title": "Hello World",
                "markdown": "# Hi"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_get_by_slug_roundtrip() {
        let state = test_state();
        let tokens = test_token_service();
        let app = test_app!(state, tokens);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header((header::AUTHORIZATION, bearer(&tokens)))
            .set_json(serde_json::json!({
                "title": "Slugs in Rust",
                "markdown": "text"
            }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get()
            .uri("/api/posts/slugs-in-rust")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/posts/missing").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_update_rederives_slug_and_keeps_date() {
        let state = test_state();
        let tokens = test_token_service();
        let app = test_app!(state, tokens);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header((header::AUTHORIZATION, bearer(&tokens)))
            .set_json(serde_json::json!({
                "title": "Old Title",
                "markdown": "text"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let created: PostResponse = test::read_body_json(resp).await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/posts/{}", created.id))
            .insert_header((header::AUTHORIZATION, bearer(&tokens)))
            .set_json(serde_json::json!({ "title": "New Title" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let updated: PostResponse = test::read_body_json(resp).await;
        assert_eq!(updated.slug, "new-title");
        assert_eq!(updated.date_created, created.date_created);
    }

    #[actix_web::test]
    async fn test_update_clears_project_on_explicit_null() {
        let state = test_state();
        let tokens = test_token_service();
        let app = test_app!(state, tokens);

        let project_id = uuid::Uuid::new_v4();
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header((header::AUTHORIZATION, bearer(&tokens)))
            .set_json(serde_json::json!({
                "title": "With Project",
                "markdown": "text",
                "project": project_id
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let created: PostResponse = test::read_body_json(resp).await;
        assert_eq!(created.project, Some(project_id));

        // An absent field keeps the reference.
        let req = test::TestRequest::put()
            .uri(&format!("/api/posts/{}", created.id))
            .insert_header((header::AUTHORIZATION, bearer(&tokens)))
            .set_json(serde_json::json!({ "description": "still linked" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let updated: PostResponse = test::read_body_json(resp).await;
        assert_eq!(updated.project, Some(project_id));

        // An explicit null clears it.
        let req = test::TestRequest::put()
            .uri(&format!("/api/posts/{}", created.id))
            .insert_header((header::AUTHORIZATION, bearer(&tokens)))
            .set_json(serde_json::json!({ "project": null }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let updated: PostResponse = test::read_body_json(resp).await;
        assert_eq!(updated.project, None);
    }
}

//! Atom feed endpoint.

use actix_web::{HttpResponse, web};

use blog_core::site;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/feed
pub async fn feed(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_published().await?;
    let body = site::render_feed(&state.site_url, &state.site_title, &posts);

    Ok(HttpResponse::Ok()
        .content_type("application/atom+xml")
        .body(body))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};

    use blog_core::domain::Post;

    use crate::handlers::configure_routes;
    use crate::handlers::test_util::{test_state, test_token_service};

    #[actix_web::test]
    async fn test_feed_includes_published_post() {
        let state = test_state();
        let mut post = Post::new("Rust Tips".to_string(), "# Tips".to_string());
        post.prepare_for_save(true).unwrap();
        post.is_published = true;
        state.posts.insert(post).await.unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .app_data(web::Data::new(test_token_service()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/feed").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("<title>Rust Tips</title>"));
        assert!(body.contains("https://kuzzmi.com/blog/rust-tips"));
    }
}

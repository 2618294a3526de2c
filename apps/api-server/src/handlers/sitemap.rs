//! Plain-text sitemap endpoint.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};

use blog_core::site;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/sitemap
///
/// Three fixed site URLs followed by one URL per published post, newest
/// first, CRLF-joined. Store failures become a generic 500; the error is
/// only logged.
pub async fn sitemap(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_published().await?;
    let body = site::render_sitemap(&state.site_url, &posts);

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(body))
}

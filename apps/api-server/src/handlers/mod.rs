//! HTTP handlers and route configuration.

mod auth;
mod feed;
mod health;
mod posts;
mod projects;
mod sitemap;
mod tags;
mod users;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .route("/sitemap", web::get().to(sitemap::sitemap))
            .route("/feed", web::get().to(feed::feed))
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list))
                    .route("", web::post().to(posts::create))
                    .route("/{slug}", web::get().to(posts::get_by_slug))
                    .route("/{id}", web::put().to(posts::update)),
            )
            .service(
                web::scope("/tags")
                    .route("", web::get().to(tags::list))
                    .route("", web::post().to(tags::create)),
            )
            .service(
                web::scope("/projects")
                    .route("", web::get().to(projects::list))
                    .route("/{id}", web::get().to(projects::get))
                    .route("", web::post().to(projects::create)),
            )
            .service(web::scope("/users").route("/{id}", web::get().to(users::get)))
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me)),
            ),
    );
}

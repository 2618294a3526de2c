//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::{
    PasswordService, PostRepository, ProjectRepository, TagRepository, TokenService,
    UserRepository,
};
use blog_infra::auth::{Argon2PasswordService, JwtTokenService};
use blog_infra::database::{
    PostgresPostRepository, PostgresProjectRepository, PostgresTagRepository,
    PostgresUserRepository, connect,
};
use blog_infra::memory::{
    InMemoryPostRepository, InMemoryProjectRepository, InMemoryTagRepository,
    InMemoryUserRepository,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub projects: Arc<dyn ProjectRepository>,
    pub users: Arc<dyn UserRepository>,
    pub site_url: String,
    pub site_title: String,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    ///
    /// Connects to Postgres when `DATABASE_URL` is configured; otherwise
    /// falls back to in-memory repositories so the server still comes up
    /// for local development.
    pub async fn new(config: &AppConfig) -> Self {
        let db = match &config.database {
            Some(db_config) => match connect(db_config).await {
                Ok(conn) => Some(conn),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    None
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                None
            }
        };

        let (posts, tags, projects, users): (
            Arc<dyn PostRepository>,
            Arc<dyn TagRepository>,
            Arc<dyn ProjectRepository>,
            Arc<dyn UserRepository>,
        ) = match db {
            Some(conn) => {
                // One pool shared by all repositories.
                let conn = Arc::new(conn);
                (
                    Arc::new(PostgresPostRepository::new(conn.clone())),
                    Arc::new(PostgresTagRepository::new(conn.clone())),
                    Arc::new(PostgresProjectRepository::new(conn.clone())),
                    Arc::new(PostgresUserRepository::new(conn)),
                )
            }
            None => (
                Arc::new(InMemoryPostRepository::new()),
                Arc::new(InMemoryTagRepository::new()),
                Arc::new(InMemoryProjectRepository::new()),
                Arc::new(InMemoryUserRepository::new()),
            ),
        };

        tracing::info!("Application state initialized");

        Self {
            posts,
            tags,
            projects,
            users,
            site_url: config.site_url.clone(),
            site_title: config.site_title.clone(),
        }
    }
}

/// Token service built from the environment.
pub fn token_service() -> Arc<dyn TokenService> {
    Arc::new(JwtTokenService::from_env())
}

/// Password service.
pub fn password_service() -> Arc<dyn PasswordService> {
    Arc::new(Argon2PasswordService::new())
}

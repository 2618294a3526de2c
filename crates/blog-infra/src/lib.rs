//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory repositories only
//! - `postgres` - PostgreSQL persistence via SeaORM
//! - `auth` - JWT + Argon2 authentication

pub mod database;
pub mod memory;

#[cfg(feature = "auth")]
pub mod auth;

pub use memory::{
    InMemoryPostRepository, InMemoryProjectRepository, InMemoryRepository, InMemoryTagRepository,
    InMemoryUserRepository,
};

#[cfg(feature = "postgres")]
pub use database::{
    PostgresPostRepository, PostgresProjectRepository, PostgresTagRepository,
    PostgresUserRepository,
};

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, Project, Tag, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// List all entities.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Persist a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Persist changes to an existing entity.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository with domain-specific queries.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// Find a post by its slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError>;

    /// All published posts, newest first by creation date.
    ///
    /// Tie-break order for equal timestamps is whatever the store returns.
    async fn find_published(&self) -> Result<Vec<Post>, RepoError>;
}

/// Tag repository.
#[async_trait]
pub trait TagRepository: BaseRepository<Tag, Uuid> {}

/// Project repository.
#[async_trait]
pub trait ProjectRepository: BaseRepository<Project, Uuid> {}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

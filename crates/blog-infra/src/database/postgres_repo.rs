//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use blog_core::domain::{Post, User};
use blog_core::error::RepoError;
use blog_core::ports::{PostRepository, ProjectRepository, TagRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::project::Entity as ProjectEntity;
use super::entity::tag::Entity as TagEntity;
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL tag repository.
pub type PostgresTagRepository = PostgresBaseRepository<TagEntity>;

/// PostgreSQL project repository.
pub type PostgresProjectRepository = PostgresBaseRepository<ProjectEntity>;

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::Slug.eq(slug))
            .one(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn find_published(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::IsPublished.eq(true))
            .order_by_desc(post::Column::DateCreated)
            .all(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

impl TagRepository for PostgresTagRepository {}

impl ProjectRepository for PostgresProjectRepository {}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        // Mask email for logging to avoid PII in logs
        let masked = match email.find('@') {
            Some(at_pos) => format!("{}***{}", &email[..1.min(at_pos)], &email[at_pos..]),
            None => "***".to_string(),
        };
        tracing::debug!(user_email = %masked, "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }
}

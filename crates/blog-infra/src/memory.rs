//! In-memory repositories.
//!
//! Used when no database is configured and as the store behind handler
//! tests. Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{Post, Project, Tag, User};
use blog_core::error::RepoError;
use blog_core::ports::{
    BaseRepository, PostRepository, ProjectRepository, TagRepository, UserRepository,
};

/// Anything storable by UUID.
pub trait HasId {
    fn id(&self) -> Uuid;
}

impl HasId for Post {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl HasId for Tag {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl HasId for Project {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl HasId for User {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Generic in-memory repository over a `HashMap` behind an async lock.
pub struct InMemoryRepository<T> {
    store: RwLock<HashMap<Uuid, T>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub type InMemoryPostRepository = InMemoryRepository<Post>;
pub type InMemoryTagRepository = InMemoryRepository<Tag>;
pub type InMemoryProjectRepository = InMemoryRepository<Project>;
pub type InMemoryUserRepository = InMemoryRepository<User>;

#[async_trait]
impl<T> BaseRepository<T, Uuid> for InMemoryRepository<T>
where
    T: HasId + Clone + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().cloned().collect())
    }

    async fn insert(&self, entity: T) -> Result<T, RepoError> {
        let mut store = self.store.write().await;
        if store.contains_key(&entity.id()) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }
        store.insert(entity.id(), entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: T) -> Result<T, RepoError> {
        let mut store = self.store.write().await;
        if !store.contains_key(&entity.id()) {
            return Err(RepoError::NotFound);
        }
        store.insert(entity.id(), entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        if store.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryRepository<Post> {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().find(|p| p.slug == slug).cloned())
    }

    async fn find_published(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        let mut posts: Vec<Post> = store.values().filter(|p| p.is_published).cloned().collect();
        posts.sort_by(|a, b| b.date_created.cmp(&a.date_created));
        Ok(posts)
    }
}

impl TagRepository for InMemoryRepository<Tag> {}

impl ProjectRepository for InMemoryRepository<Project> {}

#[async_trait]
impl UserRepository for InMemoryRepository<User> {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().find(|u| u.email == email).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn make_post(slug: &str, published: bool, ts: i64) -> Post {
        let mut post = Post::new(slug.to_string(), "text".to_string());
        post.slug = slug.to_string();
        post.is_published = published;
        post.date_created = Utc.timestamp_opt(ts, 0).unwrap();
        post
    }

    #[tokio::test]
    async fn test_insert_and_find_by_slug() {
        let repo = InMemoryPostRepository::new();
        repo.insert(make_post("hello", true, 1)).await.unwrap();

        let found = repo.find_by_slug("hello").await.unwrap();
        assert!(found.is_some());
        assert!(repo.find_by_slug("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_twice_is_constraint_error() {
        let repo = InMemoryPostRepository::new();
        let post = make_post("dup", false, 1);
        repo.insert(post.clone()).await.unwrap();

        let err = repo.insert(post).await.unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = InMemoryPostRepository::new();
        let err = repo.update(make_post("nope", false, 1)).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_find_published_sorted_newest_first() {
        let repo = InMemoryPostRepository::new();
        repo.insert(make_post("a", true, 1_000)).await.unwrap();
        repo.insert(make_post("b", true, 2_000)).await.unwrap();
        repo.insert(make_post("draft", false, 3_000)).await.unwrap();

        let published = repo.find_published().await.unwrap();
        let slugs: Vec<&str> = published.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_user_find_by_email() {
        let repo = InMemoryUserRepository::new();
        repo.insert(User::new("me@kuzzmi.com".to_string(), "hash".to_string()))
            .await
            .unwrap();

        assert!(repo.find_by_email("me@kuzzmi.com").await.unwrap().is_some());
        assert!(repo.find_by_email("other@kuzzmi.com").await.unwrap().is_none());
    }
}

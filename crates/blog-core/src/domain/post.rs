use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;
use crate::{markdown, slug};

/// Post entity - a blog article.
///
/// `slug` and `body` are derived fields: they are overwritten from `title`
/// and `markdown` by [`Post::prepare_for_save`] on every save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    /// Raw markdown source, the authored representation.
    pub markdown: String,
    /// Rendered HTML, derived from `markdown` on save.
    pub body: String,
    pub description: String,
    /// URL-safe identifier, derived from `title` on save.
    pub slug: String,
    pub date_created: DateTime<Utc>,
    pub is_published: bool,
    /// References to `Tag` entities.
    pub tags: Vec<Uuid>,
    /// Optional reference to a `Project` entity.
    pub project: Option<Uuid>,
}

impl Post {
    /// Create a new draft post. Derived fields are filled in by
    /// [`Post::prepare_for_save`].
    pub fn new(title: String, markdown: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            markdown,
            body: String::new(),
            description: "To be done".to_string(),
            slug: String::new(),
            date_created: Utc::now(),
            is_published: false,
            tags: Vec::new(),
            project: None,
        }
    }

    /// Pre-save hook: validate and re-derive fields.
    ///
    /// Fails without mutating the post when `title` or `markdown` is empty.
    /// On success, `slug` and `body` are overwritten from the current
    /// `title` and `markdown`. `date_created` is stamped only when the post
    /// is new, so edits never rewrite the publication date.
    pub fn prepare_for_save(&mut self, is_new: bool) -> Result<(), DomainError> {
        if self.title.trim().is_empty() || self.markdown.trim().is_empty() {
            return Err(DomainError::Validation(
                "No valid post object is specified".to_string(),
            ));
        }

        self.slug = slug::slugify(&self.title);
        self.body = markdown::render(&self.markdown);
        if is_new {
            self.date_created = Utc::now();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_derives_slug_and_body() {
        let mut post = Post::new("Hello World".to_string(), "# Hi".to_string());
        post.prepare_for_save(true).unwrap();

        assert_eq!(post.slug, "hello-world");
        assert!(!post.body.is_empty());
        assert!(post.body.contains("<h1>Hi</h1>"));
    }

    #[test]
    fn test_prepare_fails_on_empty_title() {
        let mut post = Post::new("".to_string(), "# Hi".to_string());
        let before = post.clone();

        assert!(post.prepare_for_save(true).is_err());
        assert_eq!(post.slug, before.slug);
        assert_eq!(post.body, before.body);
        assert_eq!(post.date_created, before.date_created);
    }

    #[test]
    fn test_prepare_fails_on_empty_markdown() {
        let mut post = Post::new("Title".to_string(), "   ".to_string());
        assert!(post.prepare_for_save(true).is_err());
    }

    #[test]
    fn test_update_rederives_but_keeps_date_created() {
        let mut post = Post::new("First Title".to_string(), "body".to_string());
        post.prepare_for_save(true).unwrap();
        let created = post.date_created;

        post.title = "Second Title".to_string();
        post.markdown = "## Changed".to_string();
        post.prepare_for_save(false).unwrap();

        assert_eq!(post.slug, "second-title");
        assert!(post.body.contains("<h2>Changed</h2>"));
        assert_eq!(post.date_created, created);
    }

    #[test]
    fn test_default_description() {
        let post = Post::new("t".to_string(), "m".to_string());
        assert_eq!(post.description, "To be done");
        assert!(post.project.is_none());
    }
}

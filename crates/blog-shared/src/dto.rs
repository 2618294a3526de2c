//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Keeps an absent field distinguishable from an explicit `null`: a plain
/// `Option<Option<T>>` collapses both to `None`, which would make a field
/// impossible to clear over the API.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Request to create a post. Slug and body are derived server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub markdown: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub tags: Vec<Uuid>,
    #[serde(default)]
    pub project: Option<Uuid>,
}

/// Request to update a post. Absent fields keep their current value;
/// `"project": null` clears the project reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub markdown: Option<String>,
    pub description: Option<String>,
    pub is_published: Option<bool>,
    pub tags: Option<Vec<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    pub project: Option<Option<Uuid>>,
}

/// Response containing a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub markdown: String,
    pub body: String,
    pub description: String,
    pub slug: String,
    pub date_created: String,
    pub is_published: bool,
    pub tags: Vec<Uuid>,
    pub project: Option<Uuid>,
}

/// Request to create a tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTagRequest {
    pub name: String,
}

/// Request to create a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub email: String,
    pub password: String,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response containing a user's public information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub created_at: String,
}

/// Response containing authentication tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_absent_project_keeps_value() {
        let req: UpdatePostRequest = serde_json::from_str(r#"{"title":"t"}"#).unwrap();
        assert_eq!(req.project, None);
    }

    #[test]
    fn test_update_request_null_project_clears_value() {
        let req: UpdatePostRequest = serde_json::from_str(r#"{"project":null}"#).unwrap();
        assert_eq!(req.project, Some(None));
    }

    #[test]
    fn test_update_request_project_id_sets_value() {
        let id = Uuid::new_v4();
        let req: UpdatePostRequest =
            serde_json::from_str(&format!(r#"{{"project":"{id}"}}"#)).unwrap();
        assert_eq!(req.project, Some(Some(id)));
    }
}

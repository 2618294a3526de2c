use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Project entity - a portfolio item that posts can reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Added by the `add_projects_image_url` migration; empty by default.
    pub image_url: String,
}

impl Project {
    pub fn new(name: String, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            image_url: String::new(),
        }
    }
}

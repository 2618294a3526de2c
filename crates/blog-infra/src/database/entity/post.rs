//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub markdown: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub description: String,
    pub slug: String,
    pub date_created: DateTimeWithTimeZone,
    pub is_published: bool,
    /// Tag references stored as a JSON array of UUIDs, document-store style.
    pub tags: Json,
    pub project_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::project::Entity",
        from = "Column::ProjectId",
        to = "super::project::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Project,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for blog_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            markdown: model.markdown,
            body: model.body,
            description: model.description,
            slug: model.slug,
            date_created: model.date_created.into(),
            is_published: model.is_published,
            tags: serde_json::from_value(model.tags).unwrap_or_default(),
            project: model.project_id,
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<blog_core::domain::Post> for ActiveModel {
    fn from(post: blog_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title),
            markdown: Set(post.markdown),
            body: Set(post.body),
            description: Set(post.description),
            slug: Set(post.slug),
            date_created: Set(post.date_created.into()),
            is_published: Set(post.is_published),
            tags: Set(serde_json::to_value(&post.tags).unwrap_or_else(|_| Json::Array(Vec::new()))),
            project_id: Set(post.project),
        }
    }
}

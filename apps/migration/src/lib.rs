//! Schema migrations for the blog database.

pub use sea_orm_migration::prelude::*;

mod m20170614_000001_create_tables;
mod m20170620_000002_add_projects_image_url;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20170614_000001_create_tables::Migration),
            Box::new(m20170620_000002_add_projects_image_url::Migration),
        ]
    }
}

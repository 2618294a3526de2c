//! Add `image_url` to projects, defaulting to an empty string.
//!
//! Reapplying `up` would reset existing values to the default; the runner's
//! bookkeeping is what keeps this one-shot.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

impl Migration {
    fn add_image_url() -> TableAlterStatement {
        Table::alter()
            .table(Projects::Table)
            .add_column(
                ColumnDef::new(Projects::ImageUrl)
                    .string()
                    .not_null()
                    .default(""),
            )
            .to_owned()
    }

    fn drop_image_url() -> TableAlterStatement {
        Table::alter()
            .table(Projects::Table)
            .drop_column(Projects::ImageUrl)
            .to_owned()
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.alter_table(Self::add_image_url()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.alter_table(Self::drop_image_url()).await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    ImageUrl,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_up_adds_non_null_image_url_with_empty_default() {
        let sql = Migration::add_image_url().to_string(PostgresQueryBuilder);
        assert!(sql.contains(r#"ALTER TABLE "projects" ADD COLUMN "image_url""#));
        assert!(sql.contains("NOT NULL"));
        assert!(sql.contains("DEFAULT ''"));
    }

    #[test]
    fn test_down_drops_image_url() {
        let sql = Migration::drop_image_url().to_string(PostgresQueryBuilder);
        assert!(sql.contains(r#"ALTER TABLE "projects" DROP COLUMN "image_url""#));
    }
}

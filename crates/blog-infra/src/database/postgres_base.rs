use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait,
};

use blog_core::error::RepoError;
use blog_core::ports::BaseRepository;

/// Generic PostgreSQL repository implementation.
///
/// Works for any entity whose domain type converts to and from the SeaORM
/// model; the per-entity repositories add their specific queries on top.
///
/// The connection pool is shared behind an `Arc` so every repository built
/// from it borrows the same pool.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: Arc<DbConn>,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: Arc<DbConn>) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

fn map_db_err(e: DbErr) -> RepoError {
    match e {
        DbErr::RecordNotUpdated => RepoError::NotFound,
        other => {
            let err_str = other.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint("Entity already exists".to_string())
            } else {
                RepoError::Query(err_str)
            }
        }
    }
}

#[async_trait]
impl<E, T, ID> BaseRepository<T, ID> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Clone + Copy + 'static,
    T: From<E::Model> + Into<E::ActiveModel> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        let result = E::find().all(self.db.as_ref()).await.map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, entity: T) -> Result<T, RepoError> {
        let active_model: E::ActiveModel = entity.into();
        let model = active_model.insert(self.db.as_ref()).await.map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn update(&self, entity: T) -> Result<T, RepoError> {
        let active_model: E::ActiveModel = entity.into();
        let model = active_model.update(self.db.as_ref()).await.map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn delete(&self, id: ID) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

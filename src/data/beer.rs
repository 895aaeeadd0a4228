use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, TransactionTrait};

use crate::{error::AppError, model::beer::Beer, service::beer::BeerService};

const ERR_INVALID_ID: &str = "invalid beer id";

/// SeaORM-backed implementation of [`BeerService`].
///
/// Holds a clone of the connection pool handle; the pool itself is shared.
/// Every mutating operation runs inside a transaction scoped to that single
/// operation, committed on success and rolled back on any failure. Correctness
/// under concurrent writers is delegated to the storage engine's isolation.
pub struct BeerRepository {
    db: DatabaseConnection,
}

impl BeerRepository {
    /// Creates a new repository over the given connection pool.
    ///
    /// # Arguments
    /// - `db` - Database connection pool handle
    ///
    /// # Returns
    /// - `BeerRepository` - Repository ready for use
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BeerService for BeerRepository {
    /// Returns every stored beer in store-defined scan order.
    async fn get_all(&self) -> Result<Vec<Beer>, AppError> {
        let beers = entity::prelude::Beer::find()
            .all(&self.db)
            .await?
            .into_iter()
            .map(Beer::from_entity)
            .collect();

        Ok(beers)
    }

    /// Returns the beer with the given id, or `NotFound` when no row matches.
    async fn get(&self, id: i64) -> Result<Beer, AppError> {
        let beer = entity::prelude::Beer::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("beer {} not found", id)))?;

        Ok(Beer::from_entity(beer))
    }

    /// Inserts a new beer inside a transaction and returns the assigned id.
    ///
    /// A name collision surfaces as a `DbErr` from the unique constraint and
    /// the transaction is rolled back, so the insert never partially applies.
    async fn store(&self, beer: &Beer) -> Result<i64, AppError> {
        let transaction = self.db.begin().await?;

        let inserted = entity::beer::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(beer.name.clone()),
            kind: ActiveValue::Set(beer.kind.0),
            style: ActiveValue::Set(beer.style.0),
        }
        .insert(&transaction)
        .await?;

        transaction.commit().await?;

        Ok(inserted.id)
    }

    /// Overwrites name, type, and style for the row matching `beer.id`.
    ///
    /// Rejects a zero id before touching storage. The lookup and write share
    /// one transaction so a partial overwrite is never observable.
    async fn update(&self, beer: &Beer) -> Result<(), AppError> {
        if beer.id == 0 {
            return Err(AppError::BadRequest(ERR_INVALID_ID.to_string()));
        }

        let transaction = self.db.begin().await?;

        let existing = entity::prelude::Beer::find_by_id(beer.id)
            .one(&transaction)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("beer {} not found", beer.id)))?;

        let mut active_model: entity::beer::ActiveModel = existing.into();
        active_model.name = ActiveValue::Set(beer.name.clone());
        active_model.kind = ActiveValue::Set(beer.kind.0);
        active_model.style = ActiveValue::Set(beer.style.0);

        active_model.update(&transaction).await?;

        transaction.commit().await?;

        Ok(())
    }

    /// Deletes the beer with the given id.
    ///
    /// Rejects a zero id before touching storage. Deleting a nonexistent id
    /// affects no rows and is reported as success.
    async fn remove(&self, id: i64) -> Result<(), AppError> {
        if id == 0 {
            return Err(AppError::BadRequest(ERR_INVALID_ID.to_string()));
        }

        let transaction = self.db.begin().await?;

        entity::prelude::Beer::delete_by_id(id)
            .exec(&transaction)
            .await?;

        transaction.commit().await?;

        Ok(())
    }
}

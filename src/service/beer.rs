//! Capability set for beer persistence.

use async_trait::async_trait;

use crate::{error::AppError, model::beer::Beer};

/// The full set of beer persistence operations.
///
/// Controllers depend only on this trait, never on a concrete storage engine.
/// The production implementation is [`crate::data::beer::BeerRepository`];
/// tests substitute an in-memory fake.
#[async_trait]
pub trait BeerService: Send + Sync {
    /// Returns every stored beer.
    ///
    /// The sequence follows the store's unordered scan (SQLite's primary key
    /// scan order in practice); callers must not rely on insertion order.
    async fn get_all(&self) -> Result<Vec<Beer>, AppError>;

    /// Returns the beer with the given id.
    ///
    /// # Returns
    /// - `Ok(Beer)` - The matching beer
    /// - `Err(AppError::NotFound)` - No row matches the id
    /// - `Err(AppError::DbErr)` - Storage failure
    async fn get(&self, id: i64) -> Result<Beer, AppError>;

    /// Inserts a new beer and returns the store-assigned id.
    ///
    /// Runs as a single atomic unit; on any failure the insert does not take
    /// effect. A `name` collision with an existing row fails with a storage
    /// error from the unique constraint.
    async fn store(&self, beer: &Beer) -> Result<i64, AppError>;

    /// Overwrites name, type, and style for the row matching `beer.id`.
    ///
    /// # Returns
    /// - `Ok(())` - Row updated atomically
    /// - `Err(AppError::BadRequest)` - `beer.id` is zero; storage untouched
    /// - `Err(AppError::NotFound)` - No row matches the id
    /// - `Err(AppError::DbErr)` - Storage failure
    async fn update(&self, beer: &Beer) -> Result<(), AppError>;

    /// Deletes the beer with the given id.
    ///
    /// Removing a nonexistent id is a no-op success.
    ///
    /// # Returns
    /// - `Ok(())` - Row deleted (or no row matched)
    /// - `Err(AppError::BadRequest)` - `id` is zero; storage untouched
    /// - `Err(AppError::DbErr)` - Storage failure
    async fn remove(&self, id: i64) -> Result<(), AppError>;
}

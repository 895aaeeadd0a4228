//! Beer factory for creating test beer entities.
//!
//! This module provides factory methods for creating beer rows with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test beers with customizable fields.
///
/// Provides a builder pattern for creating beer rows with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::beer::BeerFactory;
///
/// let beer = BeerFactory::new(&db)
///     .name("Hop Harvest")
///     .kind(2)
///     .style(10)
///     .build()
///     .await?;
/// ```
pub struct BeerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    kind: i32,
    style: i32,
}

impl<'a> BeerFactory<'a> {
    /// Creates a new BeerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Beer {id}"` where id is auto-incremented
    /// - kind: `2` (Lager)
    /// - style: `6` (Pale)
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `BeerFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Beer {}", id),
            kind: 2,
            style: 6,
        }
    }

    /// Sets the beer name.
    ///
    /// # Arguments
    /// - `name` - Display name for the beer
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the beer type code.
    ///
    /// # Arguments
    /// - `kind` - Type code (1 Ale, 2 Lager, 3 Malt, 4 Stout)
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn kind(mut self, kind: i32) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the beer style code.
    ///
    /// # Arguments
    /// - `style` - Style code (1 through 15)
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn style(mut self, style: i32) -> Self {
        self.style = style;
        self
    }

    /// Builds and inserts the beer entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::beer::Model)` - Created beer row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::beer::Model, DbErr> {
        entity::beer::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            kind: ActiveValue::Set(self.kind),
            style: ActiveValue::Set(self.style),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a beer with default values.
///
/// Shorthand for `BeerFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::beer::Model)` - Created beer row
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let beer = create_beer(&db).await?;
/// ```
pub async fn create_beer(db: &DatabaseConnection) -> Result<entity::beer::Model, DbErr> {
    BeerFactory::new(db).build().await
}

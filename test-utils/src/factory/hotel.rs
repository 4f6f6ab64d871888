//! Hotel factory for creating test hotel entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test hotels with customizable fields.
///
/// Provides a builder pattern for creating hotel entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::hotel::HotelFactory;
///
/// let hotel = HotelFactory::new(&db)
///     .name("Hotel Mar Azul")
///     .city("Porto")
///     .coordinates(41.1579, -8.6291)
///     .stars(4.5)
///     .build()
///     .await?;
/// ```
pub struct HotelFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    city: String,
    neighborhood: Option<String>,
    latitude: f64,
    longitude: f64,
    stars: f64,
    popularity: f64,
}

impl<'a> HotelFactory<'a> {
    /// Creates a new HotelFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Hotel {n}"` where n is auto-incremented
    /// - city: `"Lisbon"`
    /// - coordinates: spread along the latitude axis so factory hotels never
    ///   trip the proximity guard unless a test places them deliberately
    /// - stars / popularity: `0.0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `HotelFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Hotel {}", id),
            city: "Lisbon".to_string(),
            neighborhood: None,
            latitude: 38.0 + id as f64 * 0.1,
            longitude: -9.0,
            stars: 0.0,
            popularity: 0.0,
        }
    }

    /// Sets the hotel name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the city.
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Sets the neighborhood.
    pub fn neighborhood(mut self, neighborhood: Option<String>) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    /// Sets latitude and longitude in decimal degrees.
    pub fn coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Sets the derived stars metric.
    pub fn stars(mut self, stars: f64) -> Self {
        self.stars = stars;
        self
    }

    /// Sets the derived popularity metric.
    pub fn popularity(mut self, popularity: f64) -> Self {
        self.popularity = popularity;
        self
    }

    /// Builds and inserts the hotel entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::hotel::Model)` - Created hotel entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::hotel::Model, DbErr> {
        entity::hotel::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            city: ActiveValue::Set(self.city),
            neighborhood: ActiveValue::Set(self.neighborhood),
            address: ActiveValue::Set(None),
            latitude: ActiveValue::Set(self.latitude),
            longitude: ActiveValue::Set(self.longitude),
            stars: ActiveValue::Set(self.stars),
            popularity: ActiveValue::Set(self.popularity),
            policies: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a hotel with default values.
///
/// Shorthand for `HotelFactory::new(db).build().await`.
///
/// # Returns
/// - `Ok(entity::hotel::Model)` - Created hotel entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_hotel(db: &DatabaseConnection) -> Result<entity::hotel::Model, DbErr> {
    HotelFactory::new(db).build().await
}

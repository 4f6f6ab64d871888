//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::room::RoomFactory;
///
/// let room = RoomFactory::new(&db, hotel.id)
///     .room_type("suite")
///     .base_price(180.0)
///     .total_units(3)
///     .build()
///     .await?;
/// ```
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    hotel_id: i32,
    name: String,
    room_type: String,
    capacity: i32,
    base_price: f64,
    total_units: i32,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Room {n}"` where n is auto-incremented
    /// - room_type: `"double"`
    /// - capacity: `2`
    /// - base_price: `100.0`
    /// - total_units: `1`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `hotel_id` - Hotel this room belongs to
    ///
    /// # Returns
    /// - `RoomFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, hotel_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            hotel_id,
            name: format!("Room {}", id),
            room_type: "double".to_string(),
            capacity: 2,
            base_price: 100.0,
            total_units: 1,
        }
    }

    /// Sets the room name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the room type category.
    pub fn room_type(mut self, room_type: impl Into<String>) -> Self {
        self.room_type = room_type.into();
        self
    }

    /// Sets the guest capacity.
    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the nightly base price.
    pub fn base_price(mut self, base_price: f64) -> Self {
        self.base_price = base_price;
        self
    }

    /// Sets the total unit inventory of this room type.
    pub fn total_units(mut self, total_units: i32) -> Self {
        self.total_units = total_units;
        self
    }

    /// Builds and inserts the room entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::room::Model)` - Created room entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            id: ActiveValue::NotSet,
            hotel_id: ActiveValue::Set(self.hotel_id),
            name: ActiveValue::Set(self.name),
            room_type: ActiveValue::Set(self.room_type),
            capacity: ActiveValue::Set(self.capacity),
            base_price: ActiveValue::Set(self.base_price),
            total_units: ActiveValue::Set(self.total_units),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room with default values for the specified hotel.
///
/// # Returns
/// - `Ok(entity::room::Model)` - Created room entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_room(
    db: &DatabaseConnection,
    hotel_id: i32,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db, hotel_id).build().await
}

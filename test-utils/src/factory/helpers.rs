//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a hotel with one bookable room.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((hotel, room))` - Created hotel and room entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_hotel_with_room(
    db: &DatabaseConnection,
) -> Result<(entity::hotel::Model, entity::room::Model), DbErr> {
    let hotel = crate::factory::hotel::create_hotel(db).await?;
    let room = crate::factory::room::create_room(db, hotel.id).await?;
    Ok((hotel, room))
}

/// Creates everything a booking needs: a user, a hotel, and a room.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, hotel, room))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::hotel::Model,
        entity::room::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let (hotel, room) = create_hotel_with_room(db).await?;
    Ok((user, hotel, room))
}

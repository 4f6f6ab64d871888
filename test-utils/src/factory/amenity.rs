//! Amenity factory for creating test amenity entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an amenity with a unique code.
///
/// # Returns
/// - `Ok(entity::amenity::Model)` - Created amenity entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_amenity(db: &DatabaseConnection) -> Result<entity::amenity::Model, DbErr> {
    let id = next_id();
    create_amenity_with_code(db, &format!("amenity-{}", id)).await
}

/// Creates an amenity with the given slug code.
///
/// # Arguments
/// - `db` - Database connection
/// - `code` - Unique amenity slug, also used to derive the label
///
/// # Returns
/// - `Ok(entity::amenity::Model)` - Created amenity entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_amenity_with_code(
    db: &DatabaseConnection,
    code: &str,
) -> Result<entity::amenity::Model, DbErr> {
    entity::amenity::ActiveModel {
        id: ActiveValue::NotSet,
        code: ActiveValue::Set(code.to_string()),
        label: ActiveValue::Set(code.replace('-', " ")),
    }
    .insert(db)
    .await
}

/// Attaches an amenity to a hotel.
///
/// # Returns
/// - `Ok(())` - Join row created
/// - `Err(DbErr)` - Database error during insert
pub async fn attach_to_hotel(
    db: &DatabaseConnection,
    hotel_id: i32,
    amenity_id: i32,
) -> Result<(), DbErr> {
    entity::hotel_amenity::ActiveModel {
        hotel_id: ActiveValue::Set(hotel_id),
        amenity_id: ActiveValue::Set(amenity_id),
    }
    .insert(db)
    .await?;
    Ok(())
}

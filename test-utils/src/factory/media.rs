//! Media factory for creating test media entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a photo media item for the specified hotel.
///
/// # Returns
/// - `Ok(entity::media::Model)` - Created media entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_media(
    db: &DatabaseConnection,
    hotel_id: i32,
) -> Result<entity::media::Model, DbErr> {
    let id = next_id();
    create_media_with_url(db, hotel_id, &format!("https://img.example.com/{}.jpg", id)).await
}

/// Creates a photo media item with a specific URL.
///
/// # Arguments
/// - `db` - Database connection
/// - `hotel_id` - Hotel this media belongs to
/// - `url` - Media URL
///
/// # Returns
/// - `Ok(entity::media::Model)` - Created media entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_media_with_url(
    db: &DatabaseConnection,
    hotel_id: i32,
    url: &str,
) -> Result<entity::media::Model, DbErr> {
    entity::media::ActiveModel {
        id: ActiveValue::NotSet,
        hotel_id: ActiveValue::Set(hotel_id),
        url: ActiveValue::Set(url.to_string()),
        kind: ActiveValue::Set("photo".to_string()),
    }
    .insert(db)
    .await
}

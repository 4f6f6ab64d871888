//! Review factory for creating test review entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a review with the given rating.
///
/// # Arguments
/// - `db` - Database connection
/// - `hotel_id` - Hotel being reviewed
/// - `user_id` - Reviewing user
/// - `rating` - Rating between 1 and 5
///
/// # Returns
/// - `Ok(entity::review::Model)` - Created review entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_review(
    db: &DatabaseConnection,
    hotel_id: i32,
    user_id: impl Into<String>,
    rating: f64,
) -> Result<entity::review::Model, DbErr> {
    entity::review::ActiveModel {
        id: ActiveValue::NotSet,
        hotel_id: ActiveValue::Set(hotel_id),
        user_id: ActiveValue::Set(user_id.into()),
        rating: ActiveValue::Set(rating),
        comment: ActiveValue::Set(Some("Pleasant stay".to_string())),
    }
    .insert(db)
    .await
}

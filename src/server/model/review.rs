//! Domain models for review operations.

/// A user's review of a hotel. Ratings are 1 to 5.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub hotel_id: i32,
    pub user_id: String,
    pub rating: f64,
    pub comment: Option<String>,
}

impl Review {
    /// Converts an entity model to a review domain model at the repository boundary.
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            hotel_id: entity.hotel_id,
            user_id: entity.user_id,
            rating: entity.rating,
            comment: entity.comment,
        }
    }
}

/// Review joined with the reviewer's username for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewWithAuthor {
    pub review: Review,
    pub user_name: String,
}

#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub hotel_id: i32,
    pub user_id: String,
    pub rating: f64,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateReviewParams {
    pub rating: Option<f64>,
    pub comment: Option<String>,
}

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateReviewDto {
    pub rating: f64,
    pub comment: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UpdateReviewDto {
    pub rating: Option<f64>,
    pub comment: Option<String>,
}

/// Review enriched with the reviewer's username for display.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ReviewDto {
    pub id: i32,
    pub hotel_id: i32,
    pub user_id: String,
    pub user_name: String,
    pub rating: f64,
    pub comment: Option<String>,
}

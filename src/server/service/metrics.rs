//! Derived hotel metrics.
//!
//! Recomputed inline after every booking create/delete and review
//! create/update/delete. The write volume here is low enough that keeping the
//! numbers transactionally fresh beats scheduling them.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, hotel::HotelRepository, review::ReviewRepository},
    error::AppError,
    util::math::round_to_tenth,
};

/// Window for the booking recency term of the popularity score, measured
/// against booking creation time, not check-in.
const RECENT_BOOKING_WINDOW_DAYS: i64 = 30;

const POPULARITY_BOOKING_WEIGHT: f64 = 0.5;
const POPULARITY_REVIEW_WEIGHT: f64 = 0.3;
const POPULARITY_STARS_WEIGHT: f64 = 0.2;

pub struct MetricsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MetricsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Recomputes and persists a hotel's stars and popularity.
    ///
    /// - stars: mean review rating rounded to one decimal, 0.0 with no reviews
    /// - popularity: weighted blend of recent bookings, total reviews, and
    ///   stars, rounded to one decimal
    ///
    /// Silently does nothing when the hotel id does not exist; callers
    /// validate existence on their own write paths.
    pub async fn recompute(&self, hotel_id: i32) -> Result<(), AppError> {
        let review_repo = ReviewRepository::new(self.db);
        let booking_repo = BookingRepository::new(self.db);

        let ratings = review_repo.list_ratings_for_hotel(hotel_id).await?;
        let total_reviews = ratings.len() as f64;

        let stars = if ratings.is_empty() {
            0.0
        } else {
            round_to_tenth(ratings.iter().sum::<f64>() / total_reviews)
        };

        let since = Utc::now() - Duration::days(RECENT_BOOKING_WINDOW_DAYS);
        let recent_bookings = booking_repo.count_created_since(hotel_id, since).await? as f64;

        let popularity = round_to_tenth(
            POPULARITY_BOOKING_WEIGHT * recent_bookings
                + POPULARITY_REVIEW_WEIGHT * total_reviews
                + POPULARITY_STARS_WEIGHT * stars,
        );

        HotelRepository::new(self.db)
            .update_metrics(hotel_id, stars, popularity)
            .await?;

        Ok(())
    }
}

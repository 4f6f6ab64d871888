//! Review lifecycle with ownership rules and metrics upkeep.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{hotel::HotelRepository, review::ReviewRepository, user::UserRepository},
    error::{auth::AuthError, validation::ValidationError, AppError},
    model::{
        review::{CreateReviewParams, Review, ReviewWithAuthor, UpdateReviewParams},
        user::User,
    },
    service::metrics::MetricsService,
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a hotel's reviews with each reviewer's username.
    pub async fn list_for_hotel(&self, hotel_id: i32) -> Result<Vec<ReviewWithAuthor>, AppError> {
        HotelRepository::new(self.db)
            .get_by_id(hotel_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hotel {} not found", hotel_id)))?;

        ReviewRepository::new(self.db)
            .list_for_hotel_with_authors(hotel_id)
            .await
            .map_err(AppError::from)
    }

    /// Creates a review and recomputes the hotel's metrics.
    pub async fn create(&self, params: CreateReviewParams) -> Result<ReviewWithAuthor, AppError> {
        validate_rating(params.rating)?;

        HotelRepository::new(self.db)
            .get_by_id(params.hotel_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hotel {} not found", params.hotel_id)))?;

        let review = ReviewRepository::new(self.db).create(params).await?;

        MetricsService::new(self.db)
            .recompute(review.hotel_id)
            .await?;

        self.with_author(review).await
    }

    /// Updates a review's rating or comment. Owner only, admin bypass.
    /// Recomputes the hotel's metrics afterwards.
    pub async fn update(
        &self,
        review_id: i32,
        acting: &User,
        params: UpdateReviewParams,
    ) -> Result<ReviewWithAuthor, AppError> {
        if let Some(rating) = params.rating {
            validate_rating(rating)?;
        }

        let repo = ReviewRepository::new(self.db);
        let current = repo
            .get_by_id(review_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Review {} not found", review_id)))?;

        self.ensure_owner_or_admin(&current, acting, "update review")?;

        let review = repo.update(review_id, params).await?;

        MetricsService::new(self.db)
            .recompute(review.hotel_id)
            .await?;

        self.with_author(review).await
    }

    /// Deletes a review. Owner only, admin bypass. Recomputes the hotel's
    /// metrics afterwards.
    pub async fn delete(&self, review_id: i32, acting: &User) -> Result<(), AppError> {
        let repo = ReviewRepository::new(self.db);
        let review = repo
            .get_by_id(review_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Review {} not found", review_id)))?;

        self.ensure_owner_or_admin(&review, acting, "delete review")?;

        repo.delete(review_id).await?;

        MetricsService::new(self.db)
            .recompute(review.hotel_id)
            .await?;

        Ok(())
    }

    async fn with_author(&self, review: Review) -> Result<ReviewWithAuthor, AppError> {
        let author = UserRepository::new(self.db)
            .find_by_id(&review.user_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Review {} references missing user {}",
                    review.id, review.user_id
                ))
            })?;

        Ok(ReviewWithAuthor {
            review,
            user_name: author.user_name,
        })
    }

    fn ensure_owner_or_admin(
        &self,
        review: &Review,
        acting: &User,
        action: &str,
    ) -> Result<(), AppError> {
        if review.user_id == acting.id || acting.role.is_admin() {
            Ok(())
        } else {
            Err(AuthError::AccessDenied {
                user_id: acting.id.clone(),
                action: format!("{} {} owned by another user", action, review.id),
            }
            .into())
        }
    }
}

fn validate_rating(rating: f64) -> Result<(), ValidationError> {
    let mut report = ValidationError::new();
    if !(1.0..=5.0).contains(&rating) {
        report.push("rating", "must be between 1 and 5");
    }
    report.into_result()
}

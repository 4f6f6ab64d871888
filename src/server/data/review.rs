use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::review::{
    CreateReviewParams, Review, ReviewWithAuthor, UpdateReviewParams,
};

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new review.
    ///
    /// # Returns
    /// - `Ok(Review)`: The created review
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, DbErr> {
        let review = entity::review::ActiveModel {
            hotel_id: ActiveValue::Set(params.hotel_id),
            user_id: ActiveValue::Set(params.user_id),
            rating: ActiveValue::Set(params.rating),
            comment: ActiveValue::Set(params.comment),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Review::from_entity(review))
    }

    /// Gets a review by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Review>, DbErr> {
        let review = entity::prelude::Review::find_by_id(id).one(self.db).await?;

        Ok(review.map(Review::from_entity))
    }

    /// Lists a hotel's reviews joined with each reviewer's username.
    ///
    /// Reviews whose author has since been deleted are skipped rather than
    /// surfaced with a placeholder name.
    pub async fn list_for_hotel_with_authors(
        &self,
        hotel_id: i32,
    ) -> Result<Vec<ReviewWithAuthor>, DbErr> {
        let rows = entity::prelude::Review::find()
            .filter(entity::review::Column::HotelId.eq(hotel_id))
            .order_by_asc(entity::review::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(review, user)| {
                user.map(|user| ReviewWithAuthor {
                    review: Review::from_entity(review),
                    user_name: user.user_name,
                })
            })
            .collect())
    }

    /// Lists the raw ratings for a hotel. Feeds the stars metric.
    pub async fn list_ratings_for_hotel(&self, hotel_id: i32) -> Result<Vec<f64>, DbErr> {
        let ratings = entity::prelude::Review::find()
            .filter(entity::review::Column::HotelId.eq(hotel_id))
            .select_only()
            .column(entity::review::Column::Rating)
            .into_tuple::<f64>()
            .all(self.db)
            .await?;

        Ok(ratings)
    }

    /// Counts all reviews for a hotel.
    pub async fn count_for_hotel(&self, hotel_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::HotelId.eq(hotel_id))
            .count(self.db)
            .await
    }

    /// Applies a partial update to a review.
    ///
    /// # Returns
    /// - `Ok(Review)`: The updated review
    /// - `Err(DbErr)`: Database error, `RecordNotFound` when the id does not exist
    pub async fn update(&self, id: i32, params: UpdateReviewParams) -> Result<Review, DbErr> {
        let review = entity::prelude::Review::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Review {} not found", id)))?;

        let mut active_model: entity::review::ActiveModel = review.into();

        if let Some(rating) = params.rating {
            active_model.rating = ActiveValue::Set(rating);
        }
        if let Some(comment) = params.comment {
            active_model.comment = ActiveValue::Set(Some(comment));
        }

        let updated = active_model.update(self.db).await?;

        Ok(Review::from_entity(updated))
    }

    /// Deletes a review by id.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Review::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::booking::{Booking, CreateBookingParams, UpdateBookingParams};

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new booking stamped with the current time.
    ///
    /// # Returns
    /// - `Ok(Booking)`: The created booking
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateBookingParams) -> Result<Booking, DbErr> {
        let booking = entity::booking::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            hotel_id: ActiveValue::Set(params.hotel_id),
            room_id: ActiveValue::Set(params.room_id),
            check_in: ActiveValue::Set(params.check_in),
            check_out: ActiveValue::Set(params.check_out),
            rooms_booked: ActiveValue::Set(params.rooms_booked),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(booking))
    }

    /// Gets a booking by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        let booking = entity::prelude::Booking::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(booking.map(Booking::from_entity))
    }

    /// Lists a user's bookings, most recent stay first.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<Booking>, DbErr> {
        let bookings = entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .order_by_desc(entity::booking::Column::CheckIn)
            .all(self.db)
            .await?;

        Ok(bookings.into_iter().map(Booking::from_entity).collect())
    }

    /// Applies a partial update to a booking. Ownership and inventory checks
    /// happen in the service layer before this is called.
    ///
    /// # Returns
    /// - `Ok(Booking)`: The updated booking
    /// - `Err(DbErr)`: Database error, `RecordNotFound` when the id does not exist
    pub async fn update(&self, id: i32, params: UpdateBookingParams) -> Result<Booking, DbErr> {
        let booking = entity::prelude::Booking::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Booking {} not found", id)))?;

        let mut active_model: entity::booking::ActiveModel = booking.into();

        if let Some(room_id) = params.room_id {
            active_model.room_id = ActiveValue::Set(room_id);
        }
        if let Some(check_in) = params.check_in {
            active_model.check_in = ActiveValue::Set(check_in);
        }
        if let Some(check_out) = params.check_out {
            active_model.check_out = ActiveValue::Set(check_out);
        }
        if let Some(rooms_booked) = params.rooms_booked {
            active_model.rooms_booked = ActiveValue::Set(rooms_booked);
        }

        let updated = active_model.update(self.db).await?;

        Ok(Booking::from_entity(updated))
    }

    /// Deletes a booking by id.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Booking::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Lists every booking overlapping the half-open window
    /// `[check_in, check_out)`, across all hotels. One bulk query feeds the
    /// whole search pipeline.
    ///
    /// Two half-open ranges overlap iff each starts before the other ends;
    /// back-to-back stays do not overlap.
    pub async fn list_overlapping(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Vec<Booking>, DbErr> {
        let bookings = entity::prelude::Booking::find()
            .filter(entity::booking::Column::CheckIn.lt(check_out))
            .filter(entity::booking::Column::CheckOut.gt(check_in))
            .all(self.db)
            .await?;

        Ok(bookings.into_iter().map(Booking::from_entity).collect())
    }

    /// Lists bookings for one hotel overlapping the half-open window,
    /// optionally excluding one booking (used when re-validating an update
    /// against inventory without counting the booking being moved).
    pub async fn list_overlapping_for_hotel(
        &self,
        hotel_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
        exclude_booking: Option<i32>,
    ) -> Result<Vec<Booking>, DbErr> {
        let mut query = entity::prelude::Booking::find()
            .filter(entity::booking::Column::HotelId.eq(hotel_id))
            .filter(entity::booking::Column::CheckIn.lt(check_out))
            .filter(entity::booking::Column::CheckOut.gt(check_in));

        if let Some(exclude_booking) = exclude_booking {
            query = query.filter(entity::booking::Column::Id.ne(exclude_booking));
        }

        let bookings = query.all(self.db).await?;

        Ok(bookings.into_iter().map(Booking::from_entity).collect())
    }

    /// Counts bookings created for a hotel since the given instant. Feeds the
    /// popularity recency term.
    pub async fn count_created_since(
        &self,
        hotel_id: i32,
        since: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::HotelId.eq(hotel_id))
            .filter(entity::booking::Column::CreatedAt.gte(since))
            .count(self.db)
            .await
    }
}

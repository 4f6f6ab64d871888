//! Booking factory for creating test booking entities.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use chrono::NaiveDate;
/// use test_utils::factory::booking::BookingFactory;
///
/// let booking = BookingFactory::new(&db, &user.id, hotel.id, room.id)
///     .stay(
///         NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///         NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
///     )
///     .rooms_booked(2)
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    hotel_id: i32,
    room_id: i32,
    check_in: NaiveDate,
    check_out: NaiveDate,
    rooms_booked: i32,
    created_at: chrono::DateTime<Utc>,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - stay: 2024-06-01 to 2024-06-05
    /// - rooms_booked: `1`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Owning user
    /// - `hotel_id` - Hotel being booked
    /// - `room_id` - Room type being booked
    ///
    /// # Returns
    /// - `BookingFactory` - New factory instance with defaults
    pub fn new(
        db: &'a DatabaseConnection,
        user_id: impl Into<String>,
        hotel_id: i32,
        room_id: i32,
    ) -> Self {
        Self {
            db,
            user_id: user_id.into(),
            hotel_id,
            room_id,
            check_in: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
            rooms_booked: 1,
            created_at: Utc::now(),
        }
    }

    /// Sets the half-open stay interval.
    pub fn stay(mut self, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        self.check_in = check_in;
        self.check_out = check_out;
        self
    }

    /// Sets the number of units booked.
    pub fn rooms_booked(mut self, rooms_booked: i32) -> Self {
        self.rooms_booked = rooms_booked;
        self
    }

    /// Sets the creation timestamp (drives the popularity recency window).
    pub fn created_at(mut self, created_at: chrono::DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::booking::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            hotel_id: ActiveValue::Set(self.hotel_id),
            room_id: ActiveValue::Set(self.room_id),
            check_in: ActiveValue::Set(self.check_in),
            check_out: ActiveValue::Set(self.check_out),
            rooms_booked: ActiveValue::Set(self.rooms_booked),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a booking with default values.
///
/// # Returns
/// - `Ok(entity::booking::Model)` - Created booking entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_booking(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
    hotel_id: i32,
    room_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, user_id, hotel_id, room_id)
        .build()
        .await
}

//! Domain models for booking operations.

use chrono::{DateTime, NaiveDate, Utc};

/// A reservation of `rooms_booked` units of one room type over a half-open
/// stay window `[check_in, check_out)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub user_id: String,
    pub hotel_id: i32,
    pub room_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub rooms_booked: i32,
    /// Creation timestamp; drives the popularity recency window.
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Converts an entity model to a booking domain model at the repository boundary.
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            hotel_id: entity.hotel_id,
            room_id: entity.room_id,
            check_in: entity.check_in,
            check_out: entity.check_out,
            rooms_booked: entity.rooms_booked,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a booking on behalf of the authenticated user.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub user_id: String,
    pub hotel_id: i32,
    pub room_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub rooms_booked: i32,
}

/// Parameters for updating an existing booking. Only provided fields change;
/// the merged result is re-validated as if it were a new booking.
#[derive(Debug, Clone, Default)]
pub struct UpdateBookingParams {
    pub room_id: Option<i32>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub rooms_booked: Option<i32>,
}

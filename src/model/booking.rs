use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateBookingDto {
    pub hotel_id: i32,
    pub room_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub rooms_booked: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UpdateBookingDto {
    pub room_id: Option<i32>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub rooms_booked: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct BookingDto {
    pub id: i32,
    pub user_id: String,
    pub hotel_id: i32,
    pub room_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub rooms_booked: i32,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

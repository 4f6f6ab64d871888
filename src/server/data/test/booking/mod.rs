use crate::server::{data::booking::BookingRepository, model::booking::CreateBookingParams};
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{
        self,
        booking::BookingFactory,
        helpers::{create_booking_dependencies, create_hotel_with_room},
    },
};

mod count_created_since;
mod create;
mod overlap;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

use crate::server::{
    error::{auth::AuthError, AppError},
    model::{
        booking::{CreateBookingParams, UpdateBookingParams},
        hotel::CreateHotelParams,
        review::{CreateReviewParams, UpdateReviewParams},
        search::SearchFilters,
        user::{RegisterUserParams, Role, UpdateUserParams, User},
    },
    service::{
        auth::AuthService, booking::BookingService, hotel::HotelService, metrics::MetricsService,
        review::ReviewService, user::UserService,
    },
};
use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory};

mod auth;
mod metrics;

const TEST_RADIUS_METERS: f64 = 500.0;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn domain(entity: entity::user::Model) -> User {
    User::from_entity(entity)
}

fn hotel_params(name: &str, city: &str, latitude: f64, longitude: f64) -> CreateHotelParams {
    CreateHotelParams {
        name: name.to_string(),
        description: None,
        city: city.to_string(),
        neighborhood: None,
        address: None,
        latitude,
        longitude,
        policies: None,
        rooms: Vec::new(),
        media: Vec::new(),
        amenity_ids: Vec::new(),
    }
}

fn register_params(user_name: &str) -> RegisterUserParams {
    RegisterUserParams {
        user_name: user_name.to_string(),
        password: "secret".to_string(),
        first_name: "Ana".to_string(),
        last_name: "Silva".to_string(),
        email_address: format!("{}@example.com", user_name),
        phone_number: "+351000000000".to_string(),
        address: "1 Test Street".to_string(),
        birth_date: date(1990, 1, 1),
    }
}

/// Panics unless the error is a validation report whose first violation names
/// the given field.
fn assert_validation_field(err: AppError, field: &str) {
    match err {
        AppError::ValidationErr(report) => {
            assert!(
                report.errors.iter().any(|e| e.field == field),
                "expected a violation on '{}', got {:?}",
                field,
                report.errors
            );
        }
        other => panic!("expected a validation error, got {:?}", other),
    }
}

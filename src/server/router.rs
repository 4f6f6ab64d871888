use axum::{
    routing::{get, post, put},
    Router,
};

use crate::server::{
    controller::{amenity, auth, booking, hotel, review, user},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/user", get(auth::current_user))
        .route("/api/users", post(user::register).get(user::list))
        .route("/api/users/by-name/{user_name}", get(user::get_by_user_name))
        .route("/api/users/{id}", put(user::update).delete(user::delete))
        .route("/api/hotels", get(hotel::search).post(hotel::create))
        .route(
            "/api/hotels/{id}",
            get(hotel::get).put(hotel::update).delete(hotel::delete),
        )
        .route("/api/hotels/{id}/rooms", post(hotel::add_rooms))
        .route("/api/hotels/{id}/media", post(hotel::add_media))
        .route("/api/hotels/{id}/amenities", post(hotel::add_amenities))
        .route(
            "/api/hotels/{hotel_id}/reviews",
            get(review::list_for_hotel).post(review::create),
        )
        .route(
            "/api/reviews/{id}",
            put(review::update).delete(review::delete),
        )
        .route("/api/bookings", post(booking::create).get(booking::list))
        .route(
            "/api/bookings/{id}",
            get(booking::get)
                .put(booking::update)
                .delete(booking::delete),
        )
        .route("/api/amenities", get(amenity::list).post(amenity::create))
        .route(
            "/api/amenities/{id}",
            get(amenity::get)
                .put(amenity::update)
                .delete(amenity::delete),
        )
}

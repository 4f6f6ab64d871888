pub mod amenity;
pub mod api;
pub mod auth;
pub mod booking;
pub mod hotel;
pub mod review;
pub mod user;

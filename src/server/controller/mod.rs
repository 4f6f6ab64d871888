//! HTTP request handlers.
//!
//! Controllers resolve authentication through the auth guard, convert wire
//! DTOs to domain parameter types, call services, and convert the results
//! back to DTOs.

pub mod amenity;
pub mod auth;
pub mod booking;
pub mod hotel;
pub mod review;
pub mod user;

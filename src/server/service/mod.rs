//! Business logic layer orchestrating between controllers and the data layer.
//!
//! Services own validation, access rules beyond the auth guard, and the
//! search/availability/metrics engines. They take a database connection by
//! reference and construct repositories as needed.

pub mod amenity;
pub mod auth;
pub mod availability;
pub mod booking;
pub mod geo;
pub mod hotel;
pub mod metrics;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;

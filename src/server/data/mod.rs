//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and convert
//! them to domain models at the boundary to maintain separation between the data layer and
//! business logic layer. All database queries, inserts, updates, and deletes are performed
//! through these repositories.

pub mod amenity;
pub mod booking;
pub mod hotel;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;

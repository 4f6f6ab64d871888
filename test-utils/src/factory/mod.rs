//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible
//! defaults, reducing boilerplate in tests. Factories automatically handle foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let hotel = factory::hotel::create_hotel(&db).await?;
//!     let room = factory::room::create_room(&db, hotel.id).await?;
//!
//!     // Create a hotel with one room in one call
//!     let (hotel, room) = factory::helpers::create_hotel_with_room(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory::hotel::HotelFactory;
//!
//! let hotel = HotelFactory::new(&db)
//!     .name("Pier Nine")
//!     .city("Lisbon")
//!     .coordinates(38.7223, -9.1393)
//!     .build()
//!     .await?;
//! ```

pub mod amenity;
pub mod booking;
pub mod helpers;
pub mod hotel;
pub mod media;
pub mod review;
pub mod room;
pub mod user;

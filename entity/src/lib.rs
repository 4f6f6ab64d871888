//! SeaORM entity models for the stayboard schema.

pub mod amenity;
pub mod booking;
pub mod hotel;
pub mod hotel_amenity;
pub mod media;
pub mod review;
pub mod room;
pub mod room_amenity;
pub mod user;

pub mod prelude {
    pub use super::amenity::Entity as Amenity;
    pub use super::booking::Entity as Booking;
    pub use super::hotel::Entity as Hotel;
    pub use super::hotel_amenity::Entity as HotelAmenity;
    pub use super::media::Entity as Media;
    pub use super::review::Entity as Review;
    pub use super::room::Entity as Room;
    pub use super::room_amenity::Entity as RoomAmenity;
    pub use super::user::Entity as User;
}

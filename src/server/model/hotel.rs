//! Domain models for the hotel catalog.
//!
//! Defines hotel, room, and media domain models plus the parameter types for
//! catalog mutations. Aggregates (`HotelWithRelations`, `RoomWithAmenities`)
//! are assembled at the repository boundary so the search and detail services
//! can work without issuing further queries per hotel.

use crate::server::model::amenity::Amenity;

/// Hotel listing with its derived metrics.
///
/// `stars` and `popularity` are maintained by the metrics service after every
/// booking or review write; they are never set directly by clients.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub city: String,
    pub neighborhood: Option<String>,
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub stars: f64,
    pub popularity: f64,
    pub policies: Option<String>,
}

impl Hotel {
    /// Converts an entity model to a hotel domain model at the repository boundary.
    pub fn from_entity(entity: entity::hotel::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            city: entity.city,
            neighborhood: entity.neighborhood,
            address: entity.address,
            latitude: entity.latitude,
            longitude: entity.longitude,
            stars: entity.stars,
            popularity: entity.popularity,
            policies: entity.policies,
        }
    }
}

/// Room type within a hotel. `total_units` is the inventory the availability
/// engine checks bookings against.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i32,
    pub hotel_id: i32,
    pub name: String,
    pub room_type: String,
    pub capacity: i32,
    pub base_price: f64,
    pub total_units: i32,
}

impl Room {
    pub fn from_entity(entity: entity::room::Model) -> Self {
        Self {
            id: entity.id,
            hotel_id: entity.hotel_id,
            name: entity.name,
            room_type: entity.room_type,
            capacity: entity.capacity,
            base_price: entity.base_price,
            total_units: entity.total_units,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Media {
    pub id: i32,
    pub hotel_id: i32,
    pub url: String,
    pub kind: String,
}

impl Media {
    pub fn from_entity(entity: entity::media::Model) -> Self {
        Self {
            id: entity.id,
            hotel_id: entity.hotel_id,
            url: entity.url,
            kind: entity.kind,
        }
    }
}

/// Hotel aggregate loaded with its rooms, media, and amenities in bulk.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelWithRelations {
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
    pub media: Vec<Media>,
    pub amenities: Vec<Amenity>,
}

/// Room with its attached amenities, used by the hotel detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomWithAmenities {
    pub room: Room,
    pub amenities: Vec<Amenity>,
}

/// Full hotel detail view: the aggregate plus per-room amenities and the
/// same price/distance enrichment the search results carry.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelDetail {
    pub hotel: Hotel,
    pub rooms: Vec<RoomWithAmenities>,
    pub media: Vec<Media>,
    pub amenities: Vec<Amenity>,
    pub min_price_general: Option<f64>,
    pub min_price_available: Option<f64>,
    pub distance_km: Option<f64>,
}

/// Parameters for creating a hotel, optionally with nested rooms, media, and
/// amenity attachments in one operation.
#[derive(Debug, Clone)]
pub struct CreateHotelParams {
    pub name: String,
    pub description: Option<String>,
    pub city: String,
    pub neighborhood: Option<String>,
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub policies: Option<String>,
    pub rooms: Vec<CreateRoomParams>,
    pub media: Vec<CreateMediaParams>,
    pub amenity_ids: Vec<i32>,
}

/// Parameters for a partial hotel update. Only provided fields change.
#[derive(Debug, Clone, Default)]
pub struct UpdateHotelParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub city: Option<String>,
    pub neighborhood: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub policies: Option<String>,
}

impl UpdateHotelParams {
    /// Whether this update can move the hotel relative to its neighbors and
    /// therefore requires the proximity guard to re-run.
    pub fn changes_location(&self) -> bool {
        self.latitude.is_some() || self.longitude.is_some() || self.city.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct CreateRoomParams {
    pub name: String,
    pub room_type: String,
    pub capacity: i32,
    pub base_price: f64,
    pub total_units: i32,
}

#[derive(Debug, Clone)]
pub struct CreateMediaParams {
    pub url: String,
    pub kind: String,
}

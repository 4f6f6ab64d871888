use serde::{Deserialize, Serialize};

use crate::model::amenity::AmenityDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateHotelDto {
    pub name: String,
    pub description: Option<String>,
    pub city: String,
    pub neighborhood: Option<String>,
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub policies: Option<String>,
    /// Nested payloads for one-shot hotel creation. All default to empty.
    #[serde(default)]
    pub rooms: Vec<CreateRoomDto>,
    #[serde(default)]
    pub media: Vec<CreateMediaDto>,
    #[serde(default)]
    pub amenity_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UpdateHotelDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub city: Option<String>,
    pub neighborhood: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub policies: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateRoomDto {
    pub name: String,
    pub room_type: String,
    pub capacity: i32,
    pub base_price: f64,
    pub total_units: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateMediaDto {
    pub url: String,
    pub kind: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct RoomDto {
    pub id: i32,
    pub hotel_id: i32,
    pub name: String,
    pub room_type: String,
    pub capacity: i32,
    pub base_price: f64,
    pub total_units: i32,
    pub amenities: Vec<AmenityDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct MediaDto {
    pub id: i32,
    pub url: String,
    pub kind: String,
}

/// Compact search-result row. Price and distance fields are null when the
/// underlying data cannot produce them (no rooms, no coordinates given).
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct HotelCardDto {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub neighborhood: Option<String>,
    pub stars: f64,
    pub popularity: f64,
    pub min_price_general: Option<f64>,
    pub min_price_available: Option<f64>,
    pub distance_km: Option<f64>,
    pub thumbnail: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct HotelDetailDto {
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
    pub min_price_general: Option<f64>,
    pub min_price_available: Option<f64>,
    pub distance_km: Option<f64>,
    pub rooms: Vec<RoomDto>,
    pub media: Vec<MediaDto>,
    pub amenities: Vec<AmenityDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct PageMetaDto {
    pub page: u64,
    pub size: u64,
    pub total: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct HotelSearchResultDto {
    pub meta: PageMetaDto,
    pub items: Vec<HotelCardDto>,
}

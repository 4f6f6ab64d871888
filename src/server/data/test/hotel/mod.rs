use crate::server::{
    data::hotel::HotelRepository,
    model::hotel::{CreateHotelParams, CreateMediaParams, CreateRoomParams, UpdateHotelParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_near_candidates;
mod list_with_relations;
mod update;
mod update_metrics;

fn hotel_params(name: &str) -> CreateHotelParams {
    CreateHotelParams {
        name: name.to_string(),
        description: None,
        city: "Lisbon".to_string(),
        neighborhood: None,
        address: None,
        latitude: 38.7223,
        longitude: -9.1393,
        policies: None,
        rooms: Vec::new(),
        media: Vec::new(),
        amenity_ids: Vec::new(),
    }
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::hotel::{
        CreateHotelDto, CreateMediaDto, CreateRoomDto, HotelCardDto, HotelDetailDto,
        HotelSearchResultDto, MediaDto, PageMetaDto, RoomDto, UpdateHotelDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            amenity::Amenity,
            hotel::{
                CreateHotelParams, CreateMediaParams, CreateRoomParams, HotelDetail, Media, Room,
                UpdateHotelParams,
            },
            search::{RankedHotel, SearchFilters},
        },
        service::hotel::HotelService,
        state::AppState,
    },
};

use super::amenity::amenity_to_dto;

/// Query string for hotel search. `amenities` is a comma-separated list of
/// codes.
#[derive(Deserialize, Default)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub city: Option<String>,
    pub neighborhood: Option<String>,
    pub amenities: Option<String>,
    pub room_type: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub stars_min: Option<f64>,
    pub stars_max: Option<f64>,
    pub user_lat: Option<f64>,
    pub user_lng: Option<f64>,
    pub sort: Option<String>,
    pub page: Option<u64>,
    pub size: Option<u64>,
}

impl SearchQuery {
    fn into_filters(self) -> SearchFilters {
        SearchFilters {
            q: self.q,
            city: self.city,
            neighborhood: self.neighborhood,
            amenities: self
                .amenities
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|code| !code.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            room_type: self.room_type,
            check_in: self.check_in,
            check_out: self.check_out,
            price_min: self.price_min,
            price_max: self.price_max,
            stars_min: self.stars_min,
            stars_max: self.stars_max,
            user_lat: self.user_lat,
            user_lng: self.user_lng,
            sort: self.sort,
            page: self.page,
            size: self.size,
        }
    }
}

/// Optional enrichment filters for the hotel detail view.
#[derive(Deserialize, Default)]
pub struct DetailQuery {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub user_lat: Option<f64>,
    pub user_lng: Option<f64>,
}

impl DetailQuery {
    fn into_filters(self) -> SearchFilters {
        SearchFilters {
            check_in: self.check_in,
            check_out: self.check_out,
            user_lat: self.user_lat,
            user_lng: self.user_lng,
            ..Default::default()
        }
    }
}

fn room_to_dto(room: Room, amenities: Vec<Amenity>) -> RoomDto {
    RoomDto {
        id: room.id,
        hotel_id: room.hotel_id,
        name: room.name,
        room_type: room.room_type,
        capacity: room.capacity,
        base_price: room.base_price,
        total_units: room.total_units,
        amenities: amenities.into_iter().map(amenity_to_dto).collect(),
    }
}

fn media_to_dto(media: Media) -> MediaDto {
    MediaDto {
        id: media.id,
        url: media.url,
        kind: media.kind,
    }
}

fn card_to_dto(ranked: RankedHotel) -> HotelCardDto {
    HotelCardDto {
        id: ranked.hotel.id,
        name: ranked.hotel.name,
        city: ranked.hotel.city,
        neighborhood: ranked.hotel.neighborhood,
        stars: ranked.hotel.stars,
        popularity: ranked.hotel.popularity,
        min_price_general: ranked.min_price_general,
        min_price_available: ranked.min_price_available,
        distance_km: ranked.distance_km,
        thumbnail: ranked.thumbnail,
    }
}

fn detail_to_dto(detail: HotelDetail) -> HotelDetailDto {
    HotelDetailDto {
        id: detail.hotel.id,
        name: detail.hotel.name,
        description: detail.hotel.description,
        city: detail.hotel.city,
        neighborhood: detail.hotel.neighborhood,
        address: detail.hotel.address,
        latitude: detail.hotel.latitude,
        longitude: detail.hotel.longitude,
        stars: detail.hotel.stars,
        popularity: detail.hotel.popularity,
        policies: detail.hotel.policies,
        min_price_general: detail.min_price_general,
        min_price_available: detail.min_price_available,
        distance_km: detail.distance_km,
        rooms: detail
            .rooms
            .into_iter()
            .map(|entry| room_to_dto(entry.room, entry.amenities))
            .collect(),
        media: detail.media.into_iter().map(media_to_dto).collect(),
        amenities: detail.amenities.into_iter().map(amenity_to_dto).collect(),
    }
}

fn room_params(dto: CreateRoomDto) -> CreateRoomParams {
    CreateRoomParams {
        name: dto.name,
        room_type: dto.room_type,
        capacity: dto.capacity,
        base_price: dto.base_price,
        total_units: dto.total_units,
    }
}

fn media_params(dto: CreateMediaDto) -> CreateMediaParams {
    CreateMediaParams {
        url: dto.url,
        kind: dto.kind,
    }
}

/// GET /api/hotels
/// Availability-aware search with filtering, ranking, and pagination.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = HotelService::new(&state.db, state.proximity_radius_meters)
        .search(query.into_filters())
        .await?;

    let dto = HotelSearchResultDto {
        meta: PageMetaDto {
            page: page.page,
            size: page.size,
            total: page.total,
        },
        items: page.items.into_iter().map(card_to_dto).collect(),
    };

    Ok((StatusCode::OK, Json(dto)))
}

/// GET /api/hotels/{id}
/// Full hotel detail with optional date/location enrichment.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<DetailQuery>,
) -> Result<impl IntoResponse, AppError> {
    let detail = HotelService::new(&state.db, state.proximity_radius_meters)
        .get(id, query.into_filters())
        .await?;

    Ok((StatusCode::OK, Json(detail_to_dto(detail))))
}

/// POST /api/hotels
/// Create a hotel, optionally with nested rooms, media, and amenities.
/// Admin only.
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateHotelDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = HotelService::new(&state.db, state.proximity_radius_meters);

    let created = service
        .create(CreateHotelParams {
            name: dto.name,
            description: dto.description,
            city: dto.city,
            neighborhood: dto.neighborhood,
            address: dto.address,
            latitude: dto.latitude,
            longitude: dto.longitude,
            policies: dto.policies,
            rooms: dto.rooms.into_iter().map(room_params).collect(),
            media: dto.media.into_iter().map(media_params).collect(),
            amenity_ids: dto.amenity_ids,
        })
        .await?;

    let detail = service
        .get(created.hotel.id, SearchFilters::default())
        .await?;

    Ok((StatusCode::CREATED, Json(detail_to_dto(detail))))
}

/// PUT /api/hotels/{id}
/// Partial update; relocating re-runs the proximity guard. Admin only.
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateHotelDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = HotelService::new(&state.db, state.proximity_radius_meters);

    service
        .update(
            id,
            UpdateHotelParams {
                name: dto.name,
                description: dto.description,
                city: dto.city,
                neighborhood: dto.neighborhood,
                address: dto.address,
                latitude: dto.latitude,
                longitude: dto.longitude,
                policies: dto.policies,
            },
        )
        .await?;

    let detail = service.get(id, SearchFilters::default()).await?;

    Ok((StatusCode::OK, Json(detail_to_dto(detail))))
}

/// DELETE /api/hotels/{id}
/// Admin only. Rooms, media, bookings, and reviews cascade.
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    HotelService::new(&state.db, state.proximity_radius_meters)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/hotels/{id}/rooms
/// Add rooms to an existing hotel. Admin only.
pub async fn add_rooms(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(dtos): Json<Vec<CreateRoomDto>>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let rooms = HotelService::new(&state.db, state.proximity_radius_meters)
        .add_rooms(id, dtos.into_iter().map(room_params).collect())
        .await?;

    let dtos: Vec<RoomDto> = rooms
        .into_iter()
        .map(|room| room_to_dto(room, Vec::new()))
        .collect();

    Ok((StatusCode::CREATED, Json(dtos)))
}

/// POST /api/hotels/{id}/media
/// Add media to an existing hotel. Admin only.
pub async fn add_media(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(dtos): Json<Vec<CreateMediaDto>>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let media = HotelService::new(&state.db, state.proximity_radius_meters)
        .add_media(id, dtos.into_iter().map(media_params).collect())
        .await?;

    let dtos: Vec<MediaDto> = media.into_iter().map(media_to_dto).collect();

    Ok((StatusCode::CREATED, Json(dtos)))
}

/// POST /api/hotels/{id}/amenities
/// Attach existing amenities to a hotel. Admin only.
pub async fn add_amenities(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(amenity_ids): Json<Vec<i32>>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    HotelService::new(&state.db, state.proximity_radius_meters)
        .add_amenities(id, amenity_ids)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

//! Hotel catalog management plus the search and ranking pipeline.
//!
//! Search loads every hotel aggregate in one pass, filters in memory, and
//! issues a single bulk booking query for date-aware pricing. The catalog is
//! small enough that this stays well under one query per hotel; revisit if a
//! deployment ever exceeds a few thousand listings.

use std::cmp::Ordering;

use sea_orm::DatabaseConnection;

use crate::{
    model::api::ConflictingHotelDto,
    server::{
        data::{amenity::AmenityRepository, booking::BookingRepository, hotel::HotelRepository},
        error::{validation::ValidationError, AppError},
        model::{
            hotel::{
                CreateHotelParams, CreateMediaParams, CreateRoomParams, Hotel, HotelDetail,
                HotelWithRelations, Media, Room, UpdateHotelParams,
            },
            search::{RankedHotel, SearchFilters, SearchPage, SortKey},
        },
        service::{availability, availability::AvailabilityService, geo},
    },
};

pub struct HotelService<'a> {
    db: &'a DatabaseConnection,
    proximity_radius_meters: f64,
}

impl<'a> HotelService<'a> {
    pub fn new(db: &'a DatabaseConnection, proximity_radius_meters: f64) -> Self {
        Self {
            db,
            proximity_radius_meters,
        }
    }

    /// Creates a hotel (optionally with nested rooms, media, and amenities)
    /// after checking coordinates and spacing against existing hotels.
    pub async fn create(&self, params: CreateHotelParams) -> Result<HotelWithRelations, AppError> {
        validate_coordinates(params.latitude, params.longitude)?;
        validate_rooms(&params.rooms)?;
        self.ensure_amenities_exist(&params.amenity_ids).await?;
        self.ensure_spacing(&params.city, params.latitude, params.longitude, None)
            .await?;

        HotelRepository::new(self.db)
            .create(params)
            .await
            .map_err(AppError::from)
    }

    /// Full hotel detail with the same optional date/location enrichment the
    /// search results carry. The optional filters are validated with the same
    /// cross-field rules as search.
    pub async fn get(&self, hotel_id: i32, filters: SearchFilters) -> Result<HotelDetail, AppError> {
        filters.validate()?;

        let repo = HotelRepository::new(self.db);
        let aggregate = repo
            .get_with_relations(hotel_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hotel {} not found", hotel_id)))?;

        let rooms = repo.list_rooms_with_amenities(hotel_id).await?;

        let min_price_general = availability::min_general_price(&aggregate.rooms);
        let min_price_available = match filters.date_range() {
            Some((check_in, check_out)) => {
                AvailabilityService::new(self.db)
                    .min_available_price(hotel_id, check_in, check_out)
                    .await?
            }
            None => None,
        };

        let distance_km = filters.user_location().map(|(lat, lng)| {
            geo::distance_km(lat, lng, aggregate.hotel.latitude, aggregate.hotel.longitude)
        });

        Ok(HotelDetail {
            hotel: aggregate.hotel,
            rooms,
            media: aggregate.media,
            amenities: aggregate.amenities,
            min_price_general,
            min_price_available,
            distance_km,
        })
    }

    /// Runs the search pipeline: validate, filter, enrich, rank, paginate.
    pub async fn search(&self, filters: SearchFilters) -> Result<SearchPage, AppError> {
        let sort = filters.validate()?;

        let aggregates = HotelRepository::new(self.db).list_with_relations().await?;

        // One bulk query covers date-aware pricing for every hotel.
        let booked_by_room = match filters.date_range() {
            Some((check_in, check_out)) => {
                let bookings = BookingRepository::new(self.db)
                    .list_overlapping(check_in, check_out)
                    .await?;
                Some(availability::booked_units_by_room(&bookings))
            }
            None => None,
        };

        let mut items: Vec<RankedHotel> = aggregates
            .into_iter()
            .filter(|aggregate| matches_filters(aggregate, &filters))
            .map(|aggregate| enrich(aggregate, &filters, booked_by_room.as_ref()))
            .filter(|ranked| matches_price_range(ranked, &filters))
            .filter(|ranked| matches_stars_range(ranked, &filters))
            .collect();

        rank(&mut items, sort);

        let total = items.len() as u64;
        let page = filters.page();
        let size = filters.size();
        let items = items
            .into_iter()
            .skip(((page - 1) * size) as usize)
            .take(size as usize)
            .collect();

        Ok(SearchPage {
            page,
            size,
            total,
            items,
        })
    }

    /// Applies a partial update. The proximity guard re-runs only when the
    /// update can actually move the hotel relative to its neighbors.
    pub async fn update(&self, hotel_id: i32, params: UpdateHotelParams) -> Result<Hotel, AppError> {
        let repo = HotelRepository::new(self.db);
        let current = repo
            .get_by_id(hotel_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hotel {} not found", hotel_id)))?;

        let latitude = params.latitude.unwrap_or(current.latitude);
        let longitude = params.longitude.unwrap_or(current.longitude);
        validate_coordinates(latitude, longitude)?;

        if params.changes_location() {
            let city = params.city.as_deref().unwrap_or(&current.city);
            self.ensure_spacing(city, latitude, longitude, Some(hotel_id))
                .await?;
        }

        repo.update(hotel_id, params).await.map_err(AppError::from)
    }

    pub async fn delete(&self, hotel_id: i32) -> Result<(), AppError> {
        let repo = HotelRepository::new(self.db);
        repo.get_by_id(hotel_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hotel {} not found", hotel_id)))?;

        repo.delete(hotel_id).await.map_err(AppError::from)
    }

    /// Adds rooms to an existing hotel.
    pub async fn add_rooms(
        &self,
        hotel_id: i32,
        rooms: Vec<CreateRoomParams>,
    ) -> Result<Vec<Room>, AppError> {
        validate_rooms(&rooms)?;

        let repo = HotelRepository::new(self.db);
        repo.get_by_id(hotel_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hotel {} not found", hotel_id)))?;

        repo.add_rooms(hotel_id, rooms).await.map_err(AppError::from)
    }

    /// Adds media to an existing hotel.
    pub async fn add_media(
        &self,
        hotel_id: i32,
        media: Vec<CreateMediaParams>,
    ) -> Result<Vec<Media>, AppError> {
        let repo = HotelRepository::new(self.db);
        repo.get_by_id(hotel_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hotel {} not found", hotel_id)))?;

        repo.add_media(hotel_id, media).await.map_err(AppError::from)
    }

    /// Attaches existing amenities to an existing hotel.
    pub async fn add_amenities(&self, hotel_id: i32, amenity_ids: Vec<i32>) -> Result<(), AppError> {
        let repo = HotelRepository::new(self.db);
        repo.get_by_id(hotel_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hotel {} not found", hotel_id)))?;

        self.ensure_amenities_exist(&amenity_ids).await?;

        repo.add_amenities(hotel_id, amenity_ids)
            .await
            .map_err(AppError::from)
    }

    async fn ensure_amenities_exist(&self, amenity_ids: &[i32]) -> Result<(), AppError> {
        if amenity_ids.is_empty() {
            return Ok(());
        }

        let existing = AmenityRepository::new(self.db)
            .count_existing(amenity_ids)
            .await?;

        if existing < amenity_ids.len() as u64 {
            return Err(AppError::NotFound(
                "One or more amenities not found".to_string(),
            ));
        }

        Ok(())
    }

    /// Rejects the location when another hotel in the same city sits within
    /// the configured radius. Candidates are pre-filtered with a bounding box
    /// before the exact haversine check.
    async fn ensure_spacing(
        &self,
        city: &str,
        latitude: f64,
        longitude: f64,
        exclude_id: Option<i32>,
    ) -> Result<(), AppError> {
        let delta = geo::bounding_box_delta_degrees(self.proximity_radius_meters);

        let candidates = HotelRepository::new(self.db)
            .find_near_candidates(city, latitude, longitude, delta, exclude_id)
            .await?;

        let conflicts: Vec<ConflictingHotelDto> = candidates
            .into_iter()
            .filter(|candidate| {
                let distance_meters =
                    geo::distance_km(latitude, longitude, candidate.latitude, candidate.longitude)
                        * 1000.0;
                distance_meters <= self.proximity_radius_meters
            })
            .map(|candidate| ConflictingHotelDto {
                id: candidate.id,
                name: candidate.name,
            })
            .collect();

        if conflicts.is_empty() {
            Ok(())
        } else {
            Err(AppError::ProximityConflict {
                radius_meters: self.proximity_radius_meters,
                conflicts,
            })
        }
    }
}

fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), ValidationError> {
    let mut report = ValidationError::new();

    if !(-90.0..=90.0).contains(&latitude) {
        report.push("latitude", "must be between -90 and 90");
    }
    if !(-180.0..=180.0).contains(&longitude) {
        report.push("longitude", "must be between -180 and 180");
    }

    report.into_result()
}

fn validate_rooms(rooms: &[CreateRoomParams]) -> Result<(), ValidationError> {
    let mut report = ValidationError::new();

    for (index, room) in rooms.iter().enumerate() {
        if room.capacity <= 0 {
            report.push(format!("rooms[{}].capacity", index), "must be greater than 0");
        }
        if room.base_price <= 0.0 {
            report.push(
                format!("rooms[{}].base_price", index),
                "must be greater than 0",
            );
        }
        if room.total_units < 0 {
            report.push(format!("rooms[{}].total_units", index), "must not be negative");
        }
    }

    report.into_result()
}

/// Text and containment filters that need no enrichment.
fn matches_filters(aggregate: &HotelWithRelations, filters: &SearchFilters) -> bool {
    let hotel = &aggregate.hotel;

    if let Some(q) = &filters.q {
        if !hotel.name.to_lowercase().contains(&q.to_lowercase()) {
            return false;
        }
    }

    if let Some(city) = &filters.city {
        if !hotel.city.to_lowercase().contains(&city.to_lowercase()) {
            return false;
        }
    }

    if let Some(neighborhood) = &filters.neighborhood {
        let matches = hotel
            .neighborhood
            .as_ref()
            .map(|value| value.to_lowercase().contains(&neighborhood.to_lowercase()))
            .unwrap_or(false);
        if !matches {
            return false;
        }
    }

    if !filters.amenities.is_empty() {
        let has_all = filters.amenities.iter().all(|code| {
            aggregate
                .amenities
                .iter()
                .any(|amenity| amenity.code == *code)
        });
        if !has_all {
            return false;
        }
    }

    if let Some(room_type) = &filters.room_type {
        let any_room = aggregate
            .rooms
            .iter()
            .any(|room| room.room_type == *room_type);
        if !any_room {
            return false;
        }
    }

    true
}

fn enrich(
    aggregate: HotelWithRelations,
    filters: &SearchFilters,
    booked_by_room: Option<&std::collections::HashMap<i32, i32>>,
) -> RankedHotel {
    let min_price_general = availability::min_general_price(&aggregate.rooms);
    let min_price_available =
        booked_by_room.and_then(|booked| availability::min_available_price(&aggregate.rooms, booked));

    let distance_km = filters.user_location().map(|(lat, lng)| {
        geo::distance_km(lat, lng, aggregate.hotel.latitude, aggregate.hotel.longitude)
    });

    let thumbnail = aggregate.media.first().map(|media| media.url.clone());

    RankedHotel {
        hotel: aggregate.hotel,
        min_price_general,
        min_price_available,
        distance_km,
        thumbnail,
    }
}

/// Price bounds apply to the effective price; a hotel with no price at all is
/// excluded whenever any bound is present.
fn matches_price_range(ranked: &RankedHotel, filters: &SearchFilters) -> bool {
    if !filters.has_price_bound() {
        return true;
    }

    let Some(price) = ranked.effective_price() else {
        return false;
    };

    if let Some(price_min) = filters.price_min {
        if price < price_min {
            return false;
        }
    }
    if let Some(price_max) = filters.price_max {
        if price > price_max {
            return false;
        }
    }

    true
}

fn matches_stars_range(ranked: &RankedHotel, filters: &SearchFilters) -> bool {
    if let Some(stars_min) = filters.stars_min {
        if ranked.hotel.stars < stars_min {
            return false;
        }
    }
    if let Some(stars_max) = filters.stars_max {
        if ranked.hotel.stars > stars_max {
            return false;
        }
    }
    true
}

/// Stable sort over the already-id-ordered list, so equal keys keep id order.
/// Missing prices and distances sink to the end via +infinity.
fn rank(items: &mut [RankedHotel], sort: SortKey) {
    match sort {
        // Repository order is already ascending by id.
        SortKey::Id => {}
        SortKey::Price => items.sort_by(|a, b| {
            let a = a.effective_price().unwrap_or(f64::INFINITY);
            let b = b.effective_price().unwrap_or(f64::INFINITY);
            a.total_cmp(&b)
        }),
        SortKey::Distance => items.sort_by(|a, b| {
            let a = a.distance_km.unwrap_or(f64::INFINITY);
            let b = b.distance_km.unwrap_or(f64::INFINITY);
            a.total_cmp(&b)
        }),
        SortKey::Stars => items.sort_by(|a, b| {
            b.hotel
                .stars
                .partial_cmp(&a.hotel.stars)
                .unwrap_or(Ordering::Equal)
        }),
        SortKey::Popularity => items.sort_by(|a, b| {
            b.hotel
                .popularity
                .partial_cmp(&a.hotel.popularity)
                .unwrap_or(Ordering::Equal)
        }),
    }
}

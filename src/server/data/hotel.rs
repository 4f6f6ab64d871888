use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    LoaderTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    amenity::Amenity,
    hotel::{
        CreateHotelParams, CreateMediaParams, CreateRoomParams, Hotel, HotelWithRelations, Media,
        Room, RoomWithAmenities, UpdateHotelParams,
    },
};

pub struct HotelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a hotel together with any nested rooms, media, and amenity
    /// attachments. Derived metrics start at zero.
    ///
    /// # Returns
    /// - `Ok(HotelWithRelations)`: The created hotel aggregate
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateHotelParams) -> Result<HotelWithRelations, DbErr> {
        let hotel = entity::hotel::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            city: ActiveValue::Set(params.city),
            neighborhood: ActiveValue::Set(params.neighborhood),
            address: ActiveValue::Set(params.address),
            latitude: ActiveValue::Set(params.latitude),
            longitude: ActiveValue::Set(params.longitude),
            stars: ActiveValue::Set(0.0),
            popularity: ActiveValue::Set(0.0),
            policies: ActiveValue::Set(params.policies),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let rooms = self.add_rooms(hotel.id, params.rooms).await?;
        let media = self.add_media(hotel.id, params.media).await?;
        self.add_amenities(hotel.id, params.amenity_ids).await?;
        let amenities = self.list_amenities(hotel.id).await?;

        Ok(HotelWithRelations {
            hotel: Hotel::from_entity(hotel),
            rooms,
            media,
            amenities,
        })
    }

    /// Gets a hotel by id without its relations.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Hotel>, DbErr> {
        let hotel = entity::prelude::Hotel::find_by_id(id).one(self.db).await?;

        Ok(hotel.map(Hotel::from_entity))
    }

    /// Gets a hotel aggregate with rooms, media, and amenities.
    pub async fn get_with_relations(&self, id: i32) -> Result<Option<HotelWithRelations>, DbErr> {
        let Some(hotel) = entity::prelude::Hotel::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let hotels = vec![hotel];
        let mut aggregates = self.load_relations(hotels).await?;

        Ok(aggregates.pop())
    }

    /// Lists every hotel aggregate ordered by id, with rooms, media, and
    /// amenities loaded in bulk. The search pipeline filters in memory.
    pub async fn list_with_relations(&self) -> Result<Vec<HotelWithRelations>, DbErr> {
        let hotels = entity::prelude::Hotel::find()
            .order_by_asc(entity::hotel::Column::Id)
            .all(self.db)
            .await?;

        self.load_relations(hotels).await
    }

    async fn load_relations(
        &self,
        hotels: Vec<entity::hotel::Model>,
    ) -> Result<Vec<HotelWithRelations>, DbErr> {
        let rooms = hotels.load_many(entity::prelude::Room, self.db).await?;
        // The first media item is the thumbnail, so its order must be stable.
        let media = hotels
            .load_many(
                entity::prelude::Media::find().order_by_asc(entity::media::Column::Id),
                self.db,
            )
            .await?;
        let amenities = hotels
            .load_many_to_many(
                entity::prelude::Amenity,
                entity::prelude::HotelAmenity,
                self.db,
            )
            .await?;

        Ok(hotels
            .into_iter()
            .zip(rooms)
            .zip(media)
            .zip(amenities)
            .map(|(((hotel, rooms), media), amenities)| HotelWithRelations {
                hotel: Hotel::from_entity(hotel),
                rooms: rooms.into_iter().map(Room::from_entity).collect(),
                media: media.into_iter().map(Media::from_entity).collect(),
                amenities: amenities.into_iter().map(Amenity::from_entity).collect(),
            })
            .collect())
    }

    /// Applies a partial update to a hotel. Metrics columns are not touched
    /// here; they belong to the metrics service.
    ///
    /// # Returns
    /// - `Ok(Hotel)`: The updated hotel
    /// - `Err(DbErr)`: Database error, `RecordNotFound` when the id does not exist
    pub async fn update(&self, id: i32, params: UpdateHotelParams) -> Result<Hotel, DbErr> {
        let hotel = entity::prelude::Hotel::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Hotel {} not found", id)))?;

        let mut active_model: entity::hotel::ActiveModel = hotel.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(city) = params.city {
            active_model.city = ActiveValue::Set(city);
        }
        if let Some(neighborhood) = params.neighborhood {
            active_model.neighborhood = ActiveValue::Set(Some(neighborhood));
        }
        if let Some(address) = params.address {
            active_model.address = ActiveValue::Set(Some(address));
        }
        if let Some(latitude) = params.latitude {
            active_model.latitude = ActiveValue::Set(latitude);
        }
        if let Some(longitude) = params.longitude {
            active_model.longitude = ActiveValue::Set(longitude);
        }
        if let Some(policies) = params.policies {
            active_model.policies = ActiveValue::Set(Some(policies));
        }

        let updated = active_model.update(self.db).await?;

        Ok(Hotel::from_entity(updated))
    }

    /// Deletes a hotel by id. Rooms, media, bookings, reviews, and amenity
    /// joins cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Hotel::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Inserts rooms for a hotel.
    pub async fn add_rooms(
        &self,
        hotel_id: i32,
        rooms: Vec<CreateRoomParams>,
    ) -> Result<Vec<Room>, DbErr> {
        let mut created = Vec::with_capacity(rooms.len());

        for params in rooms {
            let room = entity::room::ActiveModel {
                hotel_id: ActiveValue::Set(hotel_id),
                name: ActiveValue::Set(params.name),
                room_type: ActiveValue::Set(params.room_type),
                capacity: ActiveValue::Set(params.capacity),
                base_price: ActiveValue::Set(params.base_price),
                total_units: ActiveValue::Set(params.total_units),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            created.push(Room::from_entity(room));
        }

        Ok(created)
    }

    /// Inserts media items for a hotel.
    pub async fn add_media(
        &self,
        hotel_id: i32,
        media: Vec<CreateMediaParams>,
    ) -> Result<Vec<Media>, DbErr> {
        let mut created = Vec::with_capacity(media.len());

        for params in media {
            let item = entity::media::ActiveModel {
                hotel_id: ActiveValue::Set(hotel_id),
                url: ActiveValue::Set(params.url),
                kind: ActiveValue::Set(params.kind),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            created.push(Media::from_entity(item));
        }

        Ok(created)
    }

    /// Attaches amenities to a hotel. Already-attached amenities are skipped.
    pub async fn add_amenities(&self, hotel_id: i32, amenity_ids: Vec<i32>) -> Result<(), DbErr> {
        if amenity_ids.is_empty() {
            return Ok(());
        }

        let models = amenity_ids
            .into_iter()
            .map(|amenity_id| entity::hotel_amenity::ActiveModel {
                hotel_id: ActiveValue::Set(hotel_id),
                amenity_id: ActiveValue::Set(amenity_id),
            });

        entity::prelude::HotelAmenity::insert_many(models)
            .on_conflict(
                OnConflict::columns([
                    entity::hotel_amenity::Column::HotelId,
                    entity::hotel_amenity::Column::AmenityId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Lists the amenities attached to a hotel.
    pub async fn list_amenities(&self, hotel_id: i32) -> Result<Vec<Amenity>, DbErr> {
        let Some(hotel) = entity::prelude::Hotel::find_by_id(hotel_id)
            .one(self.db)
            .await?
        else {
            return Ok(Vec::new());
        };

        let amenities = vec![hotel]
            .load_many_to_many(
                entity::prelude::Amenity,
                entity::prelude::HotelAmenity,
                self.db,
            )
            .await?;

        Ok(amenities
            .into_iter()
            .flatten()
            .map(Amenity::from_entity)
            .collect())
    }

    /// Gets a single room by id.
    pub async fn get_room(&self, room_id: i32) -> Result<Option<Room>, DbErr> {
        let room = entity::prelude::Room::find_by_id(room_id)
            .one(self.db)
            .await?;

        Ok(room.map(Room::from_entity))
    }

    /// Lists the rooms of a hotel.
    pub async fn list_rooms(&self, hotel_id: i32) -> Result<Vec<Room>, DbErr> {
        let rooms = entity::prelude::Room::find()
            .filter(entity::room::Column::HotelId.eq(hotel_id))
            .order_by_asc(entity::room::Column::Id)
            .all(self.db)
            .await?;

        Ok(rooms.into_iter().map(Room::from_entity).collect())
    }

    /// Lists the rooms of a hotel with their amenities, for the detail view.
    pub async fn list_rooms_with_amenities(
        &self,
        hotel_id: i32,
    ) -> Result<Vec<RoomWithAmenities>, DbErr> {
        let rooms = entity::prelude::Room::find()
            .filter(entity::room::Column::HotelId.eq(hotel_id))
            .order_by_asc(entity::room::Column::Id)
            .all(self.db)
            .await?;

        let amenities = rooms
            .load_many_to_many(
                entity::prelude::Amenity,
                entity::prelude::RoomAmenity,
                self.db,
            )
            .await?;

        Ok(rooms
            .into_iter()
            .zip(amenities)
            .map(|(room, amenities)| RoomWithAmenities {
                room: Room::from_entity(room),
                amenities: amenities.into_iter().map(Amenity::from_entity).collect(),
            })
            .collect())
    }

    /// Finds hotels in the same city inside a bounding box around the given
    /// point, optionally excluding one hotel. Used as the cheap pre-filter
    /// before the exact haversine check.
    pub async fn find_near_candidates(
        &self,
        city: &str,
        latitude: f64,
        longitude: f64,
        delta_degrees: f64,
        exclude_id: Option<i32>,
    ) -> Result<Vec<Hotel>, DbErr> {
        let mut query = entity::prelude::Hotel::find()
            .filter(entity::hotel::Column::City.eq(city))
            .filter(
                entity::hotel::Column::Latitude
                    .between(latitude - delta_degrees, latitude + delta_degrees),
            )
            .filter(
                entity::hotel::Column::Longitude
                    .between(longitude - delta_degrees, longitude + delta_degrees),
            );

        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::hotel::Column::Id.ne(exclude_id));
        }

        let hotels = query
            .order_by_asc(entity::hotel::Column::Id)
            .all(self.db)
            .await?;

        Ok(hotels.into_iter().map(Hotel::from_entity).collect())
    }

    /// Persists derived metrics onto a hotel. Silently does nothing when the
    /// hotel id does not exist.
    pub async fn update_metrics(
        &self,
        hotel_id: i32,
        stars: f64,
        popularity: f64,
    ) -> Result<(), DbErr> {
        entity::prelude::Hotel::update_many()
            .col_expr(entity::hotel::Column::Stars, Expr::value(stars))
            .col_expr(entity::hotel::Column::Popularity, Expr::value(popularity))
            .filter(entity::hotel::Column::Id.eq(hotel_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}

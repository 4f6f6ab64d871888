use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::amenity::{Amenity, CreateAmenityParams, UpdateAmenityParams};

pub struct AmenityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AmenityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new amenity.
    ///
    /// # Returns
    /// - `Ok(Amenity)`: The created amenity
    /// - `Err(DbErr)`: Database error, including unique violations on code
    pub async fn create(&self, params: CreateAmenityParams) -> Result<Amenity, DbErr> {
        let amenity = entity::amenity::ActiveModel {
            code: ActiveValue::Set(params.code),
            label: ActiveValue::Set(params.label),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Amenity::from_entity(amenity))
    }

    /// Gets an amenity by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Amenity>, DbErr> {
        let amenity = entity::prelude::Amenity::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(amenity.map(Amenity::from_entity))
    }

    /// Lists the full amenity catalog ordered by code.
    pub async fn list(&self) -> Result<Vec<Amenity>, DbErr> {
        let amenities = entity::prelude::Amenity::find()
            .order_by_asc(entity::amenity::Column::Code)
            .all(self.db)
            .await?;

        Ok(amenities.into_iter().map(Amenity::from_entity).collect())
    }

    /// Counts how many of the given amenity ids exist in the catalog.
    pub async fn count_existing(&self, ids: &[i32]) -> Result<u64, DbErr> {
        entity::prelude::Amenity::find()
            .filter(entity::amenity::Column::Id.is_in(ids.iter().copied()))
            .count(self.db)
            .await
    }

    /// Applies a partial update to an amenity.
    ///
    /// # Returns
    /// - `Ok(Amenity)`: The updated amenity
    /// - `Err(DbErr)`: Database error, `RecordNotFound` when the id does not exist
    pub async fn update(&self, id: i32, params: UpdateAmenityParams) -> Result<Amenity, DbErr> {
        let amenity = entity::prelude::Amenity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Amenity {} not found", id)))?;

        let mut active_model: entity::amenity::ActiveModel = amenity.into();

        if let Some(code) = params.code {
            active_model.code = ActiveValue::Set(code);
        }
        if let Some(label) = params.label {
            active_model.label = ActiveValue::Set(label);
        }

        let updated = active_model.update(self.db).await?;

        Ok(Amenity::from_entity(updated))
    }

    /// Deletes an amenity by id. Join rows cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Amenity::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}

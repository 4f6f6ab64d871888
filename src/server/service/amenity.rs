//! Amenity catalog management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::amenity::AmenityRepository,
    error::{validation::ValidationError, AppError},
    model::amenity::{Amenity, CreateAmenityParams, UpdateAmenityParams},
};

pub struct AmenityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AmenityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an amenity with a unique code.
    pub async fn create(&self, params: CreateAmenityParams) -> Result<Amenity, AppError> {
        let repo = AmenityRepository::new(self.db);

        let duplicate = repo
            .list()
            .await?
            .into_iter()
            .any(|amenity| amenity.code == params.code);

        if duplicate {
            let mut report = ValidationError::new();
            report.push("code", "amenity code is already taken");
            return Err(report.into());
        }

        repo.create(params).await.map_err(AppError::from)
    }

    pub async fn list(&self) -> Result<Vec<Amenity>, AppError> {
        AmenityRepository::new(self.db)
            .list()
            .await
            .map_err(AppError::from)
    }

    pub async fn get(&self, id: i32) -> Result<Amenity, AppError> {
        AmenityRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Amenity {} not found", id)))
    }

    pub async fn update(&self, id: i32, params: UpdateAmenityParams) -> Result<Amenity, AppError> {
        let repo = AmenityRepository::new(self.db);
        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Amenity {} not found", id)))?;

        repo.update(id, params).await.map_err(AppError::from)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = AmenityRepository::new(self.db);
        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Amenity {} not found", id)))?;

        repo.delete(id).await.map_err(AppError::from)
    }
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::amenity::{AmenityDto, CreateAmenityDto, UpdateAmenityDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::amenity::{Amenity, CreateAmenityParams, UpdateAmenityParams},
        service::amenity::AmenityService,
        state::AppState,
    },
};

pub(crate) fn amenity_to_dto(amenity: Amenity) -> AmenityDto {
    AmenityDto {
        id: amenity.id,
        code: amenity.code,
        label: amenity.label,
    }
}

/// GET /api/amenities
/// The full amenity catalog.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let amenities = AmenityService::new(&state.db).list().await?;
    let dtos: Vec<AmenityDto> = amenities.into_iter().map(amenity_to_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/amenities/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let amenity = AmenityService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(amenity_to_dto(amenity))))
}

/// POST /api/amenities
/// Add an amenity to the catalog. Admin only.
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateAmenityDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let amenity = AmenityService::new(&state.db)
        .create(CreateAmenityParams {
            code: dto.code,
            label: dto.label,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(amenity_to_dto(amenity))))
}

/// PUT /api/amenities/{id}
/// Admin only.
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateAmenityDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let amenity = AmenityService::new(&state.db)
        .update(
            id,
            UpdateAmenityParams {
                code: dto.code,
                label: dto.label,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(amenity_to_dto(amenity))))
}

/// DELETE /api/amenities/{id}
/// Admin only. Hotel and room attachments cascade.
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    AmenityService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

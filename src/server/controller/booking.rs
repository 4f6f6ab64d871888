use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::booking::{BookingDto, CreateBookingDto, UpdateBookingDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::booking::{Booking, CreateBookingParams, UpdateBookingParams},
        service::booking::BookingService,
        state::AppState,
    },
};

fn booking_to_dto(booking: Booking) -> BookingDto {
    BookingDto {
        id: booking.id,
        user_id: booking.user_id,
        hotel_id: booking.hotel_id,
        room_id: booking.room_id,
        check_in: booking.check_in,
        check_out: booking.check_out,
        rooms_booked: booking.rooms_booked,
        created_at: booking.created_at,
    }
}

/// POST /api/bookings
/// Book rooms for the authenticated user.
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let booking = BookingService::new(&state.db)
        .create(CreateBookingParams {
            user_id: user.id,
            hotel_id: dto.hotel_id,
            room_id: dto.room_id,
            check_in: dto.check_in,
            check_out: dto.check_out,
            rooms_booked: dto.rooms_booked,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(booking_to_dto(booking))))
}

/// GET /api/bookings
/// The authenticated user's bookings.
pub async fn list(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let bookings = BookingService::new(&state.db).list_own(&user).await?;
    let dtos: Vec<BookingDto> = bookings.into_iter().map(booking_to_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/bookings/{id}
/// One booking; owners and admins only.
pub async fn get(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let booking = BookingService::new(&state.db).get(id, &user).await?;

    Ok((StatusCode::OK, Json(booking_to_dto(booking))))
}

/// PUT /api/bookings/{id}
/// Move or resize a booking; owners and admins only.
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let booking = BookingService::new(&state.db)
        .update(
            id,
            &user,
            UpdateBookingParams {
                room_id: dto.room_id,
                check_in: dto.check_in,
                check_out: dto.check_out,
                rooms_booked: dto.rooms_booked,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(booking_to_dto(booking))))
}

/// DELETE /api/bookings/{id}
/// Cancel a booking; owners and admins only.
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    BookingService::new(&state.db).delete(id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::review::{CreateReviewDto, ReviewDto, UpdateReviewDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::review::{CreateReviewParams, ReviewWithAuthor, UpdateReviewParams},
        service::review::ReviewService,
        state::AppState,
    },
};

fn review_to_dto(entry: ReviewWithAuthor) -> ReviewDto {
    ReviewDto {
        id: entry.review.id,
        hotel_id: entry.review.hotel_id,
        user_id: entry.review.user_id,
        user_name: entry.user_name,
        rating: entry.review.rating,
        comment: entry.review.comment,
    }
}

/// GET /api/hotels/{hotel_id}/reviews
/// A hotel's reviews with reviewer usernames.
pub async fn list_for_hotel(
    State(state): State<AppState>,
    Path(hotel_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::new(&state.db)
        .list_for_hotel(hotel_id)
        .await?;
    let dtos: Vec<ReviewDto> = reviews.into_iter().map(review_to_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /api/hotels/{hotel_id}/reviews
/// Review a hotel as the authenticated user.
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Path(hotel_id): Path<i32>,
    Json(dto): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let review = ReviewService::new(&state.db)
        .create(CreateReviewParams {
            hotel_id,
            user_id: user.id,
            rating: dto.rating,
            comment: dto.comment,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(review_to_dto(review))))
}

/// PUT /api/reviews/{id}
/// Edit a review; owners and admins only.
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let review = ReviewService::new(&state.db)
        .update(
            id,
            &user,
            UpdateReviewParams {
                rating: dto.rating,
                comment: dto.comment,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(review_to_dto(review))))
}

/// DELETE /api/reviews/{id}
/// Remove a review; owners and admins only.
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ReviewService::new(&state.db).delete(id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}

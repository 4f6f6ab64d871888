use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::auth::LoginDto,
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::auth::AuthService,
        state::AppState,
    },
};

use super::user::user_to_dto;

/// Session key for the authenticated user's id.
pub static SESSION_AUTH_USER_ID: &str = "auth:user_id";

/// POST /api/auth/login
/// Verify credentials and start a session for the user.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(&dto.user_name, &dto.password)
        .await?;

    session.insert(SESSION_AUTH_USER_ID, &user.id).await?;

    Ok((StatusCode::OK, Json(user_to_dto(user))))
}

/// POST /api/auth/logout
/// Drop the caller's session.
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    session.flush().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/user
/// The currently authenticated user.
pub async fn current_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user_to_dto(user))))
}

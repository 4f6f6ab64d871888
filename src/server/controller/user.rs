use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::user::{RegisterUserDto, UpdateUserDto, UserDto},
    server::{
        error::{validation::ValidationError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::user::{RegisterUserParams, Role, UpdateUserParams, User},
        service::user::UserService,
        state::AppState,
    },
};

pub(crate) fn user_to_dto(user: User) -> UserDto {
    UserDto {
        id: user.id,
        user_name: user.user_name,
        role: user.role.as_str().to_string(),
        first_name: user.first_name,
        last_name: user.last_name,
        email_address: user.email_address,
        phone_number: user.phone_number,
        address: user.address,
        birth_date: user.birth_date,
    }
}

/// POST /api/users
/// Register a new customer account. No authentication required.
pub async fn register(
    State(state): State<AppState>,
    Json(dto): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterUserParams {
        user_name: dto.user_name,
        password: dto.password,
        first_name: dto.first_name,
        last_name: dto.last_name,
        email_address: dto.email_address,
        phone_number: dto.phone_number,
        address: dto.address,
        birth_date: dto.birth_date,
    };

    let user = UserService::new(&state.db).register(params).await?;

    Ok((StatusCode::CREATED, Json(user_to_dto(user))))
}

/// GET /api/users
/// List every account. Admin only.
pub async fn list(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db).list().await?;
    let dtos: Vec<UserDto> = users.into_iter().map(user_to_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/users/by-name/{user_name}
/// Look up an account by username. Admin only.
pub async fn get_by_user_name(
    State(state): State<AppState>,
    session: Session,
    Path(user_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .get_by_user_name(&user_name)
        .await?;

    Ok((StatusCode::OK, Json(user_to_dto(user))))
}

/// PUT /api/users/{id}
/// Partial update. Customers may only update their own account and only the
/// fields their role allows; admins may update anyone.
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(dto): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let acting = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = UpdateUserParams {
        role: dto.role.as_deref().map(parse_role).transpose()?,
        birth_date: dto.birth_date,
        email_address: dto.email_address,
        phone_number: dto.phone_number,
        address: dto.address,
    };

    let user = UserService::new(&state.db)
        .update(&id, &acting, params)
        .await?;

    Ok((StatusCode::OK, Json(user_to_dto(user))))
}

/// DELETE /api/users/{id}
/// Remove an account. Admin only.
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Update input must name a role exactly; the lenient fallback used when
/// decoding stored rows would silently demote here.
fn parse_role(raw: &str) -> Result<Role, ValidationError> {
    match raw {
        "customer" => Ok(Role::Customer),
        "sysAdmin" => Ok(Role::SysAdmin),
        _ => {
            let mut report = ValidationError::new();
            report.push("role", "must be one of: customer, sysAdmin");
            Err(report)
        }
    }
}

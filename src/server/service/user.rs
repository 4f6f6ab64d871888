//! User account management with per-role update policy.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, validation::ValidationError, AppError},
    model::user::{RegisterUserParams, Role, UpdateUserParams, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new customer account. Admin accounts are only created by
    /// promoting an existing user through an admin update.
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_user_name(&params.user_name).await?.is_some() {
            let mut report = ValidationError::new();
            report.push("user_name", "username is already taken");
            return Err(report.into());
        }

        let id = Uuid::new_v4().to_string();

        repo.create(id, Role::Customer, params)
            .await
            .map_err(AppError::from)
    }

    /// Lists every account. Access is gated to admins at the controller.
    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        UserRepository::new(self.db)
            .list()
            .await
            .map_err(AppError::from)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    pub async fn get_by_user_name(&self, user_name: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_user_name(user_name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", user_name)))
    }

    /// Applies a partial update to a user.
    ///
    /// Customers may only update themselves; admins may update anyone. Each
    /// provided field is checked against the acting role's allow-list and a
    /// single out-of-policy field rejects the whole update, naming every
    /// offending field.
    pub async fn update(
        &self,
        target_id: &str,
        acting: &User,
        params: UpdateUserParams,
    ) -> Result<User, AppError> {
        if target_id != acting.id && !acting.role.is_admin() {
            return Err(AuthError::AccessDenied {
                user_id: acting.id.clone(),
                action: format!("update user {} owned by another user", target_id),
            }
            .into());
        }

        let mut report = ValidationError::new();
        for field in provided_fields(&params) {
            if !acting.role.may_update(field) {
                report.push(
                    field,
                    format!("not updatable by role '{}'", acting.role.as_str()),
                );
            }
        }
        report.into_result()?;

        let repo = UserRepository::new(self.db);
        repo.find_by_id(target_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", target_id)))?;

        repo.update(target_id, params).await.map_err(AppError::from)
    }

    /// Deletes an account. Access is gated to admins at the controller.
    pub async fn delete(&self, target_id: &str) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);
        repo.find_by_id(target_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", target_id)))?;

        repo.delete(target_id).await.map_err(AppError::from)
    }
}

fn provided_fields(params: &UpdateUserParams) -> Vec<&'static str> {
    let mut fields = Vec::new();
    if params.role.is_some() {
        fields.push("role");
    }
    if params.birth_date.is_some() {
        fields.push("birth_date");
    }
    if params.email_address.is_some() {
        fields.push("email_address");
    }
    if params.phone_number.is_some() {
        fields.push("phone_number");
    }
    if params.address.is_some() {
        fields.push("address");
    }
    fields
}

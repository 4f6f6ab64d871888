use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::user::{RegisterUserParams, Role, UpdateUserParams, User};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user account with the given id and role.
    ///
    /// # Returns
    /// - `Ok(User)`: The created user
    /// - `Err(DbErr)`: Database error, including unique violations on user_name
    pub async fn create(
        &self,
        id: String,
        role: Role,
        params: RegisterUserParams,
    ) -> Result<User, DbErr> {
        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(id),
            user_name: ActiveValue::Set(params.user_name),
            password: ActiveValue::Set(params.password),
            role: ActiveValue::Set(role.as_str().to_string()),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email_address: ActiveValue::Set(params.email_address),
            phone_number: ActiveValue::Set(params.phone_number),
            address: ActiveValue::Set(params.address),
            birth_date: ActiveValue::Set(params.birth_date),
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(user))
    }

    /// Finds a user by their id.
    ///
    /// # Returns
    /// - `Ok(Some(User))`: User found
    /// - `Ok(None)`: No user with this id
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(user.map(User::from_entity))
    }

    /// Finds a user by their unique username.
    pub async fn find_by_user_name(&self, user_name: &str) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find()
            .filter(entity::user::Column::UserName.eq(user_name))
            .one(self.db)
            .await?;

        Ok(user.map(User::from_entity))
    }

    /// Lists all user accounts ordered by username.
    pub async fn list(&self) -> Result<Vec<User>, DbErr> {
        let users = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::UserName)
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }

    /// Applies a partial update to a user.
    ///
    /// # Returns
    /// - `Ok(User)`: The updated user
    /// - `Err(DbErr)`: Database error, `RecordNotFound` when the id does not exist
    pub async fn update(&self, id: &str, params: UpdateUserParams) -> Result<User, DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User {} not found", id)))?;

        let mut active_model: entity::user::ActiveModel = user.into();

        if let Some(role) = params.role {
            active_model.role = ActiveValue::Set(role.as_str().to_string());
        }
        if let Some(birth_date) = params.birth_date {
            active_model.birth_date = ActiveValue::Set(birth_date);
        }
        if let Some(email_address) = params.email_address {
            active_model.email_address = ActiveValue::Set(email_address);
        }
        if let Some(phone_number) = params.phone_number {
            active_model.phone_number = ActiveValue::Set(phone_number);
        }
        if let Some(address) = params.address {
            active_model.address = ActiveValue::Set(address);
        }

        let updated = active_model.update(self.db).await?;

        Ok(User::from_entity(updated))
    }

    /// Deletes a user by id.
    ///
    /// # Returns
    /// - `Ok(())`: User deleted (or did not exist)
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: &str) -> Result<(), DbErr> {
        entity::prelude::User::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}

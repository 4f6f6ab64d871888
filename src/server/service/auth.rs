//! Credential checks for session login.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies a username/password pair.
    ///
    /// Unknown usernames and wrong passwords produce the same error so the
    /// two cases cannot be told apart. Passwords are compared as stored;
    /// hashing is a known gap inherited from the upstream system.
    pub async fn login(&self, user_name: &str, password: &str) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_user_name(user_name)
            .await?;

        match user {
            Some(user) if user.password == password => Ok(user),
            _ => Err(AuthError::InvalidCredentials.into()),
        }
    }
}

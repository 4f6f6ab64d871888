//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating user entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let admin = UserFactory::new(&db)
///     .user_name("ops")
///     .role("sysAdmin")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    user_name: String,
    password: String,
    role: String,
    email_address: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - id: `"user-{n}"` where n is auto-incremented
    /// - user_name: `"guest{n}"`
    /// - password: `"secret"`
    /// - role: `"customer"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("user-{}", id),
            user_name: format!("guest{}", id),
            password: "secret".to_string(),
            role: "customer".to_string(),
            email_address: format!("guest{}@example.com", id),
        }
    }

    /// Sets the user id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the username.
    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }

    /// Sets the password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the role (`"customer"` or `"sysAdmin"`).
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Set(self.id),
            user_name: ActiveValue::Set(self.user_name.clone()),
            password: ActiveValue::Set(self.password),
            role: ActiveValue::Set(self.role),
            first_name: ActiveValue::Set("Test".to_string()),
            last_name: ActiveValue::Set("Guest".to_string()),
            email_address: ActiveValue::Set(self.email_address),
            phone_number: ActiveValue::Set("+0000000000".to_string()),
            address: ActiveValue::Set("1 Test Street".to_string()),
            birth_date: ActiveValue::Set(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a customer user with default values.
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with the `sysAdmin` role.
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created admin user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role("sysAdmin").build().await
}

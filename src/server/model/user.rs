//! Domain models for user accounts and role policy.

use chrono::NaiveDate;

/// User role. Stored as a string in the database; unrecognized values are
/// treated as the least-privileged role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Customer,
    SysAdmin,
}

impl Role {
    /// The database/wire representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::SysAdmin => "sysAdmin",
        }
    }

    /// Parses a stored role string. Anything other than the admin role maps
    /// to `Customer`.
    pub fn parse(value: &str) -> Self {
        match value {
            "sysAdmin" => Role::SysAdmin,
            _ => Role::Customer,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::SysAdmin)
    }

    /// Fields this role is allowed to change on a user update. Any field
    /// outside this list rejects the whole update.
    pub fn updatable_fields(&self) -> &'static [&'static str] {
        match self {
            Role::Customer => &["email_address", "phone_number", "address"],
            Role::SysAdmin => &[
                "role",
                "birth_date",
                "email_address",
                "phone_number",
                "address",
            ],
        }
    }

    pub fn may_update(&self, field: &str) -> bool {
        self.updatable_fields().contains(&field)
    }
}

/// User account with its role decoded from storage.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub user_name: String,
    pub password: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub phone_number: String,
    pub address: String,
    pub birth_date: NaiveDate,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            user_name: entity.user_name,
            password: entity.password,
            role: Role::parse(&entity.role),
            first_name: entity.first_name,
            last_name: entity.last_name,
            email_address: entity.email_address,
            phone_number: entity.phone_number,
            address: entity.address,
            birth_date: entity.birth_date,
        }
    }
}

/// Parameters for registering a new user account.
///
/// Registration always creates a `customer`; promotion to admin happens
/// through an admin-driven update afterwards.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub user_name: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub phone_number: String,
    pub address: String,
    pub birth_date: NaiveDate,
}

/// Parameters for a partial user update. Only provided fields change; which
/// fields the acting user may provide is governed by their role's allow-list.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub role: Option<Role>,
    pub birth_date: Option<NaiveDate>,
    pub email_address: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct RegisterUserDto {
    pub user_name: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub phone_number: String,
    pub address: String,
    pub birth_date: NaiveDate,
}

/// Partial user update. Which fields a caller may set depends on their role;
/// out-of-policy fields reject the whole update.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct UpdateUserDto {
    pub role: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub email_address: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UserDto {
    pub id: String,
    pub user_name: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub phone_number: String,
    pub address: String,
    pub birth_date: NaiveDate,
}

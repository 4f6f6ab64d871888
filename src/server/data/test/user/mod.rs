use crate::server::{
    data::user::UserRepository,
    model::user::{RegisterUserParams, Role, UpdateUserParams},
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find;
mod update;

fn register_params(user_name: &str) -> RegisterUserParams {
    RegisterUserParams {
        user_name: user_name.to_string(),
        password: "secret".to_string(),
        first_name: "Ana".to_string(),
        last_name: "Silva".to_string(),
        email_address: format!("{}@example.com", user_name),
        phone_number: "+351000000000".to_string(),
        address: "1 Test Street".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
    }
}

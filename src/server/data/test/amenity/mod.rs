use crate::server::{
    data::amenity::AmenityRepository,
    model::amenity::CreateAmenityParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_existing;
mod create;

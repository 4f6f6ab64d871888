pub use sea_orm_migration::prelude::*;

mod m20260712_000001_create_user_table;
mod m20260712_000002_create_hotel_table;
mod m20260712_000003_create_amenity_table;
mod m20260712_000004_create_hotel_amenity_table;
mod m20260712_000005_create_room_table;
mod m20260712_000006_create_room_amenity_table;
mod m20260712_000007_create_media_table;
mod m20260713_000008_create_booking_table;
mod m20260713_000009_create_review_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260712_000001_create_user_table::Migration),
            Box::new(m20260712_000002_create_hotel_table::Migration),
            Box::new(m20260712_000003_create_amenity_table::Migration),
            Box::new(m20260712_000004_create_hotel_amenity_table::Migration),
            Box::new(m20260712_000005_create_room_table::Migration),
            Box::new(m20260712_000006_create_room_amenity_table::Migration),
            Box::new(m20260712_000007_create_media_table::Migration),
            Box::new(m20260713_000008_create_booking_table::Migration),
            Box::new(m20260713_000009_create_review_table::Migration),
        ]
    }
}

use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260712_000002_create_hotel_table::Hotel, m20260712_000003_create_amenity_table::Amenity,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HotelAmenity::Table)
                    .if_not_exists()
                    .col(integer(HotelAmenity::HotelId))
                    .col(integer(HotelAmenity::AmenityId))
                    .primary_key(
                        Index::create()
                            .col(HotelAmenity::HotelId)
                            .col(HotelAmenity::AmenityId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotel_amenity_hotel_id")
                            .from(HotelAmenity::Table, HotelAmenity::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotel_amenity_amenity_id")
                            .from(HotelAmenity::Table, HotelAmenity::AmenityId)
                            .to(Amenity::Table, Amenity::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HotelAmenity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HotelAmenity {
    Table,
    HotelId,
    AmenityId,
}

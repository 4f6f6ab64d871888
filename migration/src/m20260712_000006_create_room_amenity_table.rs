use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260712_000003_create_amenity_table::Amenity, m20260712_000005_create_room_table::Room,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomAmenity::Table)
                    .if_not_exists()
                    .col(integer(RoomAmenity::RoomId))
                    .col(integer(RoomAmenity::AmenityId))
                    .primary_key(
                        Index::create()
                            .col(RoomAmenity::RoomId)
                            .col(RoomAmenity::AmenityId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_amenity_room_id")
                            .from(RoomAmenity::Table, RoomAmenity::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_amenity_amenity_id")
                            .from(RoomAmenity::Table, RoomAmenity::AmenityId)
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
            .drop_table(Table::drop().table(RoomAmenity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoomAmenity {
    Table,
    RoomId,
    AmenityId,
}

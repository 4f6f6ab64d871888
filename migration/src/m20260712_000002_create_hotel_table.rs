use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hotel::Table)
                    .if_not_exists()
                    .col(pk_auto(Hotel::Id))
                    .col(string(Hotel::Name))
                    .col(text_null(Hotel::Description))
                    .col(string(Hotel::City))
                    .col(string_null(Hotel::Neighborhood))
                    .col(string_null(Hotel::Address))
                    .col(double(Hotel::Latitude))
                    .col(double(Hotel::Longitude))
                    .col(double(Hotel::Stars).default(0.0))
                    .col(double(Hotel::Popularity).default(0.0))
                    .col(text_null(Hotel::Policies))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hotel_city")
                    .table(Hotel::Table)
                    .col(Hotel::City)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hotel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Hotel {
    Table,
    Id,
    Name,
    Description,
    City,
    Neighborhood,
    Address,
    Latitude,
    Longitude,
    Stars,
    Popularity,
    Policies,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(string(User::Id).primary_key())
                    .col(string_uniq(User::UserName))
                    .col(string(User::Password))
                    .col(string(User::Role))
                    .col(string(User::FirstName))
                    .col(string(User::LastName))
                    .col(string(User::EmailAddress))
                    .col(string(User::PhoneNumber))
                    .col(string(User::Address))
                    .col(date(User::BirthDate))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    UserName,
    Password,
    Role,
    FirstName,
    LastName,
    EmailAddress,
    PhoneNumber,
    Address,
    BirthDate,
}

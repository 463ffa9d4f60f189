use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Toy::Table)
                    .if_not_exists()
                    .col(pk_auto(Toy::Id))
                    .col(string_len(Toy::Name, 150))
                    .col(string_len(Toy::Description, 250))
                    .col(timestamp(Toy::ReleaseDate))
                    .col(string_len(Toy::ToyCategory, 200))
                    .col(boolean(Toy::WasIncludedInHome))
                    .col(timestamp(Toy::Created))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Toy::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Toy {
    Table,
    Id,
    Name,
    Description,
    ReleaseDate,
    ToyCategory,
    WasIncludedInHome,
    Created,
}

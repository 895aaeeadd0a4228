use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Beer::Table)
                    .if_not_exists()
                    .col(big_pk_auto(Beer::Id))
                    .col(string_uniq(Beer::Name))
                    .col(integer(Beer::Type))
                    .col(integer(Beer::Style))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Beer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Beer {
    Table,
    Id,
    Name,
    Type,
    Style,
}

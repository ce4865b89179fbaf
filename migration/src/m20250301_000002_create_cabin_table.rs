use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cabin::Table)
                    .if_not_exists()
                    .col(pk_auto(Cabin::Id))
                    .col(string(Cabin::Name))
                    .col(integer(Cabin::MaxCapacity))
                    .col(integer(Cabin::Price))
                    .col(integer(Cabin::Discount).default(0))
                    .col(text(Cabin::Description))
                    .col(string_null(Cabin::Image))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cabin::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Cabin {
    #[sea_orm(iden = "cabins")]
    Table,
    Id,
    Name,
    MaxCapacity,
    Price,
    Discount,
    Description,
    Image,
}

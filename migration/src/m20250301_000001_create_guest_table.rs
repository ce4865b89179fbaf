use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guest::Table)
                    .if_not_exists()
                    .col(pk_auto(Guest::Id))
                    .col(
                        timestamp_with_time_zone(Guest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string(Guest::FullName))
                    .col(string_uniq(Guest::Email))
                    .col(string_null(Guest::NationalId))
                    .col(string_null(Guest::Nationality))
                    .col(string_null(Guest::CountryFlag))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Guest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Guest {
    #[sea_orm(iden = "guests")]
    Table,
    Id,
    CreatedAt,
    FullName,
    Email,
    NationalId,
    Nationality,
    CountryFlag,
}

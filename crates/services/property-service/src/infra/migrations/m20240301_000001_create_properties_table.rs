//! Migration: Create the properties table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Properties::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Properties::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Properties::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Properties::IsSale).boolean().not_null().default(false))
                    .col(ColumnDef::new(Properties::PropertyType).string().not_null())
                    .col(ColumnDef::new(Properties::CityId).string().not_null())
                    .col(ColumnDef::new(Properties::DistrictId).string().not_null())
                    .col(ColumnDef::new(Properties::Address).string_len(500).not_null().default(""))
                    .col(ColumnDef::new(Properties::Price).big_integer().not_null().default(0))
                    .col(ColumnDef::new(Properties::Area).double().null())
                    .col(ColumnDef::new(Properties::Description).text().not_null().default(""))
                    .col(ColumnDef::new(Properties::Rooms).integer().null())
                    .col(ColumnDef::new(Properties::Bedrooms).integer().null())
                    .col(ColumnDef::new(Properties::Bathrooms).integer().null())
                    .col(ColumnDef::new(Properties::Floors).integer().null())
                    .col(ColumnDef::new(Properties::Thumbnail).json_binary().not_null())
                    .col(ColumnDef::new(Properties::Date).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Properties::AuthorId).string().not_null())
                    .col(ColumnDef::new(Properties::Status).boolean().not_null().default(false))
                    .col(ColumnDef::new(Properties::Authen).boolean().not_null().default(false))
                    .check(Expr::col(Properties::Price).gte(0))
                    .to_owned(),
            )
            .await?;

        // Ownership checks filter on author_id
        manager
            .create_index(
                Index::create()
                    .name("idx_properties_author_id")
                    .table(Properties::Table)
                    .col(Properties::AuthorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_properties_date")
                    .table(Properties::Table)
                    .col(Properties::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Properties::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Properties {
    Table,
    Id,
    Title,
    IsSale,
    PropertyType,
    CityId,
    DistrictId,
    Address,
    Price,
    Area,
    Description,
    Rooms,
    Bedrooms,
    Bathrooms,
    Floors,
    Thumbnail,
    Date,
    AuthorId,
    Status,
    Authen,
}

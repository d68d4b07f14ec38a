//! Migration: Create the warns, contacts, censors and informs tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Warns::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Warns::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Warns::PropertyOwner).string().not_null())
                    .col(ColumnDef::new(Warns::Content).text().not_null())
                    .col(ColumnDef::new(Warns::PropertyId).uuid().not_null())
                    .col(ColumnDef::new(Warns::Date).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Contacts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Contacts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Contacts::PropertyId).uuid().not_null())
                    .col(ColumnDef::new(Contacts::Name).string().not_null())
                    .col(ColumnDef::new(Contacts::Phone).string().not_null())
                    .col(ColumnDef::new(Contacts::Content).text().not_null().default(""))
                    .col(ColumnDef::new(Contacts::Date).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Censors::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Censors::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Censors::PropertyId).uuid().not_null())
                    .col(ColumnDef::new(Censors::Content).text().not_null().default(""))
                    .col(ColumnDef::new(Censors::Date).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        // One sub-record reference per inform, matching its type
        manager
            .create_table(
                Table::create()
                    .table(Informs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Informs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Informs::OwnerId).string().not_null())
                    .col(ColumnDef::new(Informs::Kind).string_len(16).not_null())
                    .col(ColumnDef::new(Informs::PropertyId).uuid().null())
                    .col(ColumnDef::new(Informs::ContactId).uuid().null())
                    .col(ColumnDef::new(Informs::CensorId).uuid().null())
                    .col(ColumnDef::new(Informs::WarnId).uuid().null())
                    .col(ColumnDef::new(Informs::IsRead).boolean().not_null().default(false))
                    .col(ColumnDef::new(Informs::Date).timestamp_with_time_zone().not_null())
                    .check(
                        Expr::cust(
                            "(kind = 'contact' AND contact_id IS NOT NULL AND censor_id IS NULL AND warn_id IS NULL) \
                             OR (kind = 'censor' AND censor_id IS NOT NULL AND contact_id IS NULL AND warn_id IS NULL) \
                             OR (kind = 'warn' AND warn_id IS NOT NULL AND contact_id IS NULL AND censor_id IS NULL)",
                        ),
                    )
                    .to_owned(),
            )
            .await?;

        create_index(manager, "idx_warns_property_id", Warns::Table, Warns::PropertyId).await?;
        create_index(manager, "idx_contacts_property_id", Contacts::Table, Contacts::PropertyId)
            .await?;
        create_index(manager, "idx_censors_property_id", Censors::Table, Censors::PropertyId)
            .await?;
        create_index(manager, "idx_informs_property_id", Informs::Table, Informs::PropertyId)
            .await?;
        create_index(manager, "idx_informs_owner_id", Informs::Table, Informs::OwnerId).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Informs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Censors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Contacts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Warns::Table).to_owned())
            .await
    }
}

async fn create_index<T: Iden + 'static>(
    manager: &SchemaManager<'_>,
    name: &str,
    table: T,
    column: T,
) -> Result<(), DbErr> {
    manager
        .create_index(Index::create().name(name).table(table).col(column).to_owned())
        .await
}

#[derive(Iden)]
enum Warns {
    Table,
    Id,
    PropertyOwner,
    Content,
    PropertyId,
    Date,
}

#[derive(Iden)]
enum Contacts {
    Table,
    Id,
    PropertyId,
    Name,
    Phone,
    Content,
    Date,
}

#[derive(Iden)]
enum Censors {
    Table,
    Id,
    PropertyId,
    Content,
    Date,
}

#[derive(Iden)]
enum Informs {
    Table,
    Id,
    OwnerId,
    Kind,
    PropertyId,
    ContactId,
    CensorId,
    WarnId,
    IsRead,
    Date,
}

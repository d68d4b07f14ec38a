//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}
//!
//! The city, district and user tables belong to other services and are not
//! managed here.

use sea_orm_migration::prelude::*;

mod m20240301_000001_create_properties_table;
mod m20240301_000002_create_notice_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_properties_table::Migration),
            Box::new(m20240301_000002_create_notice_tables::Migration),
        ]
    }
}

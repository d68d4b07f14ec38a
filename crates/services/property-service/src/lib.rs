//! Property Service Library
//!
//! Data access for property listings: creation, lookup with joined location
//! and author data, owner-scoped edits and deletes, approval, and the warn /
//! inform notices attached to listings. Results are reported through
//! [`api::PropertyApi`] as `{code, message, data}` envelopes.

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use crate::api::PropertyApi;
use crate::config::PropertyServiceConfig;
use crate::infra::Database;
use crate::repository::{DirectoryStore, NoticeStore, PropertyStore};
use crate::service::PropertyManager;

/// Connect to the database, apply pending migrations and wire the service.
pub async fn connect(config: &PropertyServiceConfig) -> Result<PropertyApi, Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database).await?;
    let db_conn = db.get_connection();

    // Create repositories and service
    let properties = Arc::new(PropertyStore::new(db_conn.clone()));
    let notices = Arc::new(NoticeStore::new(db_conn.clone()));
    let directory = Arc::new(DirectoryStore::new(db_conn));
    let service = Arc::new(PropertyManager::new(
        properties,
        notices,
        directory,
        config.paging,
    ));

    Ok(PropertyApi::new(service, config.locale))
}

/// Check that the database is reachable.
pub async fn check_database(config: &PropertyServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;
    db.ping().await?;
    info!("Database is reachable");
    Ok(())
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &PropertyServiceConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

//! Lookups into tables owned by other services: city and district names and
//! author profiles.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use super::entities::{account, city, district};
use common::AppResult;
use domain::Author;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read-only directory of locations and accounts.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait Directory: Send + Sync {
    async fn city_name(&self, city_id: &str) -> AppResult<Option<String>>;

    async fn district_name(&self, district_id: &str) -> AppResult<Option<String>>;

    async fn find_author(&self, account_id: &str) -> AppResult<Option<Author>>;
}

/// Directory backed by the shared database.
pub struct DirectoryStore {
    db: DatabaseConnection,
}

impl DirectoryStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Directory for DirectoryStore {
    async fn city_name(&self, city_id: &str) -> AppResult<Option<String>> {
        let result = city::Entity::find_by_id(city_id.to_string())
            .one(&self.db)
            .await?;
        Ok(result.map(|c| c.name))
    }

    async fn district_name(&self, district_id: &str) -> AppResult<Option<String>> {
        let result = district::Entity::find_by_id(district_id.to_string())
            .one(&self.db)
            .await?;
        Ok(result.map(|d| d.name))
    }

    async fn find_author(&self, account_id: &str) -> AppResult<Option<Author>> {
        let result = account::Entity::find_by_id(account_id.to_string())
            .one(&self.db)
            .await?;
        Ok(result.map(Author::from))
    }
}

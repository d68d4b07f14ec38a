//! Warn, contact and inform records attached to listings.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

use super::entities::{contact, inform, warn};
use common::{AppError, AppResult};
use domain::{Inform, InformKind, Warn};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Notice repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait NoticeRepository: Send + Sync {
    /// Record a warn against a listing together with the inform telling
    /// `property_owner` about it. Neither row is kept unless both are.
    async fn create_warn(
        &self,
        property_id: Uuid,
        property_owner: String,
        content: String,
    ) -> AppResult<Warn>;

    /// Warns raised against a listing, oldest first
    async fn list_warns(&self, property_id: Uuid) -> AppResult<Vec<Warn>>;

    /// Informs of an account, newest first
    async fn list_informs(&self, owner_id: &str, unread_only: bool) -> AppResult<Vec<Inform>>;

    /// Mark an inform of `owner_id` as read
    async fn mark_inform_read(&self, id: Uuid, owner_id: &str) -> AppResult<Option<Inform>>;

    /// Remove all warns of a listing, returning the number removed
    async fn delete_warns_for(&self, property_id: Uuid) -> AppResult<u64>;

    /// Remove all contacts of a listing, returning the number removed
    async fn delete_contacts_for(&self, property_id: Uuid) -> AppResult<u64>;

    /// Remove all informs of a listing, returning the number removed
    async fn delete_informs_for(&self, property_id: Uuid) -> AppResult<u64>;
}

/// Concrete implementation of NoticeRepository
pub struct NoticeStore {
    db: DatabaseConnection,
}

impl NoticeStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn new_warn(property_id: Uuid, property_owner: String, content: String) -> warn::ActiveModel {
    warn::ActiveModel {
        id: Set(Uuid::new_v4()),
        property_owner: Set(property_owner),
        content: Set(content),
        property_id: Set(property_id),
        date: Set(chrono::Utc::now()),
    }
}

/// Unread inform for `owner_id`
fn new_inform(owner_id: String, kind: InformKind, property_id: Option<Uuid>) -> inform::ActiveModel {
    let (contact_id, censor_id, warn_id) = inform::reference_columns(&kind);
    inform::ActiveModel {
        id: Set(Uuid::new_v4()),
        owner_id: Set(owner_id),
        kind: Set(kind.name().to_string()),
        property_id: Set(property_id),
        contact_id: Set(contact_id),
        censor_id: Set(censor_id),
        warn_id: Set(warn_id),
        is_read: Set(false),
        date: Set(chrono::Utc::now()),
    }
}

#[async_trait]
impl NoticeRepository for NoticeStore {
    async fn create_warn(
        &self,
        property_id: Uuid,
        property_owner: String,
        content: String,
    ) -> AppResult<Warn> {
        let txn = self.db.begin().await?;

        let warn = new_warn(property_id, property_owner.clone(), content)
            .insert(&txn)
            .await?;
        new_inform(property_owner, InformKind::Warn(warn.id), Some(property_id))
            .insert(&txn)
            .await?;

        txn.commit().await?;
        Ok(Warn::from(warn))
    }

    async fn list_warns(&self, property_id: Uuid) -> AppResult<Vec<Warn>> {
        let models = warn::Entity::find()
            .filter(warn::Column::PropertyId.eq(property_id))
            .order_by_asc(warn::Column::Date)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Warn::from).collect())
    }

    async fn list_informs(&self, owner_id: &str, unread_only: bool) -> AppResult<Vec<Inform>> {
        let mut query = inform::Entity::find().filter(inform::Column::OwnerId.eq(owner_id));
        if unread_only {
            query = query.filter(inform::Column::IsRead.eq(false));
        }

        let models = query
            .order_by_desc(inform::Column::Date)
            .all(&self.db)
            .await?;

        models
            .into_iter()
            .map(|model| Inform::try_from(model).map_err(AppError::from))
            .collect()
    }

    async fn mark_inform_read(&self, id: Uuid, owner_id: &str) -> AppResult<Option<Inform>> {
        let Some(model) = inform::Entity::find_by_id(id)
            .filter(inform::Column::OwnerId.eq(owner_id))
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: inform::ActiveModel = model.into();
        active.is_read = Set(true);

        let model = active.update(&self.db).await?;
        Ok(Some(Inform::try_from(model)?))
    }

    async fn delete_warns_for(&self, property_id: Uuid) -> AppResult<u64> {
        let result = warn::Entity::delete_many()
            .filter(warn::Column::PropertyId.eq(property_id))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected)
    }

    async fn delete_contacts_for(&self, property_id: Uuid) -> AppResult<u64> {
        let result = contact::Entity::delete_many()
            .filter(contact::Column::PropertyId.eq(property_id))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected)
    }

    async fn delete_informs_for(&self, property_id: Uuid) -> AppResult<u64> {
        let result = inform::Entity::delete_many()
            .filter(inform::Column::PropertyId.eq(property_id))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inform_for_warn_references_only_the_warn() {
        let warn_id = Uuid::new_v4();
        let property_id = Uuid::new_v4();
        let active = new_inform("acc-5".to_string(), InformKind::Warn(warn_id), Some(property_id));

        assert_eq!(active.kind, Set("warn".to_string()));
        assert_eq!(active.warn_id, Set(Some(warn_id)));
        assert_eq!(active.contact_id, Set(None));
        assert_eq!(active.censor_id, Set(None));
        assert_eq!(active.property_id, Set(Some(property_id)));
        assert_eq!(active.is_read, Set(false));
    }

    #[test]
    fn warn_belongs_to_property_owner() {
        let property_id = Uuid::new_v4();
        let active = new_warn(property_id, "acc-5".to_string(), "Fake photos".to_string());

        assert_eq!(active.property_owner, Set("acc-5".to_string()));
        assert_eq!(active.property_id, Set(property_id));
        assert_eq!(active.content, Set("Fake photos".to_string()));
    }
}

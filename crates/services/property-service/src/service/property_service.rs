//! Property service - Handles listing use cases.
//!
//! Ownership checks live here: edits are scoped to the author, deletes to the
//! author unless the caller is an administrator. Read operations join city,
//! district and author data for display.

use async_trait::async_trait;
use futures::future::try_join_all;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt, PagingConfig};
use domain::{
    normalize_warn_content, Inform, Location, LocationView, OwnerScope, PageRequest,
    Property, PropertyCard, PropertyFilter, PropertyForm, PropertyView, Warn,
};

use crate::repository::{Directory, NoticeRepository, PropertyRepository};

/// Property service trait for dependency injection.
#[async_trait]
pub trait PropertyService: Send + Sync {
    /// Create an unpublished, unapproved listing for `author_id`
    async fn create_property(&self, form: PropertyForm, author_id: &str) -> AppResult<Property>;

    /// First matching listing with location names and author
    async fn get_property(&self, filter: &PropertyFilter) -> AppResult<PropertyView>;

    /// Every matching listing, oldest first, with location names and author
    async fn get_all_properties(&self, filter: &PropertyFilter) -> AppResult<Vec<PropertyView>>;

    /// One page of compact listings
    async fn get_base_properties(
        &self,
        filter: &PropertyFilter,
        page: PageRequest,
    ) -> AppResult<Vec<PropertyCard>>;

    /// Update a listing owned by `author_id`; the listing returns to review
    async fn edit_property(
        &self,
        id: Uuid,
        form: PropertyForm,
        author_id: &str,
    ) -> AppResult<Property>;

    /// Delete a listing and the notices attached to it
    async fn delete_property(&self, id: Uuid, author_id: &str, is_admin: bool) -> AppResult<()>;

    /// Publish and approve a listing
    async fn approve_property(&self, id: Uuid) -> AppResult<()>;

    /// Send the first matching listing back for review
    async fn require_censor(&self, filter: &PropertyFilter) -> AppResult<bool>;

    /// Raise a warn against a listing and notify its author
    async fn warn_property(&self, property_id: Uuid, content: &str) -> AppResult<Warn>;

    /// Warns raised against a listing
    async fn list_warns(&self, property_id: Uuid) -> AppResult<Vec<Warn>>;

    /// Notifications of an account
    async fn list_informs(&self, owner_id: &str, unread_only: bool) -> AppResult<Vec<Inform>>;

    /// Mark a notification of `owner_id` as read
    async fn mark_inform_read(&self, id: Uuid, owner_id: &str) -> AppResult<Inform>;
}

/// Concrete implementation of PropertyService using repositories.
pub struct PropertyManager {
    properties: Arc<dyn PropertyRepository>,
    notices: Arc<dyn NoticeRepository>,
    directory: Arc<dyn Directory>,
    paging: PagingConfig,
}

impl PropertyManager {
    pub fn new(
        properties: Arc<dyn PropertyRepository>,
        notices: Arc<dyn NoticeRepository>,
        directory: Arc<dyn Directory>,
        paging: PagingConfig,
    ) -> Self {
        Self {
            properties,
            notices,
            directory,
            paging,
        }
    }

    async fn resolve_location(&self, location: &Location) -> AppResult<LocationView> {
        let (city, district) = futures::try_join!(
            self.directory.city_name(&location.city_id),
            self.directory.district_name(&location.district_id),
        )?;
        Ok(LocationView::resolve(location, city, district))
    }

    async fn to_view(&self, property: Property) -> AppResult<PropertyView> {
        let (location, author) = futures::try_join!(
            self.resolve_location(&property.location),
            self.directory.find_author(&property.author_id),
        )?;
        Ok(PropertyView::assemble(property, location, author))
    }

    async fn to_card(&self, property: Property) -> AppResult<PropertyCard> {
        let (location, author) = futures::try_join!(
            self.resolve_location(&property.location),
            self.directory.find_author(&property.author_id),
        )?;
        Ok(PropertyCard::assemble(property, location, author))
    }

    /// Best-effort removal of everything attached to a deleted listing.
    async fn purge_notices(&self, property_id: Uuid) {
        let results = [
            ("warns", self.notices.delete_warns_for(property_id).await),
            ("contacts", self.notices.delete_contacts_for(property_id).await),
            ("informs", self.notices.delete_informs_for(property_id).await),
        ];

        for (records, result) in results {
            match result {
                Ok(count) => debug!(%property_id, records, count, "Removed attached records"),
                Err(e) => warn!(%property_id, records, error = %e, "Failed to remove attached records"),
            }
        }
    }
}

fn require_author(author_id: &str) -> AppResult<()> {
    if author_id.trim().is_empty() {
        return Err(AppError::validation("Author id is required"));
    }
    Ok(())
}

#[async_trait]
impl PropertyService for PropertyManager {
    async fn create_property(&self, form: PropertyForm, author_id: &str) -> AppResult<Property> {
        require_author(author_id)?;
        let new_property = form.into_new_property(author_id)?;

        let property = self.properties.insert(new_property).await?;
        info!(property_id = %property.id, author_id, "Property created");
        Ok(property)
    }

    async fn get_property(&self, filter: &PropertyFilter) -> AppResult<PropertyView> {
        let property = self.properties.find_one(filter).await?.ok_or_not_found()?;
        self.to_view(property).await
    }

    async fn get_all_properties(&self, filter: &PropertyFilter) -> AppResult<Vec<PropertyView>> {
        let properties = self.properties.find_all(filter).await?;
        try_join_all(properties.into_iter().map(|p| self.to_view(p))).await
    }

    async fn get_base_properties(
        &self,
        filter: &PropertyFilter,
        page: PageRequest,
    ) -> AppResult<Vec<PropertyCard>> {
        let limit = page.effective_limit(self.paging.default_page_size, self.paging.max_page_size);
        let properties = self
            .properties
            .find_page(filter, page.skip, limit, page.sort)
            .await?;
        try_join_all(properties.into_iter().map(|p| self.to_card(p))).await
    }

    async fn edit_property(
        &self,
        id: Uuid,
        form: PropertyForm,
        author_id: &str,
    ) -> AppResult<Property> {
        require_author(author_id)?;
        let changes = form.into_changes()?;

        let property = self
            .properties
            .update_owned(id, author_id, changes)
            .await?
            .ok_or_not_found()?;
        info!(property_id = %id, author_id, "Property edited, awaiting review");
        Ok(property)
    }

    async fn delete_property(&self, id: Uuid, author_id: &str, is_admin: bool) -> AppResult<()> {
        if !is_admin {
            require_author(author_id)?;
        }

        let scope = OwnerScope::for_actor(author_id, is_admin);
        let removed = self.properties.delete(id, scope).await?.ok_or_not_found()?;
        info!(property_id = %removed.id, is_admin, "Property deleted");

        self.purge_notices(removed.id).await;
        Ok(())
    }

    async fn approve_property(&self, id: Uuid) -> AppResult<()> {
        self.properties
            .set_flags(&PropertyFilter::by_id(id), Some(true), Some(true))
            .await?
            .ok_or_not_found()?;
        info!(property_id = %id, "Property approved");
        Ok(())
    }

    async fn require_censor(&self, filter: &PropertyFilter) -> AppResult<bool> {
        let updated = self.properties.set_flags(filter, None, Some(false)).await?;
        if let Some(property) = &updated {
            info!(property_id = %property.id, "Property sent back for review");
        }
        Ok(updated.is_some())
    }

    async fn warn_property(&self, property_id: Uuid, content: &str) -> AppResult<Warn> {
        let content = normalize_warn_content(content)?;
        let property = self
            .properties
            .find_one(&PropertyFilter::by_id(property_id))
            .await?
            .ok_or_not_found()?;

        let warn = self
            .notices
            .create_warn(property.id, property.author_id, content)
            .await?;

        info!(%property_id, warn_id = %warn.id, "Warn raised");
        Ok(warn)
    }

    async fn list_warns(&self, property_id: Uuid) -> AppResult<Vec<Warn>> {
        self.notices.list_warns(property_id).await
    }

    async fn list_informs(&self, owner_id: &str, unread_only: bool) -> AppResult<Vec<Inform>> {
        require_author(owner_id)?;
        self.notices.list_informs(owner_id, unread_only).await
    }

    async fn mark_inform_read(&self, id: Uuid, owner_id: &str) -> AppResult<Inform> {
        self.notices
            .mark_inform_read(id, owner_id)
            .await?
            .ok_or_not_found()
    }
}

//! Envelope wrapper for PropertyService.

use std::sync::Arc;

use uuid::Uuid;

use common::{ApiResponse, Locale};
use domain::{
    Inform, PageRequest, Property, PropertyCard, PropertyFilter, PropertyForm, PropertyView, Warn,
};

use crate::service::PropertyService;

/// Envelope wrapper for PropertyService.
#[derive(Clone)]
pub struct PropertyApi {
    service: Arc<dyn PropertyService>,
    locale: Locale,
}

impl PropertyApi {
    /// Create a new wrapper reporting messages in `locale`.
    pub fn new(service: Arc<dyn PropertyService>, locale: Locale) -> Self {
        Self { service, locale }
    }

    pub async fn create_property(
        &self,
        form: PropertyForm,
        author_id: &str,
    ) -> ApiResponse<Property> {
        ApiResponse::from_result(
            self.service.create_property(form, author_id).await,
            self.locale,
        )
    }

    pub async fn get_property(&self, filter: &PropertyFilter) -> ApiResponse<PropertyView> {
        ApiResponse::from_result(self.service.get_property(filter).await, self.locale)
    }

    pub async fn get_all_properties(
        &self,
        filter: &PropertyFilter,
    ) -> ApiResponse<Vec<PropertyView>> {
        ApiResponse::from_result(self.service.get_all_properties(filter).await, self.locale)
    }

    pub async fn get_base_properties(
        &self,
        filter: &PropertyFilter,
        page: PageRequest,
    ) -> ApiResponse<Vec<PropertyCard>> {
        ApiResponse::from_result(
            self.service.get_base_properties(filter, page).await,
            self.locale,
        )
    }

    pub async fn edit_property(
        &self,
        id: Uuid,
        form: PropertyForm,
        author_id: &str,
    ) -> ApiResponse<Property> {
        ApiResponse::from_result(
            self.service.edit_property(id, form, author_id).await,
            self.locale,
        )
    }

    pub async fn delete_property(
        &self,
        id: Uuid,
        author_id: &str,
        is_admin: bool,
    ) -> ApiResponse<()> {
        ApiResponse::from_unit(
            self.service.delete_property(id, author_id, is_admin).await,
            self.locale,
        )
    }

    pub async fn approve_property(&self, id: Uuid) -> ApiResponse<()> {
        ApiResponse::from_unit(self.service.approve_property(id).await, self.locale)
    }

    /// `data` tells whether a listing matched
    pub async fn require_censor(&self, filter: &PropertyFilter) -> ApiResponse<bool> {
        ApiResponse::from_result(self.service.require_censor(filter).await, self.locale)
    }

    pub async fn warn_property(&self, property_id: Uuid, content: &str) -> ApiResponse<Warn> {
        ApiResponse::from_result(
            self.service.warn_property(property_id, content).await,
            self.locale,
        )
    }

    pub async fn list_warns(&self, property_id: Uuid) -> ApiResponse<Vec<Warn>> {
        ApiResponse::from_result(self.service.list_warns(property_id).await, self.locale)
    }

    pub async fn list_informs(&self, owner_id: &str, unread_only: bool) -> ApiResponse<Vec<Inform>> {
        ApiResponse::from_result(
            self.service.list_informs(owner_id, unread_only).await,
            self.locale,
        )
    }

    pub async fn mark_inform_read(&self, id: Uuid, owner_id: &str) -> ApiResponse<Inform> {
        ApiResponse::from_result(
            self.service.mark_inform_read(id, owner_id).await,
            self.locale,
        )
    }
}

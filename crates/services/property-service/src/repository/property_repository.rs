//! Property repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, Order, QueryFilter,
    QueryOrder, QuerySelect, Select, Set,
};
use uuid::Uuid;

use super::entities::property::{self, thumbnail_to_json, ActiveModel, Entity as PropertyEntity};
use common::AppResult;
use domain::{
    NewProperty, OwnerScope, Property, PropertyChanges, PropertyFilter, PropertySort,
    SortDirection, SortField,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Property repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Insert a new listing (unpublished, unapproved, dated now)
    async fn insert(&self, property: NewProperty) -> AppResult<Property>;

    /// First listing matching the filter
    async fn find_one(&self, filter: &PropertyFilter) -> AppResult<Option<Property>>;

    /// All matching listings, oldest first
    async fn find_all(&self, filter: &PropertyFilter) -> AppResult<Vec<Property>>;

    /// One page of matching listings
    async fn find_page(
        &self,
        filter: &PropertyFilter,
        skip: u64,
        limit: u64,
        sort: PropertySort,
    ) -> AppResult<Vec<Property>>;

    /// Apply changes to a listing owned by `author_id`; resets both flags
    async fn update_owned(
        &self,
        id: Uuid,
        author_id: &str,
        changes: PropertyChanges,
    ) -> AppResult<Option<Property>>;

    /// Delete a listing within the given scope, returning the removed record
    async fn delete(&self, id: Uuid, scope: OwnerScope) -> AppResult<Option<Property>>;

    /// Set status and/or authen on the first matching listing
    async fn set_flags(
        &self,
        filter: &PropertyFilter,
        status: Option<bool>,
        authen: Option<bool>,
    ) -> AppResult<Option<Property>>;
}

/// Concrete implementation of PropertyRepository
pub struct PropertyStore {
    db: DatabaseConnection,
}

impl PropertyStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn filter_condition(filter: &PropertyFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(id) = filter.id {
        condition = condition.add(property::Column::Id.eq(id));
    }
    if let Some(author_id) = &filter.author_id {
        condition = condition.add(property::Column::AuthorId.eq(author_id.as_str()));
    }
    if let Some(is_sale) = filter.is_sale {
        condition = condition.add(property::Column::IsSale.eq(is_sale));
    }
    if let Some(property_type) = &filter.property_type {
        condition = condition.add(property::Column::PropertyType.eq(property_type.as_str()));
    }
    if let Some(city_id) = &filter.city_id {
        condition = condition.add(property::Column::CityId.eq(city_id.as_str()));
    }
    if let Some(district_id) = &filter.district_id {
        condition = condition.add(property::Column::DistrictId.eq(district_id.as_str()));
    }
    if let Some(status) = filter.status {
        condition = condition.add(property::Column::Status.eq(status));
    }
    if let Some(authen) = filter.authen {
        condition = condition.add(property::Column::Authen.eq(authen));
    }
    if let Some(min_price) = filter.min_price {
        condition = condition.add(property::Column::Price.gte(min_price));
    }
    if let Some(max_price) = filter.max_price {
        condition = condition.add(property::Column::Price.lte(max_price));
    }

    condition
}

fn sort_column(field: SortField) -> property::Column {
    match field {
        SortField::Date => property::Column::Date,
        SortField::Price => property::Column::Price,
        SortField::Area => property::Column::Area,
    }
}

fn sort_order(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}

/// Sorted page of matching listings, ties broken by id so pages stay stable.
fn page_query(
    filter: &PropertyFilter,
    skip: u64,
    limit: u64,
    sort: PropertySort,
) -> Select<PropertyEntity> {
    PropertyEntity::find()
        .filter(filter_condition(filter))
        .order_by(sort_column(sort.field), sort_order(sort.direction))
        .order_by_asc(property::Column::Id)
        .offset(skip)
        .limit(limit)
}

/// A single listing, restricted to its author unless the scope is unrestricted.
fn scoped_query(id: Uuid, scope: &OwnerScope) -> Select<PropertyEntity> {
    let query = PropertyEntity::find_by_id(id);
    match scope {
        OwnerScope::Any => query,
        OwnerScope::Author(author_id) => {
            query.filter(property::Column::AuthorId.eq(author_id.as_str()))
        }
    }
}

/// Copy submitted fields onto a listing and send it back through review.
fn apply_changes(active: &mut ActiveModel, changes: PropertyChanges) {
    if let Some(title) = changes.title {
        active.title = Set(title);
    }
    if let Some(is_sale) = changes.is_sale {
        active.is_sale = Set(is_sale);
    }
    if let Some(property_type) = changes.property_type {
        active.property_type = Set(property_type);
    }
    if let Some(city_id) = changes.city_id {
        active.city_id = Set(city_id);
    }
    if let Some(district_id) = changes.district_id {
        active.district_id = Set(district_id);
    }
    if let Some(address) = changes.address {
        active.address = Set(address);
    }
    if let Some(price) = changes.price {
        active.price = Set(price);
    }
    if let Some(area) = changes.area {
        active.area = Set(Some(area));
    }
    if let Some(description) = changes.description {
        active.description = Set(description);
    }
    if let Some(rooms) = changes.rooms {
        active.rooms = Set(Some(rooms));
    }
    if let Some(bedrooms) = changes.bedrooms {
        active.bedrooms = Set(Some(bedrooms));
    }
    if let Some(bathrooms) = changes.bathrooms {
        active.bathrooms = Set(Some(bathrooms));
    }
    if let Some(floors) = changes.floors {
        active.floors = Set(Some(floors));
    }
    if let Some(thumbnail) = changes.thumbnail {
        active.thumbnail = Set(thumbnail_to_json(thumbnail));
    }

    active.status = Set(false);
    active.authen = Set(false);
}

#[async_trait]
impl PropertyRepository for PropertyStore {
    async fn insert(&self, property: NewProperty) -> AppResult<Property> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(property.title),
            is_sale: Set(property.is_sale),
            property_type: Set(property.property_type),
            city_id: Set(property.location.city_id),
            district_id: Set(property.location.district_id),
            address: Set(property.address),
            price: Set(property.price),
            area: Set(property.area),
            description: Set(property.description),
            rooms: Set(property.features.rooms),
            bedrooms: Set(property.features.bedrooms),
            bathrooms: Set(property.features.bathrooms),
            floors: Set(property.features.floors),
            thumbnail: Set(thumbnail_to_json(property.thumbnail)),
            date: Set(chrono::Utc::now()),
            author_id: Set(property.author_id),
            status: Set(false),
            authen: Set(false),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Property::from(model))
    }

    async fn find_one(&self, filter: &PropertyFilter) -> AppResult<Option<Property>> {
        let result = PropertyEntity::find()
            .filter(filter_condition(filter))
            .one(&self.db)
            .await?;

        Ok(result.map(Property::from))
    }

    async fn find_all(&self, filter: &PropertyFilter) -> AppResult<Vec<Property>> {
        let models = PropertyEntity::find()
            .filter(filter_condition(filter))
            .order_by_asc(property::Column::Date)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Property::from).collect())
    }

    async fn find_page(
        &self,
        filter: &PropertyFilter,
        skip: u64,
        limit: u64,
        sort: PropertySort,
    ) -> AppResult<Vec<Property>> {
        tracing::debug!(?filter, skip, limit, ?sort, "Fetching property page");

        let models = page_query(filter, skip, limit, sort).all(&self.db).await?;

        Ok(models.into_iter().map(Property::from).collect())
    }

    async fn update_owned(
        &self,
        id: Uuid,
        author_id: &str,
        changes: PropertyChanges,
    ) -> AppResult<Option<Property>> {
        let scope = OwnerScope::Author(author_id.to_string());
        let Some(model) = scoped_query(id, &scope).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = model.into();
        apply_changes(&mut active, changes);

        let model = active.update(&self.db).await?;
        Ok(Some(Property::from(model)))
    }

    async fn delete(&self, id: Uuid, scope: OwnerScope) -> AppResult<Option<Property>> {
        let Some(model) = scoped_query(id, &scope).one(&self.db).await? else {
            return Ok(None);
        };

        let result = PropertyEntity::delete_by_id(model.id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(Property::from(model)))
    }

    async fn set_flags(
        &self,
        filter: &PropertyFilter,
        status: Option<bool>,
        authen: Option<bool>,
    ) -> AppResult<Option<Property>> {
        let Some(model) = PropertyEntity::find()
            .filter(filter_condition(filter))
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: ActiveModel = model.into();
        if let Some(status) = status {
            active.status = Set(status);
        }
        if let Some(authen) = authen {
            active.authen = Set(authen);
        }

        let model = active.update(&self.db).await?;
        Ok(Some(Property::from(model)))
    }
}

//! Property listing entity, form input, query and display types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::author::Author;
use crate::constants::SALE_FLAG_TRUE;
use crate::error::{DomainError, DomainResult};
use crate::price::normalize_price;

/// References into the external city and district tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub city_id: String,
    pub district_id: String,
}

/// Room counts of a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    pub rooms: Option<i32>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub floors: Option<i32>,
}

/// Property listing domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: Uuid,
    pub title: String,
    pub is_sale: bool,
    #[serde(rename = "type")]
    pub property_type: String,
    pub location: Location,
    pub address: String,
    /// Normalised price in the base unit
    pub price: i64,
    pub area: Option<f64>,
    pub description: String,
    pub features: Features,
    pub thumbnail: Vec<String>,
    pub date: DateTime<Utc>,
    pub author_id: String,
    /// Published flag
    pub status: bool,
    /// Approved by an administrator
    pub authen: bool,
}

/// Listing form as submitted by a user.
///
/// Every field is optional so the same form serves create and edit; create
/// enforces the required ones in [`PropertyForm::into_new_property`].
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PropertyForm {
    #[validate(length(min = 1, max = 200, message = "Title must be 1 to 200 characters"))]
    pub title: Option<String>,
    /// `"True"` marks a sale, anything else a rental
    #[serde(rename = "isSale")]
    pub is_sale: Option<String>,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Property type cannot be empty"))]
    pub property_type: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    #[validate(length(max = 500, message = "Address cannot exceed 500 characters"))]
    pub address: Option<String>,
    pub price: Option<String>,
    /// Price unit code (`n`, `hm`, `b`, `hb`; anything else is the base unit)
    pub unit: Option<String>,
    #[validate(range(min = 0.0, message = "Area cannot be negative"))]
    pub area: Option<f64>,
    pub description: Option<String>,
    #[validate(range(min = 0, message = "Room count cannot be negative"))]
    pub rooms: Option<i32>,
    #[validate(range(min = 0, message = "Room count cannot be negative"))]
    pub bedrooms: Option<i32>,
    #[validate(range(min = 0, message = "Room count cannot be negative"))]
    pub bathrooms: Option<i32>,
    #[validate(range(min = 0, message = "Floor count cannot be negative"))]
    pub floors: Option<i32>,
    pub thumbnail: Option<Vec<String>>,
}

/// Validated data for a new listing.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProperty {
    pub title: String,
    pub is_sale: bool,
    pub property_type: String,
    pub location: Location,
    pub address: String,
    pub price: i64,
    pub area: Option<f64>,
    pub description: String,
    pub features: Features,
    pub thumbnail: Vec<String>,
    pub author_id: String,
}

/// Field updates for an existing listing. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyChanges {
    pub title: Option<String>,
    pub is_sale: Option<bool>,
    pub property_type: Option<String>,
    pub city_id: Option<String>,
    pub district_id: Option<String>,
    pub address: Option<String>,
    pub price: Option<i64>,
    pub area: Option<f64>,
    pub description: Option<String>,
    pub rooms: Option<i32>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub floors: Option<i32>,
    pub thumbnail: Option<Vec<String>>,
}

fn parse_sale_flag(value: &str) -> bool {
    value == SALE_FLAG_TRUE
}

fn required(value: Option<String>, field: &str) -> DomainResult<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| DomainError::validation(format!("{} is required", field)))
}

/// An edit may leave a required field out, but may not blank it.
fn not_blank(value: Option<String>, field: &str) -> DomainResult<Option<String>> {
    match value {
        Some(v) if v.trim().is_empty() => Err(DomainError::validation(format!(
            "{} cannot be empty",
            field
        ))),
        other => Ok(other),
    }
}

impl PropertyForm {
    /// Run field validation, reporting the first failing rule.
    pub fn check(&self) -> DomainResult<()> {
        self.validate().map_err(|e| {
            let message = e
                .field_errors()
                .values()
                .next()
                .and_then(|errors| errors.first())
                .and_then(|error| error.message.as_ref())
                .map(|msg| msg.to_string())
                .unwrap_or_else(|| "Validation failed".to_string());
            DomainError::validation(message)
        })
    }

    /// Build a new listing owned by `author_id`.
    pub fn into_new_property(self, author_id: &str) -> DomainResult<NewProperty> {
        self.check()?;
        let price = normalize_price(self.price.as_deref(), self.unit.as_deref())?;

        Ok(NewProperty {
            title: required(self.title, "Title")?,
            is_sale: self.is_sale.as_deref().is_some_and(parse_sale_flag),
            property_type: required(self.property_type, "Property type")?,
            location: Location {
                city_id: required(self.city, "City")?,
                district_id: required(self.district, "District")?,
            },
            address: self.address.unwrap_or_default(),
            price,
            area: self.area,
            description: self.description.unwrap_or_default(),
            features: Features {
                rooms: self.rooms,
                bedrooms: self.bedrooms,
                bathrooms: self.bathrooms,
                floors: self.floors,
            },
            thumbnail: self.thumbnail.unwrap_or_default(),
            author_id: author_id.to_string(),
        })
    }

    /// Build the set of changes an edit applies.
    ///
    /// The price is recomputed only when a price or a unit is submitted.
    pub fn into_changes(self) -> DomainResult<PropertyChanges> {
        self.check()?;
        let price = if self.price.is_some() || self.unit.is_some() {
            Some(normalize_price(self.price.as_deref(), self.unit.as_deref())?)
        } else {
            None
        };

        Ok(PropertyChanges {
            title: not_blank(self.title, "Title")?,
            is_sale: self.is_sale.as_deref().map(parse_sale_flag),
            property_type: not_blank(self.property_type, "Property type")?,
            city_id: not_blank(self.city, "City")?,
            district_id: not_blank(self.district, "District")?,
            address: self.address,
            price,
            area: self.area,
            description: self.description,
            rooms: self.rooms,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            floors: self.floors,
            thumbnail: self.thumbnail,
        })
    }
}

// =============================================================================
// Queries
// =============================================================================

/// Listing query. Unset fields do not constrain the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyFilter {
    pub id: Option<Uuid>,
    pub author_id: Option<String>,
    pub is_sale: Option<bool>,
    pub property_type: Option<String>,
    pub city_id: Option<String>,
    pub district_id: Option<String>,
    pub status: Option<bool>,
    pub authen: Option<bool>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
}

impl PropertyFilter {
    /// Match a single listing by id
    pub fn by_id(id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    /// Restrict to listings of one author
    pub fn owned_by(mut self, author_id: impl Into<String>) -> Self {
        self.author_id = Some(author_id.into());
        self
    }

    /// Restrict to published and approved listings
    pub fn live(mut self) -> Self {
        self.status = Some(true);
        self.authen = Some(true);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Date,
    Price,
    Area,
}

impl std::str::FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "date" => Ok(SortField::Date),
            "price" => Ok(SortField::Price),
            "area" => Ok(SortField::Area),
            other => Err(DomainError::validation(format!("unknown sort field '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Listing order. Defaults to newest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl PropertySort {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

/// Offset paging for listing pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub skip: u64,
    /// Zero selects the default page size
    pub limit: u64,
    pub sort: PropertySort,
}

impl PageRequest {
    /// Page size after applying the default and the upper bound
    pub fn effective_limit(&self, default_size: u64, max_size: u64) -> u64 {
        let limit = if self.limit == 0 { default_size } else { self.limit };
        limit.min(max_size)
    }
}

/// Who may act on a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerScope {
    /// Any listing (administrators)
    Any,
    /// Only listings posted by this account
    Author(String),
}

impl OwnerScope {
    pub fn for_actor(author_id: &str, is_admin: bool) -> Self {
        if is_admin {
            OwnerScope::Any
        } else {
            OwnerScope::Author(author_id.to_string())
        }
    }
}

// =============================================================================
// Display
// =============================================================================

/// Id plus resolved display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: String,
    pub name: String,
}

/// Location with resolved city and district names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationView {
    pub city: NamedRef,
    pub district: NamedRef,
}

impl LocationView {
    /// Unresolved names become empty strings.
    pub fn resolve(location: &Location, city: Option<String>, district: Option<String>) -> Self {
        Self {
            city: NamedRef {
                id: location.city_id.clone(),
                name: city.unwrap_or_default(),
            },
            district: NamedRef {
                id: location.district_id.clone(),
                name: district.unwrap_or_default(),
            },
        }
    }
}

/// Full listing with joined location names and author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyView {
    pub id: Uuid,
    pub title: String,
    pub is_sale: bool,
    #[serde(rename = "type")]
    pub property_type: String,
    pub location: LocationView,
    pub address: String,
    pub price: i64,
    pub area: Option<f64>,
    pub description: String,
    pub features: Features,
    pub thumbnail: Vec<String>,
    pub date: DateTime<Utc>,
    pub author_id: String,
    pub status: bool,
    pub authen: bool,
    pub author: Option<Author>,
}

impl PropertyView {
    pub fn assemble(property: Property, location: LocationView, author: Option<Author>) -> Self {
        Self {
            id: property.id,
            title: property.title,
            is_sale: property.is_sale,
            property_type: property.property_type,
            location,
            address: property.address,
            price: property.price,
            area: property.area,
            description: property.description,
            features: property.features,
            thumbnail: property.thumbnail,
            date: property.date,
            author_id: property.author_id,
            status: property.status,
            authen: property.authen,
            author,
        }
    }
}

/// Compact listing for result pages: selected fields and the first image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyCard {
    pub id: Uuid,
    pub author_id: String,
    pub title: String,
    pub features: Features,
    pub location: LocationView,
    pub price: i64,
    pub area: Option<f64>,
    pub thumbnail: Option<String>,
    #[serde(rename = "type")]
    pub property_type: String,
    pub is_sale: bool,
    pub author: Option<Author>,
}

impl PropertyCard {
    pub fn assemble(property: Property, location: LocationView, author: Option<Author>) -> Self {
        Self {
            id: property.id,
            author_id: property.author_id,
            title: property.title,
            features: property.features,
            location,
            price: property.price,
            area: property.area,
            thumbnail: property.thumbnail.into_iter().next(),
            property_type: property.property_type,
            is_sale: property.is_sale,
            author,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> PropertyForm {
        PropertyForm {
            title: Some("Riverside flat".to_string()),
            is_sale: Some("True".to_string()),
            property_type: Some("apartment".to_string()),
            city: Some("c-01".to_string()),
            district: Some("d-07".to_string()),
            price: Some("2.5".to_string()),
            unit: Some("b".to_string()),
            area: Some(72.5),
            rooms: Some(3),
            thumbnail: Some(vec!["a.jpg".to_string(), "b.jpg".to_string()]),
            ..Default::default()
        }
    }

    #[test]
    fn new_property_normalises_price_and_sale_flag() {
        let new = form().into_new_property("acc-9").unwrap();
        assert_eq!(new.price, 2_500);
        assert!(new.is_sale);
        assert_eq!(new.author_id, "acc-9");
        assert_eq!(new.location.city_id, "c-01");
        assert_eq!(new.address, "");
    }

    #[test]
    fn sale_flag_is_case_sensitive() {
        let mut f = form();
        f.is_sale = Some("true".to_string());
        assert!(!f.into_new_property("acc").unwrap().is_sale);
    }

    #[test]
    fn new_property_requires_title_and_location() {
        let mut f = form();
        f.title = None;
        assert!(matches!(
            f.into_new_property("acc"),
            Err(DomainError::Validation(_))
        ));

        let mut f = form();
        f.district = Some("  ".to_string());
        assert!(matches!(
            f.into_new_property("acc"),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn negative_counts_fail_validation() {
        let mut f = form();
        f.bedrooms = Some(-1);
        let err = f.into_new_property("acc").unwrap_err();
        assert_eq!(err, DomainError::validation("Room count cannot be negative"));
    }

    #[test]
    fn changes_keep_price_when_not_submitted() {
        let changes = PropertyForm {
            title: Some("New title".to_string()),
            ..Default::default()
        }
        .into_changes()
        .unwrap();

        assert_eq!(changes.title.as_deref(), Some("New title"));
        assert_eq!(changes.price, None);
        assert_eq!(changes.is_sale, None);
    }

    #[test]
    fn changes_reject_blank_required_fields() {
        let blank_title = PropertyForm {
            title: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(
            blank_title.into_changes().unwrap_err(),
            DomainError::validation("Title cannot be empty")
        );

        let blank_city = PropertyForm {
            city: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(
            blank_city.into_changes().unwrap_err(),
            DomainError::validation("City cannot be empty")
        );

        let blank_district = PropertyForm {
            district: Some(" ".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            blank_district.into_changes(),
            Err(DomainError::Validation(_))
        ));

        let blank_type = PropertyForm {
            property_type: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            blank_type.into_changes(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn changes_recompute_price_for_unit_only() {
        let changes = PropertyForm {
            unit: Some("n".to_string()),
            ..Default::default()
        }
        .into_changes()
        .unwrap();
        assert_eq!(changes.price, Some(0));
    }

    #[test]
    fn page_limit_is_defaulted_and_clamped() {
        let page = PageRequest::default();
        assert_eq!(page.effective_limit(20, 100), 20);

        let page = PageRequest {
            limit: 500,
            ..Default::default()
        };
        assert_eq!(page.effective_limit(20, 100), 100);
    }

    #[test]
    fn card_keeps_first_thumbnail_only() {
        let new = form().into_new_property("acc").unwrap();
        let property = Property {
            id: Uuid::new_v4(),
            title: new.title,
            is_sale: new.is_sale,
            property_type: new.property_type,
            location: new.location.clone(),
            address: new.address,
            price: new.price,
            area: new.area,
            description: new.description,
            features: new.features,
            thumbnail: new.thumbnail,
            date: Utc::now(),
            author_id: new.author_id,
            status: false,
            authen: false,
        };

        let location = LocationView::resolve(&new.location, Some("Hanoi".to_string()), None);
        let card = PropertyCard::assemble(property, location, None);
        assert_eq!(card.thumbnail.as_deref(), Some("a.jpg"));
        assert_eq!(card.location.city.name, "Hanoi");
        assert_eq!(card.location.district.name, "");
        assert_eq!(card.location.district.id, "d-07");
    }

    #[test]
    fn sort_field_parses_case_insensitively() {
        assert_eq!("Price".parse::<SortField>(), Ok(SortField::Price));
        assert!("rating".parse::<SortField>().is_err());
    }
}

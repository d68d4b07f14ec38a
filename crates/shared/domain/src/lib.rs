//! Domain layer - Core listing entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! listings and their form/query/display types, price normalisation and the
//! warn/inform notices attached to listings.

pub mod author;
pub mod constants;
pub mod error;
pub mod notice;
pub mod price;
pub mod property;

pub use author::Author;
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use notice::{normalize_warn_content, Inform, InformKind, Warn};
pub use price::{normalize_price, PriceUnit};
pub use property::{
    Features, Location, LocationView, NamedRef, NewProperty, OwnerScope, PageRequest, Property,
    PropertyCard, PropertyChanges, PropertyFilter, PropertyForm, PropertySort, PropertyView,
    SortDirection, SortField,
};

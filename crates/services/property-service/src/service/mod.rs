//! Service layer - listing use cases.

mod property_service;

pub use property_service::{PropertyManager, PropertyService};

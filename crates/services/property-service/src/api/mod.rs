//! Caller-facing layer: wraps the service and reports every outcome as a
//! `{code, message, data}` envelope.

mod property_api;

pub use property_api::PropertyApi;

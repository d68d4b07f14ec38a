//! Common utilities shared across services.
//!
//! This crate provides:
//! - Unified application error handling
//! - The `{code, message, data}` result envelope with localised messages
//! - Configuration structures

pub mod config;
pub mod error;
pub mod response;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
pub use response::{ApiResponse, Locale, ResultCode};

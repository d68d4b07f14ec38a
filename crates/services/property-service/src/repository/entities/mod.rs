//! SeaORM entities.
//!
//! `property`, `warn`, `contact` and `inform` are owned by this service.
//! `city`, `district` and `account` map tables of other services and are
//! only read.

pub mod account;
pub mod city;
pub mod contact;
pub mod district;
pub mod inform;
pub mod property;
pub mod warn;

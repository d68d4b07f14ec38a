//! Price normalisation.
//!
//! Listing forms carry a free-text price and a unit code. Stored prices are
//! integers expressed in the base unit (millions), so `1.5` with unit `b`
//! becomes `1500`.

use crate::constants::{UNIT_BILLION, UNIT_HUNDRED_BILLION, UNIT_HUNDRED_MILLION, UNIT_NEGOTIABLE};
use crate::error::{DomainError, DomainResult};

/// Unit a form price is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceUnit {
    /// Price to be agreed; always stored as 0
    Negotiable,
    /// Base unit (millions)
    Base,
    HundredMillion,
    Billion,
    HundredBillion,
}

impl PriceUnit {
    /// Multiplier converting a value in this unit to the base unit.
    pub fn multiplier(&self) -> i64 {
        match self {
            PriceUnit::Negotiable => 0,
            PriceUnit::Base => 1,
            PriceUnit::HundredMillion => 100,
            PriceUnit::Billion => 1_000,
            PriceUnit::HundredBillion => 100_000,
        }
    }
}

/// Unknown or missing codes fall back to the base unit.
impl From<Option<&str>> for PriceUnit {
    fn from(code: Option<&str>) -> Self {
        match code.map(str::trim) {
            Some(UNIT_NEGOTIABLE) => PriceUnit::Negotiable,
            Some(UNIT_HUNDRED_MILLION) => PriceUnit::HundredMillion,
            Some(UNIT_BILLION) => PriceUnit::Billion,
            Some(UNIT_HUNDRED_BILLION) => PriceUnit::HundredBillion,
            _ => PriceUnit::Base,
        }
    }
}

/// Normalise a form price into a non-negative integer in the base unit.
pub fn normalize_price(price: Option<&str>, unit: Option<&str>) -> DomainResult<i64> {
    let unit = PriceUnit::from(unit);
    if unit == PriceUnit::Negotiable {
        return Ok(0);
    }

    let text = price
        .map(str::trim)
        .ok_or_else(|| DomainError::price("price is required"))?;
    let value: f64 = if text.is_empty() {
        0.0
    } else {
        text.parse()
            .map_err(|_| DomainError::price(format!("'{}' is not a number", text)))?
    };

    if !value.is_finite() {
        return Err(DomainError::price("price must be finite"));
    }
    if value < 0.0 {
        return Err(DomainError::price("price must not be negative"));
    }

    // i64::MAX as f64 rounds up to 2^63, which does not fit
    let scaled = (value * unit.multiplier() as f64).round();
    if scaled >= i64::MAX as f64 {
        return Err(DomainError::price("price is too large"));
    }

    Ok(scaled as i64)
}

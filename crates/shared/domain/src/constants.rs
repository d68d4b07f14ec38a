//! Domain-level constants.
//!
//! These constants define listing rules and validation requirements.

// =============================================================================
// Price units
// =============================================================================

/// Unit code for a negotiable price (stored as 0)
pub const UNIT_NEGOTIABLE: &str = "n";

/// Unit code for hundreds of millions
pub const UNIT_HUNDRED_MILLION: &str = "hm";

/// Unit code for billions
pub const UNIT_BILLION: &str = "b";

/// Unit code for hundreds of billions
pub const UNIT_HUNDRED_BILLION: &str = "hb";

/// Form value that marks a listing as "for sale"
pub const SALE_FLAG_TRUE: &str = "True";

// =============================================================================
// Inform kinds
// =============================================================================

pub const INFORM_CONTACT: &str = "contact";
pub const INFORM_CENSOR: &str = "censor";
pub const INFORM_WARN: &str = "warn";

/// All valid inform type values
pub const VALID_INFORM_KINDS: &[&str] = &[INFORM_CONTACT, INFORM_CENSOR, INFORM_WARN];

/// Check if an inform type value is valid
pub fn is_valid_inform_kind(kind: &str) -> bool {
    VALID_INFORM_KINDS.contains(&kind)
}

// =============================================================================
// Validation
// =============================================================================

/// Maximum warn content length
pub const MAX_WARN_LENGTH: usize = 2000;

// =============================================================================
// Paging
// =============================================================================

/// Default number of listings per page
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Upper bound on listings per page
pub const MAX_PAGE_SIZE: u64 = 100;

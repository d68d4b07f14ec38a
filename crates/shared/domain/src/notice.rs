//! Notices attached to listings: warns raised against a property and the
//! informs that notify an account about a contact, censor or warn record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{
    is_valid_inform_kind, INFORM_CENSOR, INFORM_CONTACT, INFORM_WARN, MAX_WARN_LENGTH,
};
use crate::error::{DomainError, DomainResult};

/// The single sub-record an inform points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "ref", rename_all = "lowercase")]
pub enum InformKind {
    Contact(Uuid),
    Censor(Uuid),
    Warn(Uuid),
}

impl InformKind {
    /// Stored type name
    pub fn name(&self) -> &'static str {
        match self {
            InformKind::Contact(_) => INFORM_CONTACT,
            InformKind::Censor(_) => INFORM_CENSOR,
            InformKind::Warn(_) => INFORM_WARN,
        }
    }

    /// Rebuild a kind from its stored columns.
    ///
    /// Exactly one reference must be set and it must agree with `kind`.
    pub fn from_parts(
        kind: &str,
        contact: Option<Uuid>,
        censor: Option<Uuid>,
        warn: Option<Uuid>,
    ) -> DomainResult<Self> {
        if !is_valid_inform_kind(kind) {
            return Err(DomainError::validation(format!("unknown inform type '{}'", kind)));
        }

        let parsed = match (contact, censor, warn) {
            (Some(id), None, None) => InformKind::Contact(id),
            (None, Some(id), None) => InformKind::Censor(id),
            (None, None, Some(id)) => InformKind::Warn(id),
            _ => {
                return Err(DomainError::validation(
                    "inform must reference exactly one sub-record",
                ))
            }
        };

        if parsed.name() != kind {
            return Err(DomainError::validation(format!(
                "inform type '{}' does not match its {} reference",
                kind,
                parsed.name()
            )));
        }

        Ok(parsed)
    }
}

/// Notification linking an account to a sub-record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inform {
    pub id: Uuid,
    pub owner_id: String,
    #[serde(flatten)]
    pub kind: InformKind,
    pub property_id: Option<Uuid>,
    pub is_read: bool,
    pub date: DateTime<Utc>,
}

/// Flag raised against a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warn {
    pub id: Uuid,
    pub property_owner: String,
    pub content: String,
    pub property_id: Uuid,
    pub date: DateTime<Utc>,
}

/// Trim warn text and check it is usable.
pub fn normalize_warn_content(content: &str) -> DomainResult<String> {
    let content = content.trim();
    if content.is_empty() {
        return Err(DomainError::validation("Warn content cannot be empty"));
    }
    if content.chars().count() > MAX_WARN_LENGTH {
        return Err(DomainError::validation(format!(
            "Warn content cannot exceed {} characters",
            MAX_WARN_LENGTH
        )));
    }
    Ok(content.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_accepts_single_matching_reference() {
        let id = Uuid::new_v4();
        assert_eq!(
            InformKind::from_parts("warn", None, None, Some(id)),
            Ok(InformKind::Warn(id))
        );
        assert_eq!(
            InformKind::from_parts("contact", Some(id), None, None),
            Ok(InformKind::Contact(id))
        );
    }

    #[test]
    fn from_parts_rejects_two_references() {
        let result = InformKind::from_parts(
            "warn",
            Some(Uuid::new_v4()),
            None,
            Some(Uuid::new_v4()),
        );
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn from_parts_rejects_missing_reference() {
        let result = InformKind::from_parts("censor", None, None, None);
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn from_parts_rejects_mismatched_type() {
        let result = InformKind::from_parts("contact", None, Some(Uuid::new_v4()), None);
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn from_parts_rejects_unknown_type() {
        let result = InformKind::from_parts("like", None, None, Some(Uuid::new_v4()));
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn inform_serializes_kind_inline() {
        let warn_id = Uuid::new_v4();
        let inform = Inform {
            id: Uuid::new_v4(),
            owner_id: "acc-1".to_string(),
            kind: InformKind::Warn(warn_id),
            property_id: None,
            is_read: false,
            date: Utc::now(),
        };

        let json = serde_json::to_value(&inform).unwrap();
        assert_eq!(json["type"], "warn");
        assert_eq!(json["ref"], warn_id.to_string());
        assert_eq!(json["ownerId"], "acc-1");
    }

    #[test]
    fn warn_content_is_trimmed_and_required() {
        assert_eq!(normalize_warn_content("  spam  "), Ok("spam".to_string()));
        assert!(normalize_warn_content("   ").is_err());
        assert!(normalize_warn_content(&"x".repeat(MAX_WARN_LENGTH + 1)).is_err());
    }
}

//! Inform database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{DomainError, Inform, InformKind};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "informs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub owner_id: String,
    /// One of `contact`, `censor`, `warn`
    pub kind: String,
    pub property_id: Option<Uuid>,
    pub contact_id: Option<Uuid>,
    pub censor_id: Option<Uuid>,
    pub warn_id: Option<Uuid>,
    pub is_read: bool,
    pub date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Reference columns for a kind: (contact_id, censor_id, warn_id)
pub fn reference_columns(kind: &InformKind) -> (Option<Uuid>, Option<Uuid>, Option<Uuid>) {
    match *kind {
        InformKind::Contact(id) => (Some(id), None, None),
        InformKind::Censor(id) => (None, Some(id), None),
        InformKind::Warn(id) => (None, None, Some(id)),
    }
}

impl TryFrom<Model> for Inform {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let kind =
            InformKind::from_parts(&model.kind, model.contact_id, model.censor_id, model.warn_id)?;

        Ok(Inform {
            id: model.id,
            owner_id: model.owner_id,
            kind,
            property_id: model.property_id,
            is_read: model.is_read,
            date: model.date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(kind: &str, contact: Option<Uuid>, warn: Option<Uuid>) -> Model {
        Model {
            id: Uuid::new_v4(),
            owner_id: "acc-1".to_string(),
            kind: kind.to_string(),
            property_id: Some(Uuid::new_v4()),
            contact_id: contact,
            censor_id: None,
            warn_id: warn,
            is_read: false,
            date: chrono::Utc::now(),
        }
    }

    #[test]
    fn reference_columns_round_trip_through_model() {
        let kind = InformKind::Censor(Uuid::new_v4());
        let (contact_id, censor_id, warn_id) = reference_columns(&kind);
        let model = Model {
            contact_id,
            censor_id,
            warn_id,
            ..row("censor", None, None)
        };

        assert_eq!(Inform::try_from(model).unwrap().kind, kind);
    }

    #[test]
    fn rejects_rows_with_two_references() {
        let model = row("warn", Some(Uuid::new_v4()), Some(Uuid::new_v4()));
        assert!(Inform::try_from(model).is_err());
    }
}

//! Warn database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Warn;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "warns")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub property_owner: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub property_id: Uuid,
    pub date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Warn {
    fn from(model: Model) -> Self {
        Warn {
            id: model.id,
            property_owner: model.property_owner,
            content: model.content,
            property_id: model.property_id,
            date: model.date,
        }
    }
}

//! User account table of the account service (read only).

use sea_orm::entity::prelude::*;

use domain::Author;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub account_id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Author {
    fn from(model: Model) -> Self {
        Author {
            account_id: model.account_id,
            name: model.name,
            email: model.email,
            phone: model.phone,
        }
    }
}

//! Property database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{Features, Location, Property};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "properties")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub is_sale: bool,
    pub property_type: String,
    pub city_id: String,
    pub district_id: String,
    pub address: String,
    pub price: i64,
    pub area: Option<f64>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub rooms: Option<i32>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub floors: Option<i32>,
    /// JSON array of image URLs
    #[sea_orm(column_type = "JsonBinary")]
    pub thumbnail: Json,
    pub date: DateTimeUtc,
    pub author_id: String,
    pub status: bool,
    pub authen: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Non-string entries are skipped.
pub fn thumbnail_from_json(value: Json) -> Vec<String> {
    match value {
        Json::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Json::String(url) => Some(url),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

pub fn thumbnail_to_json(urls: Vec<String>) -> Json {
    Json::Array(urls.into_iter().map(Json::String).collect())
}

/// Convert database model to domain entity
impl From<Model> for Property {
    fn from(model: Model) -> Self {
        Property {
            id: model.id,
            title: model.title,
            is_sale: model.is_sale,
            property_type: model.property_type,
            location: Location {
                city_id: model.city_id,
                district_id: model.district_id,
            },
            address: model.address,
            price: model.price,
            area: model.area,
            description: model.description,
            features: Features {
                rooms: model.rooms,
                bedrooms: model.bedrooms,
                bathrooms: model.bathrooms,
                floors: model.floors,
            },
            thumbnail: thumbnail_from_json(model.thumbnail),
            date: model.date,
            author_id: model.author_id,
            status: model.status,
            authen: model.authen,
        }
    }
}

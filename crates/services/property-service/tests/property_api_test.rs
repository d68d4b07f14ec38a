//! Envelope tests for PropertyApi.
//!
//! The facade runs on a real `PropertyManager` whose repositories are
//! mocked, so outcomes are checked end to end without a database connection.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use sea_orm::DbErr;
use uuid::Uuid;

use common::{AppError, Locale, PagingConfig, ResultCode};
use domain::{
    Author, Features, Inform, InformKind, Location, OwnerScope, PageRequest, Property,
    PropertyFilter, PropertyForm,
};
use property_service_lib::api::PropertyApi;
use property_service_lib::repository::{
    MockDirectory, MockNoticeRepository, MockPropertyRepository,
};
use property_service_lib::service::PropertyManager;

// =============================================================================
// Test Helpers
// =============================================================================

fn listing(id: Uuid, author_id: &str) -> Property {
    Property {
        id,
        title: "Lake view studio".to_string(),
        is_sale: false,
        property_type: "apartment".to_string(),
        location: Location {
            city_id: "c-01".to_string(),
            district_id: "d-02".to_string(),
        },
        address: "5 Ward Street".to_string(),
        price: 12,
        area: Some(35.0),
        description: String::new(),
        features: Features::default(),
        thumbnail: vec!["studio.jpg".to_string(), "kitchen.jpg".to_string()],
        date: Utc::now(),
        author_id: author_id.to_string(),
        status: false,
        authen: false,
    }
}

/// Directory that knows one city and one author.
fn directory() -> MockDirectory {
    let mut directory = MockDirectory::new();
    directory
        .expect_city_name()
        .returning(|id| Ok((id == "c-01").then(|| "Hà Nội".to_string())));
    directory.expect_district_name().returning(|_| Ok(None));
    directory.expect_find_author().returning(|id| {
        Ok((id == "acc-1").then(|| Author {
            account_id: id.to_string(),
            name: "Minh".to_string(),
            email: Some("minh@example.com".to_string()),
            phone: None,
        }))
    });
    directory
}

fn build_api(
    properties: MockPropertyRepository,
    notices: MockNoticeRepository,
    directory: MockDirectory,
    locale: Locale,
) -> PropertyApi {
    let service = PropertyManager::new(
        Arc::new(properties),
        Arc::new(notices),
        Arc::new(directory),
        PagingConfig::default(),
    );
    PropertyApi::new(Arc::new(service), locale)
}

/// Facade whose repositories must not be reached.
fn untouched_api(locale: Locale) -> PropertyApi {
    build_api(
        MockPropertyRepository::new(),
        MockNoticeRepository::new(),
        MockDirectory::new(),
        locale,
    )
}

fn form() -> PropertyForm {
    PropertyForm {
        title: Some("Lake view studio".to_string()),
        property_type: Some("apartment".to_string()),
        city: Some("c-01".to_string()),
        district: Some("d-02".to_string()),
        price: Some("1.2".to_string()),
        unit: Some("b".to_string()),
        ..Default::default()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_create_without_author_returns_invalid_code() {
    let api = untouched_api(Locale::Vi);
    let response = api.create_property(form(), "").await;

    assert_eq!(response.code, -2);
    assert_eq!(response.message, "Thông tin không hợp lệ");
    assert!(response.data.is_none());
}

#[tokio::test]
async fn test_create_returns_normalised_listing() {
    let mut properties = MockPropertyRepository::new();
    properties
        .expect_insert()
        .withf(|new| new.price == 1_200 && !new.is_sale && new.author_id == "acc-1")
        .times(1)
        .returning(|new| {
            let mut property = listing(Uuid::new_v4(), &new.author_id);
            property.price = new.price;
            Ok(property)
        });

    let api = build_api(properties, MockNoticeRepository::new(), MockDirectory::new(), Locale::En);
    let response = api.create_property(form(), "acc-1").await;

    assert_eq!(response.result_code(), Some(ResultCode::Success));
    assert_eq!(response.message, "Success");
    assert_eq!(response.data.map(|p| p.price), Some(1_200));
}

#[tokio::test]
async fn test_get_unknown_listing_returns_not_found_code() {
    let mut properties = MockPropertyRepository::new();
    properties.expect_find_one().returning(|_| Ok(None));

    let api = build_api(properties, MockNoticeRepository::new(), MockDirectory::new(), Locale::Vi);
    let response = api.get_property(&PropertyFilter::by_id(Uuid::new_v4())).await;

    assert_eq!(response.code, -1);
    assert_eq!(response.message, "Không tồn tại");
}

#[tokio::test]
async fn test_property_view_serializes_display_shape() {
    let id = Uuid::new_v4();
    let mut properties = MockPropertyRepository::new();
    properties
        .expect_find_one()
        .with(eq(PropertyFilter::by_id(id)))
        .returning(move |_| Ok(Some(listing(id, "acc-1"))));

    let api = build_api(properties, MockNoticeRepository::new(), directory(), Locale::Vi);
    let response = api.get_property(&PropertyFilter::by_id(id)).await;
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["code"], 0);
    assert_eq!(json["data"]["isSale"], false);
    assert_eq!(json["data"]["type"], "apartment");
    assert_eq!(json["data"]["authorId"], "acc-1");
    assert_eq!(json["data"]["location"]["city"]["name"], "Hà Nội");
    assert_eq!(json["data"]["location"]["district"]["name"], "");
    assert_eq!(json["data"]["author"]["name"], "Minh");
}

#[tokio::test]
async fn test_edit_by_other_author_returns_not_found_code() {
    let id = Uuid::new_v4();
    let mut properties = MockPropertyRepository::new();
    properties
        .expect_update_owned()
        .withf(move |target, author, _| *target == id && author == "acc-2")
        .returning(|_, _, _| Ok(None));

    let api = build_api(properties, MockNoticeRepository::new(), MockDirectory::new(), Locale::En);
    let response = api.edit_property(id, form(), "acc-2").await;

    assert_eq!(response.code, -1);
    assert_eq!(response.message, "Not found");
}

#[tokio::test]
async fn test_edit_blanking_title_returns_invalid_code() {
    let api = untouched_api(Locale::En);
    let blank = PropertyForm {
        title: Some("   ".to_string()),
        ..Default::default()
    };
    let response = api.edit_property(Uuid::new_v4(), blank, "acc-1").await;

    assert_eq!(response.code, -2);
    assert_eq!(response.message, "Invalid information");
}

#[tokio::test]
async fn test_delete_success_has_no_data() {
    let id = Uuid::new_v4();
    let mut properties = MockPropertyRepository::new();
    properties
        .expect_delete()
        .with(eq(id), eq(OwnerScope::Any))
        .returning(|id, _| Ok(Some(listing(id, "acc-1"))));

    let mut notices = MockNoticeRepository::new();
    notices.expect_delete_warns_for().returning(|_| Ok(1));
    notices.expect_delete_contacts_for().returning(|_| Ok(0));
    notices.expect_delete_informs_for().returning(|_| Ok(1));

    let api = build_api(properties, notices, MockDirectory::new(), Locale::Vi);
    let response = api.delete_property(id, "", true).await;
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json, serde_json::json!({"code": 0, "message": "Thành công"}));
}

#[tokio::test]
async fn test_require_censor_reports_match_as_data() {
    let known = Uuid::new_v4();
    let mut properties = MockPropertyRepository::new();
    properties
        .expect_set_flags()
        .returning(move |filter, _, _| Ok((filter.id == Some(known)).then(|| listing(known, "acc-1"))));

    let api = build_api(properties, MockNoticeRepository::new(), MockDirectory::new(), Locale::Vi);

    let matched = api.require_censor(&PropertyFilter::by_id(known)).await;
    assert_eq!(matched.data, Some(true));

    let missed = api.require_censor(&PropertyFilter::by_id(Uuid::new_v4())).await;
    assert_eq!(missed.code, 0);
    assert_eq!(missed.data, Some(false));
}

#[tokio::test]
async fn test_database_failure_reports_invalid_code() {
    let mut notices = MockNoticeRepository::new();
    notices
        .expect_mark_inform_read()
        .returning(|_, _| Err(AppError::from(DbErr::Custom("connection reset".to_string()))));

    let api = build_api(MockPropertyRepository::new(), notices, MockDirectory::new(), Locale::En);
    let response = api.mark_inform_read(Uuid::new_v4(), "acc-1").await;

    assert_eq!(response.code, -2);
    assert_eq!(response.message, "Invalid information");
}

#[tokio::test]
async fn test_failed_warn_reports_invalid_code() {
    let id = Uuid::new_v4();
    let mut properties = MockPropertyRepository::new();
    properties
        .expect_find_one()
        .returning(move |_| Ok(Some(listing(id, "acc-1"))));

    let mut notices = MockNoticeRepository::new();
    notices
        .expect_create_warn()
        .times(1)
        .returning(|_, _, _| Err(AppError::from(DbErr::Custom("insert into informs failed".to_string()))));

    let api = build_api(properties, notices, MockDirectory::new(), Locale::Vi);
    let response = api.warn_property(id, "Fake photos").await;

    assert_eq!(response.code, -2);
    assert!(response.data.is_none());
}

#[test]
fn test_base_listing_card_shape() {
    let mut properties = MockPropertyRepository::new();
    properties
        .expect_find_page()
        .returning(|_, _, _, _| Ok(vec![listing(Uuid::new_v4(), "acc-9")]));

    let api = build_api(properties, MockNoticeRepository::new(), directory(), Locale::Vi);
    let response = tokio_test::block_on(
        api.get_base_properties(&PropertyFilter::default(), PageRequest::default()),
    );

    let cards = response.data.expect("cards");
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].thumbnail.as_deref(), Some("studio.jpg"));
    assert!(cards[0].author.is_none());
}

#[tokio::test]
async fn test_informs_serialize_kind_and_reference() {
    let mut notices = MockNoticeRepository::new();
    notices
        .expect_list_informs()
        .withf(|owner, unread_only| owner == "acc-1" && !*unread_only)
        .returning(|owner, _| {
            Ok(vec![Inform {
                id: Uuid::new_v4(),
                owner_id: owner.to_string(),
                kind: InformKind::Warn(Uuid::new_v4()),
                property_id: Some(Uuid::new_v4()),
                is_read: false,
                date: Utc::now(),
            }])
        });

    let api = build_api(MockPropertyRepository::new(), notices, MockDirectory::new(), Locale::Vi);
    let response = api.list_informs("acc-1", false).await;
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["data"][0]["type"], "warn");
    assert_eq!(json["data"][0]["ownerId"], "acc-1");
    assert_eq!(json["data"][0]["isRead"], false);
}

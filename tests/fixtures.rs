//! Fixture loading from the embedded document and from files.

use std::fs;
use storefront_console::domain::{Money, OrderStatus, Role};
use storefront_console::fixtures::{FixtureStore, JsonFixtures};
use storefront_console::{initialize, Config, ConsoleError, Page};

const SMALL_DOCUMENT: &str = r##"{
  "version": 1,
  "orders": [
    {
      "id": "#ORD-1",
      "customer": "Ada Lovelace",
      "email": "ada@example.com",
      "products": ["Analytical Engine"],
      "total": "$1,024.00",
      "status": "processing",
      "date": "2024-02-01"
    }
  ],
  "users": [
    {
      "id": 7,
      "name": "Grace Hopper",
      "email": "grace@example.com",
      "role": "admin",
      "status": "active",
      "join_date": "2023-05-01"
    }
  ]
}"##;

#[test]
fn embedded_fixtures_parse() {
    let store = JsonFixtures::embedded().unwrap();
    assert!(store.source().is_none());

    assert_eq!(store.orders().unwrap().len(), 5);
    assert_eq!(store.products().unwrap().len(), 6);
    assert_eq!(store.users().unwrap().len(), 5);

    let dashboard = store.dashboard().unwrap();
    assert_eq!(dashboard.stats.len(), 4);
    assert_eq!(dashboard.recent_orders.len(), 4);
}

#[test]
fn file_replaces_embedded_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, SMALL_DOCUMENT).unwrap();

    let store = JsonFixtures::from_path(&path).unwrap();
    assert_eq!(store.source(), Some(path.as_path()));

    let orders = store.orders().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].status, OrderStatus::Processing);
    assert_eq!(orders[0].total, Money::from_cents(102_400));

    let users = store.users().unwrap();
    assert_eq!(users[0].role, Role::Admin);

    assert!(store.products().unwrap().is_empty());
    assert_eq!(store.settings().unwrap().store_name, "My E-Commerce Store");
}

#[test]
fn config_fixtures_path_feeds_initialize() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, SMALL_DOCUMENT).unwrap();

    let config = Config {
        fixtures_path: Some(path),
        default_page: Page::Users,
        ..Config::default()
    };
    let state = initialize(&config).unwrap();

    assert_eq!(state.page, Page::Users);
    assert_eq!(state.users.records().len(), 1);
    assert_eq!(state.orders.facet_counts("status").unwrap().get("processing"), 1);
}

#[test]
fn invalid_json_is_a_fixture_error() {
    let err = JsonFixtures::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConsoleError::Fixture(_)));
}

#[test]
fn wrong_version_is_rejected() {
    let err = JsonFixtures::from_json(r#"{ "version": 2 }"#).unwrap_err();
    assert!(matches!(err, ConsoleError::Fixture(_)));
}

#[test]
fn duplicate_ids_are_rejected() {
    let doc = r##"{
      "version": 1,
      "orders": [
        { "id": "#A", "customer": "X", "email": "x@example.com", "status": "pending", "date": "2024-01-01" },
        { "id": "#A", "customer": "Y", "email": "y@example.com", "status": "shipped", "date": "2024-01-02" }
      ]
    }"##;
    let err = JsonFixtures::from_json(doc).unwrap_err();
    assert!(err.to_string().contains("duplicate order id"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = JsonFixtures::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConsoleError::Io(_)));
}

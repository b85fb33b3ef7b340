//! Filter engine behaviour over the real record types.

use chrono::NaiveDate;
use storefront_console::domain::{Order, OrderStatus, User};
use storefront_console::filter::{facet_counts, filter, matches, FacetSelection, FilterState, Record, ALL};
use storefront_console::fixtures::{FixtureStore, JsonFixtures};
use storefront_console::ConsoleError;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

/// Five orders, one per status.
fn orders() -> Vec<Order> {
    vec![
        Order::new("#ORD-1", "John Doe", "john@example.com", OrderStatus::Shipped, date(15)),
        Order::new("#ORD-2", "Jane Smith", "jane@example.com", OrderStatus::Pending, date(14)),
        Order::new("#ORD-3", "Mike Johnson", "mike@example.com", OrderStatus::Completed, date(13)),
        Order::new("#ORD-4", "Sarah Wilson", "sarah@example.com", OrderStatus::Cancelled, date(12)),
        Order::new("#ORD-5", "Tom Brown", "tom@example.com", OrderStatus::Processing, date(11)),
    ]
}

fn ids<'a>(orders: impl Iterator<Item = &'a Order>) -> Vec<&'a str> {
    orders.map(|o| o.id.as_str()).collect()
}

#[test]
fn status_facet_selects_single_order() {
    let orders = orders();
    let state = FilterState::for_record::<Order>().with_facet("status", "pending");

    let result = filter(&orders, &state).unwrap();

    assert_eq!(ids(result.iter()), ["#ORD-2"]);
    assert_eq!(result.total(), 5);
}

#[test]
fn status_counts_cover_every_value() {
    let orders = orders();
    let counts = facet_counts(&orders, "status").unwrap();

    assert_eq!(counts.get(ALL), 5);
    for status in OrderStatus::ALL {
        assert_eq!(counts.get(status.as_str()), 1, "{}", status.as_str());
    }
    let sum: usize = counts.values().map(|(_, count)| count).sum();
    assert_eq!(sum, orders.len());
}

#[test]
fn query_is_case_insensitive_across_fields() {
    let orders = orders();

    for query in ["jane", "JANE", "Jane@Example"] {
        let state = FilterState::new().with_query(query);
        let result = filter(&orders, &state).unwrap();
        assert_eq!(ids(result.iter()), ["#ORD-2"], "query {query:?}");
    }

    let by_id = filter(&orders, &FilterState::new().with_query("ord-4")).unwrap();
    assert_eq!(ids(by_id.iter()), ["#ORD-4"]);
}

#[test]
fn query_with_no_match_is_empty() {
    let orders = orders();
    let result = filter(&orders, &FilterState::new().with_query("zzz")).unwrap();
    assert!(result.is_empty());
    assert_eq!(result.total(), 5);
}

#[test]
fn query_is_not_trimmed() {
    let orders = orders();
    let result = filter(&orders, &FilterState::new().with_query(" jane")).unwrap();
    assert!(result.is_empty());
}

#[test]
fn result_is_ordered_subsequence() {
    let orders = orders();
    let state = FilterState::new().with_query("mi");
    let result = filter(&orders, &state).unwrap();
    assert_eq!(ids(result.iter()), ["#ORD-2", "#ORD-3"]);

    let positions: Vec<usize> = result
        .iter()
        .map(|r| orders.iter().position(|o| std::ptr::eq(o, r)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn identity_state_returns_everything() {
    let orders = orders();
    let state = FilterState::for_record::<Order>();
    assert!(state.is_identity());

    let result = filter(&orders, &state).unwrap();
    assert_eq!(result.len(), orders.len());
}

#[test]
fn filtering_is_deterministic() {
    let orders = orders();
    let state = FilterState::new().with_query("e").with_facet("status", "shipped");
    assert_eq!(filter(&orders, &state).unwrap(), filter(&orders, &state).unwrap());
}

#[test]
fn unknown_facet_value_matches_nothing() {
    let orders = orders();
    let state = FilterState::new().with_facet("status", "refunded");
    assert!(filter(&orders, &state).unwrap().is_empty());
}

#[test]
fn unknown_facet_name_is_an_error() {
    let orders = orders();
    let err = facet_counts(&orders, "role").unwrap_err();
    assert!(matches!(err, ConsoleError::UnknownFacet { record: "order", .. }));

    let mut state = FilterState::for_record::<Order>();
    assert!(state.select::<Order>("role", FacetSelection::parse("admin")).is_err());
    assert!(state.is_identity());
}

#[test]
fn facets_partition_the_collection() {
    let store = JsonFixtures::embedded().unwrap();
    let users = store.users().unwrap();

    for def in User::facets() {
        let counts = facet_counts(&users, def.name).unwrap();
        let mut covered = 0;
        for (value, count) in counts.values() {
            let state = FilterState::new().with_facet(def.name, value);
            assert_eq!(filter(&users, &state).unwrap().len(), count);
            covered += count;
        }
        assert_eq!(covered, users.len(), "facet {}", def.name);
    }
}

#[test]
fn empty_collection_counts_zero() {
    let orders: Vec<Order> = vec![];
    let counts = facet_counts(&orders, "status").unwrap();
    assert_eq!(counts.total(), 0);
    assert!(counts.values().all(|(_, count)| count == 0));
}

#[test]
fn single_record_check_agrees_with_filter() {
    let orders = orders();
    let state = FilterState::for_record::<Order>()
        .with_query("J")
        .with_facet("status", "shipped");

    let by_record: Vec<&str> = orders
        .iter()
        .filter(|o| matches(*o, &state))
        .map(|o| o.id.as_str())
        .collect();

    assert_eq!(by_record, ["#ORD-1"]);
    assert_eq!(ids(filter(&orders, &state).unwrap().iter()), by_record);
}

#[test]
fn selection_matches_exact_values_only() {
    let pending = FacetSelection::parse("pending");
    assert!(pending.matches(Some("pending")));
    assert!(!pending.matches(Some("Pending")));
    assert!(!pending.matches(None));
    assert!(FacetSelection::parse(ALL).matches(None));
}

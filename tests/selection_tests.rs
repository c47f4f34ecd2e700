// Host-side tests for the selection store and query-string helpers.

#![allow(dead_code)]
mod selection {
    include!("../src/core/selection.rs");
}

use selection::*;

#[test]
fn set_and_clear_report_changes() {
    let mut s = Selection::new(None);
    assert_eq!(s.get(), None);
    assert!(s.set("2"));
    assert!(!s.set("2"));
    assert_eq!(s.get(), Some("2"));
    assert_eq!(s.revision(), 1);
    assert!(s.clear());
    assert!(!s.clear());
    assert_eq!(s.get(), None);
    assert_eq!(s.revision(), 2);
}

#[test]
fn empty_identifier_means_no_selection() {
    assert_eq!(Selection::new(Some(String::new())).get(), None);
    let mut s = Selection::new(Some("1".into()));
    assert!(s.set(""));
    assert_eq!(s.get(), None);
}

#[test]
fn store_trait_round_trips_through_selection() {
    let mut s = Selection::default();
    let store: &mut dyn SelectionStore = &mut s;
    store.set_selection("3");
    assert_eq!(store.selection().as_deref(), Some("3"));
    store.clear_selection();
    assert_eq!(store.selection(), None);
}

#[test]
fn ring_index_parses_numbers_only() {
    assert_eq!(ring_index("2"), Some(2.0));
    assert_eq!(ring_index(" 3 "), Some(3.0));
    assert_eq!(ring_index("1.5"), Some(1.5));
    assert_eq!(ring_index("abc"), None);
    assert_eq!(ring_index("NaN"), None);
}

#[test]
fn query_param_reads_first_value() {
    assert_eq!(query_param("?id=2", "id").as_deref(), Some("2"));
    assert_eq!(query_param("lang=es&id=1&id=3", "id").as_deref(), Some("1"));
    assert_eq!(query_param("?lang=es", "id"), None);
    assert_eq!(query_param("", "id"), None);
    assert_eq!(query_param("?id=", "id").as_deref(), Some(""));
    assert_eq!(query_param("?q=a%20b+c", "q").as_deref(), Some("a b c"));
}

#[test]
fn with_query_param_keeps_other_entries() {
    assert_eq!(with_query_param("", "id", "2"), "?id=2");
    assert_eq!(with_query_param("?lang=es", "id", "2"), "?lang=es&id=2");
    assert_eq!(with_query_param("?id=1&lang=es", "id", "3"), "?id=3&lang=es");
    assert_eq!(with_query_param("?id=1&id=2", "id", "0"), "?id=0");
}

#[test]
fn without_query_param_removes_all_entries() {
    assert_eq!(without_query_param("?id=2", "id"), "");
    assert_eq!(without_query_param("?lang=es&id=2&log=debug", "id"), "?lang=es&log=debug");
    assert_eq!(without_query_param("", "id"), "");
}

#[test]
fn empty_values_survive_set_and_clear() {
    assert_eq!(with_query_param("?flag=&id=1", "id", "2"), "?flag=&id=2");
    assert_eq!(without_query_param("?utm=&id=1", "id"), "?utm=");
    let set = with_query_param("?utm=", "id", "3");
    assert_eq!(query_param(&set, "utm").as_deref(), Some(""));
    assert_eq!(query_param(&without_query_param(&set, "id"), "utm").as_deref(), Some(""));
}

#[test]
fn reserved_bytes_are_encoded_and_decoded() {
    assert_eq!(with_query_param("", "q", "a b&c"), "?q=a+b%26c");
    assert_eq!(query_param("?q=a+b%26c", "q").as_deref(), Some("a b&c"));
    assert_eq!(query_param("?p=100%", "p").as_deref(), Some("100%"));
    assert_eq!(query_param("?p=%zz", "p").as_deref(), Some("%zz"));
    assert_eq!(query_param("?%69d=2", "id").as_deref(), Some("2"));
}

#[test]
fn malformed_utf8_id_matches_no_frame() {
    // Decoding is lossy; the result never parses as a ring index.
    let id = query_param("?id=%E2%82", "id");
    assert!(id.is_some());
    assert_eq!(id.as_deref().and_then(ring_index), None);
}

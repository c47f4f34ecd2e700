// Host-side tests for the navigation overlay model.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod i18n {
    include!("../src/core/i18n.rs");
}
mod selection {
    include!("../src/core/selection.rs");
}
mod nav {
    include!("../src/core/nav.rs");
}

use i18n::{Catalog, Translate, Translator};
use nav::*;
use selection::{Selection, SelectionStore};

fn translator() -> Translator {
    let en = Catalog::from_json("en", include_str!("../locales/en.json")).unwrap();
    Translator::new(vec![en], "en")
}

#[test]
fn highlight_is_floor_of_offset_times_count() {
    assert_eq!(highlighted_index(0.0, 4), 0);
    assert_eq!(highlighted_index(0.24, 4), 0);
    assert_eq!(highlighted_index(0.26, 4), 1);
    assert_eq!(highlighted_index(0.5, 4), 2);
    assert_eq!(highlighted_index(0.99, 4), 3);
    assert_eq!(highlighted_index(1.0, 4), 0);
    assert_eq!(highlighted_index(-0.1, 4), 3);
    assert_eq!(highlighted_index(f32::NAN, 4), 0);
    assert_eq!(highlighted_index(0.5, 0), 0);
}

#[test]
fn labels_come_from_translator() {
    let t = translator();
    let nav = NavOverlay::new(&NAV_ENTRIES, &t);
    assert_eq!(nav.len(), 4);
    assert_eq!(nav.label(0), Some("Projects"));
    assert_eq!(nav.label(1), Some("Blog"));
    assert_eq!(nav.label(2), Some("Resume"));
    assert_eq!(nav.label(3), Some("Fun"));
    assert_eq!(nav.label(4), None);
    assert_eq!(t.t("home.menu.label"), "Menu");
}

#[test]
fn tick_moves_highlight() {
    let mut nav = NavOverlay::new(&NAV_ENTRIES, &translator());
    assert!(nav.is_highlighted(0));
    assert!(nav.on_tick(0.26));
    assert_eq!(nav.highlighted(), 1);
    assert!(!nav.on_tick(0.3));
    assert!((nav.scroll_pos() - 0.3).abs() < 1e-6);
    assert!(nav.on_tick(0.76));
    assert!(nav.is_highlighted(3));
}

#[test]
fn activate_selects_matching_frame() {
    let nav = NavOverlay::new(&NAV_ENTRIES, &translator());
    let mut store = Selection::default();
    assert_eq!(nav.activate(2, &mut store), Some("2"));
    assert_eq!(store.selection().as_deref(), Some("2"));
    assert_eq!(nav.activate(9, &mut store), None);
    assert_eq!(store.selection().as_deref(), Some("2"));
}

#[test]
fn entry_ids_match_positions() {
    for (i, e) in NAV_ENTRIES.iter().enumerate() {
        assert_eq!(e.id, i.to_string());
    }
}

#[test]
fn mobile_menu_toggles_and_closes() {
    let mut nav = NavOverlay::new(&NAV_ENTRIES, &translator());
    assert!(!nav.is_mobile_open());
    assert!(nav.toggle_mobile_menu());
    assert!(nav.is_mobile_open());
    nav.close_mobile_menu();
    assert!(!nav.is_mobile_open());
    assert!(nav.toggle_mobile_menu());
    assert!(!nav.toggle_mobile_menu());
}

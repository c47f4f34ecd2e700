// Host-side tests for the looping horizontal scroll.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod easing {
    include!("../src/core/easing.rs");
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
mod scroll {
    include!("../src/core/scroll.rs");
}

use scroll::{page_step_for_key, ScrollControls};

fn settle(s: &mut ScrollControls) {
    for _ in 0..600 {
        s.tick(1.0 / 60.0);
    }
}

#[test]
fn starts_at_zero() {
    let s = ScrollControls::default();
    assert_eq!(s.offset(), 0.0);
    assert_eq!(s.page(), 0);
    assert_eq!(s.pages(), 4.0);
}

#[test]
fn one_viewport_of_travel_is_one_page() {
    let mut s = ScrollControls::new(4.0);
    s.scroll_by_pixels(1000.0, 1000.0);
    assert!((s.target_offset() - 0.25).abs() < 1e-6);
    settle(&mut s);
    assert!((s.offset() - 0.25).abs() < 1e-5);
    assert_eq!(s.page(), 1);
}

#[test]
fn offset_is_damped_not_immediate() {
    let mut s = ScrollControls::new(4.0);
    s.scroll_by(0.5);
    s.tick(1.0 / 60.0);
    assert!(s.offset() > 0.0 && s.offset() < 0.5);
}

#[test]
fn scrolling_past_the_end_wraps() {
    let mut s = ScrollControls::new(4.0);
    s.scroll_by(1.1);
    settle(&mut s);
    assert!((s.offset() - 0.1).abs() < 1e-4, "{}", s.offset());
    s.scroll_by(-0.2);
    settle(&mut s);
    assert!((s.offset() - 0.9).abs() < 1e-4, "{}", s.offset());
    assert_eq!(s.page(), 3);
}

#[test]
fn offsets_stay_in_unit_range() {
    let mut s = ScrollControls::new(4.0);
    for i in 0..200 {
        s.scroll_by(if i % 3 == 0 { -0.37 } else { 0.21 });
        s.tick(1.0 / 60.0);
        assert!((0.0..1.0).contains(&s.offset()), "{}", s.offset());
        assert!((0.0..1.0).contains(&s.target_offset()));
    }
}

#[test]
fn step_pages_lands_on_boundaries() {
    let mut s = ScrollControls::new(4.0);
    s.scroll_by(0.1);
    s.step_pages(1);
    assert!((s.target_offset() - 0.25).abs() < 1e-6);
    s.step_pages(1);
    assert!((s.target_offset() - 0.5).abs() < 1e-6);
    s.step_pages(-1);
    assert!((s.target_offset() - 0.25).abs() < 1e-6);
    s.step_pages(-2);
    assert!((s.target_offset() - 0.75).abs() < 1e-6);
}

#[test]
fn invalid_input_is_ignored() {
    let mut s = ScrollControls::new(4.0);
    s.scroll_by_pixels(100.0, 0.0);
    s.scroll_by_pixels(f32::NAN, 100.0);
    s.scroll_by(f32::INFINITY);
    assert_eq!(s.target_offset(), 0.0);
}

#[test]
fn navigation_keys_map_to_page_steps() {
    assert_eq!(page_step_for_key("ArrowRight"), Some(1));
    assert_eq!(page_step_for_key("PageDown"), Some(1));
    assert_eq!(page_step_for_key("ArrowLeft"), Some(-1));
    assert_eq!(page_step_for_key("PageUp"), Some(-1));
    assert_eq!(page_step_for_key("Escape"), None);
    assert_eq!(page_step_for_key("a"), None);
}

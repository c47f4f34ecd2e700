// Host-side tests for click/drag discrimination.

#![allow(dead_code)]
mod press {
    include!("../src/core/press.rs");
}

use glam::Vec2;
use press::PressState;

#[test]
fn small_moves_stay_a_click() {
    let mut p = PressState::new(6.0);
    p.begin(Vec2::new(100.0, 100.0));
    assert_eq!(p.drag_to(Vec2::new(103.0, 100.0)), None);
    assert_eq!(p.drag_to(Vec2::new(104.0, 101.0)), None);
    assert!(p.release());
    assert!(!p.active);
}

#[test]
fn crossing_the_slop_hands_over_the_whole_distance() {
    let mut p = PressState::new(6.0);
    p.begin(Vec2::new(100.0, 50.0));
    assert_eq!(p.drag_to(Vec2::new(104.0, 50.0)), None);
    // First move past the slop scrolls from the press start, not the last move.
    assert_eq!(p.drag_to(Vec2::new(110.0, 50.0)), Some(10.0));
    assert_eq!(p.drag_to(Vec2::new(107.0, 50.0)), Some(-3.0));
    assert!(!p.release());
}

#[test]
fn total_scroll_matches_pointer_travel() {
    let mut p = PressState::new(6.0);
    p.begin(Vec2::ZERO);
    let scrolled: f32 = [2.0f32, 5.0, 9.0, 20.0, 35.0]
        .iter()
        .filter_map(|&x| p.drag_to(Vec2::new(x, 0.0)))
        .sum();
    assert_eq!(scrolled, 35.0);
}

#[test]
fn vertical_travel_counts_toward_the_slop() {
    let mut p = PressState::new(6.0);
    p.begin(Vec2::ZERO);
    assert_eq!(p.drag_to(Vec2::new(1.0, 8.0)), Some(1.0));
    assert!(!p.is_click());
}

#[test]
fn release_without_press_is_not_a_click() {
    let mut p = PressState::new(6.0);
    assert!(!p.release());
}

#[test]
fn begin_resets_travel() {
    let mut p = PressState::new(6.0);
    p.begin(Vec2::ZERO);
    p.drag_to(Vec2::new(50.0, 0.0));
    p.begin(Vec2::new(10.0, 10.0));
    assert!(p.is_click());
    assert_eq!(p.travelled, 0.0);
    assert_eq!(p.start, Vec2::new(10.0, 10.0));
}

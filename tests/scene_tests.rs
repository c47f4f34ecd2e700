// Host-side tests for the scene graph.

#![allow(dead_code)]
mod scene {
    include!("../src/core/scene.rs");
}

use glam::Vec3;
use scene::*;
use std::f32::consts::FRAC_PI_2;

#[test]
fn names_resolve_to_nodes() {
    let mut g = SceneGraph::new();
    let root = g.add_root(None, Transform::default()).unwrap();
    let child = g.add_child(root, Some("2"), Transform::default()).unwrap();
    assert_eq!(g.object_by_name("2"), Some(child));
    assert_eq!(g.object_by_name("7"), None);
    assert_eq!(g.parent(child), Some(root));
    assert_eq!(g.parent(root), None);
    assert_eq!(g.node(root).unwrap().children(), &[child]);
    assert_eq!(g.node_count(), 2);
}

#[test]
fn duplicate_names_are_rejected() {
    let mut g = SceneGraph::new();
    g.add_root(Some("a"), Transform::default()).unwrap();
    let err = g.add_root(Some("a"), Transform::default()).unwrap_err();
    assert_eq!(err, SceneError::DuplicateName("a".to_string()));
}

#[test]
fn missing_parent_is_an_error() {
    let mut g = SceneGraph::new();
    let root = g.add_root(None, Transform::default()).unwrap();
    let mut other = SceneGraph::new();
    other.add_root(None, Transform::default()).unwrap();
    let stray = other.add_root(None, Transform::default()).unwrap();
    assert!(matches!(
        g.add_child(stray, None, Transform::default()),
        Err(SceneError::MissingParent(_))
    ));
    assert!(g.add_child(root, None, Transform::default()).is_ok());
}

#[test]
fn local_to_world_composes_parent_transforms() {
    let mut g = SceneGraph::new();
    let group = g
        .add_root(None, Transform::from_yaw(Vec3::new(0.0, 0.0, 10.0), std::f32::consts::PI, 3.0))
        .unwrap();
    let plane = g.add_child(group, Some("2"), Transform::default()).unwrap();
    let p = g.local_to_world(group, Vec3::new(0.0, 0.0, 0.25));
    assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, 9.25), 1e-5), "{:?}", p);
    let centre = g.local_to_world(plane, Vec3::ZERO);
    assert!(centre.abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), 1e-5));
}

#[test]
fn yaw_rotates_about_y() {
    let t = Transform::from_yaw(Vec3::ZERO, FRAC_PI_2, 1.0);
    let p = t.matrix().transform_point3(Vec3::new(0.0, 0.0, 1.0));
    assert!(p.abs_diff_eq(Vec3::new(1.0, 0.0, 0.0), 1e-5), "{:?}", p);
}

use glam::Vec3;
use std::f32::consts::TAU;

use super::camera::PerspectiveCamera;
use super::constants::{
    FOCUS_OFFSET_LOCAL, FOCUS_POINT_LOCAL, FOCUS_TURN_PER_ID, OVERVIEW_POSITION,
    RIG_SMOOTH_TIME_SEC,
};
use super::easing::Damped3;
use super::scene::SceneGraph;
use super::selection::ring_index;

/// What the rig is steering toward this frame.
#[derive(Clone, Debug, PartialEq)]
pub enum RigMode {
    /// No frame selected: orbit with the scroll offset.
    Overview,
    /// A frame is selected and found in the scene.
    Focus {
        identifier: String,
        offset_world: Vec3,
        focus_world: Vec3,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct RigTarget {
    pub rotation: Vec3,
    pub position: Vec3,
    pub mode: RigMode,
}

/// Resolve the camera target for the current selection and scroll offset.
///
/// A selection that names no scene object falls back to the overview orbit.
pub fn resolve_target(scene: &SceneGraph, selection: Option<&str>, scroll_offset: f32) -> RigTarget {
    let active = selection.and_then(|id| scene.object_by_name(id).map(|node| (id, node)));
    match active {
        None => RigTarget {
            rotation: Vec3::new(0.0, TAU * scroll_offset, 0.0),
            position: OVERVIEW_POSITION,
            mode: RigMode::Overview,
        },
        Some((id, node)) => {
            let (offset_world, focus_world) = match scene.parent(node) {
                Some(parent) => (
                    scene.local_to_world(parent, FOCUS_OFFSET_LOCAL),
                    scene.local_to_world(parent, FOCUS_POINT_LOCAL),
                ),
                None => (FOCUS_OFFSET_LOCAL, FOCUS_POINT_LOCAL),
            };
            let k = ring_index(id).unwrap_or(0.0);
            RigTarget {
                rotation: Vec3::new(0.0, FOCUS_TURN_PER_ID * k, 0.0),
                position: offset_world,
                mode: RigMode::Focus {
                    identifier: id.to_string(),
                    offset_world,
                    focus_world,
                },
            }
        }
    }
}

/// Eases the camera between the overview orbit and a focused frame.
#[derive(Clone, Debug)]
pub struct CameraRig {
    rotation: Damped3,
    position: Damped3,
    mode: RigMode,
}

impl CameraRig {
    pub fn new(camera: &PerspectiveCamera) -> Self {
        Self {
            rotation: Damped3::new(camera.rotation),
            position: Damped3::new(camera.position),
            mode: RigMode::Overview,
        }
    }

    #[inline]
    pub fn mode(&self) -> &RigMode {
        &self.mode
    }

    /// Advance one frame and write the result into `camera`.
    /// Returns `true` when the mode changed.
    pub fn step(
        &mut self,
        scene: &SceneGraph,
        selection: Option<&str>,
        scroll_offset: f32,
        dt: f32,
        camera: &mut PerspectiveCamera,
    ) -> bool {
        let target = resolve_target(scene, selection, scroll_offset);
        self.rotation
            .damp_euler(target.rotation, RIG_SMOOTH_TIME_SEC, dt);
        self.position.damp(target.position, RIG_SMOOTH_TIME_SEC, dt);
        camera.rotation = self.rotation.value();
        camera.position = self.position.value();

        let changed = target.mode != self.mode;
        if changed {
            match &target.mode {
                RigMode::Overview => log::debug!("[rig] overview"),
                RigMode::Focus {
                    identifier,
                    offset_world,
                    focus_world,
                } => log::debug!(
                    "[rig] focus {} eye=({:.2},{:.2},{:.2}) at=({:.2},{:.2},{:.2})",
                    identifier,
                    offset_world.x,
                    offset_world.y,
                    offset_world.z,
                    focus_world.x,
                    focus_world.y,
                    focus_world.z
                ),
            }
            self.mode = target.mode;
        }
        changed
    }
}

use glam::{Mat4, Vec3};

use super::constants::{
    BLEND_SMOOTH_TIME_SEC, FRAME_LABEL_OFFSET, PORTAL_PLANE_HALF_EXTENT,
};
use super::easing::Damped;
use super::scene::{NodeId, SceneError, SceneGraph, Transform};
use super::selection::SelectionStore;

/// What a portal shows through its window.
#[derive(Clone, Debug, PartialEq)]
pub struct PortalContent {
    pub color_rgb: [f32; 3],
    pub caption: String,
}

/// A clickable plane that opens onto its own little scene.
///
/// The frame owns three scene nodes: a group carrying its placement, a label
/// anchor, and the plane itself. The plane node is named by the frame's
/// identifier, which is how the camera rig finds it from the selection.
#[derive(Clone, Debug)]
pub struct PortalFrame {
    identifier: String,
    name: String,
    content: PortalContent,
    group: NodeId,
    plane: NodeId,
    label: NodeId,
    blend: Damped,
    hovered: bool,
}

impl PortalFrame {
    pub fn spawn(
        scene: &mut SceneGraph,
        identifier: &str,
        name: &str,
        transform: Transform,
        content: PortalContent,
    ) -> Result<Self, SceneError> {
        let group = scene.add_root(None, transform)?;
        let label = scene.add_child(group, None, Transform::from_translation(FRAME_LABEL_OFFSET))?;
        let plane = scene.add_child(group, Some(identifier), Transform::default())?;
        Ok(Self {
            identifier: identifier.to_string(),
            name: name.to_string(),
            content,
            group,
            plane,
            label,
            blend: Damped::new(0.0),
            hovered: false,
        })
    }

    #[inline]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn content(&self) -> &PortalContent {
        &self.content
    }

    #[inline]
    pub fn group(&self) -> NodeId {
        self.group
    }

    #[inline]
    pub fn plane(&self) -> NodeId {
        self.plane
    }

    #[inline]
    pub fn label(&self) -> NodeId {
        self.label
    }

    /// Current open amount in [0, 1].
    #[inline]
    pub fn blend(&self) -> f32 {
        self.blend.value.clamp(0.0, 1.0)
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Returns `true` if the hover flag changed.
    pub fn set_hovered(&mut self, hovered: bool) -> bool {
        let changed = self.hovered != hovered;
        self.hovered = hovered;
        changed
    }

    #[inline]
    pub fn is_selected(&self, selection: Option<&str>) -> bool {
        selection == Some(self.identifier.as_str())
    }

    /// Ease the blend toward open when selected, closed otherwise.
    pub fn step(&mut self, selection: Option<&str>, dt: f32) {
        let target = if self.is_selected(selection) { 1.0 } else { 0.0 };
        self.blend.damp(target, BLEND_SMOOTH_TIME_SEC, dt);
    }

    pub fn click(&self, store: &mut dyn SelectionStore) {
        store.set_selection(&self.identifier);
    }

    /// World transform of the clickable plane.
    #[inline]
    pub fn plane_matrix(&self, scene: &SceneGraph) -> Mat4 {
        scene.world_matrix(self.plane)
    }

    /// Ray parameter of the hit on this frame's plane, if any.
    pub fn intersect(&self, scene: &SceneGraph, origin: Vec3, dir: Vec3) -> Option<f32> {
        ray_quad(origin, dir, self.plane_matrix(scene), PORTAL_PLANE_HALF_EXTENT)
    }
}

/// Intersect a world-space ray with the unit quad (z = 0, |x|,|y| ≤ half)
/// placed by `world_from_local`. Both faces count. Returns world-space distance.
pub fn ray_quad(origin: Vec3, dir: Vec3, world_from_local: Mat4, half: f32) -> Option<f32> {
    let inv = world_from_local.inverse();
    let lo = inv.transform_point3(origin);
    let ld = inv.transform_vector3(dir);
    if ld.z.abs() < 1e-6 {
        return None;
    }
    let t = -lo.z / ld.z;
    if t < 0.0 {
        return None;
    }
    let hit = lo + ld * t;
    if hit.x.abs() > half || hit.y.abs() > half {
        return None;
    }
    let world_hit = world_from_local.transform_point3(hit);
    Some((world_hit - origin).length())
}

/// Cursor style for the canvas: a pointer while any frame is hovered.
pub fn cursor_for(frames: &[PortalFrame]) -> &'static str {
    if frames.iter().any(PortalFrame::is_hovered) {
        "pointer"
    } else {
        "auto"
    }
}

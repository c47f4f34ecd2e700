use fnv::FnvHashMap;
use glam::{Mat4, Quat, Vec3};
use smallvec::SmallVec;

/// Handle to a node stored in a [`SceneGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SceneError {
    #[error("node name {0:?} is already in use")]
    DuplicateName(String),
    #[error("parent node {0:?} does not exist")]
    MissingParent(NodeId),
}

/// Local translation / rotation / scale of a node relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    /// Position, rotation about +Y, and uniform scale: the only shape frames use.
    pub fn from_yaw(translation: Vec3, yaw: f32, scale: f32) -> Self {
        Self {
            translation,
            rotation: Quat::from_rotation_y(yaw),
            scale: Vec3::splat(scale),
        }
    }

    #[inline]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    pub name: Option<String>,
    pub transform: Transform,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
}

impl Node {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Flat arena of scene nodes with name lookup.
///
/// Names are unique so that lookup by name (how the camera rig resolves the
/// current selection) always has a single answer.
#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<Node>,
    by_name: FnvHashMap<String, NodeId>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn add_root(&mut self, name: Option<&str>, transform: Transform) -> Result<NodeId, SceneError> {
        self.insert(None, name, transform)
    }

    pub fn add_child(
        &mut self,
        parent: NodeId,
        name: Option<&str>,
        transform: Transform,
    ) -> Result<NodeId, SceneError> {
        if parent.0 >= self.nodes.len() {
            return Err(SceneError::MissingParent(parent));
        }
        self.insert(Some(parent), name, transform)
    }

    fn insert(
        &mut self,
        parent: Option<NodeId>,
        name: Option<&str>,
        transform: Transform,
    ) -> Result<NodeId, SceneError> {
        if let Some(n) = name {
            if self.by_name.contains_key(n) {
                return Err(SceneError::DuplicateName(n.to_string()));
            }
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name: name.map(str::to_string),
            transform,
            parent,
            children: SmallVec::new(),
        });
        if let Some(p) = parent {
            self.nodes[p.0].children.push(id);
        }
        if let Some(n) = name {
            self.by_name.insert(n.to_string(), id);
        }
        Ok(id)
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    #[inline]
    pub fn object_by_name(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Compose local transforms from the root down to `id`.
    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let mut m = Mat4::IDENTITY;
        let mut cur = Some(id);
        while let Some(c) = cur {
            match self.nodes.get(c.0) {
                Some(node) => {
                    m = node.transform.matrix() * m;
                    cur = node.parent;
                }
                None => break,
            }
        }
        m
    }

    /// Map a point from `id`'s local space to world space.
    #[inline]
    pub fn local_to_world(&self, id: NodeId, point: Vec3) -> Vec3 {
        self.world_matrix(id).transform_point3(point)
    }
}

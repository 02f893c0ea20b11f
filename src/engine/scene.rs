use glam::{EulerRot, Mat4, Quat, Vec3};

use super::camera::PerspectiveCamera;
use super::geometry::Geometry;
use super::light::PointLight;
use super::material::Material;
use super::resources::TextureHandle;

/// Index of a node inside its owning [`SceneGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Local transform of a node relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
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
            ..Self::default()
        }
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Rotates about the node's own Y axis (post-multiplied, like an object-space turn).
    pub fn rotate_y(&mut self, angle: f32) {
        self.rotation = (self.rotation * Quat::from_rotation_y(angle)).normalize();
    }

    /// Heading about +Y in (-π, π].
    pub fn yaw(&self) -> f32 {
        self.rotation.to_euler(EulerRot::YXZ).0
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Sun,
    Anchor,
    Body,
    Ring,
}

#[derive(Debug, Clone)]
pub struct Mesh {
    pub geometry: Geometry,
    pub material: Material,
}

impl Mesh {
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self { geometry, material }
    }
}

#[derive(Debug, Clone)]
pub struct SceneNode {
    pub name: String,
    pub kind: NodeKind,
    pub transform: Transform,
    pub mesh: Option<Mesh>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl SceneNode {
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            transform: Transform::default(),
            mesh: None,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_mesh(mut self, mesh: Mesh) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena-backed transform hierarchy. Nodes are never removed, so a
/// [`NodeId`] handed out by this graph stays valid for its lifetime.
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
    roots: Vec<NodeId>,
}

impl SceneGraph {
    /// Adds a node directly under the scene root.
    pub fn add_node(&mut self, node: SceneNode) -> NodeId {
        let id = self.push(node, None);
        self.roots.push(id);
        id
    }

    pub fn add_child(&mut self, parent: NodeId, node: SceneNode) -> NodeId {
        let id = self.push(node, Some(parent));
        self.nodes[parent.0].children.push(id);
        id
    }

    fn push(&mut self, mut node: SceneNode, parent: Option<NodeId>) -> NodeId {
        tracing::debug!(
            target: "scene",
            name = %node.name,
            kind = ?node.kind,
            parent = ?parent.map(NodeId::index),
            "adding scene node"
        );
        node.parent = parent;
        node.children.clear();
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0)
    }

    pub fn node(&self, id: NodeId) -> &SceneNode {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut SceneNode {
        &mut self.nodes[id.0]
    }

    pub fn rotate_y(&mut self, id: NodeId, angle: f32) {
        self.nodes[id.0].transform.rotate_y(angle);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }

    pub fn count_kind(&self, kind: NodeKind) -> usize {
        self.nodes.iter().filter(|node| node.kind == kind).count()
    }

    /// Depth-first, pre-order walk starting from the roots in insertion order.
    pub fn traverse(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }
        order
    }

    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let node = &self.nodes[id.0];
        let mut matrix = node.transform.matrix();
        let mut parent = node.parent;
        while let Some(parent_id) = parent {
            let parent_node = &self.nodes[parent_id.0];
            matrix = parent_node.transform.matrix() * matrix;
            parent = parent_node.parent;
        }
        matrix
    }

    pub fn world_position(&self, id: NodeId) -> Vec3 {
        self.world_matrix(id).transform_point3(Vec3::ZERO)
    }

    /// Parent and child links of every node, in arena order.
    pub fn topology(&self) -> Vec<(Option<NodeId>, Vec<NodeId>)> {
        self.nodes
            .iter()
            .map(|node| (node.parent, node.children.clone()))
            .collect()
    }
}

/// Six cube faces in +X, -X, +Y, -Y, +Z, -Z order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeBackground {
    pub faces: [TextureHandle; 6],
}

impl CubeBackground {
    pub fn uniform(face: TextureHandle) -> Self {
        Self { faces: [face; 6] }
    }
}

/// Root of everything drawn: the node hierarchy plus the camera, light and
/// backdrop, which sit beside the hierarchy rather than inside it.
#[derive(Debug)]
pub struct Scene {
    pub graph: SceneGraph,
    pub background: CubeBackground,
    pub light: PointLight,
    pub camera: PerspectiveCamera,
}

impl Scene {
    pub fn mesh_nodes(&self) -> impl Iterator<Item = (NodeId, &Mesh)> {
        self.graph
            .iter()
            .filter_map(|(id, node)| node.mesh.as_ref().map(|mesh| (id, mesh)))
    }
}

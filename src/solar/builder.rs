use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};

use crate::engine::camera::PerspectiveCamera;
use crate::engine::geometry::Geometry;
use crate::engine::light::PointLight;
use crate::engine::material::Material;
use crate::engine::resources::ResourceManager;
use crate::engine::scene::{
    CubeBackground, Mesh, NodeId, NodeKind, Scene, SceneGraph, SceneNode, Transform,
};

use super::catalog::{BodyDefinition, RingDescriptor, SunDefinition};

pub const SPHERE_SEGMENTS: u32 = 30;
pub const RING_SEGMENTS: u32 = 32;

pub const CAMERA_FOV_DEGREES: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 2000.0;
pub const CAMERA_POSITION: Vec3 = Vec3::new(-90.0, 140.0, 180.0);

pub const LIGHT_COLOR: u32 = 0xffffff;
pub const LIGHT_INTENSITY: f32 = 100_000.0;
pub const LIGHT_DISTANCE: f32 = 10_000.0;

/// Nodes created for one orbiting body, plus the rates that drive them.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyHandle {
    pub name: String,
    pub mesh: NodeId,
    pub anchor: NodeId,
    pub ring: Option<NodeId>,
    pub spin_rate: f32,
    pub revolution_rate: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SunHandle {
    pub mesh: NodeId,
    pub spin_rate: f32,
}

/// Assembles the scene graph. Textures are only registered here; they are
/// decoded later by whoever resolves them.
pub struct SceneBuilder<'a> {
    resources: &'a mut ResourceManager,
    graph: SceneGraph,
}

impl<'a> SceneBuilder<'a> {
    pub fn new(resources: &'a mut ResourceManager) -> Self {
        Self {
            resources,
            graph: SceneGraph::default(),
        }
    }

    pub fn create_sun(&mut self, definition: &SunDefinition) -> SunHandle {
        let map = self.resources.load_texture(&definition.texture);
        let mesh = Mesh::new(
            Geometry::sphere(definition.radius, SPHERE_SEGMENTS, SPHERE_SEGMENTS),
            Material::basic(map),
        );
        let mesh = self
            .graph
            .add_node(SceneNode::new(&definition.name, NodeKind::Sun).with_mesh(mesh));
        SunHandle {
            mesh,
            spin_rate: definition.spin_rate,
        }
    }

    /// Builds the anchor at the origin and hangs the body (and its ring) off
    /// it at the orbital distance along +X.
    pub fn create_body(&mut self, definition: &BodyDefinition) -> BodyHandle {
        let offset = Vec3::new(definition.orbital_distance, 0.0, 0.0);

        let anchor = self.graph.add_node(SceneNode::new(
            format!("{} anchor", definition.name),
            NodeKind::Anchor,
        ));

        let map = self.resources.load_texture(&definition.texture);
        let body = SceneNode::new(&definition.name, NodeKind::Body)
            .with_mesh(Mesh::new(
                Geometry::sphere(definition.radius, SPHERE_SEGMENTS, SPHERE_SEGMENTS),
                Material::standard(map),
            ))
            .with_transform(Transform::from_translation(offset));
        let mesh = self.graph.add_child(anchor, body);

        let ring = definition
            .ring
            .as_ref()
            .map(|ring| self.create_ring(anchor, &definition.name, ring, offset));

        BodyHandle {
            name: definition.name.clone(),
            mesh,
            anchor,
            ring,
            spin_rate: definition.spin_rate,
            revolution_rate: definition.revolution_rate,
        }
    }

    fn create_ring(
        &mut self,
        anchor: NodeId,
        body_name: &str,
        ring: &RingDescriptor,
        offset: Vec3,
    ) -> NodeId {
        let map = self.resources.load_texture(&ring.texture);
        // The annulus is built facing +Z; tip it flat into the XZ orbital plane.
        let transform = Transform::from_translation(offset)
            .with_rotation(Quat::from_rotation_x(-FRAC_PI_2));
        let node = SceneNode::new(format!("{body_name} ring"), NodeKind::Ring)
            .with_mesh(Mesh::new(
                Geometry::ring(ring.inner_radius, ring.outer_radius, RING_SEGMENTS),
                Material::basic(map).double_sided().transparent(),
            ))
            .with_transform(transform);
        self.graph.add_child(anchor, node)
    }

    pub fn finish(
        self,
        background: CubeBackground,
        camera: PerspectiveCamera,
        light: PointLight,
    ) -> Scene {
        tracing::info!(
            target: "scene",
            nodes = self.graph.len(),
            textures = self.resources.texture_count(),
            "scene built"
        );
        Scene {
            graph: self.graph,
            background,
            light,
            camera,
        }
    }
}

pub fn default_camera(aspect: f32) -> PerspectiveCamera {
    let mut camera = PerspectiveCamera::new(CAMERA_FOV_DEGREES, aspect, CAMERA_NEAR, CAMERA_FAR);
    camera.position = CAMERA_POSITION;
    camera.look_at(Vec3::ZERO);
    camera
}

pub fn default_light() -> PointLight {
    PointLight::new(LIGHT_COLOR, LIGHT_INTENSITY, LIGHT_DISTANCE)
}

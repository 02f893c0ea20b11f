pub mod animation;
pub mod builder;
pub mod catalog;

use crate::engine::resources::ResourceManager;
use crate::engine::scene::{CubeBackground, Scene};
use builder::{BodyHandle, SceneBuilder, SunHandle};
use catalog::SolarCatalog;

/// A built scene together with the handles the animation needs.
#[derive(Debug)]
pub struct SolarSystem {
    pub scene: Scene,
    pub sun: SunHandle,
    pub bodies: Vec<BodyHandle>,
}

impl SolarSystem {
    /// Builds the backdrop, the sun and every body in catalog order, then
    /// the camera and light. `aspect` seeds the camera until the first resize.
    pub fn build(catalog: &SolarCatalog, resources: &mut ResourceManager, aspect: f32) -> Self {
        let background = CubeBackground::uniform(resources.load_texture(&catalog.background));

        let mut builder = SceneBuilder::new(resources);
        let sun = builder.create_sun(&catalog.sun);
        let bodies = catalog
            .bodies
            .iter()
            .map(|definition| builder.create_body(definition))
            .collect();

        let scene = builder.finish(
            background,
            builder::default_camera(aspect),
            builder::default_light(),
        );

        Self { scene, sun, bodies }
    }

    pub fn body(&self, name: &str) -> Option<&BodyHandle> {
        self.bodies.iter().find(|body| body.name == name)
    }
}

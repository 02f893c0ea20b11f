use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct RingDescriptor {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub texture: PathBuf,
}

impl RingDescriptor {
    pub fn new(inner_radius: f32, outer_radius: f32, texture: impl Into<PathBuf>) -> Self {
        Self {
            inner_radius,
            outer_radius,
            texture: texture.into(),
        }
    }
}

/// One orbiting body. Rates are radians per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyDefinition {
    pub name: String,
    pub radius: f32,
    pub texture: PathBuf,
    pub orbital_distance: f32,
    pub spin_rate: f32,
    pub revolution_rate: f32,
    pub ring: Option<RingDescriptor>,
}

impl BodyDefinition {
    pub fn new(
        name: impl Into<String>,
        radius: f32,
        texture: impl Into<PathBuf>,
        orbital_distance: f32,
    ) -> Self {
        Self {
            name: name.into(),
            radius,
            texture: texture.into(),
            orbital_distance,
            spin_rate: 0.0,
            revolution_rate: 0.0,
            ring: None,
        }
    }

    pub fn with_rates(mut self, spin_rate: f32, revolution_rate: f32) -> Self {
        self.spin_rate = spin_rate;
        self.revolution_rate = revolution_rate;
        self
    }

    pub fn with_ring(mut self, ring: RingDescriptor) -> Self {
        self.ring = Some(ring);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SunDefinition {
    pub name: String,
    pub radius: f32,
    pub texture: PathBuf,
    pub spin_rate: f32,
}

/// Everything the scene builder needs to lay out a system.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarCatalog {
    pub sun: SunDefinition,
    pub bodies: Vec<BodyDefinition>,
    /// Image used for all six faces of the backdrop.
    pub background: PathBuf,
}

impl SolarCatalog {
    /// The sun and nine bodies. Sizes, distances and rates are display
    /// tuning, not astronomical values.
    pub fn standard() -> Self {
        Self {
            sun: SunDefinition {
                name: "Sun".to_string(),
                radius: 30.0,
                texture: PathBuf::from("sun.jpg"),
                spin_rate: 0.004,
            },
            bodies: vec![
                BodyDefinition::new("Mercury", 3.2, "Mercury.jpg", 50.0).with_rates(0.004, 0.04),
                BodyDefinition::new("Venus", 4.8, "venus.jpg", 74.0).with_rates(0.002, 0.015),
                BodyDefinition::new("Earth", 6.0, "earth.jpg", 95.0).with_rates(0.002, 0.01),
                BodyDefinition::new("Mars", 5.8, "mars.jpg", 113.0).with_rates(0.018, 0.0084),
                BodyDefinition::new("Jupiter", 12.0, "jupiter.jpg", 150.0).with_rates(0.04, 0.007),
                BodyDefinition::new("Saturn", 10.0, "saturn.jpg", 188.0)
                    .with_rates(0.038, 0.005)
                    .with_ring(RingDescriptor::new(10.0, 25.0, "saturn ring.png")),
                BodyDefinition::new("Uranus", 10.0, "uranus.jpg", 236.0)
                    .with_rates(0.03, 0.004)
                    .with_ring(RingDescriptor::new(5.0, 15.0, "uranus ring.png")),
                BodyDefinition::new("Neptune", 7.0, "neptune.jpg", 260.0).with_rates(0.032, 0.003),
                BodyDefinition::new("Pluto", 2.8, "pluto.jpg", 276.0).with_rates(0.008, 0.002),
            ],
            background: PathBuf::from("stars bg.jpg"),
        }
    }

    pub fn body(&self, name: &str) -> Option<&BodyDefinition> {
        self.bodies.iter().find(|body| body.name == name)
    }
}

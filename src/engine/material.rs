use super::resources::TextureHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shading {
    /// Texture colour as-is, ignores the light.
    Unlit,
    /// Diffuse response to the scene's point light.
    Lit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Front,
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Material {
    pub shading: Shading,
    pub map: TextureHandle,
    pub side: Side,
    pub transparent: bool,
}

impl Material {
    pub fn basic(map: TextureHandle) -> Self {
        Self {
            shading: Shading::Unlit,
            map,
            side: Side::Front,
            transparent: false,
        }
    }

    pub fn standard(map: TextureHandle) -> Self {
        Self {
            shading: Shading::Lit,
            ..Self::basic(map)
        }
    }

    pub fn double_sided(mut self) -> Self {
        self.side = Side::Double;
        self
    }

    pub fn transparent(mut self) -> Self {
        self.transparent = true;
        self
    }
}

use glam::Vec3;

/// Omnidirectional light with inverse-power falloff and a smooth cutoff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    /// Linear RGB in 0..1.
    pub color: Vec3,
    pub intensity: f32,
    /// Range beyond which the light contributes nothing; 0 disables the cutoff.
    pub distance: f32,
    pub decay: f32,
}

impl PointLight {
    pub fn new(color: u32, intensity: f32, distance: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            color: color_from_hex(color),
            intensity,
            distance,
            decay: 2.0,
        }
    }

    /// Scale applied to `color * intensity` at `range` units from the light.
    /// Mirrors `distance_attenuation` in `shaders/mesh.wgsl`.
    pub fn attenuation(&self, range: f32) -> f32 {
        let mut falloff = 1.0 / range.powf(self.decay).max(0.01);
        if self.distance > 0.0 {
            let ratio = range / self.distance;
            falloff *= (1.0 - ratio.powi(4)).clamp(0.0, 1.0).powi(2);
        }
        falloff
    }
}

pub fn color_from_hex(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

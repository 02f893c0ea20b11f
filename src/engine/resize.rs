use winit::dpi::PhysicalSize;

use super::camera::PerspectiveCamera;

/// Anything that presents frames at a logical size and a pixel density.
pub trait OutputSurface {
    fn set_size(&mut self, width: u32, height: u32);
    fn set_pixel_ratio(&mut self, ratio: f64);
}

/// Logical viewport dimensions plus the display's device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: u32, height: u32, device_pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }

    pub fn from_physical(size: PhysicalSize<u32>, scale_factor: f64) -> Self {
        let logical = size.to_logical::<f64>(scale_factor);
        Self {
            width: logical.width.round() as u32,
            height: logical.height.round() as u32,
            device_pixel_ratio: scale_factor,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Logical size and pixel ratio of a render target; the backing buffer is
/// `size * ratio` pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f64,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixel_ratio: 1.0,
        }
    }

    pub fn drawing_buffer_size(&self) -> (u32, u32) {
        let scale = |value: u32| ((value as f64 * self.pixel_ratio).round() as u32).max(1);
        (scale(self.width), scale(self.height))
    }
}

impl OutputSurface for SurfaceSize {
    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn set_pixel_ratio(&mut self, ratio: f64) {
        self.pixel_ratio = ratio;
    }
}

/// Keeps camera projection and output resolution in step with the window.
#[derive(Debug, Clone)]
pub struct ResizeHandler {
    max_pixel_ratio: f64,
    current: Option<Viewport>,
}

impl ResizeHandler {
    pub const DEFAULT_MAX_PIXEL_RATIO: f64 = 2.0;

    pub fn new(max_pixel_ratio: f64) -> Self {
        Self {
            max_pixel_ratio: max_pixel_ratio.max(f64::MIN_POSITIVE),
            current: None,
        }
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.current
    }

    pub fn pixel_ratio_for(&self, device_pixel_ratio: f64) -> f64 {
        device_pixel_ratio.min(self.max_pixel_ratio)
    }

    /// Applies `viewport` to the camera and surface. Returns `false` for a
    /// zero-area viewport, which is ignored.
    pub fn handle(
        &mut self,
        viewport: Viewport,
        camera: &mut PerspectiveCamera,
        surface: &mut impl OutputSurface,
    ) -> bool {
        if viewport.is_empty() {
            tracing::debug!(
                target: "engine",
                width = viewport.width,
                height = viewport.height,
                "ignoring empty viewport"
            );
            return false;
        }

        self.current = Some(viewport);
        camera.aspect = viewport.aspect();
        camera.update_projection_matrix();
        surface.set_size(viewport.width, viewport.height);
        surface.set_pixel_ratio(self.pixel_ratio_for(viewport.device_pixel_ratio));

        tracing::debug!(
            target: "engine",
            width = viewport.width,
            height = viewport.height,
            device_pixel_ratio = viewport.device_pixel_ratio,
            "viewport resized"
        );
        true
    }
}

impl Default for ResizeHandler {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_PIXEL_RATIO)
    }
}

use glam::Mat4;
use orrery::engine::resize::{OutputSurface, ResizeHandler, SurfaceSize, Viewport};
use orrery::solar::builder::default_camera;
use winit::dpi::PhysicalSize;

#[test]
fn test_aspect_and_surface_follow_viewport() {
    let mut handler = ResizeHandler::default();
    let mut camera = default_camera(1.0);
    let mut surface = SurfaceSize::new(1, 1);

    assert!(handler.handle(Viewport::new(1920, 1080, 1.0), &mut camera, &mut surface));

    assert_eq!(camera.aspect, 1920.0 / 1080.0);
    assert_eq!((surface.width, surface.height), (1920, 1080));
    assert_eq!(surface.pixel_ratio, 1.0);
    assert_eq!(handler.viewport(), Some(Viewport::new(1920, 1080, 1.0)));

    let expected = Mat4::perspective_rh(45f32.to_radians(), 1920.0 / 1080.0, 0.1, 2000.0);
    assert!(camera.projection_matrix().abs_diff_eq(expected, 1e-6));
}

#[test]
fn test_pixel_ratio_is_capped() {
    let mut handler = ResizeHandler::default();
    let mut camera = default_camera(1.0);
    let mut surface = SurfaceSize::new(1, 1);

    handler.handle(Viewport::new(800, 600, 3.0), &mut camera, &mut surface);
    assert_eq!(surface.pixel_ratio, 2.0);
    assert_eq!(surface.drawing_buffer_size(), (1600, 1200));

    handler.handle(Viewport::new(800, 600, 1.5), &mut camera, &mut surface);
    assert_eq!(surface.pixel_ratio, 1.5);
    assert_eq!(surface.drawing_buffer_size(), (1200, 900));

    let strict = ResizeHandler::new(1.0);
    assert_eq!(strict.pixel_ratio_for(2.0), 1.0);
    assert_eq!(strict.pixel_ratio_for(0.5), 0.5);
}

#[test]
fn test_repeated_events_are_idempotent() {
    let mut handler = ResizeHandler::default();
    let mut camera = default_camera(1.0);
    let mut surface = SurfaceSize::new(1, 1);
    let viewport = Viewport::new(1024, 768, 2.0);

    handler.handle(viewport, &mut camera, &mut surface);
    let first = (camera.aspect, camera.projection_matrix(), surface);
    handler.handle(viewport, &mut camera, &mut surface);

    assert_eq!((camera.aspect, camera.projection_matrix(), surface), first);
}

#[test]
fn test_zero_area_viewport_is_ignored() {
    let mut handler = ResizeHandler::default();
    let mut camera = default_camera(1.0);
    let mut surface = SurfaceSize::new(1, 1);

    handler.handle(Viewport::new(640, 480, 1.0), &mut camera, &mut surface);
    let projection = camera.projection_matrix();

    // Minimised windows report a zero height.
    assert!(!handler.handle(Viewport::new(640, 0, 1.0), &mut camera, &mut surface));
    assert!(!handler.handle(Viewport::new(0, 0, 1.0), &mut camera, &mut surface));

    assert_eq!(camera.aspect, 640.0 / 480.0);
    assert_eq!(camera.projection_matrix(), projection);
    assert_eq!((surface.width, surface.height), (640, 480));
    assert_eq!(handler.viewport(), Some(Viewport::new(640, 480, 1.0)));
}

#[test]
fn test_viewport_from_physical_size() {
    let viewport = Viewport::from_physical(PhysicalSize::new(3840, 2160), 2.0);
    assert_eq!(viewport, Viewport::new(1920, 1080, 2.0));
    assert!(!viewport.is_empty());
    assert!(Viewport::from_physical(PhysicalSize::new(0, 2160), 2.0).is_empty());
}

#[derive(Default)]
struct RecordingSurface {
    calls: Vec<String>,
}

impl OutputSurface for RecordingSurface {
    fn set_size(&mut self, width: u32, height: u32) {
        self.calls.push(format!("size {width}x{height}"));
    }

    fn set_pixel_ratio(&mut self, ratio: f64) {
        self.calls.push(format!("ratio {ratio}"));
    }
}

#[test]
fn test_any_output_surface_is_driven() {
    let mut handler = ResizeHandler::default();
    let mut camera = default_camera(1.0);
    let mut surface = RecordingSurface::default();

    handler.handle(Viewport::new(300, 200, 2.5), &mut camera, &mut surface);

    assert_eq!(surface.calls, vec!["size 300x200", "ratio 2"]);
}

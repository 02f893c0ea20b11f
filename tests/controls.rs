use glam::{Vec2, Vec3};
use orrery::engine::controls::OrbitControls;
use orrery::solar::builder::default_camera;
use winit::event::{ElementState, MouseButton};

const START: Vec3 = Vec3::new(-90.0, 140.0, 180.0);

#[test]
fn test_no_input_leaves_camera_in_place() {
    let mut camera = default_camera(1.5);
    let mut controls = OrbitControls::new(Vec3::ZERO);

    for _ in 0..10 {
        assert!(!controls.update(&mut camera));
    }

    assert!(camera.position.abs_diff_eq(START, 1e-2), "{:?}", camera.position);
    assert_eq!(camera.target, Vec3::ZERO);
}

#[test]
fn test_left_drag_orbits_at_constant_distance() {
    let mut camera = default_camera(1.5);
    let mut controls = OrbitControls::new(Vec3::ZERO);
    controls.set_viewport_height(720.0);
    let distance = START.length();

    controls.pointer_moved(Vec2::new(100.0, 100.0), &camera);
    controls.pointer_button(MouseButton::Left, ElementState::Pressed);
    controls.pointer_moved(Vec2::new(220.0, 100.0), &camera);

    assert!(controls.update(&mut camera));
    assert!((camera.position.length() - distance).abs() < 1e-2);
    // Horizontal drag only changes the azimuth.
    assert!((camera.position.y - START.y).abs() < 1e-2);
    assert!(!camera.position.abs_diff_eq(START, 1.0));
}

#[test]
fn test_released_pointer_does_not_rotate() {
    let mut camera = default_camera(1.5);
    let mut controls = OrbitControls::new(Vec3::ZERO);

    controls.pointer_button(MouseButton::Left, ElementState::Pressed);
    controls.pointer_button(MouseButton::Left, ElementState::Released);
    controls.pointer_moved(Vec2::new(0.0, 0.0), &camera);
    controls.pointer_moved(Vec2::new(300.0, 300.0), &camera);

    assert!(!controls.update(&mut camera));
}

#[test]
fn test_vertical_drag_is_clamped_at_the_pole() {
    let mut camera = default_camera(1.5);
    let mut controls = OrbitControls::new(Vec3::ZERO);
    controls.set_viewport_height(100.0);

    controls.pointer_moved(Vec2::new(0.0, 0.0), &camera);
    controls.pointer_button(MouseButton::Left, ElementState::Pressed);
    // Dragging far upwards tips the camera under the orbital plane.
    controls.pointer_moved(Vec2::new(0.0, -10_000.0), &camera);
    controls.update(&mut camera);

    let distance = START.length();
    assert!(camera.position.is_finite());
    assert!(camera.position.y < 0.0);
    assert!((camera.position.length() - distance).abs() < 1e-1);
    assert!(camera.view_matrix().is_finite());
}

#[test]
fn test_wheel_dollies_towards_target() {
    let mut camera = default_camera(1.5);
    let mut controls = OrbitControls::new(Vec3::ZERO);
    let distance = START.length();

    controls.wheel(1.0);
    controls.update(&mut camera);
    assert!((camera.position.length() - distance * 0.95).abs() < 1e-2);

    controls.wheel(-2.0);
    controls.update(&mut camera);
    let expected = distance * 0.95 / (0.95 * 0.95);
    assert!((camera.position.length() - expected).abs() < 1e-2);
}

#[test]
fn test_zoom_respects_distance_limits() {
    let mut camera = default_camera(1.5);
    let mut controls = OrbitControls::new(Vec3::ZERO);
    controls.min_distance = 50.0;
    controls.max_distance = 400.0;

    controls.wheel(200.0);
    controls.update(&mut camera);
    assert!((camera.position.length() - 50.0).abs() < 1e-2);

    controls.wheel(-500.0);
    controls.update(&mut camera);
    assert!((camera.position.length() - 400.0).abs() < 1e-2);
}

#[test]
fn test_right_drag_pans_target_and_camera_together() {
    let mut camera = default_camera(1.5);
    let mut controls = OrbitControls::new(Vec3::ZERO);
    controls.set_viewport_height(720.0);

    controls.pointer_moved(Vec2::new(400.0, 300.0), &camera);
    controls.pointer_button(MouseButton::Right, ElementState::Pressed);
    controls.pointer_moved(Vec2::new(300.0, 250.0), &camera);
    assert!(controls.update(&mut camera));

    assert!(controls.target.length() > 1.0);
    assert_eq!(camera.target, controls.target);
    let offset = camera.position - controls.target;
    assert!(offset.abs_diff_eq(START, 1e-2), "{offset:?}");
}

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};
use winit::event::{ElementState, MouseButton};

use super::camera::PerspectiveCamera;

const POLAR_EPSILON: f32 = 1e-6;
/// Smallest camera displacement, in world units, reported as movement.
const MOVE_EPSILON: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Drag {
    Idle,
    Rotate,
    Pan,
}

/// Pointer-driven orbit camera: left drag rotates about `target`, right drag
/// pans, the wheel dollies. Input is accumulated and applied by
/// [`OrbitControls::update`].
#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub target: Vec3,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    viewport_height: f32,
    drag: Drag,
    last_pointer: Option<Vec2>,
    delta_theta: f32,
    delta_phi: f32,
    scale: f32,
    pan_offset: Vec3,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl OrbitControls {
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            pan_speed: 1.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            viewport_height: 1.0,
            drag: Drag::Idle,
            last_pointer: None,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
            pan_offset: Vec3::ZERO,
        }
    }

    /// Height in the same pixel units as pointer positions.
    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height.max(1.0);
    }

    pub fn pointer_button(&mut self, button: MouseButton, state: ElementState) {
        self.drag = match (state, button) {
            (ElementState::Pressed, MouseButton::Left) => Drag::Rotate,
            (ElementState::Pressed, MouseButton::Right | MouseButton::Middle) => Drag::Pan,
            (ElementState::Released, _) => Drag::Idle,
            (ElementState::Pressed, _) => self.drag,
        };
    }

    pub fn pointer_moved(&mut self, position: Vec2, camera: &PerspectiveCamera) {
        let previous = self.last_pointer.replace(position);
        let Some(previous) = previous else {
            return;
        };
        let delta = position - previous;

        match self.drag {
            Drag::Idle => {}
            Drag::Rotate => {
                let scale = TAU * self.rotate_speed / self.viewport_height;
                self.delta_theta -= delta.x * scale;
                self.delta_phi -= delta.y * scale;
            }
            Drag::Pan => self.pan(delta, camera),
        }
    }

    /// Positive `lines` scrolls away from the user and moves the camera closer.
    pub fn wheel(&mut self, lines: f32) {
        let step = 0.95f32.powf(self.zoom_speed);
        self.scale *= step.powf(lines);
    }

    fn pan(&mut self, delta: Vec2, camera: &PerspectiveCamera) {
        let distance = (camera.position - self.target).length();
        let half_fov = (camera.fov_y_degrees * 0.5).to_radians();
        let target_distance = distance * half_fov.tan();
        let per_pixel = 2.0 * target_distance * self.pan_speed / self.viewport_height;

        self.pan_offset += camera.right() * (-delta.x * per_pixel);
        self.pan_offset += camera.camera_up() * (delta.y * per_pixel);
    }

    /// Applies pending input to `camera`. Returns whether it moved.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        let offset = camera.position - self.target;
        let radius = offset.length();
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = if radius > 0.0 {
            (offset.y / radius).clamp(-1.0, 1.0).acos()
        } else {
            0.0
        };

        theta += self.delta_theta;
        phi += self.delta_phi;
        phi = phi.clamp(
            self.min_polar_angle.max(POLAR_EPSILON),
            self.max_polar_angle.min(PI - POLAR_EPSILON),
        );
        let radius = (radius * self.scale).clamp(self.min_distance, self.max_distance);

        self.target += self.pan_offset;
        let offset = Vec3::new(
            radius * phi.sin() * theta.sin(),
            radius * phi.cos(),
            radius * phi.sin() * theta.cos(),
        );

        let previous = camera.position;
        camera.position = self.target + offset;
        camera.look_at(self.target);

        self.delta_theta = 0.0;
        self.delta_phi = 0.0;
        self.scale = 1.0;
        self.pan_offset = Vec3::ZERO;

        previous.distance(camera.position) > MOVE_EPSILON
    }
}

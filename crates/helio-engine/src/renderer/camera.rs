use crate::api::game::GameConfig;
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Pitch stops just short of the poles to avoid a degenerate look-at up vector.
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Perspective camera orbiting a target point.
///
/// The camera sits at `distance` from `target`, oriented by yaw (about the
/// world Y axis) and pitch. Yaw 0 / pitch 0 places it on the +Z axis looking
/// back at the target. Pointer drags orbit, the wheel zooms, and window
/// resizes only change the aspect ratio — none of it touches the simulation.
pub struct OrbitCamera {
    /// Point the camera looks at.
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    yaw: f32,
    pitch: f32,
    distance: f32,
    min_distance: f32,
    max_distance: f32,
    /// Radians of orbit per pointer unit dragged.
    orbit_speed: f32,
    /// Zoom factor per wheel unit.
    zoom_step: f32,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub eye: [f32; 3],
    pub _pad: f32,
}

impl CameraUniform {
    pub const FLOATS: usize = 20;
}

impl OrbitCamera {
    pub fn new(fov_deg: f32, near: f32, far: f32) -> Self {
        Self {
            target: Vec3::ZERO,
            fov_y: fov_deg.to_radians(),
            aspect: 1.0,
            near,
            far,
            yaw: 0.0,
            pitch: 0.0,
            distance: 100.0,
            min_distance: near,
            max_distance: far,
            orbit_speed: 0.005,
            zoom_step: 1.1,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.fov_deg, config.near, config.far)
    }

    /// Clamp how close and how far the camera may dolly.
    pub fn set_distance_limits(&mut self, min: f32, max: f32) {
        self.min_distance = min;
        self.max_distance = max;
        self.distance = self.distance.clamp(min, max);
    }

    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance.clamp(self.min_distance, self.max_distance);
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Orbit by a pointer drag delta. Yaw is unbounded; pitch is clamped
    /// short of the poles.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * self.orbit_speed;
        self.pitch = (self.pitch + dy * self.orbit_speed).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Dolly by wheel ticks: positive zooms out, negative zooms in.
    /// Multiplicative so the feel is scale-independent.
    pub fn zoom(&mut self, ticks: f32) {
        let factor = self.zoom_step.powf(ticks);
        self.distance = (self.distance * factor).clamp(self.min_distance, self.max_distance);
    }

    /// Update the aspect ratio on window resize.
    pub fn resize(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Camera position in world space.
    pub fn eye(&self) -> Vec3 {
        let dir = Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        );
        self.target + dir * self.distance
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn uniform(&self) -> CameraUniform {
        let view_proj = self.projection_matrix() * self.view_matrix();
        CameraUniform {
            view_proj: view_proj.to_cols_array_2d(),
            eye: self.eye().to_array(),
            _pad: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_eye_sits_on_positive_z() {
        let cam = OrbitCamera::new(85.0, 0.1, 1000.0);
        let eye = cam.eye();
        assert!((eye.x).abs() < 1e-5);
        assert!((eye.y).abs() < 1e-5);
        assert!((eye.z - 100.0).abs() < 1e-4);
    }

    #[test]
    fn orbit_preserves_distance() {
        let mut cam = OrbitCamera::new(85.0, 0.1, 1000.0);
        cam.orbit(120.0, -45.0);
        let eye = cam.eye();
        assert!((eye.length() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn pitch_clamps_short_of_poles() {
        let mut cam = OrbitCamera::new(85.0, 0.1, 1000.0);
        cam.orbit(0.0, 1e6);
        let eye = cam.eye();
        // Even at the clamp the eye never reaches straight overhead
        assert!(eye.y < cam.distance());
        assert!(eye.z > 0.0);
    }

    #[test]
    fn zoom_respects_distance_limits() {
        let mut cam = OrbitCamera::new(85.0, 0.1, 1000.0);
        cam.set_distance_limits(12.0, 1000.0);
        cam.zoom(-1000.0);
        assert_eq!(cam.distance(), 12.0);
        cam.zoom(1000.0);
        assert_eq!(cam.distance(), 1000.0);
    }

    #[test]
    fn zoom_in_and_out_are_inverse() {
        let mut cam = OrbitCamera::new(85.0, 0.1, 1000.0);
        cam.set_distance_limits(12.0, 1000.0);
        let before = cam.distance();
        cam.zoom(3.0);
        cam.zoom(-3.0);
        assert!((cam.distance() - before).abs() < 1e-3);
    }

    #[test]
    fn resize_updates_aspect_only() {
        let mut cam = OrbitCamera::new(85.0, 0.1, 1000.0);
        let eye_before = cam.eye();
        cam.resize(1920.0 / 1080.0);
        assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
        assert_eq!(cam.eye(), eye_before);
    }

    #[test]
    fn resize_rejects_degenerate_aspect() {
        let mut cam = OrbitCamera::new(85.0, 0.1, 1000.0);
        cam.resize(0.0);
        assert_eq!(cam.aspect, 1.0);
        cam.resize(f32::NAN);
        assert_eq!(cam.aspect, 1.0);
    }

    #[test]
    fn uniform_is_20_floats() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), CameraUniform::FLOATS * 4);
    }

    #[test]
    fn view_matrix_moves_target_to_view_axis() {
        let cam = OrbitCamera::new(85.0, 0.1, 1000.0);
        let v = cam.view_matrix().transform_point3(cam.target);
        // Target lies straight ahead: on the -Z view axis at `distance`
        assert!(v.x.abs() < 1e-4);
        assert!(v.y.abs() < 1e-4);
        assert!((v.z + cam.distance()).abs() < 1e-3);
    }
}

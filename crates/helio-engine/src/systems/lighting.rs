/// Point light system.
///
/// Lights are persistent — they stay until explicitly removed.
/// Each frame, the engine serializes active lights to the SAB
/// for the renderer's lighting pass.

use glam::Vec3;

/// A point light with position, color, intensity and falloff range.
///
/// Wire format (8 floats / 32 bytes):
/// `[x, y, z, r, g, b, intensity, range]`
///
/// `range` 0.0 means no distance falloff (an idealized sun).
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct PointLight {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub intensity: f32,
    pub range: f32,
}

impl PointLight {
    /// Create a new point light at the given position.
    ///
    /// - `pos`: World-space position
    /// - `color`: RGB color (typically [0..1] but can exceed 1.0 for HDR)
    /// - `intensity`: Light strength multiplier
    /// - `range`: Falloff distance in world units (0.0 = no falloff)
    pub fn new(pos: Vec3, color: [f32; 3], intensity: f32, range: f32) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            r: color[0],
            g: color[1],
            b: color[2],
            intensity,
            range,
        }
    }

    /// Set the position.
    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.x = pos.x;
        self.y = pos.y;
        self.z = pos.z;
        self
    }
}

/// Manages active lights and ambient color for the scene.
///
/// Lights are persistent — add them once and they stay until removed.
pub struct LightState {
    lights: Vec<PointLight>,
    ambient: [f32; 3],
}

impl LightState {
    pub fn new() -> Self {
        Self {
            lights: Vec::new(),
            ambient: [0.0, 0.0, 0.0],
        }
    }

    /// Create a LightState with a specific light capacity.
    pub fn with_capacity(max_lights: usize) -> Self {
        Self {
            lights: Vec::with_capacity(max_lights),
            ambient: [0.0, 0.0, 0.0],
        }
    }

    /// Add a point light to the scene.
    pub fn add(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    /// Remove all lights.
    pub fn clear(&mut self) {
        self.lights.clear();
    }

    /// Get an iterator over active lights.
    pub fn iter(&self) -> impl Iterator<Item = &PointLight> {
        self.lights.iter()
    }

    /// Get a mutable iterator over active lights.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PointLight> {
        self.lights.iter_mut()
    }

    /// Number of active lights.
    pub fn count(&self) -> usize {
        self.lights.len()
    }

    /// Set the ambient light color (default: black = point lights only).
    pub fn set_ambient(&mut self, r: f32, g: f32, b: f32) {
        self.ambient = [r, g, b];
    }

    /// Get the ambient color.
    pub fn ambient(&self) -> [f32; 3] {
        self.ambient
    }

    /// Pointer to the lights data for SAB serialization.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.lights.as_ptr() as *const f32
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::protocol::LIGHT_FLOATS;

    #[test]
    fn point_light_new() {
        let light = PointLight::new(Vec3::new(0.0, 5.0, -10.0), [1.0, 0.9, 0.8], 2.0, 0.0);
        assert_eq!(light.y, 5.0);
        assert_eq!(light.z, -10.0);
        assert_eq!(light.g, 0.9);
        assert_eq!(light.intensity, 2.0);
        assert_eq!(light.range, 0.0);
    }

    #[test]
    fn light_state_add_and_count() {
        let mut state = LightState::new();
        assert_eq!(state.count(), 0);

        state.add(PointLight::new(Vec3::ZERO, [1.0; 3], 1.0, 0.0));
        assert_eq!(state.count(), 1);
    }

    #[test]
    fn light_state_ambient_defaults_dark() {
        let state = LightState::new();
        assert_eq!(state.ambient(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn light_state_set_ambient() {
        let mut state = LightState::new();
        state.set_ambient(0.05, 0.05, 0.08);
        assert_eq!(state.ambient(), [0.05, 0.05, 0.08]);
    }

    #[test]
    fn point_light_is_8_floats() {
        assert_eq!(std::mem::size_of::<PointLight>(), LIGHT_FLOATS * 4);
    }
}

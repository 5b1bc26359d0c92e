/// SharedArrayBuffer layout.
/// Must stay in sync with TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Spheres: max_spheres × 8 floats]
/// [Rings: max_rings × 8 floats]
/// [Lights: max_lights × 8 floats]
/// [Events: max_events × 4 floats]
/// [Camera: 20 floats]
/// ```
///
/// Capacities are written once into the header at init.
/// TypeScript reads them from the header to compute offsets dynamically.

use crate::api::game::GameConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_SPHERES: usize = 2;
pub const HEADER_SPHERE_COUNT: usize = 3;
pub const HEADER_LIT_SPLIT: usize = 4;
pub const HEADER_MAX_RINGS: usize = 5;
pub const HEADER_RING_COUNT: usize = 6;
pub const HEADER_MAX_LIGHTS: usize = 7;
pub const HEADER_LIGHT_COUNT: usize = 8;
pub const HEADER_MAX_EVENTS: usize = 9;
pub const HEADER_EVENT_COUNT: usize = 10;
pub const HEADER_SPHERE_SEGMENTS: usize = 11;
pub const HEADER_PROTOCOL_VERSION: usize = 12;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per sphere instance: x, y, z, spin, radius, texture, lit, emissive.
pub const SPHERE_FLOATS: usize = 8;

/// Floats per ring instance: radius, width, segments, r, g, b, alpha, pad.
pub const RING_FLOATS: usize = 8;

/// Floats per point light: x, y, z, r, g, b, intensity, range.
pub const LIGHT_FLOATS: usize = 8;

/// Floats per game event: kind, a, b, c.
pub const EVENT_FLOATS: usize = 4;

/// Floats for the camera uniform: view-projection matrix + eye + pad.
pub const CAMERA_FLOATS: usize = 20;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum sphere instances.
    pub max_spheres: usize,
    /// Maximum ring instances.
    pub max_rings: usize,
    /// Maximum point lights.
    pub max_lights: usize,
    /// Maximum game events per frame.
    pub max_events: usize,

    /// Size of sphere data section in floats.
    pub sphere_data_floats: usize,
    /// Size of ring data section in floats.
    pub ring_data_floats: usize,
    /// Size of light data section in floats.
    pub light_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where sphere data begins.
    pub sphere_data_offset: usize,
    /// Offset (in floats) where ring data begins.
    pub ring_data_offset: usize,
    /// Offset (in floats) where light data begins.
    pub light_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,
    /// Offset (in floats) where the camera uniform begins.
    pub camera_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(
        max_spheres: usize,
        max_rings: usize,
        max_lights: usize,
        max_events: usize,
    ) -> Self {
        let sphere_data_floats = max_spheres * SPHERE_FLOATS;
        let ring_data_floats = max_rings * RING_FLOATS;
        let light_data_floats = max_lights * LIGHT_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let sphere_data_offset = HEADER_FLOATS;
        let ring_data_offset = sphere_data_offset + sphere_data_floats;
        let light_data_offset = ring_data_offset + ring_data_floats;
        let event_data_offset = light_data_offset + light_data_floats;
        let camera_data_offset = event_data_offset + event_data_floats;

        let buffer_total_floats = camera_data_offset + CAMERA_FLOATS;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_spheres,
            max_rings,
            max_lights,
            max_events,
            sphere_data_floats,
            ring_data_floats,
            light_data_floats,
            event_data_floats,
            sphere_data_offset,
            ring_data_offset,
            light_data_offset,
            event_data_offset,
            camera_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.max_spheres,
            config.max_rings,
            config.max_lights,
            config.max_events,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = ProtocolLayout::from_config(&GameConfig::default());

        assert_eq!(layout.max_spheres, 64);
        assert_eq!(layout.max_rings, 16);
        assert_eq!(layout.max_lights, 4);
        assert_eq!(layout.max_events, 32);

        assert_eq!(layout.sphere_data_floats, 64 * 8);
        assert_eq!(layout.ring_data_floats, 16 * 8);
        assert_eq!(layout.light_data_floats, 4 * 8);
        assert_eq!(layout.event_data_floats, 32 * 4);

        let expected_total = HEADER_FLOATS + 64 * 8 + 16 * 8 + 4 * 8 + 32 * 4 + CAMERA_FLOATS;
        assert_eq!(layout.buffer_total_floats, expected_total);
        assert_eq!(layout.buffer_total_bytes, expected_total * 4);
    }

    #[test]
    fn custom_capacities_compute_correctly() {
        let layout = ProtocolLayout::new(16, 8, 1, 8);

        assert_eq!(layout.sphere_data_floats, 16 * 8);
        assert_eq!(layout.ring_data_floats, 8 * 8);
        assert_eq!(layout.light_data_floats, 8);
        assert_eq!(layout.event_data_floats, 8 * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(10, 5, 2, 4);

        assert_eq!(layout.sphere_data_offset, HEADER_FLOATS);
        assert_eq!(layout.ring_data_offset, layout.sphere_data_offset + layout.sphere_data_floats);
        assert_eq!(layout.light_data_offset, layout.ring_data_offset + layout.ring_data_floats);
        assert_eq!(layout.event_data_offset, layout.light_data_offset + layout.light_data_floats);
        assert_eq!(layout.camera_data_offset, layout.event_data_offset + layout.event_data_floats);
        assert_eq!(layout.buffer_total_floats, layout.camera_data_offset + CAMERA_FLOATS);
    }

    #[test]
    fn wire_sizes_match_pod_structs() {
        use crate::api::types::GameEvent;
        use crate::renderer::camera::CameraUniform;
        use crate::renderer::instance::SphereInstance;
        use crate::renderer::ring::RingInstance;

        assert_eq!(SPHERE_FLOATS, SphereInstance::FLOATS);
        assert_eq!(RING_FLOATS, RingInstance::FLOATS);
        assert_eq!(EVENT_FLOATS, GameEvent::FLOATS);
        assert_eq!(CAMERA_FLOATS, CameraUniform::FLOATS);
    }
}

use bytemuck::{Pod, Zeroable};

/// Per-sphere render data written to SharedArrayBuffer for the host renderer.
/// Must match the TypeScript protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SphereInstance {
    /// X position in world space.
    pub x: f32,
    /// Y position in world space.
    pub y: f32,
    /// Z position in world space.
    pub z: f32,
    /// Self-rotation angle about the local Y axis, in radians.
    pub spin: f32,
    /// Sphere radius in world units.
    pub radius: f32,
    /// Texture slot from the registry.
    pub texture_slot: f32,
    /// 1.0 if shaded by scene lights, 0.0 if unlit.
    pub lit: f32,
    /// HDR glow multiplier.
    pub emissive: f32,
}

impl SphereInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Render buffer containing all sphere instances for one frame.
///
/// Instances are ordered by shading mode: lit spheres first, unlit after
/// `lit_split`, so the host can bind its two pipelines once each.
pub struct RenderBuffer {
    pub instances: Vec<SphereInstance>,
    /// Index where the lit/unlit split occurs.
    pub lit_split: u32,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            lit_split: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.lit_split = 0;
    }

    pub fn push(&mut self, instance: SphereInstance) {
        self.instances.push(instance);
    }

    pub fn set_lit_split(&mut self, split: u32) {
        self.lit_split = split;
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<SphereInstance>(), 32);
        assert_eq!(SphereInstance::FLOATS, 8);
    }

    #[test]
    fn render_buffer_push_and_count() {
        let mut buf = RenderBuffer::new();
        buf.push(SphereInstance::default());
        buf.push(SphereInstance::default());
        assert_eq!(buf.instance_count(), 2);
    }

    #[test]
    fn clear_resets_split() {
        let mut buf = RenderBuffer::new();
        buf.push(SphereInstance::default());
        buf.set_lit_split(1);
        buf.clear();
        assert_eq!(buf.instance_count(), 0);
        assert_eq!(buf.lit_split, 0);
    }
}

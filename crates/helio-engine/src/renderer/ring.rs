use bytemuck::{Pod, Zeroable};

/// A flat circular ring in the XZ plane, centered on the world origin.
/// Used for orbit guides. 8 floats = 32 bytes stride on the wire.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct RingInstance {
    /// Outer radius in world units.
    pub radius: f32,
    /// Radial width of the band.
    pub width: f32,
    /// Tessellation segments for the host geometry builder.
    pub segments: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub alpha: f32,
    pub _pad: f32,
}

impl RingInstance {
    pub const FLOATS: usize = 8;

    /// A thin white ring, the classic orbit guide.
    pub fn orbit_guide(radius: f32) -> Self {
        Self {
            radius,
            width: 0.1,
            segments: 100.0,
            r: 1.0,
            g: 1.0,
            b: 1.0,
            alpha: 1.0,
            _pad: 0.0,
        }
    }

    pub fn with_color(mut self, r: f32, g: f32, b: f32, alpha: f32) -> Self {
        self.r = r;
        self.g = g;
        self.b = b;
        self.alpha = alpha;
        self
    }
}

/// Ring instances, authored once at scene setup and republished each frame.
pub struct RingBuffer {
    rings: Vec<RingInstance>,
}

impl RingBuffer {
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rings: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, ring: RingInstance) {
        self.rings.push(ring);
    }

    pub fn clear(&mut self) {
        self.rings.clear();
    }

    pub fn count(&self) -> u32 {
        self.rings.len() as u32
    }

    pub fn iter(&self) -> impl Iterator<Item = &RingInstance> {
        self.rings.iter()
    }

    /// Raw pointer to ring data for SharedArrayBuffer reads.
    pub fn rings_ptr(&self) -> *const f32 {
        self.rings.as_ptr() as *const f32
    }
}

impl Default for RingBuffer {
    fn default() -> Self {
        Self::new()
    }
}

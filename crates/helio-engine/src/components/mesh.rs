/// Shading mode for a sphere mesh.
///
/// `Lit` spheres are shaded by the scene's point lights plus ambient;
/// `Unlit` spheres show their texture at full brightness (the sun, which is
/// itself the light source, would otherwise render black on its far side).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shading {
    Lit,
    Unlit,
}

/// Component for textured sphere meshes.
#[derive(Debug, Clone, Copy)]
pub struct SphereComponent {
    /// Sphere radius in world units.
    pub radius: f32,
    /// Texture slot assigned by the registry.
    pub texture: u32,
    pub shading: Shading,
    /// HDR glow multiplier (default: 0.0).
    pub emissive: f32,
}

impl SphereComponent {
    pub fn new(radius: f32, texture: u32) -> Self {
        Self {
            radius,
            texture,
            shading: Shading::Lit,
            emissive: 0.0,
        }
    }

    pub fn unlit(mut self) -> Self {
        self.shading = Shading::Unlit;
        self
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }
}

use crate::api::types::{EntityId, GameEvent};
use crate::assets::registry::TextureRegistry;
use crate::assets::AssetError;
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::renderer::camera::OrbitCamera;
use crate::renderer::ring::RingBuffer;
use crate::systems::lighting::LightState;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Vertical field of view in degrees (default: 60).
    pub fov_deg: f32,
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
    /// Maximum number of sphere instances (default: 64).
    pub max_spheres: usize,
    /// Maximum number of ring instances (default: 16).
    pub max_rings: usize,
    /// Maximum number of point lights (default: 4).
    pub max_lights: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Sphere tessellation hint for the host renderer (segments per axis).
    pub sphere_segments: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fov_deg: 60.0,
            near: 0.1,
            far: 1000.0,
            max_spheres: 64,
            max_rings: 16,
            max_lights: 4,
            max_events: 32,
            sphere_segments: 48,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state: spawn entities, add lights and rings, position
    /// the camera. Texture lookups go through `ctx.textures`, which is why
    /// init can fail — a body referencing a texture the manifest does not
    /// list is a setup error, not something to limp past.
    fn init(&mut self, ctx: &mut EngineContext) -> Result<(), AssetError>;

    /// The per-frame tick. `elapsed_ms` is the monotone time supplied by the
    /// host, in milliseconds since the first frame.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, elapsed_ms: f64);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: OrbitCamera,
    pub lights: LightState,
    pub rings: RingBuffer,
    pub textures: TextureRegistry,
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    /// Create a context sized and shaped by the game's configuration.
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            scene: Scene::new(),
            camera: OrbitCamera::from_config(config),
            lights: LightState::with_capacity(config.max_lights),
            rings: RingBuffer::with_capacity(config.max_rings),
            textures: TextureRegistry::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to the host UI.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_is_sequential() {
        let mut ctx = EngineContext::new();
        assert_eq!(ctx.next_id(), EntityId(1));
        assert_eq!(ctx.next_id(), EntityId(2));
    }

    #[test]
    fn clear_frame_data_drops_events() {
        let mut ctx = EngineContext::new();
        ctx.emit_event(GameEvent { kind: 1.0, a: 2.0, b: 0.0, c: 0.0 });
        assert_eq!(ctx.events.len(), 1);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn context_camera_follows_config() {
        let config = GameConfig { fov_deg: 85.0, ..GameConfig::default() };
        let ctx = EngineContext::from_config(&config);
        assert!((ctx.camera.fov_y - 85.0_f32.to_radians()).abs() < 1e-6);
    }
}

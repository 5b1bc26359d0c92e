pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{EntityId, GameEvent};
pub use components::entity::Entity;
pub use components::mesh::{Shading, SphereComponent};
pub use crate::core::scene::Scene;
pub use crate::core::time::FrameClock;
pub use renderer::camera::{CameraUniform, OrbitCamera};
pub use renderer::instance::{RenderBuffer, SphereInstance};
pub use renderer::ring::{RingBuffer, RingInstance};
pub use input::queue::{InputEvent, InputQueue};
pub use assets::manifest::{AssetManifest, SkyboxDescriptor, TextureDescriptor};
pub use assets::registry::TextureRegistry;
pub use assets::AssetError;
pub use bridge::protocol::ProtocolLayout;
pub use bridge::protocol::{CAMERA_FLOATS, LIGHT_FLOATS, RING_FLOATS, SPHERE_FLOATS};
pub use systems::lighting::{LightState, PointLight};
pub use systems::render::build_render_buffer;

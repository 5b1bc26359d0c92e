use glam::Vec3;
use helio_engine::{
    AssetError, EngineContext, Entity, EntityId, Game, GameConfig, GameEvent, InputEvent,
    InputQueue, PointLight, RingInstance, SphereComponent,
};

use crate::bodies::Body;
use crate::motion;

/// Custom input event: host slider changed, `a` carries the new multiplier.
pub const CUSTOM_SET_SPEED: u32 = 1;
/// Custom input event: canvas resized, `a`/`b` carry width and height in px.
pub const CUSTOM_RESIZE: u32 = 99;

/// Outbound event: speed multiplier changed, `a` carries the applied value.
pub const EVENT_SPEED_CHANGED: f32 = 1.0;

const SUN_POSITION: Vec3 = Vec3::ZERO;
const AMBIENT: [f32; 3] = [0.05, 0.05, 0.05];

const CAMERA_FOV_DEG: f32 = 85.0;
const CAMERA_NEAR: f32 = 0.1;
const CAMERA_FAR: f32 = 1000.0;
const CAMERA_DISTANCE: f32 = 100.0;
const CAMERA_MIN_DISTANCE: f32 = 12.0;
const CAMERA_MAX_DISTANCE: f32 = 1000.0;

pub struct SolarSystem {
    speed_multiplier: f32,
    body_ids: Vec<(Body, EntityId)>,
    dragging: bool,
    last_pointer: (f32, f32),
}

impl SolarSystem {
    pub fn new() -> Self {
        SolarSystem {
            speed_multiplier: 1.0,
            body_ids: Vec::new(),
            dragging: false,
            last_pointer: (0.0, 0.0),
        }
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    fn handle_input(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::PointerDown { x, y } => {
                    self.dragging = true;
                    self.last_pointer = (x, y);
                }
                InputEvent::PointerUp { .. } => {
                    self.dragging = false;
                }
                InputEvent::PointerMove { x, y } => {
                    if self.dragging {
                        let dx = x - self.last_pointer.0;
                        let dy = y - self.last_pointer.1;
                        ctx.camera.orbit(dx, dy);
                    }
                    self.last_pointer = (x, y);
                }
                InputEvent::Wheel { delta } => {
                    ctx.camera.zoom(delta);
                }
                InputEvent::Custom { kind, a, b, .. } => match kind {
                    CUSTOM_SET_SPEED => {
                        self.speed_multiplier = a;
                        ctx.emit_event(GameEvent {
                            kind: EVENT_SPEED_CHANGED,
                            a,
                            b: 0.0,
                            c: 0.0,
                        });
                        log::info!("speed multiplier set to {a}");
                    }
                    CUSTOM_RESIZE if b > 0.0 => {
                        ctx.camera.resize(a / b);
                    }
                    _ => {}
                },
            }
        }
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            fov_deg: CAMERA_FOV_DEG,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            max_spheres: 16,
            max_rings: 8,
            max_lights: 1,
            max_events: 32,
            sphere_segments: 100,
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) -> Result<(), AssetError> {
        for body in Body::ALL {
            let slot = ctx.textures.slot(body.texture())?;
            let sphere = match body {
                Body::Sun => SphereComponent::new(body.visual_radius(), slot)
                    .unlit()
                    .with_emissive(1.0),
                _ => SphereComponent::new(body.visual_radius(), slot),
            };
            let pos = match body.orbit() {
                Some(spec) => motion::orbit_position(SUN_POSITION, spec.radius, 0.0),
                None => SUN_POSITION,
            };
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag(body.texture())
                    .with_pos(pos)
                    .with_sphere(sphere),
            );
            self.body_ids.push((body, id));
        }

        for planet in Body::PLANETS {
            if let Some(spec) = planet.orbit() {
                ctx.rings.push(RingInstance::orbit_guide(spec.radius));
            }
        }

        ctx.lights
            .add(PointLight::new(SUN_POSITION, [1.0, 1.0, 1.0], 1.0, 0.0));
        ctx.lights.set_ambient(AMBIENT[0], AMBIENT[1], AMBIENT[2]);

        ctx.camera.set_distance_limits(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
        ctx.camera.set_distance(CAMERA_DISTANCE);

        log::info!("solar system ready: {} bodies", self.body_ids.len());
        Ok(())
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, elapsed_ms: f64) {
        self.handle_input(ctx, input);
        motion::advance(
            elapsed_ms,
            self.speed_multiplier,
            SUN_POSITION,
            &mut ctx.scene,
            &self.body_ids,
        );
    }
}

/// Per-frame body animation — pure math over the fixed orbit tables.
///
/// Orbital positions are recomputed from absolute elapsed time every frame
/// rather than integrated, so a planet's distance from the Sun is exactly
/// its table radius on every frame — there is no cumulative floating-point
/// drift to correct. The tradeoff is that orbital phase follows any jump in
/// the host clock, which is acceptable since the clock is monotone.
///
/// Self-rotation is the one accumulated quantity: a fixed increment per
/// rendered frame, scaled by the speed multiplier.

use glam::Vec3;
use helio_engine::{EntityId, Scene};

use crate::bodies::Body;

/// Radians of self-rotation per frame at speed multiplier 1, all bodies.
pub const BASE_ROTATION_RATE: f32 = 0.005;

/// Radians of orbital angle per elapsed millisecond at speed multiplier 1
/// and revolution speed 1.
pub const BASE_ORBIT_RATE: f64 = 0.001;

/// Orbital angle for a body at an absolute elapsed time.
pub fn orbit_angle(elapsed_ms: f64, speed_multiplier: f32, revolution_speed: f32) -> f64 {
    elapsed_ms * BASE_ORBIT_RATE * speed_multiplier as f64 * revolution_speed as f64
}

/// Position on a circular orbit around `sun_pos` in the XZ plane.
pub fn orbit_position(sun_pos: Vec3, radius: f32, angle: f64) -> Vec3 {
    Vec3::new(
        sun_pos.x + radius * angle.cos() as f32,
        sun_pos.y,
        sun_pos.z + radius * angle.sin() as f32,
    )
}

/// Advance every body in place: spin all of them (Sun included), recompute
/// each planet's orbital position from absolute time. The Sun never moves.
///
/// A zero multiplier freezes motion, a negative one reverses it; neither is
/// an error.
pub fn advance(
    elapsed_ms: f64,
    speed_multiplier: f32,
    sun_pos: Vec3,
    scene: &mut Scene,
    bodies: &[(Body, EntityId)],
) {
    let spin_step = BASE_ROTATION_RATE * speed_multiplier;

    for (body, id) in bodies {
        if let Some(entity) = scene.get_mut(*id) {
            entity.spin += spin_step;
            if let Some(spec) = body.orbit() {
                let angle = orbit_angle(elapsed_ms, speed_multiplier, spec.revolution_speed);
                entity.pos = orbit_position(sun_pos, spec.radius, angle);
            }
        }
    }
}

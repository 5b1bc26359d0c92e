//! Interactive solar system: the Sun, eight planets on circular orbits,
//! orbit guide rings, and an orbiting camera, all simulated here and
//! rendered by the web host from the published buffers.

use helio_engine::*;
use wasm_bindgen::prelude::*;

pub mod bodies;
pub mod game;
pub mod motion;

use game::SolarSystem;

helio_web::export_game!(SolarSystem, "solar-system");

/// Format a speed multiplier for the host's slider label.
#[wasm_bindgen]
pub fn speed_label(value: f32) -> String {
    format!("{value:.1}x")
}

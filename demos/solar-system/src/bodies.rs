/// Body identity and the fixed orbit/rotation tables.
///
/// Radii and speeds are scene-tuned, not astronomical: orbital radii keep
/// every planet on screen, revolution speeds fall off outward so the inner
/// system visibly moves while Neptune crawls.

/// A simulated celestial body. Closed set — lookups cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

/// Fixed per-body orbital radius and relative revolution speed.
/// Never mutated at runtime.
#[derive(Debug, Clone, Copy)]
pub struct OrbitSpec {
    /// Distance from the Sun in scene units.
    pub radius: f32,
    /// Relative angular-rate multiplier, dimensionless.
    pub revolution_speed: f32,
}

impl Body {
    pub const ALL: [Body; 9] = [
        Body::Sun,
        Body::Mercury,
        Body::Venus,
        Body::Earth,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
    ];

    pub const PLANETS: [Body; 8] = [
        Body::Mercury,
        Body::Venus,
        Body::Earth,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
    ];

    /// Texture name in the asset manifest (also the scene tag).
    pub fn texture(self) -> &'static str {
        match self {
            Body::Sun => "sun",
            Body::Mercury => "mercury",
            Body::Venus => "venus",
            Body::Earth => "earth",
            Body::Mars => "mars",
            Body::Jupiter => "jupiter",
            Body::Saturn => "saturn",
            Body::Uranus => "uranus",
            Body::Neptune => "neptune",
        }
    }

    /// Rendered sphere radius in scene units.
    pub fn visual_radius(self) -> f32 {
        match self {
            Body::Sun => 20.0,
            Body::Mercury => 2.0,
            Body::Venus => 3.0,
            Body::Earth => 4.0,
            Body::Mars => 3.5,
            Body::Jupiter => 10.0,
            Body::Saturn => 8.0,
            Body::Uranus => 6.0,
            Body::Neptune => 5.0,
        }
    }

    /// Orbit parameters; None for the Sun, which is fixed at the origin.
    pub fn orbit(self) -> Option<OrbitSpec> {
        let (radius, revolution_speed) = match self {
            Body::Sun => return None,
            Body::Mercury => (50.0, 2.0),
            Body::Venus => (60.0, 1.5),
            Body::Earth => (70.0, 1.0),
            Body::Mars => (80.0, 0.8),
            Body::Jupiter => (100.0, 0.7),
            Body::Saturn => (120.0, 0.6),
            Body::Uranus => (140.0, 0.5),
            Body::Neptune => (160.0, 0.4),
        };
        Some(OrbitSpec {
            radius,
            revolution_speed,
        })
    }
}

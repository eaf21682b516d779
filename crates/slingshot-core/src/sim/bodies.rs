//! The sun and its eight planets: gameplay-tuned data and orbital motion.
//!
//! Values are game units, not physical ones: orbit radii, angular speeds
//! and masses are chosen so slingshot shots feel good, not to match any
//! ephemeris.

use glam::Vec3;
use std::f32::consts::TAU;

use crate::core::rng::Rng;

/// Sun visual radius. Also the closest approach at which the sun still
/// pulls on a probe (see `sim::gravity`).
pub const SUN_RADIUS: f32 = 3.0;
/// Sun mass in game units.
pub const SUN_MASS: f32 = 100.0;
pub const SUN_COLOR: (f32, f32, f32) = (1.0, 1.0, 0.0);

/// Axial spin advanced per tick, exported for the renderer.
const SPIN_RATE: f32 = 0.02;

/// Static description of one planet.
pub struct PlanetDef {
    pub name: &'static str,
    /// Distance from the sun (orbits are circular, in the XZ plane).
    pub orbit_radius: f32,
    /// Orbital angle advanced per tick (radians).
    pub angular_speed: f32,
    /// Gravitational mass. Doubles as the near-field cutoff distance.
    pub mass: f32,
    /// Visual radius for the renderer.
    pub radius: f32,
    /// Render color (r, g, b).
    pub color: (f32, f32, f32),
}

pub const PLANET_COUNT: usize = 8;

/// The eight planets, innermost first.
pub const PLANETS: [PlanetDef; PLANET_COUNT] = [
    PlanetDef { name: "Mercury", orbit_radius: 8.0,  angular_speed: 0.02,  mass: 1.0,  radius: 0.8, color: (1.0, 0.65, 0.0) },
    PlanetDef { name: "Venus",   orbit_radius: 12.0, angular_speed: 0.015, mass: 2.0,  radius: 1.2, color: (1.0, 0.84, 0.0) },
    PlanetDef { name: "Earth",   orbit_radius: 16.0, angular_speed: 0.01,  mass: 3.0,  radius: 1.5, color: (0.42, 0.58, 0.84) },
    PlanetDef { name: "Mars",    orbit_radius: 20.0, angular_speed: 0.008, mass: 1.5,  radius: 1.0, color: (1.0, 0.27, 0.0) },
    PlanetDef { name: "Jupiter", orbit_radius: 28.0, angular_speed: 0.005, mass: 20.0, radius: 4.0, color: (1.0, 0.65, 0.0) },
    PlanetDef { name: "Saturn",  orbit_radius: 36.0, angular_speed: 0.004, mass: 15.0, radius: 3.5, color: (1.0, 0.92, 0.23) },
    PlanetDef { name: "Uranus",  orbit_radius: 44.0, angular_speed: 0.003, mass: 8.0,  radius: 2.5, color: (0.31, 0.76, 0.97) },
    PlanetDef { name: "Neptune", orbit_radius: 52.0, angular_speed: 0.002, mass: 8.0,  radius: 2.5, color: (0.25, 0.32, 0.71) },
];

/// A planet in motion. Orbit radius and mass never change after creation;
/// only the phase (and with it the position) advances.
#[derive(Debug, Clone)]
pub struct CelestialBody {
    pub name: &'static str,
    pub orbit_radius: f32,
    pub angular_speed: f32,
    pub angular_phase: f32,
    pub mass: f32,
    pub radius: f32,
    pub color: (f32, f32, f32),
    pub spin: f32,
    pub position: Vec3,
}

impl CelestialBody {
    pub fn from_def(def: &PlanetDef, angular_phase: f32) -> Self {
        let mut body = CelestialBody {
            name: def.name,
            orbit_radius: def.orbit_radius,
            angular_speed: def.angular_speed,
            angular_phase,
            mass: def.mass,
            radius: def.radius,
            color: def.color,
            spin: 0.0,
            position: Vec3::ZERO,
        };
        body.position = body.orbit_position();
        body
    }

    fn orbit_position(&self) -> Vec3 {
        Vec3::new(
            self.orbit_radius * self.angular_phase.cos(),
            0.0,
            self.orbit_radius * self.angular_phase.sin(),
        )
    }

    /// Advance one tick: step the orbital angle and recompute the
    /// position in the XZ plane.
    pub fn advance(&mut self) {
        self.angular_phase = (self.angular_phase + self.angular_speed).rem_euclid(TAU);
        self.spin += SPIN_RATE;
        self.position = self.orbit_position();
    }
}

/// Instantiate all eight planets with phases drawn from `rng`, so every
/// game (and every fixed seed) starts with its own arrangement.
pub fn spawn_planets(rng: &mut Rng) -> Vec<CelestialBody> {
    PLANETS
        .iter()
        .map(|def| CelestialBody::from_def(def, rng.range(0.0, TAU)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planet_table_is_sane() {
        for def in &PLANETS {
            assert!(def.orbit_radius > 0.0, "{}: bad orbit radius", def.name);
            assert!(def.mass > 0.0, "{}: bad mass", def.name);
            assert!(def.angular_speed > 0.0, "{}: bad speed", def.name);
        }
        // Innermost to outermost ordering.
        for pair in PLANETS.windows(2) {
            assert!(pair[0].orbit_radius < pair[1].orbit_radius);
        }
    }

    #[test]
    fn advance_keeps_orbit_radius() {
        let mut body = CelestialBody::from_def(&PLANETS[0], 0.0);
        for _ in 0..1000 {
            body.advance();
            assert!((body.position.length() - body.orbit_radius).abs() < 1e-3);
            assert_eq!(body.position.y, 0.0);
        }
    }

    #[test]
    fn phase_stays_in_one_turn() {
        let mut body = CelestialBody::from_def(&PLANETS[0], 6.2);
        for _ in 0..1000 {
            body.advance();
            assert!(body.angular_phase >= 0.0 && body.angular_phase < TAU);
        }
    }

    #[test]
    fn spawn_is_deterministic_per_seed() {
        let mut a = Rng::new(5);
        let mut b = Rng::new(5);
        let first = spawn_planets(&mut a);
        let second = spawn_planets(&mut b);
        for (x, y) in first.iter().zip(&second) {
            assert_eq!(x.angular_phase, y.angular_phase);
        }
    }
}

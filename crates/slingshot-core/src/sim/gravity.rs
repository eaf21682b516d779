//! N-body attraction for probes.
//!
//! Every source is distance-gated: inside the near cutoff the force would
//! blow up toward a singularity, and past the far cutoff a planet's pull
//! is negligible but still costs a sqrt per probe. Probes have unit mass,
//! so summed force and acceleration are the same vector.

use glam::Vec3;

use crate::sim::bodies::{CelestialBody, SUN_MASS, SUN_RADIUS};

/// Gravitational constant, scaled for gameplay.
pub const G: f32 = 50.0;

/// A planet attracts only within (mass, mass * NEAR_FAR_FACTOR).
pub const NEAR_FAR_FACTOR: f32 = 20.0;

/// Acceleration felt at `pos` from the sun plus all planets.
pub fn acceleration(pos: Vec3, bodies: &[CelestialBody]) -> Vec3 {
    let mut accel = Vec3::ZERO;

    // Sun sits at the origin; no pull once a probe is inside its surface.
    let sun_distance = pos.length();
    if sun_distance > SUN_RADIUS {
        let strength = G * SUN_MASS / (sun_distance * sun_distance);
        accel += -pos / sun_distance * strength;
    }

    for body in bodies {
        let offset = body.position - pos;
        let distance = offset.length();
        if distance > body.mass && distance < body.mass * NEAR_FAR_FACTOR {
            let strength = G * body.mass / (distance * distance);
            accel += offset / distance * strength;
        }
    }

    accel
}

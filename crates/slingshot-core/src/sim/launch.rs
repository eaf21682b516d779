//! Converts the player's aim into a probe's starting state.
//!
//! The camera's bearing picks the launch point on a sphere around the
//! system; the drag gesture nudges the shot off the straight-at-the-sun
//! line; the power slider sets the speed.

use glam::{Vec2, Vec3};

use crate::core::rng::Rng;

/// Probes launch from this distance out, along the camera bearing.
pub const LAUNCH_RADIUS: f32 = 80.0;
/// Uniform position scatter on the x and z axes, per launch.
pub const LAUNCH_JITTER: f32 = 5.0;
/// Screen-pixels-of-drag to direction-component conversion.
pub const AIM_INFLUENCE: f32 = 0.01;
/// Power-setting to launch-speed conversion.
pub const POWER_SCALE: f32 = 0.02;

/// Inputs committed at the moment of launch.
#[derive(Debug, Clone, Copy)]
pub struct LaunchParams {
    /// Camera world position; only its bearing from the origin matters.
    pub camera: Vec3,
    /// Committed aim gesture, end minus start, in screen pixels.
    pub aim_delta: Vec2,
    /// Power setting, already clamped at the input boundary.
    pub power: f32,
}

/// A probe's starting position and velocity.
#[derive(Debug, Clone, Copy)]
pub struct LaunchVector {
    pub position: Vec3,
    pub velocity: Vec3,
}

/// Resolve a launch. Draws two jitter samples (x then z) from `rng`;
/// a fixed seed therefore produces an identical shot.
pub fn compute_launch(params: &LaunchParams, rng: &mut Rng) -> LaunchVector {
    let mut position = params.camera.normalize_or(Vec3::Z) * LAUNCH_RADIUS;
    position.x += rng.range(-LAUNCH_JITTER, LAUNCH_JITTER);
    position.z += rng.range(-LAUNCH_JITTER, LAUNCH_JITTER);

    // Aim at the system center, then bias by the drag. Screen-down drags
    // map to world-down, hence the sign flip on y.
    let base = (-position).normalize_or(Vec3::NEG_Z);
    let mut direction = base;
    direction.x += params.aim_delta.x * AIM_INFLUENCE;
    direction.y -= params.aim_delta.y * AIM_INFLUENCE;
    let direction = direction.normalize_or(base);

    LaunchVector {
        position,
        velocity: direction * (params.power * POWER_SCALE),
    }
}

//! A launched probe: position, velocity, and a bounded trail of where it
//! has been (the renderer draws the trail as a fading line).

use glam::Vec3;
use std::collections::VecDeque;

use crate::api::types::ProbeId;

/// Trail history cap. Oldest points fall off first.
pub const TRAIL_LIMIT: usize = 100;

#[derive(Debug, Clone)]
pub struct Probe {
    pub id: ProbeId,
    pub position: Vec3,
    pub velocity: Vec3,
    trail: VecDeque<Vec3>,
    pub active: bool,
}

impl Probe {
    pub fn new(id: ProbeId, position: Vec3, velocity: Vec3) -> Self {
        Probe {
            id,
            position,
            velocity,
            trail: VecDeque::with_capacity(TRAIL_LIMIT),
            active: true,
        }
    }

    /// Semi-implicit Euler step: velocity first, then position from the
    /// new velocity. The post-step position is appended to the trail.
    pub fn integrate(&mut self, accel: Vec3, dt: f32) {
        self.velocity += accel * dt;
        self.position += self.velocity * dt;
        self.record_trail();
    }

    fn record_trail(&mut self) {
        if self.trail.len() == TRAIL_LIMIT {
            self.trail.pop_front();
        }
        self.trail.push_back(self.position);
    }

    pub fn trail(&self) -> impl Iterator<Item = &Vec3> {
        self.trail.iter()
    }

    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }
}

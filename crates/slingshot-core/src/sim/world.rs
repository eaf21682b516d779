//! Owns every simulated thing: planets, targets, and the probe pool.
//!
//! The pool exclusively owns its probes. Removal is flag-then-compact:
//! probes are only marked inactive while the pool is being scanned and
//! compacted afterwards, so iteration never skips an entry.

use glam::Vec3;

use crate::api::types::ProbeId;
use crate::core::rng::Rng;
use crate::sim::bodies::{spawn_planets, CelestialBody};
use crate::sim::gravity;
use crate::sim::probe::Probe;
use crate::sim::targets::{target_layout, Target};

/// Past this distance from the origin a probe is lost and retired.
pub const ESCAPE_RADIUS: f32 = 150.0;

pub struct World {
    bodies: Vec<CelestialBody>,
    targets: Vec<Target>,
    probes: Vec<Probe>,
    next_probe: u32,
}

impl World {
    pub fn new() -> Self {
        World {
            bodies: Vec::new(),
            targets: Vec::new(),
            probes: Vec::new(),
            next_probe: 1,
        }
    }

    /// Populate the solar system and targets. Planet phases come from
    /// `rng`, so a seeded world is fully reproducible.
    pub fn seed_system(&mut self, rng: &mut Rng) {
        self.bodies = spawn_planets(rng);
        self.targets = target_layout();
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn probes(&self) -> &[Probe] {
        &self.probes
    }

    /// First active probe, the one the follow-camera tracks.
    pub fn tracked_probe(&self) -> Option<&Probe> {
        self.probes.iter().find(|p| p.active)
    }

    /// Step every planet's orbital angle.
    pub fn advance_orbits(&mut self) {
        for body in &mut self.bodies {
            body.advance();
        }
    }

    /// Integrate every active probe against the current body positions.
    pub fn step_probes(&mut self, dt: f32) {
        for probe in &mut self.probes {
            if !probe.active {
                continue;
            }
            let accel = gravity::acceleration(probe.position, &self.bodies);
            probe.integrate(accel, dt);
        }
    }

    /// Score hits: any active probe within the hit radius of an unhit
    /// target marks it. Returns the ids of targets hit this tick.
    pub fn check_target_hits(&mut self) -> Vec<u32> {
        let mut hits = Vec::new();
        for target in &mut self.targets {
            if target.hit {
                continue;
            }
            if self
                .probes
                .iter()
                .any(|p| p.active && target.is_hit_by(p.position))
            {
                target.hit = true;
                hits.push(target.id);
            }
        }
        hits
    }

    /// Retire probes past the escape radius. Returns how many were lost.
    pub fn retire_escaped(&mut self) -> usize {
        for probe in &mut self.probes {
            if probe.active && probe.position.length() > ESCAPE_RADIUS {
                probe.active = false;
            }
        }
        let before = self.probes.len();
        self.probes.retain(|p| p.active);
        before - self.probes.len()
    }

    /// Add a probe to the pool.
    pub fn launch(&mut self, position: Vec3, velocity: Vec3) -> ProbeId {
        let id = ProbeId(self.next_probe);
        self.next_probe += 1;
        self.probes.push(Probe::new(id, position, velocity));
        id
    }

    pub fn clear_probes(&mut self) {
        self.probes.clear();
    }

    pub fn reset_targets(&mut self) {
        for target in &mut self.targets {
            target.hit = false;
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

//! Per-frame world snapshot for the renderer.
//!
//! After each tick the runner rebuilds these flat buffers from the world;
//! the TypeScript side reads them through raw pointers. Strides must
//! match `bridge::protocol` and the renderer's `protocol.ts`.

use bytemuck::{Pod, Zeroable};

use crate::sim::bodies::{SUN_COLOR, SUN_RADIUS};
use crate::sim::world::World;

/// One celestial body on the wire: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct BodyInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Visual radius in world units.
    pub radius: f32,
    /// Axial spin angle in radians.
    pub spin: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 8;
}

/// One target on the wire: 4 floats.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct TargetInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// 0.0 = standing, 1.0 = hit (drives the color swap).
    pub hit: f32,
}

impl TargetInstance {
    pub const FLOATS: usize = 4;
}

/// One probe on the wire: 4 floats.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct ProbeInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Number of vertices this probe contributes to the trail section.
    pub trail_len: f32,
}

impl ProbeInstance {
    pub const FLOATS: usize = 4;
}

/// One trail vertex on the wire: 3 floats.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct TrailVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl TrailVertex {
    pub const FLOATS: usize = 3;
}

/// Frame snapshot buffers. Trail vertices are stored as one flat run per
/// exported probe, in probe order; `ProbeInstance::trail_len` delimits
/// the runs.
pub struct FrameBuffer {
    bodies: Vec<BodyInstance>,
    targets: Vec<TargetInstance>,
    probes: Vec<ProbeInstance>,
    trail: Vec<TrailVertex>,
    max_probes: usize,
}

impl FrameBuffer {
    pub fn with_capacity(max_probes: usize) -> Self {
        Self {
            bodies: Vec::with_capacity(16),
            targets: Vec::with_capacity(2),
            probes: Vec::with_capacity(max_probes),
            trail: Vec::new(),
            max_probes,
        }
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
        self.targets.clear();
        self.probes.clear();
        self.trail.clear();
    }

    pub fn body_count(&self) -> u32 {
        self.bodies.len() as u32
    }

    pub fn target_count(&self) -> u32 {
        self.targets.len() as u32
    }

    pub fn probe_count(&self) -> u32 {
        self.probes.len() as u32
    }

    pub fn trail_vertex_count(&self) -> u32 {
        self.trail.len() as u32
    }

    // Raw pointers for SharedArrayBuffer reads.

    pub fn bodies_ptr(&self) -> *const f32 {
        self.bodies.as_ptr() as *const f32
    }

    pub fn targets_ptr(&self) -> *const f32 {
        self.targets.as_ptr() as *const f32
    }

    pub fn probes_ptr(&self) -> *const f32 {
        self.probes.as_ptr() as *const f32
    }

    pub fn trail_ptr(&self) -> *const f32 {
        self.trail.as_ptr() as *const f32
    }

    #[cfg(test)]
    fn bodies(&self) -> &[BodyInstance] {
        &self.bodies
    }

    #[cfg(test)]
    fn probes(&self) -> &[ProbeInstance] {
        &self.probes
    }
}

/// Rebuild the snapshot from the world. The sun always occupies body
/// slot 0. Probes beyond `max_probes` keep simulating but are not
/// exported this frame.
pub fn build_frame(world: &World, frame: &mut FrameBuffer) {
    frame.clear();

    frame.bodies.push(BodyInstance {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        radius: SUN_RADIUS,
        spin: 0.0,
        r: SUN_COLOR.0,
        g: SUN_COLOR.1,
        b: SUN_COLOR.2,
    });
    for body in world.bodies() {
        frame.bodies.push(BodyInstance {
            x: body.position.x,
            y: body.position.y,
            z: body.position.z,
            radius: body.radius,
            spin: body.spin,
            r: body.color.0,
            g: body.color.1,
            b: body.color.2,
        });
    }

    for target in world.targets() {
        frame.targets.push(TargetInstance {
            x: target.position.x,
            y: target.position.y,
            z: target.position.z,
            hit: if target.hit { 1.0 } else { 0.0 },
        });
    }

    let exported = world.probes().len().min(frame.max_probes);
    if exported < world.probes().len() {
        log::debug!(
            "frame export truncated: {} probes in pool, {} slots",
            world.probes().len(),
            frame.max_probes
        );
    }
    for probe in &world.probes()[..exported] {
        frame.probes.push(ProbeInstance {
            x: probe.position.x,
            y: probe.position.y,
            z: probe.position.z,
            trail_len: probe.trail_len() as f32,
        });
        for point in probe.trail() {
            frame.trail.push(TrailVertex {
                x: point.x,
                y: point.y,
                z: point.z,
            });
        }
    }
}

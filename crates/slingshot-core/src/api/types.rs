use bytemuck::{Pod, Zeroable};

/// Unique identifier for a probe in the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProbeId(pub u32);

/// A game event communicated from Rust to the UI layer via SharedArrayBuffer.
/// Generic container: `kind` identifies the event, `a`/`b`/`c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;
}

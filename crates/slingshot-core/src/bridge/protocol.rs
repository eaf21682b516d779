/// SharedArrayBuffer layout.
/// Must stay in sync with the TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Bodies: body_slots × 8 floats]          sun first, then planets
/// [Targets: target_slots × 4 floats]
/// [Probes: max_probes × 4 floats]
/// [Trail: max_probes × trail_limit × 3 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written once into the header at init; the TypeScript
/// side reads them to compute offsets dynamically.

use crate::api::game::GameConfig;
use crate::sim::bodies::PLANET_COUNT;
use crate::sim::probe::TRAIL_LIMIT;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_PROTOCOL_VERSION: usize = 2;
pub const HEADER_BODY_COUNT: usize = 3;
pub const HEADER_TARGET_COUNT: usize = 4;
pub const HEADER_MAX_PROBES: usize = 5;
pub const HEADER_PROBE_COUNT: usize = 6;
pub const HEADER_TRAIL_VERTEX_COUNT: usize = 7;
pub const HEADER_MAX_EVENTS: usize = 8;
pub const HEADER_EVENT_COUNT: usize = 9;
pub const HEADER_WORLD_RADIUS: usize = 10;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Body slots on the wire: the sun plus every planet.
pub const BODY_SLOTS: usize = 1 + PLANET_COUNT;
/// Target slots on the wire.
pub const TARGET_SLOTS: usize = 2;

/// Floats per body: x, y, z, radius, spin, r, g, b.
pub const BODY_FLOATS: usize = 8;
/// Floats per target: x, y, z, hit.
pub const TARGET_FLOATS: usize = 4;
/// Floats per probe: x, y, z, trail length.
pub const PROBE_FLOATS: usize = 4;
/// Floats per trail vertex: x, y, z.
pub const TRAIL_VERTEX_FLOATS: usize = 3;
/// Floats per game event: kind, a, b, c.
pub const EVENT_FLOATS: usize = 4;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Body slots (fixed: sun + planets).
    pub body_slots: usize,
    /// Target slots (fixed).
    pub target_slots: usize,
    /// Maximum exported probes.
    pub max_probes: usize,
    /// Maximum trail vertices per probe.
    pub trail_limit: usize,
    /// Maximum game events per frame.
    pub max_events: usize,

    /// Offset (in floats) where body data begins.
    pub body_data_offset: usize,
    /// Offset (in floats) where target data begins.
    pub target_data_offset: usize,
    /// Offset (in floats) where probe data begins.
    pub probe_data_offset: usize,
    /// Offset (in floats) where trail data begins.
    pub trail_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_probes: usize, max_events: usize) -> Self {
        let body_data_floats = BODY_SLOTS * BODY_FLOATS;
        let target_data_floats = TARGET_SLOTS * TARGET_FLOATS;
        let probe_data_floats = max_probes * PROBE_FLOATS;
        let trail_data_floats = max_probes * TRAIL_LIMIT * TRAIL_VERTEX_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let body_data_offset = HEADER_FLOATS;
        let target_data_offset = body_data_offset + body_data_floats;
        let probe_data_offset = target_data_offset + target_data_floats;
        let trail_data_offset = probe_data_offset + probe_data_floats;
        let event_data_offset = trail_data_offset + trail_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            body_slots: BODY_SLOTS,
            target_slots: TARGET_SLOTS,
            max_probes,
            trail_limit: TRAIL_LIMIT,
            max_events,
            body_data_offset,
            target_data_offset,
            probe_data_offset,
            trail_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_probes, config.max_events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_layout() {
        let layout = ProtocolLayout::from_config(&GameConfig::default());
        assert_eq!(layout.body_slots, 9);
        assert_eq!(layout.target_slots, 2);
        assert_eq!(layout.max_probes, 64);
        assert_eq!(layout.trail_limit, TRAIL_LIMIT);
        assert_eq!(layout.max_events, 32);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(16, 8);

        assert_eq!(layout.body_data_offset, HEADER_FLOATS);
        assert_eq!(
            layout.target_data_offset,
            layout.body_data_offset + BODY_SLOTS * BODY_FLOATS
        );
        assert_eq!(
            layout.probe_data_offset,
            layout.target_data_offset + TARGET_SLOTS * TARGET_FLOATS
        );
        assert_eq!(
            layout.trail_data_offset,
            layout.probe_data_offset + 16 * PROBE_FLOATS
        );
        assert_eq!(
            layout.event_data_offset,
            layout.trail_data_offset + 16 * TRAIL_LIMIT * TRAIL_VERTEX_FLOATS
        );
        assert_eq!(
            layout.buffer_total_floats,
            layout.event_data_offset + 8 * EVENT_FLOATS
        );
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn trail_section_dominates_the_buffer() {
        // Sanity check against accidental stride edits: with the default
        // config the trail section is by far the largest.
        let layout = ProtocolLayout::from_config(&GameConfig::default());
        let trail_floats = layout.event_data_offset - layout.trail_data_offset;
        assert!(trail_floats > layout.buffer_total_floats / 2);
    }
}

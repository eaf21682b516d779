pub mod api;
pub mod bridge;
pub mod core;
pub mod game;
pub mod input;
pub mod sim;

// Re-export key types at crate root for convenience
pub use crate::api::game::{EngineContext, Game, GameConfig};
pub use crate::api::types::{GameEvent, ProbeId};
pub use crate::bridge::frame::{build_frame, FrameBuffer};
pub use crate::bridge::protocol::ProtocolLayout;
pub use crate::core::rng::Rng;
pub use crate::core::time::FixedTimestep;
pub use crate::game::SlingshotGame;
pub use crate::input::queue::{InputEvent, InputQueue};
pub use crate::sim::bodies::CelestialBody;
pub use crate::sim::probe::Probe;
pub use crate::sim::targets::Target;
pub use crate::sim::world::World;

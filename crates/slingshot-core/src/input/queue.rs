/// Input events the core understands.
///
/// Pointer events carry screen coordinates and drive the aim gesture.
/// Everything else (buttons, the power slider, camera reports) arrives as
/// a `Custom` record whose `kind` is defined by the game.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// Pointer press at screen coordinates (x, y).
    PointerDown { x: f32, y: f32 },
    /// Pointer release at screen coordinates (x, y).
    PointerUp { x: f32, y: f32 },
    /// Pointer motion to screen coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// A record from the UI layer; `kind` identifies it, `a`, `b`, `c`
    /// carry its payload.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// Queue of pending input events.
///
/// The browser side pushes between frames; the runner drains after each
/// tick. Events arriving mid-frame apply before the next tick runs.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Remove and return all pending events.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Look at pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

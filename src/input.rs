//! Input snapshot fed by the host each frame.
//!
//! The host owns the real event system; the simulation only cares about
//! which movement keys are currently held, so the boundary is a plain
//! snapshot rather than an event queue.

/// Held-key state for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_left(mut self) -> Self {
        self.left = true;
        self
    }

    pub fn with_right(mut self) -> Self {
        self.right = true;
        self
    }

    pub fn with_jump(mut self) -> Self {
        self.jump = true;
        self
    }
}

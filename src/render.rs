//! Render primitives handed to the host.
//!
//! The simulation never draws anything itself. Each frame it submits a
//! back-to-front stream of sprite instances to a [`RenderSink`]; the host
//! maps [`SpriteKind`] values onto its own textures and animation frames.

use crate::entities::player::PlayerState;
use crate::geom::Aabb;

/// Which sprite to draw. Animation frames are toggled by the simulation so
/// hosts stay stateless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpriteKind {
    SolidBlock,
    Checkpoint { activated: bool },
    Flag,
    Coin,
    Slime { frame: u8 },
    Fly { frame: u8 },
    Player { state: PlayerState, frame: u8 },
}

/// One drawable rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteInstance {
    pub kind: SpriteKind,
    pub rect: Aabb,
    /// Mirror horizontally (entities facing left).
    pub flip_x: bool,
}

impl SpriteInstance {
    pub fn new(kind: SpriteKind, rect: Aabb) -> Self {
        Self {
            kind,
            rect,
            flip_x: false,
        }
    }

    pub fn with_flip_x(mut self, flip_x: bool) -> Self {
        self.flip_x = flip_x;
        self
    }
}

/// Receives sprite instances in draw order (first submitted = drawn first).
pub trait RenderSink {
    fn submit(&mut self, sprite: SpriteInstance);
}

/// Collecting into a plain buffer is enough for most hosts and all tests.
impl RenderSink for Vec<SpriteInstance> {
    fn submit(&mut self, sprite: SpriteInstance) {
        self.push(sprite);
    }
}

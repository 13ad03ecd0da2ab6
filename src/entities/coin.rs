//! Collectible coin: a static pickup with a one-way collected latch.

use glam::Vec2;

use crate::geom::Aabb;
use crate::render::{SpriteInstance, SpriteKind};

/// Coins sit slightly inside their tile (24x24 box, 4-unit inset).
const COIN_INSET: f32 = 4.0;
const COIN_SIZE: f32 = 24.0;

pub struct Coin {
    position: Vec2,
    collected: bool,
}

impl Coin {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            collected: false,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.position + Vec2::splat(COIN_INSET), Vec2::splat(COIN_SIZE))
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Latch; a collected coin never comes back.
    pub fn collect(&mut self) {
        self.collected = true;
    }

    pub fn sprite(&self) -> SpriteInstance {
        SpriteInstance::new(SpriteKind::Coin, self.bounds())
    }
}

//! Dynamic entities: the player, the two enemy kinds, and coins.
//!
//! Kinds are separate structs sharing a [`Body`] by composition; the world
//! keeps one homogeneous collection per kind and mediates every
//! interaction, so no entity ever references another.

pub mod coin;
pub mod enemy;
pub mod flyer;
pub mod player;

use glam::Vec2;

use crate::geom::Aabb;

pub use coin::Coin;
pub use enemy::Enemy;
pub use flyer::Flyer;
pub use player::{Player, PlayerState};

/// Position/velocity/size triple shared by every moving entity. Size is
/// fixed per kind at construction; position and velocity change each frame.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    /// Top-left corner in world space.
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: Vec2,
}

impl Body {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.position, self.size)
    }

    /// Euler step: position += velocity * dt.
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }
}

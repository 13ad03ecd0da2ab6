//! Flying enemy: sinusoidal hover around a fixed anchor. Ignores terrain
//! entirely and will pass through solid tiles.

use glam::Vec2;

use crate::entities::Body;
use crate::render::{SpriteInstance, SpriteKind};

/// Vertical range of the oscillation (units).
const AMPLITUDE: f32 = 50.0;
/// Oscillation angular speed (rad/s).
const SPEED: f32 = 2.0;
/// Collision box, one tile.
const FLYER_SIZE: Vec2 = Vec2::new(32.0, 32.0);
/// Time per wing-flap frame (seconds).
const FLAP_FRAME_TIME: f32 = 0.1;

pub struct Flyer {
    pub body: Body,
    anchor_y: f32,
    elapsed: f32,
    flap_frame: u8,
    flap_timer: f32,
}

impl Flyer {
    pub fn new(position: Vec2) -> Self {
        Self {
            body: Body::new(position, FLYER_SIZE),
            anchor_y: position.y,
            elapsed: 0.0,
            flap_frame: 0,
            flap_timer: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        self.body.position.y = self.anchor_y + (self.elapsed * SPEED).sin() * AMPLITUDE;

        self.flap_timer += dt;
        if self.flap_timer >= FLAP_FRAME_TIME {
            self.flap_timer = 0.0;
            self.flap_frame = 1 - self.flap_frame;
        }
    }

    pub fn sprite(&self) -> SpriteInstance {
        SpriteInstance::new(
            SpriteKind::Fly {
                frame: self.flap_frame,
            },
            self.body.bounds(),
        )
    }
}

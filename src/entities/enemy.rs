//! Ground enemy: constant-speed patrol, reversing on wall contact.

use glam::Vec2;

use crate::entities::Body;
use crate::geom::Aabb;
use crate::render::{SpriteInstance, SpriteKind};

/// Patrol speed (units/s).
const MOVE_SPEED: f32 = 80.0;
/// Collision box, one tile.
const ENEMY_SIZE: Vec2 = Vec2::new(32.0, 32.0);
/// Gap left between enemy and wall after a bounce, to avoid re-triggering
/// on the same tile next frame.
const WALL_MARGIN: f32 = 1.0;
/// Time per walk-cycle frame (seconds).
const WALK_FRAME_TIME: f32 = 0.1;

pub struct Enemy {
    pub body: Body,
    /// +1 walking right, -1 walking left.
    direction: f32,
    walk_frame: u8,
    walk_timer: f32,
}

impl Enemy {
    pub fn new(position: Vec2) -> Self {
        Self {
            body: Body::new(position, ENEMY_SIZE),
            direction: 1.0,
            walk_frame: 0,
            walk_timer: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.body.velocity.x = self.direction * MOVE_SPEED;
        self.body.integrate(dt);

        self.walk_timer += dt;
        if self.walk_timer >= WALK_FRAME_TIME {
            self.walk_timer = 0.0;
            self.walk_frame = 1 - self.walk_frame;
        }
    }

    /// Reverse and step clear of the first intersecting tile. Later tiles in
    /// the same frame are ignored.
    pub fn check_wall_collision(&mut self, solid_tiles: &[Aabb]) {
        let bounds = self.body.bounds();

        for tile in solid_tiles {
            if bounds.intersects(tile) {
                self.direction = -self.direction;
                if self.direction > 0.0 {
                    self.body.position.x = tile.max().x + WALL_MARGIN;
                } else {
                    self.body.position.x = tile.min.x - self.body.size.x - WALL_MARGIN;
                }
                break;
            }
        }
    }

    pub fn direction(&self) -> f32 {
        self.direction
    }

    pub fn sprite(&self) -> SpriteInstance {
        SpriteInstance::new(
            SpriteKind::Slime {
                frame: self.walk_frame,
            },
            self.body.bounds(),
        )
        .with_flip_x(self.direction < 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patrols_right_by_default() {
        let mut enemy = Enemy::new(Vec2::ZERO);
        enemy.update(0.5);
        assert_eq!(enemy.body.position.x, MOVE_SPEED * 0.5);
        assert_eq!(enemy.direction(), 1.0);
    }

    #[test]
    fn wall_contact_reverses_and_pushes_clear() {
        let mut enemy = Enemy::new(Vec2::new(90.0, 0.0));
        // Wall just to the right, overlapping the enemy's leading edge.
        let wall = Aabb::new(Vec2::new(112.0, 0.0), Vec2::splat(32.0));
        enemy.check_wall_collision(&[wall]);

        assert_eq!(enemy.direction(), -1.0);
        // Pushed to the left of the wall with a margin.
        assert_eq!(enemy.body.position.x, 112.0 - 32.0 - WALL_MARGIN);
        assert!(!enemy.body.bounds().intersects(&wall));
    }

    #[test]
    fn bounce_back_to_the_right() {
        let mut enemy = Enemy::new(Vec2::new(90.0, 0.0));
        let right_wall = Aabb::new(Vec2::new(112.0, 0.0), Vec2::splat(32.0));
        enemy.check_wall_collision(&[right_wall]);

        let left_wall = Aabb::new(Vec2::new(50.0, 0.0), Vec2::splat(32.0));
        enemy.body.position.x = 70.0;
        enemy.check_wall_collision(&[left_wall]);
        assert_eq!(enemy.direction(), 1.0);
        assert_eq!(enemy.body.position.x, 82.0 + WALL_MARGIN);
    }

    #[test]
    fn only_first_intersecting_tile_counts() {
        let mut enemy = Enemy::new(Vec2::new(90.0, 0.0));
        let a = Aabb::new(Vec2::new(112.0, 0.0), Vec2::splat(32.0));
        let b = Aabb::new(Vec2::new(80.0, 0.0), Vec2::splat(32.0));
        enemy.check_wall_collision(&[a, b]);
        // One bounce only: direction flipped once.
        assert_eq!(enemy.direction(), -1.0);
    }

    #[test]
    fn no_walls_means_no_change() {
        let mut enemy = Enemy::new(Vec2::new(90.0, 0.0));
        enemy.check_wall_collision(&[]);
        assert_eq!(enemy.direction(), 1.0);
        assert_eq!(enemy.body.position.x, 90.0);
    }
}

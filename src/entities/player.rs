//! Player controller: instantaneous horizontal movement, gravity while
//! airborne, jump from the ground, lives and checkpoint respawn.

use glam::Vec2;
use log::{debug, info};

use crate::entities::Body;
use crate::input::InputState;
use crate::render::{SpriteInstance, SpriteKind};

/// Horizontal speed while a direction key is held (units/s).
const MOVE_SPEED: f32 = 200.0;
/// Initial vertical velocity of a jump (negative is up).
const JUMP_VELOCITY: f32 = -500.0;
/// Downward acceleration while airborne (units/s^2).
const GRAVITY: f32 = 1200.0;
/// Terminal fall speed (units/s).
const MAX_FALL_SPEED: f32 = 600.0;
/// Collision box.
const PLAYER_SIZE: Vec2 = Vec2::new(32.0, 48.0);
/// Lives at the start of a level.
const STARTING_LIVES: u32 = 3;
/// Time per walk-cycle frame (seconds).
const WALK_FRAME_TIME: f32 = 0.15;

/// Cosmetic animation state; never gates physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Idle,
    Walking,
    Jumping,
}

pub struct Player {
    pub body: Body,
    lives: u32,
    on_ground: bool,
    state: PlayerState,
    facing_right: bool,
    walk_frame: u8,
    walk_timer: f32,
}

impl Player {
    pub fn new(position: Vec2) -> Self {
        Self {
            body: Body::new(position, PLAYER_SIZE),
            lives: STARTING_LIVES,
            on_ground: false,
            state: PlayerState::Idle,
            facing_right: true,
            walk_frame: 0,
            walk_timer: 0.0,
        }
    }

    /// Per-frame step: input, gravity, integration, animation. Ground
    /// contact is decided afterwards by the world's tile pass.
    pub fn update(&mut self, dt: f32, input: &InputState) {
        self.handle_input(input);
        self.apply_gravity(dt);
        self.body.integrate(dt);
        self.update_animation(dt);
    }

    fn handle_input(&mut self, input: &InputState) {
        self.body.velocity.x = 0.0;
        if input.left {
            self.body.velocity.x = -MOVE_SPEED;
        }
        if input.right {
            self.body.velocity.x = MOVE_SPEED;
        }
        if input.jump && self.on_ground {
            self.jump();
        }
    }

    fn jump(&mut self) {
        self.body.velocity.y = JUMP_VELOCITY;
        self.on_ground = false;
        debug!("player jumped");
    }

    fn apply_gravity(&mut self, dt: f32) {
        if !self.on_ground {
            self.body.velocity.y = (self.body.velocity.y + GRAVITY * dt).min(MAX_FALL_SPEED);
        }
    }

    fn update_animation(&mut self, dt: f32) {
        self.state = if !self.on_ground {
            PlayerState::Jumping
        } else if self.body.velocity.x.abs() > 10.0 {
            PlayerState::Walking
        } else {
            PlayerState::Idle
        };

        if self.body.velocity.x > 0.0 {
            self.facing_right = true;
        } else if self.body.velocity.x < 0.0 {
            self.facing_right = false;
        }

        if self.state == PlayerState::Walking {
            self.walk_timer += dt;
            if self.walk_timer >= WALK_FRAME_TIME {
                self.walk_timer = 0.0;
                self.walk_frame = 1 - self.walk_frame;
            }
        }
    }

    /// Lose one life. Does nothing once lives are exhausted; the world
    /// decides what death means.
    pub fn take_damage(&mut self) {
        if self.lives > 0 {
            self.lives -= 1;
            info!("player took damage, {} lives remaining", self.lives);
        }
    }

    /// Teleport to a respawn anchor with zeroed velocity; ground contact is
    /// re-established by the next collision pass.
    pub fn reset_to_checkpoint(&mut self, position: Vec2) {
        self.body.position = position;
        self.body.velocity = Vec2::ZERO;
        self.on_ground = false;
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn is_on_ground(&self) -> bool {
        self.on_ground
    }

    /// Only the world's tile-collision pass calls this.
    pub fn set_on_ground(&mut self, on_ground: bool) {
        self.on_ground = on_ground;
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn sprite(&self) -> SpriteInstance {
        SpriteInstance::new(
            SpriteKind::Player {
                state: self.state,
                frame: self.walk_frame,
            },
            self.body.bounds(),
        )
        .with_flip_x(!self.facing_right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_direction_sets_velocity_instantly() {
        let mut player = Player::new(Vec2::ZERO);
        player.update(0.016, &InputState::new().with_right());
        assert_eq!(player.body.velocity.x, MOVE_SPEED);
        player.update(0.016, &InputState::new().with_left());
        assert_eq!(player.body.velocity.x, -MOVE_SPEED);
        player.update(0.016, &InputState::new());
        assert_eq!(player.body.velocity.x, 0.0);
    }

    #[test]
    fn jump_requires_ground_contact() {
        let mut player = Player::new(Vec2::ZERO);
        player.update(0.016, &InputState::new().with_jump());
        // Airborne: the jump key does nothing, gravity keeps pulling.
        assert!(player.body.velocity.y > JUMP_VELOCITY);

        let mut grounded = Player::new(Vec2::ZERO);
        grounded.set_on_ground(true);
        grounded.update(0.016, &InputState::new().with_jump());
        assert!(grounded.body.velocity.y < 0.0);
        assert!(!grounded.is_on_ground());
    }

    #[test]
    fn gravity_accumulates_and_clamps() {
        let mut player = Player::new(Vec2::ZERO);
        for _ in 0..120 {
            player.update(0.016, &InputState::new());
        }
        assert_eq!(player.body.velocity.y, MAX_FALL_SPEED);
    }

    #[test]
    fn no_gravity_while_grounded() {
        let mut player = Player::new(Vec2::ZERO);
        player.set_on_ground(true);
        player.update(0.016, &InputState::new());
        assert_eq!(player.body.velocity.y, 0.0);
    }

    #[test]
    fn lives_never_go_negative() {
        let mut player = Player::new(Vec2::ZERO);
        assert_eq!(player.lives(), 3);
        for _ in 0..5 {
            player.take_damage();
        }
        assert_eq!(player.lives(), 0);
    }

    #[test]
    fn reset_zeroes_velocity_and_clears_ground() {
        let mut player = Player::new(Vec2::ZERO);
        player.body.velocity = Vec2::new(200.0, -500.0);
        player.set_on_ground(true);
        player.reset_to_checkpoint(Vec2::new(64.0, 128.0));
        assert_eq!(player.body.position, Vec2::new(64.0, 128.0));
        assert_eq!(player.body.velocity, Vec2::ZERO);
        assert!(!player.is_on_ground());
    }

    #[test]
    fn animation_state_follows_motion() {
        let mut player = Player::new(Vec2::ZERO);
        player.set_on_ground(true);
        player.update(0.016, &InputState::new());
        assert_eq!(player.state(), PlayerState::Idle);

        player.set_on_ground(true);
        player.update(0.016, &InputState::new().with_right());
        assert_eq!(player.state(), PlayerState::Walking);

        player.set_on_ground(false);
        player.update(0.016, &InputState::new());
        assert_eq!(player.state(), PlayerState::Jumping);
    }
}

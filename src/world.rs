//! World orchestrator: owns the tile grid, the player and the per-kind
//! entity collections, and runs the per-frame pipeline.
//!
//! Pipeline order (one `update` call): player integration, player-vs-tile
//! resolution, camera follow, enemy/flyer updates, enemy wall bounce,
//! player-vs-enemy damage, flag latch, checkpoint latch, coin pickup.
//! Once `game_over` or `level_complete` is set the whole pipeline freezes;
//! every query keeps answering from the frozen state.

use glam::Vec2;
use log::info;

use crate::camera::Camera2D;
use crate::entities::{Coin, Enemy, Flyer, Player};
use crate::geom::Aabb;
use crate::input::InputState;
use crate::level::{builtin, TileMap, TILE_SIZE};
use crate::render::RenderSink;

pub struct World {
    /// Builtin level id, None for custom levels.
    level_id: Option<u32>,
    /// Host-side navigation hint for editor test runs; never affects
    /// simulation.
    test_mode: bool,
    tilemap: TileMap,
    player: Player,
    enemies: Vec<Enemy>,
    flyers: Vec<Flyer>,
    coins: Vec<Coin>,
    camera: Camera2D,
    /// Where the player comes back after losing a life: the spawn point
    /// until a checkpoint is touched.
    respawn_position: Vec2,
    /// Index of the checkpoint currently held, if any.
    active_checkpoint: Option<usize>,
    level_complete: bool,
    game_over: bool,
    coins_collected: u32,
    total_coins: u32,
}

impl World {
    /// Build a world for a builtin level. Unknown ids fall back to the
    /// first level's data.
    pub fn from_level(level_id: u32) -> Self {
        Self::build(builtin::level_text(level_id), Some(level_id), false)
    }

    /// Build a world from raw level text (user-authored levels).
    pub fn from_text(text: &str, test_mode: bool) -> Self {
        Self::build(text, None, test_mode)
    }

    fn build(text: &str, level_id: Option<u32>, test_mode: bool) -> Self {
        let tilemap = TileMap::parse(text);
        let spawn = tilemap.spawn_position();
        let camera = Camera2D::new(tilemap.width() as f32 * TILE_SIZE);

        // Second scan over the raw text: entity markers are spawn-time side
        // effects, not grid cells.
        let mut enemies = Vec::new();
        let mut flyers = Vec::new();
        let mut coins = Vec::new();
        for (row, line) in text.lines().enumerate() {
            for (col, c) in line.chars().enumerate() {
                let pos = Vec2::new(col as f32 * TILE_SIZE, row as f32 * TILE_SIZE);
                match c {
                    'E' => enemies.push(Enemy::new(pos)),
                    'V' => flyers.push(Flyer::new(pos)),
                    'O' => coins.push(Coin::new(pos)),
                    _ => {}
                }
            }
        }
        let total_coins = coins.len() as u32;

        info!(
            "world ready: {} enemies, {} flyers, {} coins",
            enemies.len(),
            flyers.len(),
            total_coins
        );

        Self {
            level_id,
            test_mode,
            tilemap,
            player: Player::new(spawn),
            enemies,
            flyers,
            coins,
            camera,
            respawn_position: spawn,
            active_checkpoint: None,
            level_complete: false,
            game_over: false,
            coins_collected: 0,
            total_coins,
        }
    }

    /// Advance the simulation by `dt` seconds. A no-op once the world has
    /// reached a terminal state.
    pub fn update(&mut self, dt: f32, input: &InputState) {
        if self.game_over || self.level_complete {
            return;
        }

        self.player.update(dt, input);
        self.resolve_tile_collisions();
        self.camera.follow_player(self.player.body.position.x);

        for enemy in &mut self.enemies {
            enemy.update(dt);
        }
        for flyer in &mut self.flyers {
            flyer.update(dt);
        }
        for enemy in &mut self.enemies {
            enemy.check_wall_collision(self.tilemap.solid_tiles());
        }

        self.check_player_enemy_collision();
        self.check_flag_collision();
        self.check_checkpoint_collision();
        self.check_coin_collision();
    }

    /// Push the player out of every intersecting solid tile along the axis
    /// of minimum penetration. Tiles are processed in parse order and each
    /// corrects exactly one axis; vertical corrections also require the
    /// matching velocity sign so a sideways brush never snaps the player
    /// up or down.
    fn resolve_tile_collisions(&mut self) {
        let mut on_ground = false;

        for tile in self.tilemap.solid_tiles() {
            let bounds = self.player.body.bounds();
            if !bounds.intersects(tile) {
                continue;
            }

            let pen = bounds.penetration(tile);
            let min_depth = pen.min_depth();
            let body = &mut self.player.body;

            if min_depth == pen.top && body.velocity.y > 0.0 {
                // Landing on the tile.
                body.position.y = tile.min.y - body.size.y;
                body.velocity.y = 0.0;
                on_ground = true;
            } else if min_depth == pen.bottom && body.velocity.y < 0.0 {
                // Head bump against the underside.
                body.position.y = tile.max().y;
                body.velocity.y = 0.0;
            } else if min_depth == pen.left {
                body.position.x = tile.min.x - body.size.x;
                body.velocity.x = 0.0;
            } else if min_depth == pen.right {
                body.position.x = tile.max().x;
                body.velocity.x = 0.0;
            }
        }

        self.player.set_on_ground(on_ground);
    }

    /// At most one damage event per frame: the first intersecting ground
    /// enemy wins, then the first intersecting flyer.
    fn check_player_enemy_collision(&mut self) {
        let player_bounds = self.player.body.bounds();

        let hit = self
            .enemies
            .iter()
            .map(|e| e.body.bounds())
            .chain(self.flyers.iter().map(|f| f.body.bounds()))
            .any(|bounds| player_bounds.intersects(&bounds));
        if !hit {
            return;
        }

        self.player.take_damage();
        if self.player.lives() > 0 {
            self.player.reset_to_checkpoint(self.respawn_position);
            info!("player respawned at checkpoint");
        } else {
            self.game_over = true;
            info!("game over");
        }
    }

    fn check_flag_collision(&mut self) {
        let Some(flag_pos) = self.tilemap.flag_position() else {
            return;
        };
        let flag_bounds = Aabb::new(flag_pos, Vec2::splat(TILE_SIZE));
        if self.player.body.bounds().intersects(&flag_bounds) {
            self.level_complete = true;
            info!("level complete");
        }
    }

    fn check_checkpoint_collision(&mut self) {
        let player_bounds = self.player.body.bounds();

        let mut touched = None;
        for (index, cp) in self.tilemap.checkpoints().iter().enumerate() {
            let cp_bounds = Aabb::new(cp.position, Vec2::splat(TILE_SIZE));
            if player_bounds.intersects(&cp_bounds) && self.active_checkpoint != Some(index) {
                touched = Some((index, cp.position));
            }
        }

        if let Some((index, position)) = touched {
            self.active_checkpoint = Some(index);
            self.respawn_position = position;
            self.tilemap.activate_checkpoint(index);
            info!("checkpoint {index} activated");
        }
    }

    fn check_coin_collision(&mut self) {
        let player_bounds = self.player.body.bounds();

        for coin in &mut self.coins {
            if !coin.is_collected() && player_bounds.intersects(&coin.bounds()) {
                coin.collect();
                self.coins_collected += 1;
                info!(
                    "coin collected ({}/{})",
                    self.coins_collected, self.total_coins
                );
            }
        }
    }

    /// Submit the frame back-to-front: terrain, coins, enemies, flyers,
    /// player. Collected coins are skipped.
    pub fn render(&self, sink: &mut dyn RenderSink) {
        self.tilemap.render(sink, &self.camera);

        for coin in &self.coins {
            if !coin.is_collected() {
                sink.submit(coin.sprite());
            }
        }
        for enemy in &self.enemies {
            sink.submit(enemy.sprite());
        }
        for flyer in &self.flyers {
            sink.submit(flyer.sprite());
        }
        sink.submit(self.player.sprite());
    }

    pub fn is_level_complete(&self) -> bool {
        self.level_complete
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn player_lives(&self) -> u32 {
        self.player.lives()
    }

    pub fn coins_collected(&self) -> u32 {
        self.coins_collected
    }

    pub fn total_coins(&self) -> u32 {
        self.total_coins
    }

    pub fn camera(&self) -> &Camera2D {
        &self.camera
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn level_id(&self) -> Option<u32> {
        self.level_id
    }

    pub fn is_test_mode(&self) -> bool {
        self.test_mode
    }
}

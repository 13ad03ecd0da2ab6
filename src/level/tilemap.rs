//! Tile grid parsed from level text.
//!
//! Tiles are stored row-major, one `Vec<Tile>` per text row. Rows may have
//! different lengths (the grid is ragged, never padded). Solid-cell bounds
//! are cached at load time since level geometry is immutable afterward.

use glam::Vec2;
use log::info;

use crate::camera::Camera2D;
use crate::geom::Aabb;
use crate::level::tile::{Tile, TileKind, TILE_SIZE};
use crate::render::{RenderSink, SpriteInstance, SpriteKind};

/// Spawn position used when the level text has no `P` marker.
const DEFAULT_SPAWN: Vec2 = Vec2::new(100.0, 500.0);

/// A respawn anchor registered at load time. Checkpoints are identified by
/// their index in the load-order list, not by coordinate equality.
#[derive(Debug, Clone, Copy)]
pub struct Checkpoint {
    pub position: Vec2,
    /// Grid cell (row, col) holding the checkpoint tile.
    cell: (usize, usize),
}

/// The static per-level grid of typed cells.
#[derive(Debug, Clone, Default)]
pub struct TileMap {
    tiles: Vec<Vec<Tile>>,
    solid_bounds: Vec<Aabb>,
    spawn_position: Option<Vec2>,
    flag_position: Option<Vec2>,
    checkpoints: Vec<Checkpoint>,
}

impl TileMap {
    /// Parse a newline-separated level description.
    ///
    /// `#` becomes a solid cell, `C` a checkpoint cell, `F` the flag cell.
    /// `P` records the spawn position and every other character (including
    /// the `E`/`V`/`O` spawn markers, which the world consumes separately)
    /// becomes an empty cell.
    pub fn parse(text: &str) -> Self {
        let mut map = TileMap::default();

        for (row, line) in text.lines().enumerate() {
            let mut tile_row = Vec::with_capacity(line.len());

            for (col, c) in line.chars().enumerate() {
                let pos = Vec2::new(col as f32 * TILE_SIZE, row as f32 * TILE_SIZE);
                let kind = match c {
                    '#' => TileKind::Solid,
                    'P' => {
                        map.spawn_position = Some(pos);
                        TileKind::Empty
                    }
                    'C' => {
                        map.checkpoints.push(Checkpoint {
                            position: pos,
                            cell: (row, col),
                        });
                        TileKind::Checkpoint
                    }
                    'F' => {
                        map.flag_position = Some(pos);
                        TileKind::Flag
                    }
                    _ => TileKind::Empty,
                };

                let tile = Tile::new(kind, pos);
                if kind == TileKind::Solid {
                    map.solid_bounds.push(tile.bounds());
                }
                tile_row.push(tile);
            }

            map.tiles.push(tile_row);
        }

        info!(
            "loaded level: {} rows, {} solid tiles, {} checkpoints",
            map.tiles.len(),
            map.solid_bounds.len(),
            map.checkpoints.len()
        );
        map
    }

    /// Bounds of every solid cell, in parse order.
    pub fn solid_tiles(&self) -> &[Aabb] {
        &self.solid_bounds
    }

    /// Player spawn point, or a fixed default when the text had no `P`.
    pub fn spawn_position(&self) -> Vec2 {
        self.spawn_position.unwrap_or(DEFAULT_SPAWN)
    }

    /// Flag position, if the text had an `F`. Without a flag the level can
    /// never be completed.
    pub fn flag_position(&self) -> Option<Vec2> {
        self.flag_position
    }

    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    /// Mark the checkpoint's tile visually activated. Idempotent; indices
    /// beyond the checkpoint list are ignored.
    pub fn activate_checkpoint(&mut self, index: usize) {
        if let Some(cp) = self.checkpoints.get(index) {
            let (row, col) = cp.cell;
            self.tiles[row][col].activated = true;
        }
    }

    /// Whether a checkpoint's tile has been visually activated.
    pub fn is_checkpoint_activated(&self, index: usize) -> bool {
        self.checkpoints
            .get(index)
            .map(|cp| self.tiles[cp.cell.0][cp.cell.1].activated)
            .unwrap_or(false)
    }

    /// Width in cells of the first row (ragged rows keep their own lengths).
    pub fn width(&self) -> usize {
        self.tiles.first().map(Vec::len).unwrap_or(0)
    }

    /// Height in rows.
    pub fn height(&self) -> usize {
        self.tiles.len()
    }

    pub fn tile(&self, row: usize, col: usize) -> Option<&Tile> {
        self.tiles.get(row)?.get(col)
    }

    /// Submit tile sprites for cells inside the camera viewport. The flag
    /// is drawn with the terrain pass so entities layer above it.
    pub fn render(&self, sink: &mut dyn RenderSink, camera: &Camera2D) {
        let view = camera.visible_rect();

        for row in &self.tiles {
            for tile in row {
                let kind = match tile.kind {
                    TileKind::Solid => SpriteKind::SolidBlock,
                    TileKind::Checkpoint => SpriteKind::Checkpoint {
                        activated: tile.activated,
                    },
                    TileKind::Flag => SpriteKind::Flag,
                    TileKind::Empty => continue,
                };
                let bounds = tile.bounds();
                if view.intersects(&bounds) {
                    sink.submit(SpriteInstance::new(kind, bounds));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cell_kinds() {
        let map = TileMap::parse("#PC\n F\n");
        assert_eq!(map.tile(0, 0).unwrap().kind, TileKind::Solid);
        assert_eq!(map.tile(0, 1).unwrap().kind, TileKind::Empty);
        assert_eq!(map.tile(0, 2).unwrap().kind, TileKind::Checkpoint);
        assert_eq!(map.tile(1, 1).unwrap().kind, TileKind::Flag);
    }

    #[test]
    fn spawn_marker_is_consumed_not_stored() {
        let map = TileMap::parse("P\n");
        assert_eq!(map.spawn_position(), Vec2::ZERO);
        assert_eq!(map.tile(0, 0).unwrap().kind, TileKind::Empty);
    }

    #[test]
    fn missing_spawn_uses_default() {
        let map = TileMap::parse("###\n");
        assert_eq!(map.spawn_position(), Vec2::new(100.0, 500.0));
    }

    #[test]
    fn missing_flag_is_none() {
        let map = TileMap::parse("###\n");
        assert!(map.flag_position().is_none());
    }

    #[test]
    fn enemy_and_coin_markers_become_empty_cells() {
        let map = TileMap::parse("EVO\n");
        for col in 0..3 {
            assert_eq!(map.tile(0, col).unwrap().kind, TileKind::Empty);
        }
    }

    #[test]
    fn solid_tiles_carry_world_space_bounds() {
        let map = TileMap::parse(" #\n#\n");
        let solids = map.solid_tiles();
        assert_eq!(solids.len(), 2);
        assert_eq!(solids[0].min, Vec2::new(TILE_SIZE, 0.0));
        assert_eq!(solids[1].min, Vec2::new(0.0, TILE_SIZE));
    }

    #[test]
    fn ragged_rows_are_kept_as_is() {
        let map = TileMap::parse("####\n#\n");
        assert_eq!(map.width(), 4);
        assert_eq!(map.height(), 2);
        assert!(map.tile(1, 1).is_none());
    }

    #[test]
    fn checkpoints_register_in_order() {
        let map = TileMap::parse("C  C\n");
        let cps = map.checkpoints();
        assert_eq!(cps.len(), 2);
        assert_eq!(cps[0].position, Vec2::ZERO);
        assert_eq!(cps[1].position, Vec2::new(3.0 * TILE_SIZE, 0.0));
    }

    #[test]
    fn checkpoint_activation_is_idempotent() {
        let mut map = TileMap::parse("C\n");
        assert!(!map.is_checkpoint_activated(0));
        map.activate_checkpoint(0);
        assert!(map.is_checkpoint_activated(0));
        map.activate_checkpoint(0);
        assert!(map.is_checkpoint_activated(0));
    }

    #[test]
    fn activating_unknown_checkpoint_is_ignored() {
        let mut map = TileMap::parse("C\n");
        map.activate_checkpoint(7);
        assert!(!map.is_checkpoint_activated(7));
    }
}

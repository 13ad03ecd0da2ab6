//! Grid cell types.

use glam::Vec2;

use crate::geom::Aabb;

/// Side length of one grid cell in world units.
pub const TILE_SIZE: f32 = 32.0;

/// What a grid cell is. Spawn/enemy/coin markers in the level text are
/// consumed at load time and never become cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Empty,
    Solid,
    Checkpoint,
    Flag,
}

/// A single grid cell. Geometry is fixed after load; the only mutable bit
/// is the checkpoint activation latch, which is purely visual.
#[derive(Debug, Clone, Copy)]
pub struct Tile {
    pub kind: TileKind,
    /// Top-left corner in world space (column * TILE_SIZE, row * TILE_SIZE).
    pub position: Vec2,
    /// Visual latch for checkpoint cells; meaningless for other kinds.
    pub activated: bool,
}

impl Tile {
    pub fn new(kind: TileKind, position: Vec2) -> Self {
        Self {
            kind,
            position,
            activated: false,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.position, Vec2::splat(TILE_SIZE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_one_tile_square() {
        let tile = Tile::new(TileKind::Solid, Vec2::new(64.0, 96.0));
        let b = tile.bounds();
        assert_eq!(b.min, Vec2::new(64.0, 96.0));
        assert_eq!(b.size, Vec2::splat(TILE_SIZE));
    }

    #[test]
    fn new_tile_is_not_activated() {
        let tile = Tile::new(TileKind::Checkpoint, Vec2::ZERO);
        assert!(!tile.activated);
    }
}

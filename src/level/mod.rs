//! Static level data: grid cells, the parsed tile map, and the builtin
//! campaign levels.

pub mod builtin;
pub mod tile;
pub mod tilemap;

pub use builtin::{level_text, LEVEL_COUNT};
pub use tile::{Tile, TileKind, TILE_SIZE};
pub use tilemap::{Checkpoint, TileMap};

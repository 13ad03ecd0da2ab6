pub mod camera;
pub mod entities;
pub mod geom;
pub mod input;
pub mod level;
pub mod progress;
pub mod render;
pub mod world;

// Re-export key types at crate root for convenience
pub use camera::{Camera2D, VIEW_HEIGHT, VIEW_WIDTH};
pub use entities::{Body, Coin, Enemy, Flyer, Player, PlayerState};
pub use geom::Aabb;
pub use input::InputState;
pub use level::{level_text, Tile, TileKind, TileMap, LEVEL_COUNT, TILE_SIZE};
pub use progress::{stars_for, ProgressError, ProgressStore};
pub use render::{RenderSink, SpriteInstance, SpriteKind};
pub use world::World;

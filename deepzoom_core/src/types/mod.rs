//! Tile geometry, format, and configuration types.

mod blob;
pub use blob::*;

mod level;
pub use level::*;

mod pyramid_config;
pub use pyramid_config::*;

mod tile_coord;
pub use tile_coord::*;

mod tile_format;
pub use tile_format::*;

mod tile_grid;
pub use tile_grid::*;

mod tile_rect;
pub use tile_rect::*;

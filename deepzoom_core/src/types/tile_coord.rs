//! This module defines [`TileCoord`], the `(level, column, row)` address of
//! one output tile, and its deterministic mapping to a tile file path.
//!
//! # Examples
//!
//! ```rust
//! use deepzoom_core::{TileCoord, TileFormat};
//!
//! let coord = TileCoord::new(10, 3, 3);
//! assert_eq!(coord.as_relative_path(TileFormat::JPG), "10/3_3.jpg");
//! ```

use crate::TileFormat;
use std::fmt::{self, Debug};

/// Address of one tile: pyramid level plus zero-based grid column and row.
///
/// Level 0 is the coarsest (smallest) level; the maximum level reproduces the
/// source resolution.
#[derive(Eq, PartialEq, Clone, Hash, Copy)]
pub struct TileCoord {
	pub level: u8,
	pub col: u32,
	pub row: u32,
}

impl TileCoord {
	pub fn new(level: u8, col: u32, row: u32) -> TileCoord {
		TileCoord { level, col, row }
	}

	/// Returns the tile's file name, `<col>_<row>.<ext>`.
	pub fn as_filename(&self, format: TileFormat) -> String {
		format!("{}_{}{}", self.col, self.row, format.as_extension())
	}

	/// Returns the tile's path relative to the tiles directory,
	/// `<level>/<col>_<row>.<ext>`.
	///
	/// The same coordinate always maps to the same path, so readers can
	/// address tiles without an index.
	pub fn as_relative_path(&self, format: TileFormat) -> String {
		format!("{}/{}", self.level, self.as_filename(format))
	}
}

impl Debug for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TileCoord({}, {}, {})", self.level, self.col, self.row)
	}
}

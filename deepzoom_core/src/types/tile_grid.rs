//! This module defines [`TileGrid`], the full grid of tile coordinates and
//! crop rectangles for one pyramid level.
//!
//! The grid has `ceil(width / tile_size)` columns and
//! `ceil(height / tile_size)` rows. Each tile's crop rectangle is the base
//! `tile_size × tile_size` region extended by `overlap` pixels on every side
//! and clamped to the level bounds, so edge tiles come out narrower than
//! interior tiles and no padding is ever introduced:
//!
//! ```text
//! x1 = max(0, col * tile_size - overlap)
//! x2 = min(level_width, col * tile_size + tile_size + overlap)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use deepzoom_core::{Level, PyramidConfig, TileGrid};
//!
//! let level = Level { index: 10, width: 1000, height: 800 };
//! let grid = TileGrid::new(&level, &PyramidConfig::default());
//! assert_eq!((grid.cols(), grid.rows()), (4, 4));
//! assert_eq!(grid.iter().count(), 16);
//! ```

use crate::{Level, PyramidConfig, TileCoord, TileRect};
use itertools::Itertools;
use std::fmt::{self, Debug};

/// Tile partitioning of one level's raster.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
	level: u8,
	width: u32,
	height: u32,
	tile_size: u32,
	overlap: u32,
}

impl TileGrid {
	/// Builds the grid for `level` under the given configuration.
	///
	/// The configuration was validated at construction (`tile_size > 0`,
	/// `overlap < tile_size`), so every rectangle produced here has a
	/// non-zero area.
	pub fn new(level: &Level, config: &PyramidConfig) -> TileGrid {
		TileGrid {
			level: level.index,
			width: level.width,
			height: level.height,
			tile_size: config.tile_size(),
			overlap: config.overlap(),
		}
	}

	/// Number of tile columns, `ceil(width / tile_size)`.
	pub fn cols(&self) -> u32 {
		self.width.div_ceil(self.tile_size)
	}

	/// Number of tile rows, `ceil(height / tile_size)`.
	pub fn rows(&self) -> u32 {
		self.height.div_ceil(self.tile_size)
	}

	/// Total number of tiles in this level.
	pub fn tile_count(&self) -> u64 {
		u64::from(self.cols()) * u64::from(self.rows())
	}

	/// Returns the overlap-inclusive crop rectangle for a grid position.
	///
	/// `col` and `row` must lie within the grid.
	pub fn rect(&self, col: u32, row: u32) -> TileRect {
		debug_assert!(col < self.cols() && row < self.rows());

		let tile_size = u64::from(self.tile_size);
		let overlap = u64::from(self.overlap);
		let x = u64::from(col) * tile_size;
		let y = u64::from(row) * tile_size;

		TileRect {
			x1: x.saturating_sub(overlap) as u32,
			y1: y.saturating_sub(overlap) as u32,
			x2: (x + tile_size + overlap).min(u64::from(self.width)) as u32,
			y2: (y + tile_size + overlap).min(u64::from(self.height)) as u32,
		}
	}

	/// Iterates over all tile coordinates in row-major order.
	pub fn iter_coords(&self) -> impl Iterator<Item = TileCoord> + '_ {
		let level = self.level;
		(0..self.rows())
			.cartesian_product(0..self.cols())
			.map(move |(row, col)| TileCoord::new(level, col, row))
	}

	/// Iterates over all `(coordinate, crop rectangle)` pairs in row-major
	/// order.
	pub fn iter(&self) -> impl Iterator<Item = (TileCoord, TileRect)> + '_ {
		self.iter_coords().map(|coord| (coord, self.rect(coord.col, coord.row)))
	}
}

impl Debug for TileGrid {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"TileGrid(level {}, {}x{} px, {}x{} tiles)",
			self.level,
			self.width,
			self.height,
			self.cols(),
			self.rows()
		)
	}
}

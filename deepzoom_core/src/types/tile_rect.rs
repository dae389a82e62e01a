//! This module defines [`TileRect`], the half-open pixel rectangle a tile is
//! cropped from, inclusive of overlap and clamped to the level's bounds.

use anyhow::{Result, ensure};
use std::fmt::{self, Debug};

/// Half-open pixel rectangle `[x1, x2) × [y1, y2)` in level coordinate space.
///
/// Rectangles produced by a [`TileGrid`](crate::TileGrid) never have zero
/// width or height: clamping only shrinks the base tile region, it never
/// eliminates it.
#[derive(Eq, PartialEq, Clone, Copy, Hash)]
pub struct TileRect {
	pub x1: u32,
	pub y1: u32,
	pub x2: u32,
	pub y2: u32,
}

impl TileRect {
	pub fn new(x1: u32, y1: u32, x2: u32, y2: u32) -> Result<TileRect> {
		ensure!(x2 > x1, "rectangle width must be positive (x1={x1}, x2={x2})");
		ensure!(y2 > y1, "rectangle height must be positive (y1={y1}, y2={y2})");
		Ok(TileRect { x1, y1, x2, y2 })
	}

	pub fn width(&self) -> u32 {
		self.x2 - self.x1
	}

	pub fn height(&self) -> u32 {
		self.y2 - self.y1
	}

	/// Number of pixels covered.
	pub fn area(&self) -> u64 {
		u64::from(self.width()) * u64::from(self.height())
	}
}

impl Debug for TileRect {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"TileRect(x:[{},{}), y:[{},{}))",
			self.x1, self.x2, self.y1, self.y2
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dimensions() {
		let rect = TileRect::new(767, 511, 1000, 800).unwrap();
		assert_eq!(rect.width(), 233);
		assert_eq!(rect.height(), 289);
		assert_eq!(rect.area(), 233 * 289);
	}

	#[test]
	fn rejects_empty() {
		assert!(TileRect::new(5, 0, 5, 10).is_err());
		assert!(TileRect::new(0, 7, 10, 7).is_err());
		assert!(TileRect::new(3, 0, 2, 10).is_err());
	}

	#[test]
	fn debug_format() {
		let rect = TileRect::new(0, 1, 2, 3).unwrap();
		assert_eq!(format!("{rect:?}"), "TileRect(x:[0,2), y:[1,3))");
	}
}

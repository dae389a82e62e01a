//! Level planning: deriving the pyramid's resolution tiers from the source
//! image dimensions.
//!
//! A pyramid has levels `0..=max_level` where
//! `max_level = ceil(log2(max(width, height)))`. Level `max_level` reproduces
//! the source dimensions exactly; every level below it has dimensions
//! `ceil(source / 2^(max_level - index))`, so no level ever collapses to zero.
//!
//! # Examples
//!
//! ```rust
//! use deepzoom_core::plan_levels;
//!
//! let levels = plan_levels(1000, 800).unwrap();
//! assert_eq!(levels.len(), 11); // max_level = ceil(log2(1000)) = 10
//! assert_eq!((levels[10].width, levels[10].height), (1000, 800));
//! assert_eq!((levels[0].width, levels[0].height), (1, 1));
//! ```

use anyhow::{Result, ensure};

/// One resolution tier of the pyramid.
///
/// `index` runs from 0 (coarsest) to `max_level` (source resolution); both
/// dimensions are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
	pub index: u8,
	pub width: u32,
	pub height: u32,
}

impl Level {
	/// Power-of-two downscale factor of this level relative to the source.
	pub fn scale_factor(&self, max_level: u8) -> u64 {
		1u64 << (max_level - self.index)
	}
}

/// Returns `ceil(log2(max(width, height)))`, the index of the full-resolution
/// level. Fails on degenerate (zero) dimensions.
pub fn max_level(width: u32, height: u32) -> Result<u8> {
	ensure!(
		width > 0 && height > 0,
		"source dimensions must be positive (got {width}x{height})"
	);
	let max_dimension = u64::from(width.max(height));
	Ok(max_dimension.next_power_of_two().trailing_zeros() as u8)
}

/// Derives the ordered level list `0..=max_level` for a source image.
///
/// The last entry always matches the source dimensions exactly.
pub fn plan_levels(width: u32, height: u32) -> Result<Vec<Level>> {
	let max_level = max_level(width, height)?;

	let levels = (0..=max_level)
		.map(|index| {
			let scale = 1u64 << (max_level - index);
			Level {
				index,
				width: u64::from(width).div_ceil(scale) as u32,
				height: u64::from(height).div_ceil(scale) as u32,
			}
		})
		.collect();

	Ok(levels)
}

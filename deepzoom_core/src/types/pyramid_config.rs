//! This module defines [`PyramidConfig`], the validated, immutable tiling
//! configuration passed into every pyramid build.
//!
//! Validation happens once at construction, never per tile: the overlap must
//! be strictly smaller than the tile size, the tile size must be positive,
//! and the JPEG quality must stay below 100 (JPEG has no lossless mode).
//!
//! # Examples
//!
//! ```rust
//! use deepzoom_core::{PyramidConfig, TileFormat};
//!
//! let config = PyramidConfig::default();
//! assert_eq!(config.tile_size(), 256);
//! assert_eq!(config.overlap(), 1);
//! assert_eq!(config.tile_format(), TileFormat::JPG);
//!
//! assert!(PyramidConfig::new(256, 256, TileFormat::JPG, None).is_err());
//! ```

use crate::TileFormat;
use anyhow::{Result, ensure};

const DEFAULT_TILE_SIZE: u32 = 256;
const DEFAULT_OVERLAP: u32 = 1;
const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Immutable tiling parameters for one pyramid.
///
/// Construct via [`PyramidConfig::new`] or [`PyramidConfig::default`]; the
/// constructor enforces all invariants so later stages never re-check them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PyramidConfig {
	tile_size: u32,
	overlap: u32,
	tile_format: TileFormat,
	jpeg_quality: u8,
}

impl PyramidConfig {
	/// Creates a validated configuration.
	///
	/// * `tile_size` - edge length of a tile in pixels, must be positive.
	/// * `overlap` - extra border pixels per tile edge, must be `< tile_size`.
	/// * `tile_format` - tile encoding, [`TileFormat::JPG`] or [`TileFormat::PNG`].
	/// * `jpeg_quality` - 0..=99, only used for the lossy format. Defaults to **90**.
	pub fn new(tile_size: u32, overlap: u32, tile_format: TileFormat, jpeg_quality: Option<u8>) -> Result<Self> {
		ensure!(tile_size > 0, "tile size must be positive");
		ensure!(
			overlap < tile_size,
			"overlap ({overlap}) must be smaller than the tile size ({tile_size})"
		);

		let jpeg_quality = jpeg_quality.unwrap_or(DEFAULT_JPEG_QUALITY);
		ensure!(
			jpeg_quality < 100,
			"JPEG does not support lossless compression, use a quality < 100"
		);

		Ok(PyramidConfig {
			tile_size,
			overlap,
			tile_format,
			jpeg_quality,
		})
	}

	pub fn tile_size(&self) -> u32 {
		self.tile_size
	}

	pub fn overlap(&self) -> u32 {
		self.overlap
	}

	pub fn tile_format(&self) -> TileFormat {
		self.tile_format
	}

	/// Encode quality for the lossy format; ignored for lossless tiles.
	pub fn jpeg_quality(&self) -> u8 {
		self.jpeg_quality
	}
}

impl Default for PyramidConfig {
	fn default() -> Self {
		PyramidConfig {
			tile_size: DEFAULT_TILE_SIZE,
			overlap: DEFAULT_OVERLAP,
			tile_format: TileFormat::JPG,
			jpeg_quality: DEFAULT_JPEG_QUALITY,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn defaults() {
		let config = PyramidConfig::default();
		assert_eq!(config.tile_size(), 256);
		assert_eq!(config.overlap(), 1);
		assert_eq!(config.tile_format(), TileFormat::JPG);
		assert_eq!(config.jpeg_quality(), 90);
	}

	#[test]
	fn custom_values() {
		let config = PyramidConfig::new(512, 2, TileFormat::PNG, Some(80)).unwrap();
		assert_eq!(config.tile_size(), 512);
		assert_eq!(config.overlap(), 2);
		assert_eq!(config.tile_format(), TileFormat::PNG);
		assert_eq!(config.jpeg_quality(), 80);
	}

	#[rstest]
	#[case::zero_tile_size(0, 0, "tile size must be positive")]
	#[case::overlap_equal(256, 256, "overlap (256) must be smaller than the tile size (256)")]
	#[case::overlap_larger(128, 200, "overlap (200) must be smaller than the tile size (128)")]
	fn invalid_geometry(#[case] tile_size: u32, #[case] overlap: u32, #[case] message: &str) {
		assert_eq!(
			PyramidConfig::new(tile_size, overlap, TileFormat::JPG, None)
				.unwrap_err()
				.to_string(),
			message
		);
	}

	#[test]
	fn invalid_quality() {
		assert!(PyramidConfig::new(256, 1, TileFormat::JPG, Some(100)).is_err());
		assert!(PyramidConfig::new(256, 1, TileFormat::JPG, Some(99)).is_ok());
	}
}

//! This module defines the [`TileFormat`] enum, the closed set of raster
//! formats a pyramid can encode its tiles in.
//!
//! `JPG` is the lossy format (quality applies), `PNG` the lossless one.
//! Each variant knows its canonical file extension, MIME type, and string
//! representation as used in the DZI descriptor.
//!
//! # Examples
//!
//! ```rust
//! use deepzoom_core::TileFormat;
//!
//! let format = TileFormat::JPG;
//! assert_eq!(format.as_extension(), ".jpg");
//! assert_eq!(TileFormat::try_from_str("jpeg").unwrap(), TileFormat::JPG);
//! ```

use anyhow::{Result, bail};
use std::fmt::{Display, Formatter};

/// Enum representing the supported tile formats.
///
/// # Variants
/// - `JPG` - JPEG image format, lossy (including `.jpeg`)
/// - `PNG` - PNG image format, lossless
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum TileFormat {
	JPG,
	PNG,
}

impl TileFormat {
	/// Returns the lowercase string identifier used in the descriptor's
	/// `Format` attribute.
	pub fn as_str(&self) -> &str {
		match self {
			TileFormat::JPG => "jpg",
			TileFormat::PNG => "png",
		}
	}

	/// Returns the file extension (including the leading dot) for tile files.
	pub fn as_extension(&self) -> &str {
		match self {
			TileFormat::JPG => ".jpg",
			TileFormat::PNG => ".png",
		}
	}

	/// Parses a tile format from a string (case-insensitive).
	pub fn try_from_str(value: &str) -> Result<Self> {
		Ok(match value.to_lowercase().trim() {
			"jpeg" | "jpg" => TileFormat::JPG,
			"png" => TileFormat::PNG,
			_ => bail!("Unknown tile format: '{}'", value),
		})
	}

	/// Returns the MIME type associated with this tile format.
	pub fn as_mime_str(&self) -> &str {
		match self {
			TileFormat::JPG => "image/jpeg",
			TileFormat::PNG => "image/png",
		}
	}

	/// Returns `true` for formats where an encode quality applies.
	pub fn is_lossy(&self) -> bool {
		match self {
			TileFormat::JPG => true,
			TileFormat::PNG => false,
		}
	}
}

impl Display for TileFormat {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case::jpg(TileFormat::JPG, "jpg", ".jpg", "image/jpeg", true)]
	#[case::png(TileFormat::PNG, "png", ".png", "image/png", false)]
	fn accessors(
		#[case] format: TileFormat,
		#[case] name: &str,
		#[case] extension: &str,
		#[case] mime: &str,
		#[case] lossy: bool,
	) {
		assert_eq!(format.as_str(), name);
		assert_eq!(format.as_extension(), extension);
		assert_eq!(format.as_mime_str(), mime);
		assert_eq!(format.is_lossy(), lossy);
		assert_eq!(format.to_string(), name);
	}

	#[rstest]
	#[case::jpg("jpg", TileFormat::JPG)]
	#[case::jpeg("jpeg", TileFormat::JPG)]
	#[case::upper(" JPEG ", TileFormat::JPG)]
	#[case::png("png", TileFormat::PNG)]
	#[case::png_upper("PNG", TileFormat::PNG)]
	fn parse_ok(#[case] input: &str, #[case] expected: TileFormat) {
		assert_eq!(TileFormat::try_from_str(input).unwrap(), expected);
	}

	#[test]
	fn parse_unknown_fails() {
		assert_eq!(
			TileFormat::try_from_str("webp").unwrap_err().to_string(),
			"Unknown tile format: 'webp'"
		);
	}
}

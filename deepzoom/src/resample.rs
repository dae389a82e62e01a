//! Resampling a source raster to a level's dimensions, and cropping tile
//! rectangles out of a level raster.
//!
//! Every level is resampled **directly from the original source image**,
//! never cascaded from the previous level, so resampling error does not
//! compound across levels. Shrinking by large factors uses a Lanczos3
//! (windowed-sinc) convolution to keep aliasing minimal.

use anyhow::{Result, ensure};
use deepzoom_core::TileRect;
use fast_image_resize::{FilterType, ResizeAlg, ResizeOptions, Resizer};
use image::DynamicImage;

/// Produces a new raster of exactly `width`×`height` from `source` using a
/// Lanczos3 filter.
///
/// Returns a plain clone when the target matches the source dimensions
/// (the full-resolution level).
pub fn resample(source: &DynamicImage, width: u32, height: u32) -> Result<DynamicImage> {
	ensure!(
		width > 0 && height > 0,
		"target dimensions must be positive (got {width}x{height})"
	);

	if source.width() == width && source.height() == height {
		return Ok(source.clone());
	}

	let mut destination = DynamicImage::new(width, height, source.color());
	Resizer::new().resize(
		source,
		&mut destination,
		&ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3)),
	)?;
	Ok(destination)
}

/// Crops a tile rectangle out of a level raster, without resampling.
///
/// The rectangle must lie within the raster bounds, which holds for every
/// rectangle a [`TileGrid`](deepzoom_core::TileGrid) produces for the level.
pub fn crop_tile(level_raster: &DynamicImage, rect: &TileRect) -> DynamicImage {
	level_raster.crop_imm(rect.x1, rect.y1, rect.width(), rect.height())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::helper::{compare_images, create_gradient_rgb};
	use rstest::rstest;

	#[rstest]
	#[case::halved(500, 400)]
	#[case::coarse(4, 3)]
	#[case::single_pixel(1, 1)]
	#[case::non_uniform(250, 800)]
	fn produces_exact_target_size(#[case] width: u32, #[case] height: u32) {
		let source = create_gradient_rgb(1000, 800);
		let resampled = resample(&source, width, height).unwrap();
		assert_eq!((resampled.width(), resampled.height()), (width, height));
		assert_eq!(resampled.color(), source.color());
	}

	#[test]
	fn same_size_is_identity() {
		let source = create_gradient_rgb(100, 80);
		let resampled = resample(&source, 100, 80).unwrap();
		compare_images(&source, &resampled, 0);
	}

	#[test]
	fn rejects_zero_target() {
		let source = create_gradient_rgb(10, 10);
		assert!(resample(&source, 0, 5).is_err());
		assert!(resample(&source, 5, 0).is_err());
	}

	#[test]
	fn downscale_preserves_gradient_direction() {
		// A left-to-right ramp must stay monotonic after heavy shrinking.
		let source = create_gradient_rgb(1024, 16);
		let resampled = resample(&source, 16, 4).unwrap().to_rgb8();
		let left = resampled.get_pixel(0, 2)[0];
		let middle = resampled.get_pixel(8, 2)[0];
		let right = resampled.get_pixel(15, 2)[0];
		assert!(left < middle && middle < right);
	}

	#[test]
	fn crop_matches_rectangle() {
		let source = create_gradient_rgb(100, 80);
		let rect = TileRect::new(10, 20, 45, 60).unwrap();
		let tile = crop_tile(&source, &rect);
		assert_eq!((tile.width(), tile.height()), (35, 40));

		// Pixel content must be taken from the rectangle's origin.
		let expected = source.to_rgb8().get_pixel(10, 20).0;
		assert_eq!(tile.to_rgb8().get_pixel(0, 0).0, expected);
	}
}

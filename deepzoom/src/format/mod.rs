//! Tile codecs: encoding a cropped tile raster into its configured format.

pub mod jpeg;
pub mod png;

use anyhow::Result;
use deepzoom_core::{Blob, TileFormat};
use image::DynamicImage;

/// Encodes an image in the given tile format.
///
/// `quality` only applies to the lossy format and is ignored for PNG.
pub fn image2blob(image: &DynamicImage, format: TileFormat, quality: Option<u8>) -> Result<Blob> {
	match format {
		TileFormat::JPG => jpeg::image2blob(image, quality),
		TileFormat::PNG => png::image2blob(image),
	}
}

/// Decodes a tile blob back into an image.
pub fn blob2image(blob: &Blob, format: TileFormat) -> Result<DynamicImage> {
	match format {
		TileFormat::JPG => jpeg::blob2image(blob),
		TileFormat::PNG => png::blob2image(blob),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::helper::{compare_images, create_image_rgb};
	use rstest::rstest;

	#[rstest]
	#[case::jpg(TileFormat::JPG, 12)]
	#[case::png(TileFormat::PNG, 0)]
	fn dispatch_round_trip(#[case] format: TileFormat, #[case] tolerance: u8) {
		let image = create_image_rgb();
		let blob = image2blob(&image, format, None).unwrap();
		let decoded = blob2image(&blob, format).unwrap();
		compare_images(&image, &decoded, tolerance);
	}
}

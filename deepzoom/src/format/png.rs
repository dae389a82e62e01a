//! PNG encoder and decoder bridge between [`image::DynamicImage`] and
//! [`Blob`].
//!
//! PNG is the pyramid's lossless tile format; no quality parameter applies.
//! A `speed` knob maps onto the encoder's compression/filter combination.

use anyhow::{Result, anyhow, bail};
use deepzoom_core::Blob;
use image::{DynamicImage, ImageEncoder, ImageFormat, codecs::png, load_from_memory_with_format};

/// Encode a `DynamicImage` into a PNG [`Blob`].
///
/// * `speed` — 0 (smallest output) to 100 (fastest encode). Defaults to 10.
/// * Returns an error if the image is not 8-bit or has more than 4 channels.
pub fn compress(image: &DynamicImage, speed: Option<u8>) -> Result<Blob> {
	if image.color().bytes_per_pixel() != image.color().channel_count() {
		bail!("PNG only supports 8-bit images");
	}

	if image.color().channel_count() < 1 || image.color().channel_count() > 4 {
		bail!("PNG only supports Grey, GreyA, RGB or RGBA");
	}

	let speed = speed.unwrap_or(10).clamp(0, 100);

	use png::{CompressionType, FilterType};
	let (compression_type, filter_type) = match speed {
		0..20 => (CompressionType::Best, FilterType::Adaptive),
		20..60 => (CompressionType::Default, FilterType::Adaptive),
		60..90 => (CompressionType::Default, FilterType::Avg),
		_ => (CompressionType::Fast, FilterType::NoFilter),
	};

	let mut buffer: Vec<u8> = Vec::new();
	png::PngEncoder::new_with_quality(&mut buffer, compression_type, filter_type).write_image(
		image.as_bytes(),
		image.width(),
		image.height(),
		image.color().into(),
	)?;

	Ok(Blob::from(buffer))
}

/// Convenience wrapper around [`compress`] with the default speed.
pub fn image2blob(image: &DynamicImage) -> Result<Blob> {
	compress(image, None)
}

/// Decode a PNG [`Blob`] back into a [`DynamicImage`].
pub fn blob2image(blob: &Blob) -> Result<DynamicImage> {
	load_from_memory_with_format(blob.as_slice(), ImageFormat::Png)
		.map_err(|e| anyhow!("Failed to decode PNG image: {e}"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::helper::{compare_images, create_image_grey, create_image_rgb, create_image_rgba};
	use rstest::rstest;

	/* ---------- Success cases ---------- */
	#[rstest]
	#[case::grey(create_image_grey())]
	#[case::rgb(create_image_rgb())]
	#[case::rgba(create_image_rgba())]
	fn png_is_lossless(#[case] image: DynamicImage) -> Result<()> {
		let blob = image2blob(&image)?;
		let decoded = blob2image(&blob)?;
		compare_images(&image, &decoded, 0);
		Ok(())
	}

	#[test]
	fn speed_changes_output_size() -> Result<()> {
		let image = create_image_rgb();
		let best = compress(&image, Some(0))?;
		let fast = compress(&image, Some(100))?;
		assert!(best.len() <= fast.len());
		Ok(())
	}

	#[test]
	fn decode_garbage_fails() {
		assert!(blob2image(&Blob::from("not a png")).is_err());
	}
}

//! JPEG encoder and decoder bridge between [`image::DynamicImage`] and
//! [`Blob`].
//!
//! JPEG is the pyramid's lossy tile format. Only **8-bit Grey and RGB**
//! images are supported; alpha channels are rejected since JPEG has no
//! transparency. Quality is a fixed configured value per build, never
//! adapted per tile.
//!
//! Key characteristics:
//! - Configurable lossy quality via [`image2blob`] (default 90).
//! - Rejects `quality >= 100` (JPEG cannot produce true lossless output).
//! - Uses the standard `image::codecs::jpeg::JpegEncoder` backend.

use anyhow::{Result, anyhow, bail};
use deepzoom_core::Blob;
use image::{DynamicImage, ImageEncoder, ImageFormat, codecs::jpeg::JpegEncoder, load_from_memory_with_format};

/// Encode a `DynamicImage` into a JPEG [`Blob`].
///
/// * `quality` — 0..=99; higher means better visual quality but larger
///   output. Defaults to **90**.
/// * Returns an error if the image is not 8-bit, has an alpha channel, or if
///   `quality >= 100`.
pub fn image2blob(image: &DynamicImage, quality: Option<u8>) -> Result<Blob> {
	if image.color().bytes_per_pixel() != image.color().channel_count() {
		bail!("JPEG only supports 8-bit images");
	}

	let quality = quality.unwrap_or(90);
	if quality >= 100 {
		bail!("JPEG does not support lossless compression, use a quality < 100");
	}

	match image.color().channel_count() {
		1 | 3 => image,
		_ => bail!("JPEG only supports Grey or RGB images without alpha channel"),
	};

	let mut buffer: Vec<u8> = Vec::new();
	JpegEncoder::new_with_quality(&mut buffer, quality).write_image(
		image.as_bytes(),
		image.width(),
		image.height(),
		image.color().into(),
	)?;

	Ok(Blob::from(buffer))
}

/// Decode a JPEG [`Blob`] back into a [`DynamicImage`].
pub fn blob2image(blob: &Blob) -> Result<DynamicImage> {
	load_from_memory_with_format(blob.as_slice(), ImageFormat::Jpeg)
		.map_err(|e| anyhow!("Failed to decode JPEG image: {e}"))
}

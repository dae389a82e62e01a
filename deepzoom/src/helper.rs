//! Test image generators and comparison helpers.

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};

/// Generate a 256x256 DynamicImage with an RGB gradient.
pub fn create_image_rgb() -> DynamicImage {
	DynamicImage::ImageRgb8(RgbImage::from_fn(256, 256, |x, y| -> Rgb<u8> {
		Rgb([x as u8, (255 - x) as u8, y as u8])
	}))
}

/// Generate a 256x256 DynamicImage with an RGBA gradient.
pub fn create_image_rgba() -> DynamicImage {
	DynamicImage::ImageRgba8(RgbaImage::from_fn(256, 256, |x, y| -> Rgba<u8> {
		Rgba([x as u8, (255 - x) as u8, y as u8, (255 - y) as u8])
	}))
}

/// Generate a 256x256 grayscale DynamicImage, black to white left to right.
pub fn create_image_grey() -> DynamicImage {
	DynamicImage::ImageLuma8(GrayImage::from_fn(256, 256, |x, _y| -> Luma<u8> {
		Luma([x as u8])
	}))
}

/// Generate an RGB gradient image of arbitrary dimensions.
pub fn create_gradient_rgb(width: u32, height: u32) -> DynamicImage {
	DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| -> Rgb<u8> {
		Rgb([
			(x * 255 / width.max(1)) as u8,
			(y * 255 / height.max(1)) as u8,
			((x + y) % 256) as u8,
		])
	}))
}

/// Compare two DynamicImages for similarity.
///
/// # Panics
/// Panics if the images differ in dimensions or byte length, or if any
/// channel value differs by more than `max_allowed_diff`.
pub fn compare_images(image1: &DynamicImage, image2: &DynamicImage, max_allowed_diff: u8) {
	assert_eq!(image1.width(), image2.width());
	assert_eq!(image1.height(), image2.height());

	let bytes1 = image1.as_bytes();
	let bytes2 = image2.as_bytes();
	assert_eq!(bytes1.len(), bytes2.len());

	let mut max_diff: u8 = 0;
	for (c1, c2) in bytes1.iter().zip(bytes2) {
		max_diff = max_diff.max(c1.abs_diff(*c2));
	}

	assert!(
		max_diff <= max_allowed_diff,
		"max_diff ({max_diff}) > max_allowed_diff ({max_allowed_diff})"
	);
}

//! Pyramid build orchestration.
//!
//! A build runs through fixed steps: decode the source and normalize its
//! colors, plan the level list, then for each level resample the source,
//! cut the tile grid, and encode every tile; the descriptor is written last,
//! only after all tiles of all levels succeeded. Any failure aborts the
//! whole build — a pyramid with a missing tile or descriptor is not a valid
//! deep-zoom artifact.
//!
//! Tiles within a level are independent, so they are encoded concurrently on
//! a bounded blocking-worker pool. Each level's raster is released once its
//! last tile is written.

use crate::{
	DirectoryPyramidWriter, format,
	resample::{crop_tile, resample},
};
use anyhow::{Context, Result};
use deepzoom_core::{ConcurrencyLimits, PyramidConfig, PyramidDescriptor, TileGrid, plan_levels};
use futures::StreamExt;
use image::DynamicImage;
use std::{path::Path, sync::Arc};

/// Converts single source images into deep-zoom pyramids under one
/// configuration.
///
/// The builder holds no mutable state; one instance can run any number of
/// conversions, including concurrently for different images.
pub struct PyramidBuilder {
	config: PyramidConfig,
}

impl PyramidBuilder {
	pub fn new(config: PyramidConfig) -> PyramidBuilder {
		PyramidBuilder { config }
	}

	/// Builds the pyramid for `source_path` under `output_base`.
	///
	/// On success the output consists of `<output_base>.dzi` and the
	/// `<output_base>_files/` tile tree. On failure the output directory may
	/// be incomplete and must be treated as unusable; the descriptor is only
	/// written after every tile succeeded. A decode failure aborts before
	/// anything is created on disk.
	pub async fn build(&self, source_path: &Path, output_base: &Path) -> Result<()> {
		let source = image::open(source_path).with_context(|| format!("decoding source image {source_path:?}"))?;
		let source = normalize_colors(source);
		let (width, height) = (source.width(), source.height());

		let levels = plan_levels(width, height)?;
		log::info!(
			"building pyramid for {source_path:?}: {width}x{height}, {} levels",
			levels.len()
		);

		let writer = Arc::new(DirectoryPyramidWriter::new(output_base, self.config.tile_format()));
		let source = Arc::new(source);
		let workers = ConcurrencyLimits::default().cpu_bound;

		for level in &levels {
			// Always resample directly from the source, never from the
			// previous level, so resampling error does not compound.
			let raster = if level.width == width && level.height == height {
				Arc::clone(&source)
			} else {
				Arc::new(resample(&source, level.width, level.height)?)
			};

			let grid = TileGrid::new(level, &self.config);
			log::debug!(
				"level {}: {}x{} px, {}x{} tiles",
				level.index,
				level.width,
				level.height,
				grid.cols(),
				grid.rows()
			);

			let config = self.config;
			let mut jobs = futures::stream::iter(grid.iter())
				.map(|(coord, rect)| {
					let raster = Arc::clone(&raster);
					let writer = Arc::clone(&writer);
					tokio::task::spawn_blocking(move || -> Result<()> {
						let tile = crop_tile(&raster, &rect);
						let blob = format::image2blob(&tile, config.tile_format(), Some(config.jpeg_quality()))?;
						writer.write_tile(&coord, &blob)
					})
				})
				.buffer_unordered(workers);

			while let Some(result) = jobs.next().await {
				result??;
			}
			// The level raster is dropped here, before the next level is
			// resampled.
		}

		let descriptor = PyramidDescriptor::new(&self.config, width, height);
		writer.write_descriptor(&descriptor)?;
		log::info!("pyramid complete: {:?}", writer.descriptor_path());
		Ok(())
	}
}

/// Builds one pyramid with a throwaway [`PyramidBuilder`].
///
/// This is the single entry point batch orchestrators call per source image;
/// a returned error means the output for that image is unusable until
/// rebuilt.
pub async fn build_pyramid(source_path: &Path, output_base: &Path, config: PyramidConfig) -> Result<()> {
	PyramidBuilder::new(config).build(source_path, output_base).await
}

/// Normalizes the decoded source to the fixed 3-channel model the lossy tile
/// codec requires. Indexed, grayscale, and alpha images are all converted.
fn normalize_colors(image: DynamicImage) -> DynamicImage {
	match image {
		DynamicImage::ImageRgb8(_) => image,
		_ => DynamicImage::ImageRgb8(image.to_rgb8()),
	}
}

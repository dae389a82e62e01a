//! This module defines [`PyramidDescriptor`], the small metadata record that
//! lets a reader address tiles without re-deriving geometry from the source
//! image.
//!
//! The record is serialized as the standard DZI XML document (Microsoft
//! deepzoom/2008 namespace). It carries the tile size, overlap, tile format,
//! and the source dimensions; writing it is the last step of a successful
//! build, so its absence signals an interrupted or failed build.
//!
//! # Examples
//!
//! ```rust
//! use deepzoom_core::{PyramidConfig, PyramidDescriptor};
//!
//! let descriptor = PyramidDescriptor::new(&PyramidConfig::default(), 1000, 800);
//! let xml = descriptor.to_xml();
//! assert_eq!(PyramidDescriptor::from_xml(&xml).unwrap(), descriptor);
//! ```

use crate::{PyramidConfig, TileFormat};
use anyhow::{Context, Result, ensure};
use regex::Regex;

/// Persisted pyramid metadata: tiling parameters plus source dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PyramidDescriptor {
	pub tile_size: u32,
	pub overlap: u32,
	pub tile_format: TileFormat,
	pub width: u32,
	pub height: u32,
}

impl PyramidDescriptor {
	/// Creates the descriptor for a pyramid built from a `width`×`height`
	/// source under `config`.
	pub fn new(config: &PyramidConfig, width: u32, height: u32) -> PyramidDescriptor {
		PyramidDescriptor {
			tile_size: config.tile_size(),
			overlap: config.overlap(),
			tile_format: config.tile_format(),
			width,
			height,
		}
	}

	/// Serializes the descriptor as a DZI XML document.
	///
	/// The output is byte-compatible with descriptors produced by common
	/// deep-zoom tooling, including attribute order and indentation.
	pub fn to_xml(&self) -> String {
		format!(
			"<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
			<Image TileSize=\"{}\" Overlap=\"{}\" Format=\"{}\" xmlns=\"http://schemas.microsoft.com/deepzoom/2008\">\n\
			\x20   <Size Width=\"{}\" Height=\"{}\"/>\n\
			</Image>",
			self.tile_size, self.overlap, self.tile_format, self.width, self.height
		)
	}

	/// Parses a descriptor back from its XML form.
	///
	/// Extracts the five scalar attributes; everything else in the document
	/// is ignored.
	pub fn from_xml(xml: &str) -> Result<PyramidDescriptor> {
		let attribute = |name: &str| -> Result<String> {
			let re = Regex::new(&format!("{name}=\"([^\"]*)\""))?;
			Ok(
				re.captures(xml)
					.with_context(|| format!("descriptor is missing the {name} attribute"))?[1]
					.to_string(),
			)
		};

		let parse_u32 = |name: &str| -> Result<u32> {
			attribute(name)?
				.parse::<u32>()
				.with_context(|| format!("descriptor attribute {name} is not a number"))
		};

		let descriptor = PyramidDescriptor {
			tile_size: parse_u32("TileSize")?,
			overlap: parse_u32("Overlap")?,
			tile_format: TileFormat::try_from_str(&attribute("Format")?)?,
			width: parse_u32("Width")?,
			height: parse_u32("Height")?,
		};

		ensure!(
			descriptor.tile_size > 0,
			"descriptor tile size must be positive"
		);
		Ok(descriptor)
	}
}

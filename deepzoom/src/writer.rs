//! This module provides functionality for writing pyramid output to a
//! directory structure.
//!
//! ## Directory structure
//! ```text
//! <base>.dzi                          # descriptor record
//! <base>_files/<level>/<col>_<row>.<ext>
//! ```
//! - `<level>`: plain decimal level directory, 0..=max_level
//! - `<col>_<row>.<ext>`: tile file, extension matching the tile format
//!
//! Directories are created on demand; nothing touches the filesystem before
//! the first tile write, so a failed decode leaves no output behind.

use anyhow::{Context, Result};
use deepzoom_core::{Blob, PyramidDescriptor, TileCoord, TileFormat};
use std::{
	ffi::OsString,
	fs,
	path::{Path, PathBuf},
};

/// Writes tiles and the descriptor for one pyramid under a base path.
///
/// For a base path `out/m31` the tiles land in `out/m31_files/` and the
/// descriptor at `out/m31.dzi`.
#[derive(Debug, Clone)]
pub struct DirectoryPyramidWriter {
	base: PathBuf,
	tiles_dir: PathBuf,
	tile_format: TileFormat,
}

impl DirectoryPyramidWriter {
	pub fn new(output_base: &Path, tile_format: TileFormat) -> DirectoryPyramidWriter {
		let mut with_suffix = OsString::from(output_base.as_os_str());
		with_suffix.push("_files");

		DirectoryPyramidWriter {
			base: output_base.to_path_buf(),
			tiles_dir: PathBuf::from(with_suffix),
			tile_format,
		}
	}

	/// The `<base>_files` directory all tiles are written into.
	pub fn tiles_dir(&self) -> &Path {
		&self.tiles_dir
	}

	/// The `<base>.dzi` descriptor path.
	pub fn descriptor_path(&self) -> PathBuf {
		let mut with_suffix = OsString::from(self.base.as_os_str());
		with_suffix.push(".dzi");
		PathBuf::from(with_suffix)
	}

	/// Absolute location of one tile, derived deterministically from its
	/// coordinate.
	pub fn tile_path(&self, coord: &TileCoord) -> PathBuf {
		self.tiles_dir.join(coord.as_relative_path(self.tile_format))
	}

	/// Writes one encoded tile, creating its level directory if needed.
	pub fn write_tile(&self, coord: &TileCoord, blob: &Blob) -> Result<()> {
		log::trace!("writing tile {coord:?} ({} bytes)", blob.len());
		Self::write(&self.tile_path(coord), blob.as_slice())
	}

	/// Writes the descriptor record. This is the last step of a successful
	/// build; the descriptor's absence marks an incomplete pyramid.
	pub fn write_descriptor(&self, descriptor: &PyramidDescriptor) -> Result<()> {
		let path = self.descriptor_path();
		log::debug!("writing descriptor to {path:?}");
		Self::write(&path, descriptor.to_xml().as_bytes())
	}

	fn write(path: &Path, bytes: &[u8]) -> Result<()> {
		if let Some(parent) = path.parent() {
			if !parent.exists() {
				fs::create_dir_all(parent).with_context(|| format!("creating directory {parent:?}"))?;
			}
		}
		fs::write(path, bytes).with_context(|| format!("writing {path:?}"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use deepzoom_core::PyramidConfig;

	#[test]
	fn paths_are_derived_from_base() {
		let writer = DirectoryPyramidWriter::new(Path::new("/out/m31"), TileFormat::JPG);
		assert_eq!(writer.tiles_dir(), Path::new("/out/m31_files"));
		assert_eq!(writer.descriptor_path(), Path::new("/out/m31.dzi"));
		assert_eq!(
			writer.tile_path(&TileCoord::new(10, 3, 3)),
			Path::new("/out/m31_files/10/3_3.jpg")
		);
	}

	#[test]
	fn construction_touches_no_filesystem() {
		let temp_dir = assert_fs::TempDir::new().unwrap();
		let base = temp_dir.path().join("untouched");
		let writer = DirectoryPyramidWriter::new(&base, TileFormat::PNG);
		assert!(!writer.tiles_dir().exists());
		assert!(!writer.descriptor_path().exists());
	}

	#[test]
	fn write_tile_creates_level_directories() -> Result<()> {
		let temp_dir = assert_fs::TempDir::new()?;
		let base = temp_dir.path().join("pyramid");
		let writer = DirectoryPyramidWriter::new(&base, TileFormat::PNG);

		writer.write_tile(&TileCoord::new(2, 1, 0), &Blob::from("fake tile"))?;

		let written = temp_dir.path().join("pyramid_files/2/1_0.png");
		assert_eq!(fs::read_to_string(written)?, "fake tile");
		Ok(())
	}

	#[test]
	fn blocked_tile_write_reports_path_context() -> Result<()> {
		let temp_dir = assert_fs::TempDir::new()?;
		let base = temp_dir.path().join("pyramid");
		let writer = DirectoryPyramidWriter::new(&base, TileFormat::JPG);

		// A directory occupying the tile path makes the file write fail.
		let coord = TileCoord::new(0, 0, 0);
		fs::create_dir_all(writer.tile_path(&coord))?;

		let err = writer.write_tile(&coord, &Blob::from("tile")).unwrap_err();
		assert!(
			err.to_string().starts_with("writing "),
			"unexpected error: {err}"
		);
		Ok(())
	}

	#[test]
	fn write_descriptor_round_trips() -> Result<()> {
		let temp_dir = assert_fs::TempDir::new()?;
		let base = temp_dir.path().join("pyramid");
		let writer = DirectoryPyramidWriter::new(&base, TileFormat::JPG);

		let descriptor = PyramidDescriptor::new(&PyramidConfig::default(), 1000, 800);
		writer.write_descriptor(&descriptor)?;

		let xml = fs::read_to_string(writer.descriptor_path())?;
		assert_eq!(PyramidDescriptor::from_xml(&xml)?, descriptor);
		Ok(())
	}
}

//! Convert a raster image into a Deep Zoom (DZI) tile pyramid.
//!
//! The pyramid is a directory hierarchy of fixed-size, optionally overlapping
//! tiles at successive halving resolutions, plus a small XML descriptor:
//!
//! ```text
//! <base>.dzi                          # descriptor record
//! <base>_files/<level>/<col>_<row>.<ext>
//! ```
//!
//! # Quick start
//!
//! ```no_run
//! use deepzoom::build_pyramid;
//! use deepzoom_core::PyramidConfig;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     build_pyramid(
//!         Path::new("galaxy.png"),
//!         Path::new("output/galaxy"),
//!         PyramidConfig::default(),
//!     )
//!     .await
//! }
//! ```

mod builder;
pub use builder::{PyramidBuilder, build_pyramid};

pub mod format;
pub use format::{blob2image, image2blob};

pub mod helper;

mod resample;
pub use resample::{crop_tile, resample};

mod writer;
pub use writer::DirectoryPyramidWriter;

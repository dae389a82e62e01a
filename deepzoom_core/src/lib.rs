//! Geometry and metadata primitives for Deep Zoom image pyramids.
//!
//! Contains the tile coordinate, rectangle, and grid types, level planning,
//! the validated pyramid configuration, and the DZI descriptor record.

pub mod concurrency;
pub use concurrency::*;

pub mod descriptor;
pub use descriptor::*;

pub mod types;
pub use types::*;

//! This module provides the [`Blob`] struct, a thin wrapper around
//! [`Vec<u8>`] used as the currency between tile codecs and file writers.

use std::fmt::Debug;

/// An owned chunk of bytes, typically one encoded tile or descriptor record.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Blob(Vec<u8>);

impl Blob {
	/// Creates an empty `Blob`.
	pub fn new_empty() -> Blob {
		Blob(Vec::new())
	}

	/// Returns the contained bytes as a slice.
	pub fn as_slice(&self) -> &[u8] {
		&self.0
	}

	/// Returns the contained bytes interpreted as UTF-8 (lossy).
	pub fn as_str(&self) -> std::borrow::Cow<'_, str> {
		String::from_utf8_lossy(&self.0)
	}

	/// Consumes the `Blob` and returns the underlying vector.
	pub fn into_vec(self) -> Vec<u8> {
		self.0
	}

	/// Returns the number of bytes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` if the `Blob` contains no bytes.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<Vec<u8>> for Blob {
	fn from(value: Vec<u8>) -> Self {
		Blob(value)
	}
}

impl From<&[u8]> for Blob {
	fn from(value: &[u8]) -> Self {
		Blob(value.to_vec())
	}
}

impl From<&str> for Blob {
	fn from(value: &str) -> Self {
		Blob(value.as_bytes().to_vec())
	}
}

impl From<String> for Blob {
	fn from(value: String) -> Self {
		Blob(value.into_bytes())
	}
}

impl Debug for Blob {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Blob({} bytes)", self.0.len())
	}
}

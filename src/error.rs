//! Error types shared by the catalogue, gallery, and inquiry controllers.

use std::path::PathBuf;

use thiserror::Error;

use crate::inquiry::FormField;

/// Errors raised while building a [`Catalog`](crate::catalog::Catalog).
#[derive(Debug, Error)]
pub enum CatalogError {
	/// Two entries in the same catalogue share an id.
	#[error("{catalog} entry id '{id}' is already registered")]
	DuplicateId { catalog: &'static str, id: String },

	/// A displayable entry has no image to show.
	#[error("{catalog} entry '{id}' has no images")]
	NoImages { catalog: &'static str, id: String },

	/// Ratings live on a fixed 0.0 - 5.0 scale.
	#[error("{catalog} entry '{id}' has rating {rating} outside 0.0..=5.0")]
	RatingOutOfRange {
		catalog: &'static str,
		id: String,
		rating: f32,
	},

	/// Coordinates must be finite and within the WGS84 ranges.
	#[error("place '{id}' has invalid coordinates ({lat}, {lng})")]
	InvalidLocation { id: String, lat: f64, lng: f64 },

	#[error("failed to read catalogue file {}", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse catalogue file {}", path.display())]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}

/// Errors raised by [`Gallery`](crate::gallery::Gallery) navigation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GalleryError {
	#[error("image index {index} is out of range for a gallery of {len}")]
	OutOfRange { index: usize, len: usize },
}

/// Reasons an inquiry cannot leave the editing state.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FormError {
	#[error("{0} is required")]
	MissingField(FormField),

	#[error("{field}: {reason}")]
	InvalidField {
		field: FormField,
		reason: &'static str,
	},
}

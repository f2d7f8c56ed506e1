//! Detail view lifecycle for a single selected catalogue entry.

use std::num::NonZeroUsize;

use tracing::debug;

use crate::catalog::CatalogIndex;
use crate::error::GalleryError;
use crate::gallery::Gallery;

/// Either nothing is selected, or one entry is shown with its gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailModal {
	#[default]
	Closed,
	Open {
		entity: CatalogIndex,
		gallery: Gallery,
	},
}

impl DetailModal {
	/// Show `entity`, always starting from its first image.
	///
	/// Opening while another entry is shown replaces it; the gallery never
	/// carries its position over.
	pub fn open(&mut self, entity: CatalogIndex, images: NonZeroUsize) {
		debug!(entity = entity.get(), images = images.get(), "opening detail view");
		*self = Self::Open {
			entity,
			gallery: Gallery::new(images),
		};
	}

	/// Close the view. Returns `false` when it was already closed.
	pub fn close(&mut self) -> bool {
		if self.is_open() {
			debug!("closing detail view");
			*self = Self::Closed;
			true
		} else {
			false
		}
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		matches!(self, Self::Open { .. })
	}

	#[must_use]
	pub fn entity(&self) -> Option<CatalogIndex> {
		match self {
			Self::Open { entity, .. } => Some(*entity),
			Self::Closed => None,
		}
	}

	#[must_use]
	pub fn gallery(&self) -> Option<&Gallery> {
		match self {
			Self::Open { gallery, .. } => Some(gallery),
			Self::Closed => None,
		}
	}

	pub fn next_image(&mut self) {
		if let Self::Open { gallery, .. } = self {
			gallery.next();
		}
	}

	pub fn prev_image(&mut self) {
		if let Self::Open { gallery, .. } = self {
			gallery.prev();
		}
	}

	/// Jump to an image of the open entry. Closed views ignore the request.
	pub fn jump_image(&mut self, index: usize) -> Result<(), GalleryError> {
		match self {
			Self::Open { gallery, .. } => gallery.jump_to(index),
			Self::Closed => Ok(()),
		}
	}
}

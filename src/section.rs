//! Browsing state for one searchable catalogue: filters, highlighted row, and
//! the detail view.

use std::sync::Arc;

use tracing::debug;

use crate::catalog::{Catalog, CatalogIndex, CatalogItem};
use crate::error::GalleryError;
use crate::filter::{CategoryFilter, FilteredView};
use crate::gallery::Gallery;
use crate::modal::DetailModal;

/// A catalogue tab with its own category selection and detail view.
///
/// The search text lives outside the section so several sections can share
/// one query; callers pass it to [`CatalogSection::refresh`] after every
/// input change.
#[derive(Debug)]
pub struct CatalogSection<T: CatalogItem> {
	catalog: Arc<Catalog<T>>,
	category: CategoryFilter<T::Category>,
	view: FilteredView<T::Category>,
	highlighted: usize,
	detail: DetailModal,
}

impl<T: CatalogItem> CatalogSection<T> {
	#[must_use]
	pub fn new(catalog: Arc<Catalog<T>>) -> Self {
		let mut section = Self {
			catalog,
			category: CategoryFilter::All,
			view: FilteredView::default(),
			highlighted: 0,
			detail: DetailModal::Closed,
		};
		section.refresh("");
		section
	}

	#[must_use]
	pub fn catalog(&self) -> &Catalog<T> {
		&self.catalog
	}

	/// Recompute the visible rows for `query`. Returns whether they changed.
	pub fn refresh(&mut self, query: &str) -> bool {
		let rebuilt = self
			.view
			.refresh(self.catalog.items(), query, self.category);
		if rebuilt {
			self.highlighted = self
				.highlighted
				.min(self.view.len().saturating_sub(1));
		}
		rebuilt
	}

	#[must_use]
	pub fn category(&self) -> CategoryFilter<T::Category> {
		self.category
	}

	/// Whether this catalogue offers a category selector at all.
	#[must_use]
	pub fn has_categories(&self) -> bool {
		!T::CATEGORIES.is_empty()
	}

	/// Select a category. The next [`refresh`](Self::refresh) applies it.
	pub fn set_category(&mut self, category: CategoryFilter<T::Category>) -> bool {
		if self.category == category {
			return false;
		}
		debug!(catalog = T::KIND, ?category, "category selected");
		self.category = category;
		self.highlighted = 0;
		true
	}

	/// Step through `All` followed by every category, wrapping at both ends.
	pub fn cycle_category(&mut self, forward: bool) -> bool {
		let categories = T::CATEGORIES;
		if categories.is_empty() {
			return false;
		}
		// Position 0 is `All`, categories follow.
		let slots = categories.len() + 1;
		let current = match self.category {
			CategoryFilter::All => 0,
			CategoryFilter::Only(category) => categories
				.iter()
				.position(|candidate| *candidate == category)
				.map_or(0, |position| position + 1),
		};
		let next = if forward {
			(current + 1) % slots
		} else {
			(current + slots - 1) % slots
		};
		let category = match next {
			0 => CategoryFilter::All,
			slot => CategoryFilter::Only(categories[slot - 1]),
		};
		self.set_category(category)
	}

	/// Matching entries in catalogue order.
	pub fn visible(&self) -> impl Iterator<Item = (CatalogIndex, &T)> {
		self.view.indices().iter().filter_map(|&position| {
			let index = self.catalog.index(position)?;
			self.catalog.get(index).map(|item| (index, item))
		})
	}

	#[must_use]
	pub fn visible_len(&self) -> usize {
		self.view.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.view.is_empty()
	}

	/// Row position of the highlighted entry, if any row is visible.
	#[must_use]
	pub fn highlighted(&self) -> Option<usize> {
		(!self.view.is_empty()).then_some(self.highlighted)
	}

	#[must_use]
	pub fn highlighted_item(&self) -> Option<(CatalogIndex, &T)> {
		self.visible().nth(self.highlighted)
	}

	pub fn highlight_next(&mut self) {
		if self.highlighted + 1 < self.view.len() {
			self.highlighted += 1;
		}
	}

	pub fn highlight_prev(&mut self) {
		self.highlighted = self.highlighted.saturating_sub(1);
	}

	/// Highlight a row by its position among the visible entries.
	pub fn highlight(&mut self, row: usize) -> bool {
		if row < self.view.len() {
			self.highlighted = row;
			true
		} else {
			false
		}
	}

	/// Open the detail view for the highlighted row.
	pub fn open_highlighted(&mut self) -> bool {
		match self.highlighted_item() {
			Some((index, _)) => self.open(index),
			None => false,
		}
	}

	/// Open the detail view for an entry, starting from its first image.
	pub fn open(&mut self, index: CatalogIndex) -> bool {
		let Some(item) = self.catalog.get(index) else {
			return false;
		};
		let images = item.image_count();
		self.detail.open(index, images);
		true
	}

	pub fn close_detail(&mut self) -> bool {
		self.detail.close()
	}

	#[must_use]
	pub fn is_detail_open(&self) -> bool {
		self.detail.is_open()
	}

	/// The entry shown in the detail view together with its gallery position.
	#[must_use]
	pub fn detail(&self) -> Option<(&T, &Gallery)> {
		let entity = self.detail.entity()?;
		let gallery = self.detail.gallery()?;
		self.catalog.get(entity).map(|item| (item, gallery))
	}

	pub fn next_image(&mut self) {
		self.detail.next_image();
	}

	pub fn prev_image(&mut self) {
		self.detail.prev_image();
	}

	pub fn jump_image(&mut self, index: usize) -> Result<(), GalleryError> {
		self.detail.jump_image(index)
	}
}

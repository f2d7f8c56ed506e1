//! Free-text and category filtering over catalogue entries.
//!
//! Filtering is a stable, case-insensitive substring match against an entry's
//! name or description, combined with an optional category restriction. The
//! functions here are pure; [`FilteredView`] adds a one-entry memo keyed by
//! `(query, category)` so sections can refresh on every keystroke without
//! re-scanning when nothing changed.

use tracing::debug;

use crate::catalog::CatalogItem;

/// Category restriction applied alongside the text query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryFilter<C> {
	All,
	Only(C),
}

impl<C> Default for CategoryFilter<C> {
	fn default() -> Self {
		Self::All
	}
}

impl<C: Copy + Eq> CategoryFilter<C> {
	/// Whether an entry with `category` passes this restriction.
	#[must_use]
	pub fn matches(self, category: Option<C>) -> bool {
		match self {
			Self::All => true,
			Self::Only(wanted) => category == Some(wanted),
		}
	}
}

/// Whether `item` matches an already lowercased query.
fn matches_lowered<T: CatalogItem>(item: &T, needle: &str) -> bool {
	needle.is_empty()
		|| item.name().to_lowercase().contains(needle)
		|| item.description().to_lowercase().contains(needle)
}

/// Positions of the entries in `items` that match, in source order.
#[must_use]
pub fn filter_indices<T: CatalogItem>(
	items: &[T],
	query: &str,
	category: CategoryFilter<T::Category>,
) -> Vec<usize> {
	let needle = query.to_lowercase();
	items
		.iter()
		.enumerate()
		.filter(|(_, item)| category.matches(item.category()) && matches_lowered(*item, &needle))
		.map(|(index, _)| index)
		.collect()
}

/// The matching entries themselves, in source order.
#[must_use]
pub fn filter<'a, T: CatalogItem>(
	items: &'a [T],
	query: &str,
	category: CategoryFilter<T::Category>,
) -> Vec<&'a T> {
	filter_indices(items, query, category)
		.into_iter()
		.map(|index| &items[index])
		.collect()
}

/// Cached filter result for one catalogue.
#[derive(Debug, Clone)]
pub struct FilteredView<C> {
	key: Option<(String, CategoryFilter<C>)>,
	indices: Vec<usize>,
}

impl<C> Default for FilteredView<C> {
	fn default() -> Self {
		Self {
			key: None,
			indices: Vec::new(),
		}
	}
}

impl<C: Copy + Eq + std::fmt::Debug> FilteredView<C> {
	/// Recompute the view if `(query, category)` differs from the last call.
	///
	/// Returns `true` when the indices were rebuilt.
	pub fn refresh<T>(&mut self, items: &[T], query: &str, category: CategoryFilter<C>) -> bool
	where
		T: CatalogItem<Category = C>,
	{
		if let Some((cached_query, cached_category)) = &self.key
			&& cached_query == query
			&& *cached_category == category
		{
			return false;
		}

		self.indices = filter_indices(items, query, category);
		self.key = Some((query.to_string(), category));
		debug!(
			catalog = T::KIND,
			query,
			?category,
			matches = self.indices.len(),
			"refreshed filter"
		);
		true
	}

	/// Drop the memo so the next refresh always recomputes.
	pub fn invalidate(&mut self) {
		self.key = None;
	}

	#[must_use]
	pub fn indices(&self) -> &[usize] {
		&self.indices
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.indices.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.indices.is_empty()
	}
}

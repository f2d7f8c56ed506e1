//! Immutable, validated catalogues of places, food, guides, and transport.
//!
//! Catalogues are built once at startup, either from the bundled Varanasi
//! data or from a JSON override file, and are shared read-only for the rest
//! of the session. [`Catalog::new`] is the single gate that enforces the
//! invariants the browsing controllers rely on: unique ids, at least one
//! image per entry, and ratings on the 0.0 - 5.0 scale.

mod builtin;
mod food;
mod guide;
mod place;
mod transport;

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use food::Food;
pub use guide::Guide;
pub use place::{Location, Place, PlaceCategory};
pub use transport::TransportMode;

use crate::error::CatalogError;

/// Highest rating accepted by any catalogue.
pub const MAX_RATING: f32 = 5.0;

/// Common surface of entries that can be searched, listed, and opened in a
/// detail view.
pub trait CatalogItem {
	/// Closed classification used by the category selector. Catalogues
	/// without categories use [`std::convert::Infallible`].
	type Category: Copy + Eq + fmt::Debug + fmt::Display + 'static;

	/// Human readable catalogue name used in errors and logs.
	const KIND: &'static str;

	/// Selectable categories in display order. Empty when the catalogue has
	/// no category selector.
	const CATEGORIES: &'static [Self::Category] = &[];

	fn id(&self) -> &str;
	fn name(&self) -> &str;
	fn description(&self) -> &str;
	fn images(&self) -> &[String];
	fn rating(&self) -> f32;

	fn category(&self) -> Option<Self::Category> {
		None
	}

	/// Entry-specific checks on top of the shared catalogue invariants.
	fn validate(&self) -> Result<(), CatalogError> {
		Ok(())
	}

	/// Number of images, guaranteed non-zero for entries inside a [`Catalog`].
	fn image_count(&self) -> NonZeroUsize {
		NonZeroUsize::new(self.images().len()).unwrap_or(NonZeroUsize::MIN)
	}
}

/// Position of an entry inside the catalogue it was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CatalogIndex(usize);

impl CatalogIndex {
	#[must_use]
	pub fn get(self) -> usize {
		self.0
	}
}

/// Ordered, read-only list of validated entries.
#[derive(Debug, Clone)]
pub struct Catalog<T> {
	items: Vec<T>,
}

impl<T: CatalogItem> Catalog<T> {
	/// Validate `items` and wrap them in a catalogue.
	pub fn new(items: Vec<T>) -> Result<Self, CatalogError> {
		let mut seen = HashSet::with_capacity(items.len());
		for item in &items {
			if !seen.insert(item.id()) {
				return Err(CatalogError::DuplicateId {
					catalog: T::KIND,
					id: item.id().to_string(),
				});
			}
			if item.images().is_empty() {
				return Err(CatalogError::NoImages {
					catalog: T::KIND,
					id: item.id().to_string(),
				});
			}
			let rating = item.rating();
			if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
				return Err(CatalogError::RatingOutOfRange {
					catalog: T::KIND,
					id: item.id().to_string(),
					rating,
				});
			}
			item.validate()?;
		}
		Ok(Self { items })
	}

	#[must_use]
	pub fn items(&self) -> &[T] {
		&self.items
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Resolve an index previously produced from this catalogue.
	#[must_use]
	pub fn get(&self, index: CatalogIndex) -> Option<&T> {
		self.items.get(index.0)
	}

	/// Look up an entry position by id.
	#[must_use]
	pub fn index_of(&self, id: &str) -> Option<CatalogIndex> {
		self.items
			.iter()
			.position(|item| item.id() == id)
			.map(CatalogIndex)
	}

	/// Convert a raw position into a [`CatalogIndex`] when it is in bounds.
	#[must_use]
	pub fn index(&self, position: usize) -> Option<CatalogIndex> {
		(position < self.items.len()).then_some(CatalogIndex(position))
	}

	pub fn iter(&self) -> impl Iterator<Item = &T> {
		self.items.iter()
	}
}

/// Every catalogue the application displays.
#[derive(Debug, Clone)]
pub struct CatalogSet {
	pub places: Arc<Catalog<Place>>,
	pub foods: Arc<Catalog<Food>>,
	pub guides: Arc<[Guide]>,
	pub transport: Arc<[TransportMode]>,
}

/// Serialized form of a [`CatalogSet`], used for override files and
/// `--dump-catalog`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFile {
	pub places: Vec<Place>,
	pub foods: Vec<Food>,
	pub guides: Vec<Guide>,
	pub transport: Vec<TransportMode>,
}

impl CatalogSet {
	/// The bundled Varanasi catalogue.
	pub fn builtin() -> Result<Self, CatalogError> {
		Self::from_file(builtin::catalog_file())
	}

	/// Validate a deserialized catalogue file.
	pub fn from_file(file: CatalogFile) -> Result<Self, CatalogError> {
		ensure_unique("guides", file.guides.iter().map(|guide| guide.id.as_str()))?;
		ensure_unique(
			"transport",
			file.transport.iter().map(|mode| mode.id.as_str()),
		)?;
		Ok(Self {
			places: Arc::new(Catalog::new(file.places)?),
			foods: Arc::new(Catalog::new(file.foods)?),
			guides: file.guides.into(),
			transport: file.transport.into(),
		})
	}

	/// Load and validate a JSON catalogue from disk.
	pub fn load(path: &Path) -> Result<Self, CatalogError> {
		let contents = fs::read_to_string(path).map_err(|source| CatalogError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		let file: CatalogFile =
			serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
				path: path.to_path_buf(),
				source,
			})?;
		Self::from_file(file)
	}

	/// Convert back into the serializable representation.
	#[must_use]
	pub fn to_file(&self) -> CatalogFile {
		CatalogFile {
			places: self.places.items().to_vec(),
			foods: self.foods.items().to_vec(),
			guides: self.guides.to_vec(),
			transport: self.transport.to_vec(),
		}
	}
}

/// The bundled catalogue in its serializable form.
#[must_use]
pub fn builtin_file() -> CatalogFile {
	builtin::catalog_file()
}

fn ensure_unique<'a>(
	catalog: &'static str,
	ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
	let mut seen = HashSet::new();
	for id in ids {
		if !seen.insert(id) {
			return Err(CatalogError::DuplicateId {
				catalog,
				id: id.to_string(),
			});
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	fn place(id: &str) -> Place {
		Place {
			id: id.to_string(),
			name: format!("Place {id}"),
			category: PlaceCategory::Ghat,
			images: vec!["https://example.com/a.jpg".to_string()],
			description: "On the river".to_string(),
			hours: "Open 24/7".to_string(),
			entry_fee: "Free".to_string(),
			rating: 4.2,
			location: Location {
				lat: 25.3,
				lng: 83.0,
			},
		}
	}

	#[test]
	fn builtin_catalogue_is_valid() {
		let set = CatalogSet::builtin().expect("builtin catalogue");
		assert_eq!(set.places.len(), 3);
		assert_eq!(set.foods.len(), 3);
		assert_eq!(set.guides.len(), 3);
		assert_eq!(set.transport.len(), 4);
		assert_eq!(
			set.places.index_of("ramnagar-fort").map(CatalogIndex::get),
			Some(2)
		);
	}

	#[test]
	fn duplicate_ids_are_rejected() {
		let err = Catalog::new(vec![place("a"), place("a")]).unwrap_err();
		assert!(matches!(err, CatalogError::DuplicateId { ref id, .. } if id == "a"));
	}

	#[test]
	fn entries_without_images_are_rejected() {
		let mut empty = place("bare");
		empty.images.clear();
		let err = Catalog::new(vec![empty]).unwrap_err();
		assert!(matches!(err, CatalogError::NoImages { .. }));
	}

	#[test]
	fn ratings_must_stay_on_scale() {
		let mut negative = place("neg");
		negative.rating = -0.1;
		assert!(matches!(
			Catalog::new(vec![negative]).unwrap_err(),
			CatalogError::RatingOutOfRange { .. }
		));

		let mut nan = place("nan");
		nan.rating = f32::NAN;
		assert!(Catalog::new(vec![nan]).is_err());
	}

	#[test]
	fn coordinates_are_checked() {
		let mut lost = place("lost");
		lost.location.lat = 123.0;
		assert!(matches!(
			Catalog::new(vec![lost]).unwrap_err(),
			CatalogError::InvalidLocation { .. }
		));
	}

	#[test]
	fn index_is_bounds_checked() {
		let catalog = Catalog::new(vec![place("a"), place("b")]).unwrap();
		assert!(catalog.index(1).is_some());
		assert!(catalog.index(2).is_none());
		let index = catalog.index(1).unwrap();
		assert_eq!(catalog.get(index).map(|p| p.id.as_str()), Some("b"));
	}

	#[test]
	fn load_reads_override_file() {
		let mut file = builtin_file();
		file.places.truncate(1);
		let json = serde_json::to_string(&file).unwrap();

		let mut tmp = tempfile::NamedTempFile::new().unwrap();
		tmp.write_all(json.as_bytes()).unwrap();

		let set = CatalogSet::load(tmp.path()).expect("load override");
		assert_eq!(set.places.len(), 1);
		assert_eq!(set.foods.len(), 3);
	}

	#[test]
	fn load_reports_parse_errors_with_path() {
		let mut tmp = tempfile::NamedTempFile::new().unwrap();
		tmp.write_all(b"{ not json").unwrap();

		let err = CatalogSet::load(tmp.path()).unwrap_err();
		assert!(matches!(err, CatalogError::Parse { ref path, .. } if path == tmp.path()));
	}

	#[test]
	fn duplicate_guides_are_rejected() {
		let mut file = builtin_file();
		let first = file.guides[0].clone();
		file.guides.push(first);
		assert!(matches!(
			CatalogSet::from_file(file).unwrap_err(),
			CatalogError::DuplicateId {
				catalog: "guides",
				..
			}
		));
	}
}

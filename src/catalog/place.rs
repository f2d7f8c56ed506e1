use std::fmt;

use serde::{Deserialize, Serialize};

use super::CatalogItem;
use crate::error::CatalogError;

/// A point of interest shown in the places tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
	pub id: String,
	pub name: String,
	pub category: PlaceCategory,
	pub images: Vec<String>,
	pub description: String,
	pub hours: String,
	pub entry_fee: String,
	pub rating: f32,
	pub location: Location,
}

/// Closed set of place classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceCategory {
	Temple,
	Ghat,
	Fort,
}

impl PlaceCategory {
	pub const ALL: [PlaceCategory; 3] = [Self::Temple, Self::Ghat, Self::Fort];

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Temple => "temple",
			Self::Ghat => "ghat",
			Self::Fort => "fort",
		}
	}

	/// Plural label used on the category buttons.
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Temple => "Temples",
			Self::Ghat => "Ghats",
			Self::Fort => "Forts",
		}
	}
}

impl fmt::Display for PlaceCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
	pub lat: f64,
	pub lng: f64,
}

impl Location {
	#[must_use]
	pub fn is_valid(&self) -> bool {
		self.lat.is_finite()
			&& self.lng.is_finite()
			&& (-90.0..=90.0).contains(&self.lat)
			&& (-180.0..=180.0).contains(&self.lng)
	}
}

impl CatalogItem for Place {
	type Category = PlaceCategory;

	const KIND: &'static str = "places";
	const CATEGORIES: &'static [PlaceCategory] = &PlaceCategory::ALL;

	fn id(&self) -> &str {
		&self.id
	}

	fn name(&self) -> &str {
		&self.name
	}

	fn description(&self) -> &str {
		&self.description
	}

	fn images(&self) -> &[String] {
		&self.images
	}

	fn rating(&self) -> f32 {
		self.rating
	}

	fn category(&self) -> Option<PlaceCategory> {
		Some(self.category)
	}

	fn validate(&self) -> Result<(), CatalogError> {
		if self.location.is_valid() {
			Ok(())
		} else {
			Err(CatalogError::InvalidLocation {
				id: self.id.clone(),
				lat: self.location.lat,
				lng: self.location.lng,
			})
		}
	}
}

use std::convert::Infallible;
use std::slice;

use serde::{Deserialize, Serialize};

use super::CatalogItem;

/// A dish listed in the food tab. Foods carry a single image and have no
/// category selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
	pub id: String,
	pub name: String,
	pub image: String,
	pub description: String,
	pub best_places: Vec<String>,
	pub rating: f32,
	pub price: String,
}

impl CatalogItem for Food {
	type Category = Infallible;

	const KIND: &'static str = "foods";

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
		if self.image.is_empty() {
			&[]
		} else {
			slice::from_ref(&self.image)
		}
	}

	fn rating(&self) -> f32 {
		self.rating
	}
}

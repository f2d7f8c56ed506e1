use serde::{Deserialize, Serialize};

/// One way of getting around the city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportMode {
	pub id: String,
	pub name: String,
	pub image: String,
	pub description: String,
	pub fare: String,
	pub availability: String,
	pub best_for: Vec<String>,
	pub tips: Vec<String>,
}

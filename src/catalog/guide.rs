use serde::{Deserialize, Serialize};

/// A verified local guide with contact details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
	pub id: String,
	pub name: String,
	pub image: String,
	pub languages: Vec<String>,
	pub experience: String,
	pub rating: f32,
	pub specializations: Vec<String>,
	pub phone: String,
	pub whatsapp: String,
	pub email: String,
	pub price_range: String,
}

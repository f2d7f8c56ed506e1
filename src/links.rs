//! Outbound links: map directions, messaging, dialing, and map embeds.
//!
//! The terminal cannot open a browser tab by itself, so links are handed to a
//! [`LinkSink`]. The bundled [`LinkLog`] keeps them for the session summary.

use std::fmt;

use serde::Serialize;
use tracing::info;

use crate::catalog::{Guide, Location};

const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/?api=1";
const MESSAGE_BASE: &str = "https://wa.me";
const SITE_NAME: &str = "Dhoomchalle";

/// Kind of outbound action a link represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
	Directions,
	Message,
	Dial,
	MapEmbed,
}

impl fmt::Display for LinkKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			Self::Directions => "directions",
			Self::Message => "message",
			Self::Dial => "dial",
			Self::MapEmbed => "map",
		};
		f.write_str(label)
	}
}

/// A fully formed outbound link plus what it points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
	pub kind: LinkKind,
	pub target: String,
	pub url: String,
}

impl Link {
	/// Directions to a place.
	#[must_use]
	pub fn directions(name: &str, location: Location) -> Self {
		Self {
			kind: LinkKind::Directions,
			target: name.to_string(),
			url: directions_url(location),
		}
	}

	/// Pre-filled chat with a guide.
	#[must_use]
	pub fn message(guide: &Guide) -> Self {
		Self {
			kind: LinkKind::Message,
			target: guide.name.clone(),
			url: message_url(&guide.whatsapp, &guide.name),
		}
	}

	/// Direct dial to a guide.
	#[must_use]
	pub fn dial(guide: &Guide) -> Self {
		Self {
			kind: LinkKind::Dial,
			target: guide.name.clone(),
			url: dial_url(&guide.phone),
		}
	}

	/// Embedded map around a place.
	#[must_use]
	pub fn map_embed(name: &str, location: Location) -> Self {
		Self {
			kind: LinkKind::MapEmbed,
			target: name.to_string(),
			url: map_embed_url(location),
		}
	}
}

impl fmt::Display for Link {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} ({}): {}", self.kind, self.target, self.url)
	}
}

/// Map directions with the destination set to the given coordinates.
#[must_use]
pub fn directions_url(location: Location) -> String {
	format!(
		"{DIRECTIONS_BASE}&destination={},{}",
		location.lat, location.lng
	)
}

/// Messaging deep link with a pre-filled greeting for `guide_name`.
#[must_use]
pub fn message_url(phone: &str, guide_name: &str) -> String {
	let text = format!(
		"Hi {guide_name}, I found your profile on {SITE_NAME} and would like to inquire about tour guide services in Varanasi."
	);
	format!(
		"{MESSAGE_BASE}/{}?text={}",
		digits_only(phone),
		urlencoding::encode(&text)
	)
}

/// Telephony link using the number exactly as listed.
#[must_use]
pub fn dial_url(phone: &str) -> String {
	format!("tel:{phone}")
}

/// Embeddable map frame centred on the coordinates.
#[must_use]
pub fn map_embed_url(location: Location) -> String {
	format!(
		"https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3607.0!2d{lng}!3d{lat}!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2zMjXCsDE4JzM5LjYiTiA4M8KwMDAnMzguOSJF!5e0!3m2!1sen!2sin!4v1234567890123!5m2!1sen!2sin",
		lat = location.lat,
		lng = location.lng
	)
}

/// Strip everything but ASCII digits.
#[must_use]
pub fn digits_only(phone: &str) -> String {
	phone.chars().filter(char::is_ascii_digit).collect()
}

/// Receiver for links the user asked to open.
pub trait LinkSink {
	fn open(&mut self, link: Link);
}

/// Sink that records every link in order.
#[derive(Debug, Default)]
pub struct LinkLog {
	opened: Vec<Link>,
}

impl LinkLog {
	#[must_use]
	pub fn opened(&self) -> &[Link] {
		&self.opened
	}

	#[must_use]
	pub fn last(&self) -> Option<&Link> {
		self.opened.last()
	}

	#[must_use]
	pub fn into_opened(self) -> Vec<Link> {
		self.opened
	}
}

impl LinkSink for LinkLog {
	fn open(&mut self, link: Link) {
		info!(kind = %link.kind, target = %link.target, url = %link.url, "link requested");
		self.opened.push(link);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::CatalogSet;

	#[test]
	fn directions_use_destination_coordinates() {
		let url = directions_url(Location {
			lat: 25.2826,
			lng: 83.0534,
		});
		assert_eq!(
			url,
			"https://www.google.com/maps/dir/?api=1&destination=25.2826,83.0534"
		);
	}

	#[test]
	fn message_link_strips_phone_and_encodes_text() {
		let url = message_url("+91-98765 43210", "Anita Sharma");
		let (base, query) = url.split_once('?').unwrap();
		assert_eq!(base, "https://wa.me/919876543210");
		assert!(query.starts_with("text=Hi%20Anita%20Sharma%2C%20I%20found"));
		assert!(!query.contains(' '));
	}

	#[test]
	fn dial_keeps_raw_number() {
		assert_eq!(dial_url("+91-9876543210"), "tel:+91-9876543210");
	}

	#[test]
	fn embed_places_longitude_before_latitude() {
		let url = map_embed_url(Location {
			lat: 25.3109,
			lng: 83.0108,
		});
		assert!(url.contains("!2d83.0108!3d25.3109!"));
		assert!(url.contains("!3m3!1m2!1s0x0%3A0x0!2z"));
		assert!(url.ends_with("!4v1234567890123!5m2!1sen!2sin"));
	}

	#[test]
	fn digits_only_drops_everything_else() {
		assert_eq!(digits_only("(+91) 12-34 ext.5"), "9112345");
		assert_eq!(digits_only(""), "");
	}

	#[test]
	fn link_log_records_in_order() {
		let catalog = CatalogSet::builtin().unwrap();
		let guide = &catalog.guides[0];
		let mut log = LinkLog::default();
		log.open(Link::dial(guide));
		log.open(Link::message(guide));

		assert_eq!(log.opened().len(), 2);
		assert_eq!(log.last().map(|link| link.kind), Some(LinkKind::Message));
		assert_eq!(log.opened()[0].url, "tel:+91-9876543210");
	}
}

//! Static copy shown around the catalogues.

use super::config::Tab;

/// One slide of the home banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroSlide {
	pub title: &'static str,
	pub image: &'static str,
}

pub const HERO_SLIDES: [HeroSlide; 3] = [
	HeroSlide {
		title: "Sacred Ghats",
		image: "https://images.unsplash.com/photo-1741485332074-fa55a9c68fda",
	},
	HeroSlide {
		title: "Evening Aarti",
		image: "https://images.unsplash.com/photo-1763186534248-d0de60fd81e2",
	},
	HeroSlide {
		title: "Ganges River",
		image: "https://images.unsplash.com/photo-1652396507015-74b259a6f58d",
	},
];

pub const TAGLINE: &str = "Dhoomchalle · Explore the Soul of Varanasi";

pub const HIGHLIGHTS: [&str; 4] = [
	"Ancient Spiritual Capital",
	"84 Sacred Ghats",
	"Mystical Sunrise",
	"Divine Ganga Aarti",
];

pub const STATS: [(&str, &str); 4] = [
	("5000+", "Years Old"),
	("1M+", "Visitors/Year"),
	("4.9", "Rating"),
	("#1", "Holy City"),
];

/// Banner shortcut into a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickLink {
	pub key: char,
	pub label: &'static str,
	pub count: &'static str,
	pub tab: Tab,
}

pub const QUICK_LINKS: [QuickLink; 4] = [
	QuickLink {
		key: 'p',
		label: "Explore Places",
		count: "50+",
		tab: Tab::Places,
	},
	QuickLink {
		key: 'f',
		label: "Food",
		count: "100+",
		tab: Tab::Food,
	},
	QuickLink {
		key: 't',
		label: "Transport",
		count: "24/7",
		tab: Tab::Transport,
	},
	QuickLink {
		key: 'g',
		label: "Guides",
		count: "Expert",
		tab: Tab::Guides,
	},
];

pub const FOOD_TIPS_TITLE: &str = "Food Tips for Varanasi";

pub const FOOD_TIPS: [(&str, &str); 4] = [
	(
		"Best Time to Eat",
		"Try Kachori Sabzi for breakfast (6-10 AM) and Paan after dinner. Malaiyyo is only available in winter mornings (December-February).",
	),
	(
		"Safety Tips",
		"Eat at popular, crowded places with high turnover. Drink bottled water and avoid raw salads if you have a sensitive stomach.",
	),
	(
		"Vegetarian Paradise",
		"Varanasi is predominantly vegetarian. You'll find amazing dairy-based sweets and pure vegetarian street food everywhere.",
	),
	(
		"Don't Miss",
		"Lassi at Blue Lassi Shop, Tamatar Chaat, and the famous Deena Chaat Bhandar near Bengali Tola are must-visits!",
	),
];

pub const TRAVEL_GUIDELINES_TITLE: &str = "Safety & Travel Guidelines";

pub const TRAVEL_GUIDELINES: [(&str, &str); 6] = [
	(
		"Safety First",
		"Always share your ride details with family/friends. Avoid traveling alone late at night. Keep valuables secure.",
	),
	(
		"Payment Tips",
		"Carry small denominations. Many drivers don't have change for ₹500/2000 notes. Digital payments are widely accepted.",
	),
	(
		"Apps to Use",
		"Download Ola, Uber for cabs. Google Maps for navigation. Keep offline maps downloaded for better navigation.",
	),
	(
		"Peak Hours",
		"Avoid 9-11 AM and 5-7 PM for smooth travel. Early mornings are best for visiting ghats and temples.",
	),
	(
		"Old City Access",
		"Many ghat areas have narrow lanes inaccessible to cars. Use e-rickshaws or walk to explore the old city.",
	),
	(
		"Walking Tours",
		"The best way to experience Varanasi's old lanes is on foot. Hire a local guide for immersive walking tours.",
	),
];

pub const INQUIRY_TITLE: &str = "Quick Inquiry Form";
pub const INQUIRY_INTRO: &str =
	"Fill out this form and we'll connect you with the best guide for your needs";
pub const INQUIRY_THANKS: &str = "Thank You!";
pub const INQUIRY_ACKNOWLEDGED: &str =
	"Your inquiry has been submitted. A guide will contact you shortly.";

pub const CONTACT: [&str; 3] = [
	"Varanasi, Uttar Pradesh, India",
	"+91-1234567890",
	"info@dhoomchalle.com",
];

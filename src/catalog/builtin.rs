//! Bundled catalogue for Varanasi.

use super::{CatalogFile, Food, Guide, Location, Place, PlaceCategory, TransportMode};

fn unsplash(photo: &str) -> String {
	format!("https://images.unsplash.com/photo-{photo}?fit=max&fm=jpg&q=80&w=1080")
}

fn strings(values: &[&str]) -> Vec<String> {
	values.iter().map(|value| value.to_string()).collect()
}

pub(super) fn catalog_file() -> CatalogFile {
	CatalogFile {
		places: places(),
		foods: foods(),
		guides: guides(),
		transport: transport(),
	}
}

fn places() -> Vec<Place> {
	vec![
		Place {
			id: "kashi-vishwanath".into(),
			name: "Kashi Vishwanath Temple".into(),
			category: PlaceCategory::Temple,
			images: vec![unsplash("1712546623815-09416e1e751f")],
			description: "One of the most famous Hindu temples dedicated to Lord Shiva. It is located in Vishwanath Gali and is a major pilgrimage site.".into(),
			hours: "3:00 AM - 11:00 PM".into(),
			entry_fee: "Free (Donations welcome)".into(),
			rating: 4.8,
			location: Location {
				lat: 25.3109,
				lng: 83.0108,
			},
		},
		Place {
			id: "dashashwamedh-ghat".into(),
			name: "Dashashwamedh Ghat".into(),
			category: PlaceCategory::Ghat,
			images: vec![
				unsplash("1763186534248-d0de60fd81e2"),
				unsplash("1652396507015-74b259a6f58d"),
			],
			description: "The main ghat in Varanasi on the Ganges River. Famous for the daily Ganga Aarti ceremony held every evening, attracting thousands of visitors.".into(),
			hours: "Open 24/7 (Aarti: 6:00 PM - 7:00 PM)".into(),
			entry_fee: "Free".into(),
			rating: 4.9,
			location: Location {
				lat: 25.3069,
				lng: 83.0107,
			},
		},
		Place {
			id: "ramnagar-fort".into(),
			name: "Ramnagar Fort".into(),
			category: PlaceCategory::Fort,
			images: vec![unsplash("1694791223523-ad242e6ba093")],
			description: "An 18th-century fort located on the eastern bank of the Ganges. It houses a museum with vintage cars, royal artifacts, and weaponry.".into(),
			hours: "10:00 AM - 5:00 PM (Closed on Mondays)".into(),
			entry_fee: "₹50 (Indians), ₹200 (Foreigners)".into(),
			rating: 4.5,
			location: Location {
				lat: 25.2826,
				lng: 83.0534,
			},
		},
	]
}

fn foods() -> Vec<Food> {
	vec![
		Food {
			id: "kachori-sabzi".into(),
			name: "Kachori Sabzi".into(),
			image: unsplash("1616787700988-44c85b2ffcf5"),
			description: "A traditional Varanasi breakfast dish featuring crispy, spiced kachori served with flavorful potato curry. A must-try street food experience!".into(),
			best_places: strings(&[
				"Deena Chaat Bhandar",
				"Kashi Chaat Bhandar",
				"Ram Bhandar near Dashashwamedh Ghat",
			]),
			rating: 4.8,
			price: "₹30-50".into(),
		},
		Food {
			id: "banarasi-paan".into(),
			name: "Banarasi Paan".into(),
			image: unsplash("1723770865841-e4b3ee3f0ac0"),
			description: "The world-famous Banarasi Paan is a sweet betel leaf preparation filled with various ingredients. It's the perfect way to end your meal in Varanasi!".into(),
			best_places: strings(&[
				"Tambul Kendra (Keshav Paan)",
				"Pradhan Paan Bhandar",
				"Vishwanath Gali Paan Shops",
			]),
			rating: 4.9,
			price: "₹50-200".into(),
		},
		Food {
			id: "malaiyyo".into(),
			name: "Malaiyyo (Malaiyo)".into(),
			image: unsplash("1695712535779-7ee863e4a54c"),
			description: "A seasonal winter delicacy made from milk foam, sugar, and saffron. Light as air and melts in your mouth - truly a unique Varanasi experience!".into(),
			best_places: strings(&[
				"Pahalwan Lassi (also serves Malaiyo)",
				"Street vendors near Assi Ghat (Winter only)",
				"Kashi Chat Bhandar",
			]),
			rating: 4.7,
			price: "₹40-80".into(),
		},
	]
}

fn guides() -> Vec<Guide> {
	let portrait = unsplash("1763643206968-527acd7b690a");
	vec![
		Guide {
			id: "guide-1".into(),
			name: "Rajesh Kumar Pandey".into(),
			image: portrait.clone(),
			languages: strings(&["Hindi", "English", "French", "Spanish"]),
			experience: "15 Years".into(),
			rating: 4.9,
			specializations: strings(&["Temple Tours", "Ghat Walks", "Spiritual Heritage"]),
			phone: "+91-9876543210".into(),
			whatsapp: "+91-9876543210".into(),
			email: "rajesh.guide@varanasi.com".into(),
			price_range: "₹1500-3000/day".into(),
		},
		Guide {
			id: "guide-2".into(),
			name: "Anita Sharma".into(),
			image: portrait.clone(),
			languages: strings(&["Hindi", "English", "German", "Japanese"]),
			experience: "10 Years".into(),
			rating: 4.8,
			specializations: strings(&["Food Tours", "Photography Walks", "Cultural Tours"]),
			phone: "+91-9876543211".into(),
			whatsapp: "+91-9876543211".into(),
			email: "anita.guide@varanasi.com".into(),
			price_range: "₹1200-2500/day".into(),
		},
		Guide {
			id: "guide-3".into(),
			name: "Mohit Verma".into(),
			image: portrait,
			languages: strings(&["Hindi", "English", "Italian"]),
			experience: "8 Years".into(),
			rating: 4.7,
			specializations: strings(&["Historical Sites", "Boat Tours", "Sunrise Tours"]),
			phone: "+91-9876543212".into(),
			whatsapp: "+91-9876543212".into(),
			email: "mohit.guide@varanasi.com".into(),
			price_range: "₹1000-2200/day".into(),
		},
	]
}

fn transport() -> Vec<TransportMode> {
	let rickshaw = unsplash("1626491058156-2daaeea7f578");
	vec![
		TransportMode {
			id: "auto-rickshaw".into(),
			name: "Auto-rickshaw".into(),
			image: rickshaw.clone(),
			description: "The most common and convenient mode of transport in Varanasi for short to medium distances.".into(),
			fare: "₹30-200 (depending on distance)".into(),
			availability: "24/7".into(),
			best_for: strings(&[
				"Quick trips within the city",
				"Traveling with luggage",
				"Groups of 2-3 people",
				"Night travel (safer option)",
			]),
			tips: strings(&[
				"Always negotiate fare before starting the journey",
				"Use ride-sharing apps like Ola/Uber for fixed rates",
				"Keep small change handy",
				"Expect to pay extra after 10 PM",
			]),
		},
		TransportMode {
			id: "e-rickshaw".into(),
			name: "E-rickshaw".into(),
			image: rickshaw.clone(),
			description: "Eco-friendly electric rickshaws perfect for short distances and narrow lanes in old Varanasi.".into(),
			fare: "₹10-50 (very economical)".into(),
			availability: "6 AM - 10 PM".into(),
			best_for: strings(&[
				"Short distances (1-3 km)",
				"Exploring narrow lanes",
				"Budget-friendly travel",
				"Eco-conscious travelers",
			]),
			tips: strings(&[
				"Ideal for traveling within ghat areas",
				"Cannot carry heavy luggage",
				"Slower than auto-rickshaws",
				"Fixed routes and stops available",
			]),
		},
		TransportMode {
			id: "boat-rides".into(),
			name: "Boat Rides".into(),
			image: unsplash("1652396507015-74b259a6f58d"),
			description: "Experience Varanasi from the sacred Ganges River - a must-do activity offering unique views of the ghats.".into(),
			fare: "₹100-500 per person (1-2 hour ride)".into(),
			availability: "Sunrise (5 AM) and Evening rides (4-7 PM) are most popular".into(),
			best_for: strings(&[
				"Sunrise/sunset views",
				"Photography enthusiasts",
				"Spiritual experience",
				"Viewing multiple ghats",
			]),
			tips: strings(&[
				"Book in advance during peak season",
				"Negotiate group rates for better prices",
				"Sunrise boat rides are magical",
				"Bring camera for stunning photos",
			]),
		},
		TransportMode {
			id: "taxi-cab".into(),
			name: "Taxi & Cab Services".into(),
			image: rickshaw,
			description: "Comfortable air-conditioned cabs for longer journeys, airport transfers, and outstation trips.".into(),
			fare: "₹300-1000+ (based on distance)".into(),
			availability: "24/7 (Book via apps)".into(),
			best_for: strings(&[
				"Airport/Railway station transfers",
				"Day trips to Sarnath",
				"Comfortable long-distance travel",
				"Groups of 4-6 people",
			]),
			tips: strings(&[
				"Use Ola/Uber for transparent pricing",
				"Book cabs for full-day city tours",
				"More expensive but comfortable",
				"AC available for comfort",
			]),
		},
	]
}

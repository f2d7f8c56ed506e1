use std::fmt::Write;

use anyhow::Result;
use serde_json::json;
use yatra::SessionOutcome;

/// Render the session summary as plain text.
pub(crate) fn format_plain(outcome: &SessionOutcome) -> String {
	let mut text = String::new();
	if !outcome.query.is_empty() {
		let _ = writeln!(text, "Last search: '{}'", outcome.query);
	}

	if outcome.links.is_empty() {
		let _ = writeln!(text, "No links opened");
	} else {
		let _ = writeln!(text, "Links:");
		for link in &outcome.links {
			let _ = writeln!(text, "  {link}");
		}
	}

	if outcome.inquiries.is_empty() {
		let _ = writeln!(text, "No inquiries submitted");
	} else {
		let _ = writeln!(text, "Inquiries:");
		for inquiry in &outcome.inquiries {
			let _ = writeln!(
				text,
				"  {} <{}> on {} for {}",
				inquiry.name, inquiry.email, inquiry.tour_date, inquiry.number_of_people
			);
		}
	}
	text
}

/// Print a plain-text representation of the session outcome.
pub(crate) fn print_plain(outcome: &SessionOutcome) {
	print!("{}", format_plain(outcome));
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SessionOutcome) -> Result<String> {
	let payload = json!({
		"query": outcome.query,
		"links": outcome.links,
		"inquiries": outcome.inquiries,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &SessionOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

use serde::Serialize;

use crate::inquiry::Inquiry;
use crate::links::Link;

/// What happened during one interactive session, reported on exit.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionOutcome {
	/// Search text at exit.
	pub query: String,
	/// Links the user asked to open, oldest first.
	pub links: Vec<Link>,
	/// Inquiries that were accepted locally.
	pub inquiries: Vec<Inquiry>,
}

//! Guide booking inquiry form.
//!
//! The form moves between two states. While [`FormState::Editing`], fields
//! accept input and a submit attempt validates them the way the original web
//! form's input types did. A well-formed inquiry is handed to a
//! [`SubmissionSink`]; once accepted the form shows its acknowledgement
//! ([`FormState::Submitted`]) until the reset delay elapses, at which point
//! every field is cleared and editing starts over.

use std::fmt;
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::FormError;
use crate::timer::Timeout;

/// Delay between an accepted submission and the form clearing itself.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(3000);

/// Named inputs of the inquiry form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
	Name,
	Email,
	Phone,
	TourDate,
	NumberOfPeople,
	Message,
}

impl FormField {
	pub const ALL: [FormField; 6] = [
		Self::Name,
		Self::Email,
		Self::Phone,
		Self::TourDate,
		Self::NumberOfPeople,
		Self::Message,
	];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Name => "Your Name",
			Self::Email => "Email Address",
			Self::Phone => "Phone Number",
			Self::TourDate => "Preferred Tour Date",
			Self::NumberOfPeople => "Number of People",
			Self::Message => "Additional Message",
		}
	}

	#[must_use]
	pub fn placeholder(self) -> &'static str {
		match self {
			Self::Name => "Enter your name",
			Self::Email => "your@email.com",
			Self::Phone => "+91-XXXXXXXXXX",
			Self::TourDate => "YYYY-MM-DD",
			Self::NumberOfPeople => "How many people?",
			Self::Message => "Any specific requirements or questions...",
		}
	}

	#[must_use]
	pub fn is_required(self) -> bool {
		!matches!(self, Self::Message)
	}

	#[must_use]
	pub fn next(self) -> Self {
		let position = Self::ALL.iter().position(|field| *field == self).unwrap_or(0);
		Self::ALL[(position + 1) % Self::ALL.len()]
	}

	#[must_use]
	pub fn prev(self) -> Self {
		let position = Self::ALL.iter().position(|field| *field == self).unwrap_or(0);
		Self::ALL[(position + Self::ALL.len() - 1) % Self::ALL.len()]
	}
}

impl fmt::Display for FormField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Values entered into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Inquiry {
	pub name: String,
	pub email: String,
	pub phone: String,
	pub tour_date: String,
	pub number_of_people: String,
	pub message: String,
}

impl Inquiry {
	#[must_use]
	pub fn field(&self, field: FormField) -> &str {
		match field {
			FormField::Name => &self.name,
			FormField::Email => &self.email,
			FormField::Phone => &self.phone,
			FormField::TourDate => &self.tour_date,
			FormField::NumberOfPeople => &self.number_of_people,
			FormField::Message => &self.message,
		}
	}

	pub fn field_mut(&mut self, field: FormField) -> &mut String {
		match field {
			FormField::Name => &mut self.name,
			FormField::Email => &mut self.email,
			FormField::Phone => &mut self.phone,
			FormField::TourDate => &mut self.tour_date,
			FormField::NumberOfPeople => &mut self.number_of_people,
			FormField::Message => &mut self.message,
		}
	}

	/// Check required fields first, in display order, then field formats.
	pub fn validate(&self) -> Result<(), FormError> {
		if let Some(missing) = FormField::ALL
			.into_iter()
			.find(|field| field.is_required() && self.field(*field).trim().is_empty())
		{
			return Err(FormError::MissingField(missing));
		}

		if !is_email(self.email.trim()) {
			return Err(FormError::InvalidField {
				field: FormField::Email,
				reason: "enter an email address like name@example.com",
			});
		}

		if NaiveDate::parse_from_str(self.tour_date.trim(), "%Y-%m-%d").is_err() {
			return Err(FormError::InvalidField {
				field: FormField::TourDate,
				reason: "enter a date as YYYY-MM-DD",
			});
		}

		match self.number_of_people.trim().parse::<u32>() {
			Ok(count) if count >= 1 => Ok(()),
			_ => Err(FormError::InvalidField {
				field: FormField::NumberOfPeople,
				reason: "enter a whole number of at least 1",
			}),
		}
	}
}

fn is_email(value: &str) -> bool {
	match value.split_once('@') {
		Some((local, domain)) => {
			!local.is_empty()
				&& !domain.is_empty()
				&& !domain.contains('@')
				&& !value.contains(char::is_whitespace)
		}
		None => false,
	}
}

/// Answer from the collaborator that delivers inquiries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
	Accepted,
	Rejected(String),
}

/// Destination for well-formed inquiries.
pub trait SubmissionSink {
	fn submit(&mut self, inquiry: &Inquiry) -> SubmissionResult;
}

/// Sink that acknowledges every inquiry locally and keeps a copy for the
/// session summary.
#[derive(Debug, Default)]
pub struct LocalAcknowledgement {
	received: Vec<Inquiry>,
}

impl LocalAcknowledgement {
	#[must_use]
	pub fn received(&self) -> &[Inquiry] {
		&self.received
	}

	#[must_use]
	pub fn into_received(self) -> Vec<Inquiry> {
		self.received
	}
}

impl SubmissionSink for LocalAcknowledgement {
	fn submit(&mut self, inquiry: &Inquiry) -> SubmissionResult {
		info!(
			name = %inquiry.name,
			tour_date = %inquiry.tour_date,
			people = %inquiry.number_of_people,
			"inquiry acknowledged"
		);
		self.received.push(inquiry.clone());
		SubmissionResult::Accepted
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
	Editing,
	Submitted,
}

/// What a submit attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// The sink accepted the inquiry; the acknowledgement is showing.
	Submitted,
	/// The sink declined; fields are kept for another attempt.
	Rejected(String),
	/// An acknowledgement is already showing.
	Ignored,
}

/// State machine behind the inquiry form.
#[derive(Debug)]
pub struct InquiryForm {
	fields: Inquiry,
	focus: FormField,
	state: FormState,
	reset: Timeout,
	reset_delay: Duration,
	hint: Option<String>,
}

impl Default for InquiryForm {
	fn default() -> Self {
		Self::new(DEFAULT_RESET_DELAY)
	}
}

impl InquiryForm {
	#[must_use]
	pub fn new(reset_delay: Duration) -> Self {
		Self {
			fields: Inquiry::default(),
			focus: FormField::Name,
			state: FormState::Editing,
			reset: Timeout::idle(),
			reset_delay,
			hint: None,
		}
	}

	#[must_use]
	pub fn fields(&self) -> &Inquiry {
		&self.fields
	}

	#[must_use]
	pub fn focus(&self) -> FormField {
		self.focus
	}

	#[must_use]
	pub fn state(&self) -> FormState {
		self.state
	}

	#[must_use]
	pub fn is_submitted(&self) -> bool {
		self.state == FormState::Submitted
	}

	/// Validation or rejection message from the last submit attempt.
	#[must_use]
	pub fn hint(&self) -> Option<&str> {
		self.hint.as_deref()
	}

	/// Time left before the acknowledgement clears.
	#[must_use]
	pub fn reset_remaining(&self, now: Instant) -> Option<Duration> {
		self.reset.remaining(now)
	}

	pub fn focus_next(&mut self) {
		self.focus = self.focus.next();
	}

	pub fn focus_prev(&mut self) {
		self.focus = self.focus.prev();
	}

	pub fn set_focus(&mut self, field: FormField) {
		self.focus = field;
	}

	/// Replace a field value. Ignored while the acknowledgement is showing.
	pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
		if self.state == FormState::Editing {
			*self.fields.field_mut(field) = value.into();
		}
	}

	/// Append a character to the focused field.
	pub fn insert_char(&mut self, ch: char) {
		if self.state == FormState::Editing {
			self.fields.field_mut(self.focus).push(ch);
			self.hint = None;
		}
	}

	/// Remove the last character of the focused field.
	pub fn backspace(&mut self) {
		if self.state == FormState::Editing {
			self.fields.field_mut(self.focus).pop();
			self.hint = None;
		}
	}

	/// Try to submit the form.
	///
	/// A malformed form stays in [`FormState::Editing`] with its values and
	/// moves focus to the offending field.
	pub fn submit(
		&mut self,
		now: Instant,
		sink: &mut dyn SubmissionSink,
	) -> Result<SubmitOutcome, FormError> {
		if self.state == FormState::Submitted {
			return Ok(SubmitOutcome::Ignored);
		}

		if let Err(err) = self.fields.validate() {
			self.focus = match &err {
				FormError::MissingField(field) => *field,
				FormError::InvalidField { field, .. } => *field,
			};
			self.hint = Some(err.to_string());
			return Err(err);
		}

		match sink.submit(&self.fields) {
			SubmissionResult::Accepted => {
				self.state = FormState::Submitted;
				self.hint = None;
				self.reset.schedule(self.reset_delay, now);
				Ok(SubmitOutcome::Submitted)
			}
			SubmissionResult::Rejected(reason) => {
				warn!(%reason, "inquiry rejected");
				self.hint = Some(reason.clone());
				Ok(SubmitOutcome::Rejected(reason))
			}
		}
	}

	/// Clear the form once the reset delay has elapsed. Returns whether the
	/// form was reset.
	pub fn tick(&mut self, now: Instant) -> bool {
		if !self.reset.poll(now) {
			return false;
		}
		self.fields = Inquiry::default();
		self.focus = FormField::Name;
		self.state = FormState::Editing;
		self.hint = None;
		true
	}

	/// Cancel any pending reset. The form keeps whatever it currently shows.
	pub fn teardown(&mut self) {
		self.reset.cancel();
	}
}

impl Drop for InquiryForm {
	fn drop(&mut self) {
		self.teardown();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn filled() -> InquiryForm {
		let mut form = InquiryForm::default();
		form.set_field(FormField::Name, "Asha");
		form.set_field(FormField::Email, "asha@example.com");
		form.set_field(FormField::Phone, "+91-9000000000");
		form.set_field(FormField::TourDate, "2026-11-02");
		form.set_field(FormField::NumberOfPeople, "3");
		form.set_field(FormField::Message, "Sunrise boat ride please");
		form
	}

	struct Refusing;

	impl SubmissionSink for Refusing {
		fn submit(&mut self, _inquiry: &Inquiry) -> SubmissionResult {
			SubmissionResult::Rejected("no guides available".into())
		}
	}

	#[test]
	fn submit_then_reset_clears_every_field() {
		let start = Instant::now();
		let mut sink = LocalAcknowledgement::default();
		let mut form = filled();
		form.set_focus(FormField::Message);

		assert_eq!(form.submit(start, &mut sink), Ok(SubmitOutcome::Submitted));
		assert!(form.is_submitted());
		assert_eq!(sink.received().len(), 1);
		assert_eq!(sink.received()[0].name, "Asha");

		assert!(!form.tick(start + Duration::from_millis(2999)));
		assert!(form.is_submitted());

		assert!(form.tick(start + DEFAULT_RESET_DELAY));
		assert_eq!(form.state(), FormState::Editing);
		assert_eq!(form.fields(), &Inquiry::default());
		assert_eq!(form.focus(), FormField::Name);
	}

	#[test]
	fn missing_required_field_blocks_submission() {
		let start = Instant::now();
		let mut sink = LocalAcknowledgement::default();
		let mut form = filled();
		form.set_field(FormField::Phone, "   ");

		assert_eq!(
			form.submit(start, &mut sink),
			Err(FormError::MissingField(FormField::Phone))
		);
		assert_eq!(form.state(), FormState::Editing);
		assert_eq!(form.focus(), FormField::Phone);
		assert_eq!(form.fields().name, "Asha");
		assert!(sink.received().is_empty());
		assert!(!form.tick(start + Duration::from_secs(10)));
	}

	#[test]
	fn message_is_optional() {
		let mut form = filled();
		form.set_field(FormField::Message, "");
		assert_eq!(
			form.submit(Instant::now(), &mut LocalAcknowledgement::default()),
			Ok(SubmitOutcome::Submitted)
		);
	}

	#[test]
	fn field_formats_are_checked() {
		let mut inquiry = filled().fields().clone();
		inquiry.email = "asha.example.com".into();
		assert!(matches!(
			inquiry.validate(),
			Err(FormError::InvalidField {
				field: FormField::Email,
				..
			})
		));

		let mut inquiry = filled().fields().clone();
		inquiry.tour_date = "02/11/2026".into();
		assert!(matches!(
			inquiry.validate(),
			Err(FormError::InvalidField {
				field: FormField::TourDate,
				..
			})
		));

		let mut inquiry = filled().fields().clone();
		inquiry.number_of_people = "0".into();
		assert!(matches!(
			inquiry.validate(),
			Err(FormError::InvalidField {
				field: FormField::NumberOfPeople,
				..
			})
		));
	}

	#[test]
	fn rejected_submission_keeps_fields() {
		let start = Instant::now();
		let mut form = filled();

		let outcome = form.submit(start, &mut Refusing);
		assert_eq!(
			outcome,
			Ok(SubmitOutcome::Rejected("no guides available".into()))
		);
		assert_eq!(form.state(), FormState::Editing);
		assert_eq!(form.hint(), Some("no guides available"));
		assert_eq!(form.fields().email, "asha@example.com");
	}

	#[test]
	fn input_is_ignored_while_acknowledging() {
		let start = Instant::now();
		let mut sink = LocalAcknowledgement::default();
		let mut form = filled();
		form.submit(start, &mut sink).unwrap();

		form.insert_char('x');
		form.backspace();
		assert_eq!(form.fields().name, "Asha");
		assert_eq!(form.submit(start, &mut sink), Ok(SubmitOutcome::Ignored));
		assert_eq!(sink.received().len(), 1);
	}

	#[test]
	fn teardown_cancels_pending_reset() {
		let start = Instant::now();
		let mut form = filled();
		form.submit(start, &mut LocalAcknowledgement::default()).unwrap();
		form.teardown();

		assert!(!form.tick(start + Duration::from_secs(60)));
		assert!(form.is_submitted());
	}

	#[test]
	fn typing_edits_the_focused_field() {
		let mut form = InquiryForm::default();
		form.focus_next();
		for ch in "me@x.in".chars() {
			form.insert_char(ch);
		}
		form.backspace();
		assert_eq!(form.fields().email, "me@x.i");
		form.focus_prev();
		form.focus_prev();
		assert_eq!(form.focus(), FormField::Message);
	}

	#[test]
	fn any_edit_clears_validation_hint() {
		let mut sink = LocalAcknowledgement::default();
		let mut form = InquiryForm::default();
		form.set_field(FormField::Name, "Asha");
		assert!(form.submit(Instant::now(), &mut sink).is_err());
		assert_eq!(form.hint(), Some("Email Address is required"));
		assert_eq!(form.focus(), FormField::Email);

		form.set_focus(FormField::Name);
		form.backspace();
		assert_eq!(form.fields().name, "Ash");
		assert_eq!(form.hint(), None);

		assert!(form.submit(Instant::now(), &mut sink).is_err());
		form.insert_char('x');
		assert_eq!(form.hint(), None);
	}
}

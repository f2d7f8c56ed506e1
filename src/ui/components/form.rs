use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::inquiry::{FormField, InquiryForm};
use crate::ui::content::{CONTACT, INQUIRY_ACKNOWLEDGED, INQUIRY_INTRO, INQUIRY_THANKS, INQUIRY_TITLE};
use crate::ui::state::{HitMap, Target};
use crate::ui::theme::Theme;

const SUBMIT_BUTTON: &str = "[ Submit Inquiry ]";
/// Widest field label plus the required marker.
const LABEL_WIDTH: usize = 22;

/// Argument bundle for the inquiry form card.
pub(crate) struct FormContext<'a> {
	pub form: &'a InquiryForm,
	/// Whether key presses currently go to the form.
	pub focused: bool,
	pub now: Instant,
	pub throbber_state: &'a ThrobberState,
	pub area: Rect,
	pub theme: &'a Theme,
}

pub(crate) fn render_form(frame: &mut Frame, ctx: FormContext<'_>, hits: &mut HitMap) {
	let FormContext {
		form,
		focused,
		now,
		throbber_state,
		area,
		theme,
	} = ctx;

	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(if focused {
			theme.highlight_style()
		} else {
			theme.prompt_style()
		})
		.title(Span::styled(format!(" {INQUIRY_TITLE} "), theme.highlight_style()));
	let inner = block.inner(area);
	frame.render_widget(block, area);
	if inner.height == 0 || inner.width == 0 {
		return;
	}

	if form.is_submitted() {
		render_acknowledgement(frame, inner, form, now, throbber_state, theme);
		return;
	}

	let mut y = inner.y;
	let bottom = inner.bottom();
	if y < bottom {
		frame.render_widget(
			Paragraph::new(INQUIRY_INTRO).style(theme.empty_style()),
			Rect::new(inner.x, y, inner.width, 1),
		);
		y += 2;
	}

	for field in FormField::ALL {
		if y >= bottom {
			return;
		}
		let row = Rect::new(inner.x, y, inner.width, 1);
		let is_focused = focused && form.focus() == field;
		render_field(frame, row, form, field, is_focused, theme);
		hits.push(row, Target::FormField(field));
		y += 1;
	}

	y += 1;
	if y < bottom {
		let width = (SUBMIT_BUTTON.width() as u16).min(inner.width);
		let button = Rect::new(inner.x, y, width, 1);
		frame.render_widget(Paragraph::new(SUBMIT_BUTTON).style(theme.header_style()), button);
		hits.push(button, Target::FormSubmit);
		y += 1;
	}

	if let Some(hint) = form.hint()
		&& y < bottom
	{
		frame.render_widget(
			Paragraph::new(hint.to_string()).style(theme.accent_style()),
			Rect::new(inner.x, y, inner.width, 1),
		);
		y += 1;
	}

	if y + 1 < bottom {
		let contact = CONTACT
			.iter()
			.map(|line| Line::from(Span::styled(*line, theme.empty_style())))
			.collect::<Vec<_>>();
		frame.render_widget(
			Paragraph::new(contact),
			Rect::new(inner.x, y + 1, inner.width, bottom - y - 1),
		);
	}
}

fn render_field(
	frame: &mut Frame,
	row: Rect,
	form: &InquiryForm,
	field: FormField,
	focused: bool,
	theme: &Theme,
) {
	let marker = if field.is_required() { " *" } else { "" };
	let label = format!("{}{marker}:", field.label());
	let label = format!("{label:<LABEL_WIDTH$} ");
	let value = form.fields().field(field);

	let mut spans = vec![Span::styled(label.clone(), theme.prompt_style())];
	if value.is_empty() {
		spans.push(Span::styled(field.placeholder(), theme.empty_style()));
	} else {
		spans.push(Span::raw(value.to_string()));
	}
	let mut line = Line::from(spans);
	if focused {
		line = line.style(theme.row_highlight_style());
	}
	frame.render_widget(Paragraph::new(line), row);

	if focused {
		let offset = if value.is_empty() { 0 } else { value.width() };
		let x = row
			.x
			.saturating_add((label.width() + offset) as u16)
			.min(row.right().saturating_sub(1));
		frame.set_cursor_position(Position::new(x, row.y));
	}
}

fn render_acknowledgement(
	frame: &mut Frame,
	area: Rect,
	form: &InquiryForm,
	now: Instant,
	throbber_state: &ThrobberState,
	theme: &Theme,
) {
	let mut lines = vec![
		Line::default(),
		Line::from(Span::styled(
			INQUIRY_THANKS,
			theme.success_style().add_modifier(Modifier::BOLD),
		)),
		Line::from(INQUIRY_ACKNOWLEDGED),
		Line::default(),
	];
	if let Some(remaining) = form.reset_remaining(now) {
		let spinner = Throbber::default()
			.style(theme.empty_style())
			.throbber_style(theme.empty_style())
			.to_symbol_span(throbber_state);
		lines.push(Line::from(vec![
			spinner,
			Span::styled(
				format!("form clears in {}s", remaining.as_millis().div_ceil(1000)),
				theme.empty_style(),
			),
		]));
	}
	frame.render_widget(
		Paragraph::new(lines)
			.alignment(Alignment::Center)
			.wrap(Wrap { trim: true }),
		area,
	);
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;
	use crate::inquiry::LocalAcknowledgement;

	fn draw(form: &InquiryForm, now: Instant, hits: &mut HitMap) -> String {
		let throbber_state = ThrobberState::default();
		let theme = Theme::default();
		let mut terminal = Terminal::new(TestBackend::new(70, 20)).unwrap();
		terminal
			.draw(|frame| {
				let ctx = FormContext {
					form,
					focused: true,
					now,
					throbber_state: &throbber_state,
					area: frame.area(),
					theme: &theme,
				};
				render_form(frame, ctx, hits);
			})
			.unwrap();
		let buffer = terminal.backend().buffer();
		let mut text = String::new();
		for y in 0..buffer.area.height {
			for x in 0..buffer.area.width {
				text.push_str(buffer[(x, y)].symbol());
			}
			text.push('\n');
		}
		text
	}

	#[test]
	fn editing_form_lists_fields_and_hint() {
		let mut form = InquiryForm::new(Duration::from_secs(3));
		let now = Instant::now();
		let _ = form.submit(now, &mut LocalAcknowledgement::default());
		let mut hits = HitMap::default();
		let text = draw(&form, now, &mut hits);

		assert!(text.contains("Your Name *:"));
		assert!(text.contains("Additional Message:"));
		assert!(text.contains("your@email.com"));
		assert!(text.contains("Your Name is required"));
		// Border, intro, blank line, then the six fields.
		assert_eq!(hits.target_at(5, 3), Some(Target::FormField(FormField::Name)));
		assert_eq!(hits.target_at(5, 8), Some(Target::FormField(FormField::Message)));
		assert_eq!(hits.target_at(5, 10), Some(Target::FormSubmit));
	}

	#[test]
	fn submitted_form_shows_acknowledgement() {
		let mut form = InquiryForm::new(Duration::from_secs(3));
		for field in FormField::ALL {
			form.set_field(field, "x");
		}
		form.set_field(FormField::Email, "guest@example.com");
		form.set_field(FormField::Phone, "+91-9876543210");
		form.set_field(FormField::TourDate, "2026-11-02");
		form.set_field(FormField::NumberOfPeople, "2");
		let now = Instant::now();
		form.submit(now, &mut LocalAcknowledgement::default()).unwrap();

		let mut hits = HitMap::default();
		let text = draw(&form, now, &mut hits);
		assert!(text.contains(INQUIRY_THANKS));
		assert!(text.contains("form clears in 3s"));
		assert_eq!(hits.target_at(5, 3), None);
	}
}

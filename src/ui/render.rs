use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Row, Wrap};
use unicode_width::UnicodeWidthStr;

use super::App;
use super::components::{
	FormContext, HeaderContext, TableSpec, rating_label, render_categories, render_detail,
	render_form, render_header, render_hero, render_table,
};
use super::config::Tab;
use super::content::{FOOD_TIPS, FOOD_TIPS_TITLE, TRAVEL_GUIDELINES, TRAVEL_GUIDELINES_TITLE};
use super::state::{GuidesFocus, Target};

/// Header row plus divider drawn by the table widget.
const HEADER_AND_DIVIDER_HEIGHT: u16 = 2;
const DETAIL_HINT: &str = "←/→ image · 1-9 jump · g directions · m map · Esc close";
const FORM_HINT: &str = "Tab/↑/↓ field · Enter submit · Esc back to guides";
const CALL_BUTTON: &str = "[ c Call ]";
const MESSAGE_BUTTON: &str = "[ w WhatsApp ]";

impl App {
	/// Render the whole screen and record the clickable regions.
	pub fn draw(&mut self, frame: &mut Frame) {
		self.draw_at(frame, Instant::now());
	}

	pub(crate) fn draw_at(&mut self, frame: &mut Frame, now: Instant) {
		self.hits.clear();
		let full = frame.area();
		let area = full.inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(1),
				Constraint::Length(1),
			])
			.split(area);

		let detail_open = self.is_detail_open();
		let header = HeaderContext {
			query: &self.query,
			active: self.tab,
			editing: self.tab.is_searchable() && !detail_open,
			ui: &self.ui,
			area: layout[0],
			theme: &self.theme,
		};
		render_header(frame, header, &mut self.hits);

		if self.tab != Tab::Home {
			let title = self.ui.pane(self.tab).title.clone();
			frame.render_widget(
				Paragraph::new(title).style(self.theme.highlight_style().add_modifier(Modifier::BOLD)),
				layout[1],
			);
		}

		let body = layout[2];
		match self.tab {
			Tab::Home => render_hero(frame, body, &self.hero, &self.theme, &mut self.hits),
			Tab::Places => self.render_places(frame, body),
			Tab::Food => self.render_food(frame, body),
			Tab::Transport => self.render_transport(frame, body),
			Tab::Guides => self.render_guides(frame, body, now),
		}

		self.render_footer(frame, layout[3]);

		match self.tab {
			Tab::Places => {
				if let Some((place, gallery)) = self.places.detail() {
					render_detail(frame, area, place, gallery, &self.theme, &mut self.hits);
				}
			}
			Tab::Food => {
				if let Some((food, gallery)) = self.foods.detail() {
					render_detail(frame, area, food, gallery, &self.theme, &mut self.hits);
				}
			}
			_ => {}
		}
	}

	fn render_places(&mut self, frame: &mut Frame, area: Rect) {
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Length(2), Constraint::Min(1)])
			.split(area);
		render_categories(
			frame,
			Rect::new(layout[0].x, layout[0].y, layout[0].width, 1),
			self.places.category(),
			&self.theme,
			&mut self.hits,
		);

		let rows = self
			.places
			.visible()
			.map(|(_, place)| {
				Row::new(vec![
					place.name.clone(),
					place.category.label().to_string(),
					rating_label(place.rating),
					place.entry_fee.clone(),
					place.hours.clone(),
				])
			})
			.collect();
		let spec = TableSpec {
			headers: vec!["Place", "Category", "Rating", "Entry Fee", "Hours"],
			widths: vec![
				Constraint::Percentage(28),
				Constraint::Length(10),
				Constraint::Length(7),
				Constraint::Percentage(22),
				Constraint::Fill(1),
			],
			rows,
		};
		render_table(
			frame,
			layout[1],
			self.places.highlighted(),
			spec,
			&self.theme,
			&mut self.hits,
		);
		if self.places.is_empty() {
			self.render_empty(frame, layout[1], &self.ui.places_empty);
		}
	}

	fn render_food(&mut self, frame: &mut Frame, area: Rect) {
		let tips_height = FOOD_TIPS.len() as u16 * 2 + 2;
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Min(4), Constraint::Length(tips_height)])
			.split(area);

		let rows = self
			.foods
			.visible()
			.map(|(_, food)| {
				Row::new(vec![
					food.name.clone(),
					food.price.clone(),
					rating_label(food.rating),
					food.best_places.join(", "),
				])
			})
			.collect();
		let spec = TableSpec {
			headers: vec!["Dish", "Price", "Rating", "Best Places to Try"],
			widths: vec![
				Constraint::Percentage(25),
				Constraint::Length(10),
				Constraint::Length(7),
				Constraint::Fill(1),
			],
			rows,
		};
		render_table(
			frame,
			layout[0],
			self.foods.highlighted(),
			spec,
			&self.theme,
			&mut self.hits,
		);
		if self.foods.is_empty() {
			self.render_empty(frame, layout[0], &self.ui.food_empty);
		}

		self.render_card(frame, layout[1], FOOD_TIPS_TITLE, &FOOD_TIPS);
	}

	fn render_transport(&mut self, frame: &mut Frame, area: Rect) {
		let guidelines_height = TRAVEL_GUIDELINES.len() as u16 * 2 + 2;
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Min(6), Constraint::Length(guidelines_height)])
			.split(area);
		let top = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
			.split(layout[0]);

		let modes = &self.catalogs.transport;
		let rows = modes
			.iter()
			.map(|mode| {
				Row::new(vec![
					mode.name.clone(),
					mode.fare.clone(),
					mode.availability.clone(),
				])
			})
			.collect();
		let spec = TableSpec {
			headers: vec!["Mode", "Fare", "Availability"],
			widths: vec![
				Constraint::Length(14),
				Constraint::Fill(1),
				Constraint::Length(13),
			],
			rows,
		};
		render_table(
			frame,
			top[0],
			Some(self.transport_row).filter(|row| *row < modes.len()),
			spec,
			&self.theme,
			&mut self.hits,
		);

		if let Some(mode) = modes.get(self.transport_row) {
			let theme = &self.theme;
			let mut lines = vec![
				Line::from(mode.description.clone()),
				Line::default(),
				Line::from(vec![
					Span::styled("Fare: ", theme.prompt_style()),
					Span::raw(mode.fare.clone()),
				]),
				Line::from(vec![
					Span::styled("Availability: ", theme.prompt_style()),
					Span::raw(mode.availability.clone()),
				]),
				Line::default(),
				Line::from(Span::styled("Best For:", theme.highlight_style())),
			];
			lines.extend(mode.best_for.iter().map(|item| Line::from(format!("  ✓ {item}"))));
			lines.push(Line::from(Span::styled("Travel Tips:", theme.highlight_style())));
			lines.extend(mode.tips.iter().map(|tip| Line::from(format!("  • {tip}"))));
			let block = Block::default()
				.borders(Borders::ALL)
				.border_style(theme.prompt_style())
				.title(Span::styled(format!(" {} ", mode.name), theme.highlight_style()));
			frame.render_widget(
				Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
				top[1],
			);
		}

		self.render_card(frame, layout[1], TRAVEL_GUIDELINES_TITLE, &TRAVEL_GUIDELINES);
	}

	fn render_guides(&mut self, frame: &mut Frame, area: Rect, now: Instant) {
		let columns = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
			.split(area);

		let guides = &self.catalogs.guides;
		let table_height = guides.len() as u16 + HEADER_AND_DIVIDER_HEIGHT + 1;
		let left = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Length(table_height), Constraint::Min(3)])
			.split(columns[0]);

		let rows = guides
			.iter()
			.map(|guide| {
				Row::new(vec![
					guide.name.clone(),
					guide.experience.clone(),
					rating_label(guide.rating),
					guide.price_range.clone(),
				])
			})
			.collect();
		let spec = TableSpec {
			headers: vec!["Guide", "Experience", "Rating", "Price"],
			widths: vec![
				Constraint::Fill(1),
				Constraint::Length(10),
				Constraint::Length(7),
				Constraint::Length(15),
			],
			rows,
		};
		let list_focused = self.guides_focus == GuidesFocus::List;
		render_table(
			frame,
			left[0],
			Some(self.guide_row).filter(|row| list_focused && *row < guides.len()),
			spec,
			&self.theme,
			&mut self.hits,
		);

		if let Some(guide) = guides.get(self.guide_row) {
			let theme = &self.theme;
			let block = Block::default()
				.borders(Borders::ALL)
				.border_style(theme.prompt_style())
				.title(Span::styled(format!(" {} ", guide.name), theme.highlight_style()));
			let inner = block.inner(left[1]);
			frame.render_widget(block, left[1]);

			let lines = vec![
				Line::from(vec![
					Span::styled("Languages: ", theme.prompt_style()),
					Span::raw(guide.languages.join(", ")),
				]),
				Line::from(vec![
					Span::styled("Specializations: ", theme.prompt_style()),
					Span::raw(guide.specializations.join(", ")),
				]),
				Line::from(vec![
					Span::styled("Phone: ", theme.prompt_style()),
					Span::raw(guide.phone.clone()),
				]),
				Line::from(vec![
					Span::styled("Email: ", theme.prompt_style()),
					Span::raw(guide.email.clone()),
				]),
			];
			let text_height = inner.height.saturating_sub(2);
			frame.render_widget(
				Paragraph::new(lines).wrap(Wrap { trim: true }),
				Rect::new(inner.x, inner.y, inner.width, text_height),
			);

			if inner.height >= 1 {
				let y = inner.bottom() - 1;
				let call_width = (CALL_BUTTON.width() as u16).min(inner.width);
				let call = Rect::new(inner.x, y, call_width, 1);
				let message_x = call.right().saturating_add(2);
				let message_width =
					(MESSAGE_BUTTON.width() as u16).min(inner.right().saturating_sub(message_x));
				let message = Rect::new(message_x, y, message_width, 1);
				frame.render_widget(Paragraph::new(CALL_BUTTON).style(theme.header_style()), call);
				frame.render_widget(
					Paragraph::new(MESSAGE_BUTTON).style(theme.success_style()),
					message,
				);
				self.hits.push(call, Target::Call(self.guide_row));
				self.hits.push(message, Target::Message(self.guide_row));
			}
		}

		let ctx = FormContext {
			form: &self.form,
			focused: self.guides_focus == GuidesFocus::Form,
			now,
			throbber_state: &self.throbber_state,
			area: columns[1],
			theme: &self.theme,
		};
		render_form(frame, ctx, &mut self.hits);
	}

	fn render_empty(&self, frame: &mut Frame, area: Rect, message: &str) {
		if area.height <= HEADER_AND_DIVIDER_HEIGHT {
			return;
		}
		let message_area = Rect::new(
			area.x,
			area.y + HEADER_AND_DIVIDER_HEIGHT,
			area.width,
			area.height - HEADER_AND_DIVIDER_HEIGHT,
		);
		let empty = Paragraph::new(message.to_string())
			.alignment(Alignment::Center)
			.style(self.theme.empty_style());
		frame.render_widget(Clear, message_area);
		frame.render_widget(empty, message_area);
	}

	/// Titled card of `(heading, text)` pairs.
	fn render_card(&self, frame: &mut Frame, area: Rect, title: &str, entries: &[(&str, &str)]) {
		let theme = &self.theme;
		let lines = entries
			.iter()
			.map(|(heading, text)| {
				Line::from(vec![
					Span::styled(format!("{heading}: "), theme.highlight_style()),
					Span::raw(*text),
				])
			})
			.collect::<Vec<_>>();
		let block = Block::default()
			.borders(Borders::ALL)
			.border_style(theme.prompt_style())
			.title(Span::styled(format!(" {title} "), theme.accent_style()));
		frame.render_widget(
			Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
			area,
		);
	}

	fn render_footer(&self, frame: &mut Frame, area: Rect) {
		let hint = if self.is_detail_open() {
			DETAIL_HINT
		} else if self.tab == Tab::Guides && self.guides_focus == GuidesFocus::Form {
			FORM_HINT
		} else {
			self.ui.pane(self.tab).hint.as_str()
		};

		let mut spans = vec![Span::styled(hint.to_string(), self.theme.empty_style())];
		if let Some(link) = self.links.last() {
			spans.push(Span::styled(
				format!("   {} → {}", link.kind, link.url),
				self.theme.accent_style(),
			));
		}
		frame.render_widget(Paragraph::new(Line::from(spans)), area);
	}
}

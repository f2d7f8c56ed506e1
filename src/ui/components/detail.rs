use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use super::tables::rating_label;
use crate::catalog::{CatalogItem, Food, Place};
use crate::gallery::Gallery;
use crate::links::map_embed_url;
use crate::ui::state::{HitMap, Target};
use crate::ui::theme::Theme;

const CLOSE_BUTTON: &str = "[x]";
const PREV_BUTTON: &str = "‹ prev";
const NEXT_BUTTON: &str = "next ›";
const DIRECTIONS_BUTTON: &str = "[ Get Shortest Path Directions ]";

/// Section-specific part of the detail overlay.
pub(crate) trait DetailBody: CatalogItem {
	fn body(&self, theme: &Theme) -> Vec<Line<'static>>;

	/// Whether the overlay offers a directions action.
	fn has_directions(&self) -> bool {
		false
	}
}

impl DetailBody for Place {
	fn body(&self, theme: &Theme) -> Vec<Line<'static>> {
		vec![
			field_line("Category", self.category.label().to_string(), theme),
			field_line("Visiting Hours", self.hours.clone(), theme),
			field_line("Entry Fee", self.entry_fee.clone(), theme),
			Line::default(),
			Line::from(Span::styled("Location & Map", theme.highlight_style())),
			Line::from(Span::styled(map_embed_url(self.location), theme.empty_style())),
		]
	}

	fn has_directions(&self) -> bool {
		true
	}
}

impl DetailBody for Food {
	fn body(&self, theme: &Theme) -> Vec<Line<'static>> {
		let mut lines = vec![
			field_line("Price", self.price.clone(), theme),
			Line::default(),
			Line::from(Span::styled("Best Places to Try:", theme.highlight_style())),
		];
		lines.extend(
			self.best_places
				.iter()
				.map(|place| Line::from(format!("  • {place}"))),
		);
		lines
	}
}

fn field_line(label: &str, value: String, theme: &Theme) -> Line<'static> {
	Line::from(vec![
		Span::styled(format!("{label}: "), theme.prompt_style()),
		Span::raw(value),
	])
}

/// Centered overlay area covering most of `area`.
fn overlay_area(area: Rect) -> Rect {
	let [row] = Layout::vertical([Constraint::Percentage(80)])
		.flex(Flex::Center)
		.areas(area);
	let [overlay] = Layout::horizontal([Constraint::Percentage(80)])
		.flex(Flex::Center)
		.areas(row);
	overlay
}

/// Render the detail overlay for `item` showing image `gallery.index()`.
///
/// Everything outside the overlay is left clickable as the backdrop, so a
/// click there closes it.
pub(crate) fn render_detail<T: DetailBody>(
	frame: &mut Frame,
	area: Rect,
	item: &T,
	gallery: &Gallery,
	theme: &Theme,
	hits: &mut HitMap,
) {
	let overlay = overlay_area(area);
	frame.render_widget(Clear, overlay);
	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.prompt_style())
		.title(Line::from(Span::styled(
			format!(" {} ", item.name()),
			theme.highlight_style(),
		)));
	let inner = block.inner(overlay);
	frame.render_widget(block, overlay);
	hits.push(overlay, Target::ModalBody);

	let close_width = CLOSE_BUTTON.width() as u16;
	let close = Rect::new(
		overlay.right().saturating_sub(close_width + 1),
		overlay.y,
		close_width,
		1,
	);
	frame.render_widget(Paragraph::new(CLOSE_BUTTON).style(theme.header_style()), close);
	hits.push(close, Target::ModalClose);

	if inner.height < 3 {
		return;
	}

	let rows = Layout::default()
		.direction(Direction::Vertical)
		.constraints([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Min(1),
			Constraint::Length(1),
		])
		.split(inner);

	let image = item
		.images()
		.get(gallery.index())
		.map_or("", String::as_str);
	let position = format!("Image {}/{}: ", gallery.index() + 1, gallery.len());
	frame.render_widget(
		Paragraph::new(Line::from(vec![
			Span::styled(position, theme.prompt_style()),
			Span::styled(image.to_string(), theme.empty_style()),
		])),
		rows[0],
	);

	if gallery.is_navigable() {
		render_gallery_controls(frame, rows[1], gallery, theme, hits);
	}

	frame.render_widget(
		Paragraph::new(Line::from(vec![
			Span::styled(rating_label(item.rating()), theme.accent_style()),
		])),
		rows[2],
	);

	let mut body = vec![Line::from(item.description().to_string()), Line::default()];
	body.extend(item.body(theme));
	frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: false }), rows[3]);

	if item.has_directions() {
		let width = (DIRECTIONS_BUTTON.width() as u16).min(rows[4].width);
		let button = Rect::new(rows[4].x, rows[4].y, width, 1);
		frame.render_widget(
			Paragraph::new(DIRECTIONS_BUTTON).style(theme.header_style()),
			button,
		);
		hits.push(button, Target::ModalDirections);
	}
}

fn render_gallery_controls(
	frame: &mut Frame,
	area: Rect,
	gallery: &Gallery,
	theme: &Theme,
	hits: &mut HitMap,
) {
	let mut x = area.x;
	let mut place = |frame: &mut Frame, text: String, style, target| {
		let width = (text.width() as u16).min(area.right().saturating_sub(x));
		let rect = Rect::new(x, area.y, width, 1);
		frame.render_widget(Paragraph::new(text).style(style), rect);
		hits.push(rect, target);
		x = x.saturating_add(width + 1);
	};

	place(frame, PREV_BUTTON.to_string(), theme.header_style(), Target::ModalPrev);
	for index in 0..gallery.len() {
		let style = if index == gallery.index() {
			theme.highlight_style()
		} else {
			theme.empty_style()
		};
		place(frame, format!("{}", index + 1), style, Target::ModalImage(index));
	}
	place(frame, NEXT_BUTTON.to_string(), theme.header_style(), Target::ModalNext);
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;
	use crate::catalog::CatalogSet;

	fn text(terminal: &Terminal<TestBackend>) -> String {
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
	fn place_overlay_shows_gallery_and_directions() {
		let catalogs = CatalogSet::builtin().unwrap();
		let ghat = &catalogs.places.items()[1];
		let mut gallery = Gallery::new(ghat.image_count());
		gallery.next();
		let mut hits = HitMap::default();
		let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
		terminal
			.draw(|frame| {
				render_detail(frame, frame.area(), ghat, &gallery, &Theme::default(), &mut hits)
			})
			.unwrap();

		let rendered = text(&terminal);
		assert!(rendered.contains("Dashashwamedh Ghat"));
		assert!(rendered.contains("Image 2/2"));
		assert!(rendered.contains("Get Shortest Path Directions"));
		assert!(rendered.contains("Visiting Hours"));

		// The overlay starts 10% in; the close button sits on its top border.
		assert_eq!(hits.target_at(0, 0), None);
		assert_eq!(hits.target_at(13, 4), Some(Target::ModalBody));
		assert_eq!(hits.target_at(105, 3), Some(Target::ModalClose));
	}

	#[test]
	fn single_image_food_has_no_gallery_controls() {
		let catalogs = CatalogSet::builtin().unwrap();
		let food = &catalogs.foods.items()[0];
		let gallery = Gallery::new(food.image_count());
		let mut hits = HitMap::default();
		let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
		terminal
			.draw(|frame| {
				render_detail(frame, frame.area(), food, &gallery, &Theme::default(), &mut hits)
			})
			.unwrap();

		let rendered = text(&terminal);
		assert!(rendered.contains("Image 1/1"));
		assert!(rendered.contains("Best Places to Try:"));
		assert!(!rendered.contains("next ›"));
		assert!(!rendered.contains("Directions"));
	}
}

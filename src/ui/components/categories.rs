use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::catalog::PlaceCategory;
use crate::filter::CategoryFilter;
use crate::ui::state::{HitMap, Target};
use crate::ui::theme::Theme;

fn label(filter: CategoryFilter<PlaceCategory>) -> &'static str {
	match filter {
		CategoryFilter::All => "All Places",
		CategoryFilter::Only(category) => category.label(),
	}
}

/// Render the place category buttons on a single row.
pub(crate) fn render_categories(
	frame: &mut Frame,
	area: Rect,
	selected: CategoryFilter<PlaceCategory>,
	theme: &Theme,
	hits: &mut HitMap,
) {
	let filters = std::iter::once(CategoryFilter::All)
		.chain(PlaceCategory::ALL.into_iter().map(CategoryFilter::Only));

	let mut spans = Vec::new();
	let mut x = area.x;
	for filter in filters {
		let text = format!(" {} ", label(filter));
		let width = text.width() as u16;
		let style = if filter == selected {
			theme.header_style()
		} else {
			theme.tab_inactive_style()
		};
		let visible = width.min(area.right().saturating_sub(x));
		hits.push(Rect::new(x, area.y, visible, 1), Target::Category(filter));
		spans.push(Span::styled(text, style));
		spans.push(Span::raw(" "));
		x = x.saturating_add(width + 1);
	}
	frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;

	#[test]
	fn every_category_has_a_button() {
		let mut hits = HitMap::default();
		let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
		terminal
			.draw(|frame| {
				render_categories(
					frame,
					frame.area(),
					CategoryFilter::Only(PlaceCategory::Ghat),
					&Theme::default(),
					&mut hits,
				)
			})
			.unwrap();

		let row: String = terminal
			.backend()
			.buffer()
			.content
			.iter()
			.map(|cell| cell.symbol())
			.collect();
		assert!(row.starts_with(" All Places   Temples   Ghats   Forts "));
		assert_eq!(hits.target_at(0, 0), Some(Target::Category(CategoryFilter::All)));
		assert_eq!(
			hits.target_at(23, 0),
			Some(Target::Category(CategoryFilter::Only(PlaceCategory::Ghat)))
		);
		assert_eq!(hits.target_at(59, 0), None);
	}
}

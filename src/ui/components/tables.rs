use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Cell, HighlightSpacing, Paragraph, Row, Table, TableState};

use crate::ui::state::{HitMap, Target};
use crate::ui::theme::Theme;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const TABLE_COLUMN_SPACING: u16 = 1;
/// Header row plus its bottom margin.
const HEADER_HEIGHT: u16 = 2;

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	pub headers: Vec<&'a str>,
	pub widths: Vec<Constraint>,
	pub rows: Vec<Row<'a>>,
}

/// Render a table with the highlighted row and record one click target per
/// visible row.
pub(crate) fn render_table(
	frame: &mut Frame,
	area: Rect,
	highlighted: Option<usize>,
	spec: TableSpec<'_>,
	theme: &Theme,
	hits: &mut HitMap,
) {
	let row_count = spec.rows.len();
	let header_cells = spec.headers.into_iter().map(Cell::from).collect::<Vec<_>>();
	let header = Row::new(header_cells)
		.style(theme.header_style())
		.height(1)
		.bottom_margin(1);

	let mut widths = spec.widths;
	if widths.is_empty() {
		widths = vec![Constraint::Fill(1)];
	}

	let table = Table::new(spec.rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(theme.row_highlight_style())
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	let mut state = TableState::default().with_selected(highlighted);
	frame.render_stateful_widget(table, area, &mut state);

	render_header_separator(frame, area, theme);

	let first_row_y = area.y.saturating_add(HEADER_HEIGHT);
	let visible = area.height.saturating_sub(HEADER_HEIGHT);
	for line in 0..visible {
		let row = state.offset() + usize::from(line);
		if row >= row_count {
			break;
		}
		hits.push(
			Rect::new(area.x, first_row_y + line, area.width, 1),
			Target::Row(row),
		);
	}
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	if area.height <= 1 || area.width == 0 {
		return;
	}
	let sep_rect = Rect {
		x: area.x,
		y: area.y + 1,
		width: area.width,
		height: 1,
	};
	let width = usize::from(area.width);
	let base_style = Style::new().bg(theme.header_bg());
	if width <= 2 {
		let para = Paragraph::new(" ".repeat(width)).style(base_style);
		frame.render_widget(para, sep_rect);
		return;
	}

	let middle_style = Style::new().bg(theme.header_bg()).fg(theme.header_fg());
	let spans = vec![
		Span::styled(" ", base_style),
		Span::styled("─".repeat(width - 2), middle_style),
		Span::styled(" ", base_style),
	];
	frame.render_widget(Paragraph::new(Text::from(Line::from(spans))), sep_rect);
}

/// Star rating with one decimal, e.g. `★ 4.8`.
#[must_use]
pub fn rating_label(rating: f32) -> String {
	format!("★ {rating:.1}")
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;

	#[test]
	fn rows_below_header_are_clickable() {
		let mut hits = HitMap::default();
		let mut terminal = Terminal::new(TestBackend::new(30, 6)).unwrap();
		terminal
			.draw(|frame| {
				let spec = TableSpec {
					headers: vec!["Name"],
					widths: vec![Constraint::Fill(1)],
					rows: vec![Row::new(vec!["Ghat"]), Row::new(vec!["Fort"])],
				};
				render_table(frame, frame.area(), Some(1), spec, &Theme::default(), &mut hits);
			})
			.unwrap();

		assert_eq!(hits.target_at(4, 2), Some(Target::Row(0)));
		assert_eq!(hits.target_at(4, 3), Some(Target::Row(1)));
		assert_eq!(hits.target_at(4, 4), None);
		assert_eq!(hits.target_at(4, 0), None);
	}

	#[test]
	fn rating_uses_one_decimal() {
		assert_eq!(rating_label(4.84), "★ 4.8");
		assert_eq!(rating_label(5.0), "★ 5.0");
	}
}

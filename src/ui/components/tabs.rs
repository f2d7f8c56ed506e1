use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::search::SearchQuery;
use crate::ui::config::{Tab, UiConfig};
use crate::ui::state::{HitMap, Target};
use crate::ui::theme::Theme;

/// Argument bundle for rendering the header row.
pub(crate) struct HeaderContext<'a> {
	pub query: &'a SearchQuery,
	pub active: Tab,
	/// Whether the caret should sit in the search box.
	pub editing: bool,
	pub ui: &'a UiConfig,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render the search prompt on the left and the tab strip on the right.
pub(crate) fn render_header(frame: &mut Frame, header: HeaderContext<'_>, hits: &mut HitMap) {
	let HeaderContext {
		query,
		active,
		editing,
		ui,
		area,
		theme,
	} = header;

	let prompt = format!("{} > ", ui.search_label);
	let prompt_width = prompt.width() as u16;
	let tabs_width = calculate_tabs_width(ui);

	let columns = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Length(prompt_width),
			Constraint::Min(1),
			Constraint::Length(tabs_width),
		])
		.split(area);

	frame.render_widget(Paragraph::new(prompt).style(theme.prompt_style()), columns[0]);

	let input_style = if active.is_searchable() {
		ratatui::style::Style::default()
	} else {
		theme.empty_style()
	};
	frame.render_widget(
		Paragraph::new(query.as_str()).style(input_style),
		columns[1],
	);
	if editing && columns[1].width > 0 {
		let x = columns[1]
			.x
			.saturating_add(query.cursor_width())
			.min(columns[1].right().saturating_sub(1));
		frame.set_cursor_position(Position::new(x, columns[1].y));
	}

	render_tabs(frame, columns[2], active, ui, theme, hits);
}

fn render_tabs(
	frame: &mut Frame,
	area: Rect,
	active: Tab,
	ui: &UiConfig,
	theme: &Theme,
	hits: &mut HitMap,
) {
	let mut spans = Vec::new();
	let mut x = area.x.saturating_add(1);
	spans.push(Span::raw(" "));
	for (tab, label) in ui.tab_labels() {
		let text = format!(" {label} ");
		let width = text.width() as u16;
		let style = if tab == active {
			theme.header_style()
		} else {
			theme.tab_inactive_style()
		};
		let visible = width.min(area.right().saturating_sub(x));
		hits.push(Rect::new(x, area.y, visible, 1), Target::Tab(tab));
		spans.push(Span::styled(text, style));
		spans.push(Span::raw(" "));
		x = x.saturating_add(width + 1);
	}
	frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn calculate_tabs_width(ui: &UiConfig) -> u16 {
	let mut width = 1u16;
	for (_, label) in ui.tab_labels() {
		width = width.saturating_add(label.width() as u16 + 3);
	}
	width
}

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::gallery::Carousel;
use crate::ui::content::{HERO_SLIDES, HIGHLIGHTS, QUICK_LINKS, STATS, TAGLINE};
use crate::ui::state::{HitMap, Target};
use crate::ui::theme::Theme;

const PREV_ARROW: &str = " ‹ ";
const NEXT_ARROW: &str = " › ";

/// Render the home banner: slide carousel, highlights, stats, and the
/// section shortcuts.
pub(crate) fn render_hero(
	frame: &mut Frame,
	area: Rect,
	hero: &Carousel,
	theme: &Theme,
	hits: &mut HitMap,
) {
	let rows = Layout::default()
		.direction(Direction::Vertical)
		.constraints([
			Constraint::Length(2),
			Constraint::Length(5),
			Constraint::Length(2),
			Constraint::Length(2),
			Constraint::Length(3),
			Constraint::Min(0),
		])
		.split(area);

	let title = vec![
		Line::from(Span::styled(
			"Welcome to Varanasi",
			theme.highlight_style().add_modifier(Modifier::BOLD),
		)),
		Line::from(Span::styled(TAGLINE, theme.accent_style())),
	];
	frame.render_widget(
		Paragraph::new(title).alignment(Alignment::Center),
		rows[0],
	);

	render_slide(frame, rows[1], hero, theme, hits);

	let highlights = HIGHLIGHTS
		.iter()
		.map(|text| format!("✦ {text}"))
		.collect::<Vec<_>>()
		.join("   ");
	frame.render_widget(
		Paragraph::new(highlights)
			.alignment(Alignment::Center)
			.style(theme.prompt_style())
			.wrap(Wrap { trim: true }),
		rows[2],
	);

	let stats = STATS
		.iter()
		.flat_map(|(value, label)| {
			[
				Span::styled(format!("{value} "), theme.highlight_style()),
				Span::styled(format!("{label}     "), theme.empty_style()),
			]
		})
		.collect::<Vec<_>>();
	frame.render_widget(
		Paragraph::new(Line::from(stats)).alignment(Alignment::Center),
		rows[3],
	);

	render_quick_links(frame, rows[4], theme, hits);
}

fn render_slide(frame: &mut Frame, area: Rect, hero: &Carousel, theme: &Theme, hits: &mut HitMap) {
	let index = hero.index();
	let Some(slide) = HERO_SLIDES.get(index) else {
		return;
	};

	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.prompt_style());
	let inner = block.inner(area);
	frame.render_widget(block, area);
	if inner.height == 0 {
		return;
	}

	let columns = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Length(PREV_ARROW.width() as u16),
			Constraint::Min(1),
			Constraint::Length(NEXT_ARROW.width() as u16),
		])
		.split(inner);

	let arrow_y = inner.y + inner.height / 2;
	let prev = Rect::new(columns[0].x, arrow_y, columns[0].width, 1);
	let next = Rect::new(columns[2].x, arrow_y, columns[2].width, 1);
	frame.render_widget(Paragraph::new(PREV_ARROW).style(theme.header_style()), prev);
	frame.render_widget(Paragraph::new(NEXT_ARROW).style(theme.header_style()), next);
	hits.push(prev, Target::HeroPrev);
	hits.push(next, Target::HeroNext);

	let mut lines = vec![
		Line::from(Span::styled(slide.title, theme.highlight_style())),
		Line::from(Span::styled(slide.image, theme.empty_style())),
	];
	if hero.is_playing() {
		lines.push(Line::from(Span::styled("auto-advancing", theme.empty_style())));
	}
	let center = columns[1];
	frame.render_widget(
		Paragraph::new(lines).alignment(Alignment::Center),
		Rect::new(center.x, center.y, center.width, center.height.saturating_sub(1)),
	);

	// Indicators along the bottom edge of the slide.
	let indicator_y = center.bottom().saturating_sub(1);
	let indicators = HERO_SLIDES
		.iter()
		.enumerate()
		.map(|(position, _)| if position == index { " ● " } else { " ○ " })
		.collect::<String>();
	let total = indicators.width() as u16;
	let start = center.x + center.width.saturating_sub(total) / 2;
	frame.render_widget(
		Paragraph::new(indicators).style(theme.accent_style()),
		Rect::new(start, indicator_y, total.min(center.width), 1),
	);
	for position in 0..HERO_SLIDES.len() {
		let x = start + 3 * position as u16;
		hits.push(Rect::new(x, indicator_y, 3, 1), Target::HeroSlide(position));
	}
}

fn render_quick_links(frame: &mut Frame, area: Rect, theme: &Theme, hits: &mut HitMap) {
	let cells = Layout::default()
		.direction(Direction::Horizontal)
		.constraints(QUICK_LINKS.map(|_| Constraint::Ratio(1, QUICK_LINKS.len() as u32)))
		.split(area);

	for (link, cell) in QUICK_LINKS.iter().zip(cells.iter()) {
		let text = vec![
			Line::from(vec![
				Span::styled(format!("[{}] ", link.key), theme.prompt_style()),
				Span::styled(link.label, theme.highlight_style()),
			]),
			Line::from(Span::styled(link.count, theme.empty_style())),
		];
		frame.render_widget(
			Paragraph::new(text)
				.alignment(Alignment::Center)
				.block(Block::default().borders(Borders::ALL)),
			*cell,
		);
		hits.push(*cell, Target::QuickLink(link.tab));
	}
}

#[cfg(test)]
mod tests {
	use std::num::NonZeroUsize;

	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;
	use crate::ui::config::Tab;

	fn draw(hero: &Carousel, hits: &mut HitMap) -> String {
		let mut terminal = Terminal::new(TestBackend::new(90, 20)).unwrap();
		terminal
			.draw(|frame| render_hero(frame, frame.area(), hero, &Theme::default(), hits))
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
	fn shows_current_slide_and_shortcuts() {
		let mut hero = Carousel::manual(NonZeroUsize::new(HERO_SLIDES.len()).unwrap());
		hero.next();
		let mut hits = HitMap::default();
		let text = draw(&hero, &mut hits);

		assert!(text.contains("Evening Aarti"));
		assert!(!text.contains("Ganges River"));
		assert!(text.contains("Explore Places"));
		assert!(text.contains("Holy City"));
	}

	#[test]
	fn quick_links_and_arrows_are_clickable() {
		let hero = Carousel::manual(NonZeroUsize::new(HERO_SLIDES.len()).unwrap());
		let mut hits = HitMap::default();
		draw(&hero, &mut hits);

		// Quick links occupy rows 11..14 in four equal columns.
		assert_eq!(hits.target_at(1, 12), Some(Target::QuickLink(Tab::Places)));
		assert_eq!(hits.target_at(88, 12), Some(Target::QuickLink(Tab::Guides)));
		// Slide block spans rows 2..7; arrows sit on its middle inner row.
		assert_eq!(hits.target_at(2, 4), Some(Target::HeroPrev));
	}
}

use std::time::Instant;

use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracing::debug;

use super::App;
use super::config::Tab;
use super::content::QUICK_LINKS;
use super::state::{Flow, GuidesFocus, Target};
use crate::catalog::CatalogItem;
use crate::links::Link;

impl App {
	/// Apply one key press.
	pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Flow {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		if ctrl && key.code == KeyCode::Char('c') {
			return Flow::Quit;
		}
		if let KeyCode::F(number) = key.code {
			if let Some(tab) = Tab::ALL.get(usize::from(number).wrapping_sub(1)) {
				self.set_tab(*tab);
			}
			return Flow::Continue;
		}

		if self.is_detail_open() {
			self.handle_detail_key(key);
			return Flow::Continue;
		}

		if self.tab == Tab::Guides && self.guides_focus == GuidesFocus::Form {
			self.handle_form_key(key, now);
			return Flow::Continue;
		}

		match key.code {
			KeyCode::Esc => return Flow::Quit,
			KeyCode::Tab => self.set_tab(self.tab.next()),
			KeyCode::BackTab => self.set_tab(self.tab.prev()),
			_ => match self.tab {
				Tab::Home => self.handle_home_key(key),
				Tab::Places | Tab::Food => self.handle_search_key(key),
				Tab::Transport => self.handle_transport_key(key),
				Tab::Guides => self.handle_guides_key(key),
			},
		}
		Flow::Continue
	}

	/// Apply one mouse event using the regions recorded by the last draw.
	pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {}
			MouseEventKind::ScrollDown => {
				self.move_row(true);
				return;
			}
			MouseEventKind::ScrollUp => {
				self.move_row(false);
				return;
			}
			_ => return,
		}
		let target = self.hits.target_at(mouse.column, mouse.row);
		debug!(?target, column = mouse.column, row = mouse.row, "click");

		if self.is_detail_open() {
			match target {
				Some(Target::ModalBody) => {}
				Some(Target::ModalPrev) => self.prev_image(),
				Some(Target::ModalNext) => self.next_image(),
				Some(Target::ModalImage(index)) => self.jump_image(index),
				Some(Target::ModalDirections) => self.directions_for_detail(),
				// The close button and the backdrop both dismiss the overlay.
				_ => self.close_detail(),
			}
			return;
		}

		let Some(target) = target else {
			return;
		};
		match target {
			Target::Tab(tab) | Target::QuickLink(tab) => self.set_tab(tab),
			Target::Category(category) => {
				self.places.set_category(category);
				self.sync_filters();
			}
			Target::Row(row) => self.click_row(row),
			Target::HeroPrev => self.hero.prev(),
			Target::HeroNext => self.hero.next(),
			Target::HeroSlide(index) => self.jump_slide(index),
			Target::Call(row) => {
				self.guide_row = row;
				self.call_guide();
			}
			Target::Message(row) => {
				self.guide_row = row;
				self.message_guide();
			}
			Target::FormField(field) => {
				self.guides_focus = GuidesFocus::Form;
				self.form.set_focus(field);
			}
			Target::FormSubmit => self.submit_form(now),
			Target::ModalBody
			| Target::ModalClose
			| Target::ModalPrev
			| Target::ModalNext
			| Target::ModalImage(_)
			| Target::ModalDirections => {}
		}
	}

	fn handle_home_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Left => self.hero.prev(),
			KeyCode::Right => self.hero.next(),
			KeyCode::Char(ch) => {
				if let Some(digit) = ch.to_digit(10)
					&& digit > 0
				{
					self.jump_slide(digit as usize - 1);
				} else if let Some(link) = QUICK_LINKS.iter().find(|link| link.key == ch) {
					self.set_tab(link.tab);
				}
			}
			_ => {}
		}
	}

	fn jump_slide(&mut self, index: usize) {
		if let Err(err) = self.hero.jump_to(index) {
			debug!(%err, "ignored slide jump");
		}
	}

	fn handle_search_key(&mut self, key: KeyEvent) {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		let alt = key.modifiers.contains(KeyModifiers::ALT);
		let edited = match key.code {
			KeyCode::Up => {
				self.move_row(false);
				false
			}
			KeyCode::Down => {
				self.move_row(true);
				false
			}
			KeyCode::Enter => {
				self.open_highlighted();
				false
			}
			KeyCode::Left if ctrl || alt => {
				self.cycle_category(false);
				false
			}
			KeyCode::Right if ctrl || alt => {
				self.cycle_category(true);
				false
			}
			KeyCode::Char('g') if ctrl => {
				self.directions_for_highlighted();
				false
			}
			KeyCode::Char('u') if ctrl => self.query.clear(),
			KeyCode::Left => {
				self.query.move_left();
				false
			}
			KeyCode::Right => {
				self.query.move_right();
				false
			}
			KeyCode::Home => {
				self.query.move_home();
				false
			}
			KeyCode::End => {
				self.query.move_end();
				false
			}
			KeyCode::Backspace => self.query.backspace(),
			KeyCode::Delete => self.query.delete(),
			KeyCode::Char(ch) if !ctrl && !alt => {
				self.query.insert(ch);
				true
			}
			_ => false,
		};
		if edited {
			self.sync_filters();
		}
	}

	fn handle_detail_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Esc | KeyCode::Char('q') => self.close_detail(),
			KeyCode::Left => self.prev_image(),
			KeyCode::Right => self.next_image(),
			KeyCode::Char('g') => self.directions_for_detail(),
			KeyCode::Char('m') => self.map_for_detail(),
			KeyCode::Char(ch) => {
				if let Some(digit) = ch.to_digit(10)
					&& digit > 0
				{
					self.jump_image(digit as usize - 1);
				}
			}
			_ => {}
		}
	}

	fn handle_transport_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Up => self.move_row(false),
			KeyCode::Down => self.move_row(true),
			_ => {}
		}
	}

	fn handle_guides_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Up => self.move_row(false),
			KeyCode::Down => self.move_row(true),
			KeyCode::Char('c') => self.call_guide(),
			KeyCode::Char('w') => self.message_guide(),
			KeyCode::Char('i') | KeyCode::Enter => {
				if !self.form.is_submitted() {
					self.guides_focus = GuidesFocus::Form;
				}
			}
			_ => {}
		}
	}

	fn handle_form_key(&mut self, key: KeyEvent, now: Instant) {
		match key.code {
			KeyCode::Esc => self.guides_focus = GuidesFocus::List,
			KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
			KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
			KeyCode::Enter => self.submit_form(now),
			KeyCode::Backspace => self.form.backspace(),
			KeyCode::Char(ch) => self.form.insert_char(ch),
			_ => {}
		}
	}

	fn submit_form(&mut self, now: Instant) {
		match self.form.submit(now, &mut self.inquiries) {
			Ok(outcome) => debug!(?outcome, "inquiry submit"),
			// The form keeps the message as its hint and focuses the field.
			Err(err) => debug!(%err, "inquiry incomplete"),
		}
		if self.form.is_submitted() {
			self.guides_focus = GuidesFocus::List;
		}
	}

	fn move_row(&mut self, down: bool) {
		match self.tab {
			Tab::Places => {
				if down {
					self.places.highlight_next();
				} else {
					self.places.highlight_prev();
				}
			}
			Tab::Food => {
				if down {
					self.foods.highlight_next();
				} else {
					self.foods.highlight_prev();
				}
			}
			Tab::Transport => {
				self.transport_row = step(self.transport_row, self.transport().len(), down);
			}
			Tab::Guides => {
				self.guide_row = step(self.guide_row, self.guides().len(), down);
			}
			Tab::Home => {
				if down {
					self.hero.next();
				} else {
					self.hero.prev();
				}
			}
		}
	}

	fn click_row(&mut self, row: usize) {
		match self.tab {
			Tab::Places => {
				if self.places.highlight(row) {
					self.places.open_highlighted();
				}
			}
			Tab::Food => {
				if self.foods.highlight(row) {
					self.foods.open_highlighted();
				}
			}
			Tab::Transport => {
				if row < self.transport().len() {
					self.transport_row = row;
				}
			}
			Tab::Guides => {
				if row < self.guides().len() {
					self.guide_row = row;
				}
			}
			Tab::Home => {}
		}
	}

	fn cycle_category(&mut self, forward: bool) {
		if self.tab == Tab::Places && self.places.cycle_category(forward) {
			self.sync_filters();
		}
	}

	fn open_highlighted(&mut self) {
		match self.tab {
			Tab::Places => {
				self.places.open_highlighted();
			}
			Tab::Food => {
				self.foods.open_highlighted();
			}
			_ => {}
		}
	}

	fn close_detail(&mut self) {
		match self.tab {
			Tab::Places => {
				self.places.close_detail();
			}
			Tab::Food => {
				self.foods.close_detail();
			}
			_ => {}
		}
	}

	fn next_image(&mut self) {
		match self.tab {
			Tab::Places => self.places.next_image(),
			Tab::Food => self.foods.next_image(),
			_ => {}
		}
	}

	fn prev_image(&mut self) {
		match self.tab {
			Tab::Places => self.places.prev_image(),
			Tab::Food => self.foods.prev_image(),
			_ => {}
		}
	}

	fn jump_image(&mut self, index: usize) {
		let result = match self.tab {
			Tab::Places => self.places.jump_image(index),
			Tab::Food => self.foods.jump_image(index),
			_ => Ok(()),
		};
		if let Err(err) = result {
			debug!(%err, "ignored image jump");
		}
	}

	fn directions_for_highlighted(&mut self) {
		if self.tab != Tab::Places {
			return;
		}
		let link = self
			.places
			.highlighted_item()
			.map(|(_, place)| Link::directions(place.name(), place.location));
		if let Some(link) = link {
			self.open_link(link);
		}
	}

	fn directions_for_detail(&mut self) {
		if self.tab != Tab::Places {
			return;
		}
		let link = self
			.places
			.detail()
			.map(|(place, _)| Link::directions(place.name(), place.location));
		if let Some(link) = link {
			self.open_link(link);
		}
	}

	fn map_for_detail(&mut self) {
		if self.tab != Tab::Places {
			return;
		}
		let link = self
			.places
			.detail()
			.map(|(place, _)| Link::map_embed(place.name(), place.location));
		if let Some(link) = link {
			self.open_link(link);
		}
	}

	fn call_guide(&mut self) {
		if let Some(link) = self.guides().get(self.guide_row).map(Link::dial) {
			self.open_link(link);
		}
	}

	fn message_guide(&mut self) {
		if let Some(link) = self.guides().get(self.guide_row).map(Link::message) {
			self.open_link(link);
		}
	}
}

/// Move a clamped row index one step.
fn step(row: usize, len: usize, down: bool) -> usize {
	if down {
		(row + 1).min(len.saturating_sub(1))
	} else {
		row.saturating_sub(1)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::CatalogSet;
	use crate::ui::state::AppOptions;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	fn ctrl(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::CONTROL)
	}

	fn app_on(tab: Tab) -> (App, Instant) {
		let now = Instant::now();
		let options = AppOptions {
			start_tab: tab,
			..AppOptions::default()
		};
		(App::new(CatalogSet::builtin().unwrap(), options, now), now)
	}

	fn type_text(app: &mut App, text: &str, now: Instant) {
		for ch in text.chars() {
			app.handle_key(key(KeyCode::Char(ch)), now);
		}
	}

	#[test]
	fn typing_updates_shared_query() {
		let (mut app, now) = app_on(Tab::Places);
		type_text(&mut app, "ghat", now);
		assert_eq!(app.query(), "ghat");
		assert_eq!(app.places().visible_len(), 1);

		app.handle_key(key(KeyCode::Tab), now);
		assert_eq!(app.tab(), Tab::Food);
		assert_eq!(app.query(), "ghat");
	}

	#[test]
	fn escape_closes_detail_before_quitting() {
		let (mut app, now) = app_on(Tab::Places);
		app.handle_key(key(KeyCode::Enter), now);
		assert!(app.is_detail_open());

		assert_eq!(app.handle_key(key(KeyCode::Esc), now), Flow::Continue);
		assert!(!app.is_detail_open());
		assert_eq!(app.handle_key(key(KeyCode::Esc), now), Flow::Quit);
	}

	#[test]
	fn detail_keys_do_not_edit_query() {
		let (mut app, now) = app_on(Tab::Places);
		app.handle_key(key(KeyCode::Down), now);
		app.handle_key(key(KeyCode::Enter), now);
		app.handle_key(key(KeyCode::Right), now);
		app.handle_key(key(KeyCode::Char('g')), now);

		assert_eq!(app.query(), "");
		let (place, gallery) = app.places().detail().unwrap();
		assert_eq!(place.id, "dashashwamedh-ghat");
		assert_eq!(gallery.index(), 1);
		assert_eq!(app.links().len(), 1);
	}

	#[test]
	fn category_keys_only_apply_to_places() {
		let (mut app, now) = app_on(Tab::Places);
		app.handle_key(ctrl(KeyCode::Right), now);
		assert_eq!(app.places().visible_len(), 1);

		app.set_tab(Tab::Food);
		app.handle_key(ctrl(KeyCode::Right), now);
		assert_eq!(app.foods().visible_len(), 3);
	}

	#[test]
	fn function_keys_jump_to_tabs() {
		let (mut app, now) = app_on(Tab::Home);
		app.handle_key(key(KeyCode::F(5)), now);
		assert_eq!(app.tab(), Tab::Guides);
		app.handle_key(key(KeyCode::F(9)), now);
		assert_eq!(app.tab(), Tab::Guides);
	}

	#[test]
	fn home_quick_links_switch_tabs() {
		let (mut app, now) = app_on(Tab::Home);
		app.handle_key(key(KeyCode::Char('3')), now);
		assert_eq!(app.hero().index(), 2);
		app.handle_key(key(KeyCode::Char('t')), now);
		assert_eq!(app.tab(), Tab::Transport);
	}

	#[test]
	fn slide_digit_past_the_last_slide_is_ignored() {
		let (mut app, now) = app_on(Tab::Home);
		app.handle_key(key(KeyCode::Char('2')), now);
		assert_eq!(app.hero().index(), 1);
		app.handle_key(key(KeyCode::Char('9')), now);
		assert_eq!(app.hero().index(), 1);
		assert_eq!(app.tab(), Tab::Home);
	}

	#[test]
	fn guide_actions_open_links() {
		let (mut app, now) = app_on(Tab::Guides);
		app.handle_key(key(KeyCode::Down), now);
		app.handle_key(key(KeyCode::Char('c')), now);
		app.handle_key(key(KeyCode::Char('w')), now);

		let urls: Vec<_> = app.links().iter().map(|link| link.url.as_str()).collect();
		assert_eq!(urls[0], "tel:+91-9876543211");
		assert!(urls[1].starts_with("https://wa.me/919876543211?text="));
	}

	#[test]
	fn incomplete_form_stays_editing() {
		let (mut app, now) = app_on(Tab::Guides);
		app.handle_key(key(KeyCode::Char('i')), now);
		type_text(&mut app, "Asha", now);
		app.handle_key(key(KeyCode::Enter), now);

		assert!(!app.form().is_submitted());
		assert_eq!(app.form().fields().name, "Asha");
		assert_eq!(app.form().hint(), Some("Email Address is required"));
		assert!(app.inquiries().is_empty());
	}
}

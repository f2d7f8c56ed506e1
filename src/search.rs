//! Single-line search text shared by the places and food sections.

use unicode_width::UnicodeWidthStr;

/// Editable query text with a cursor measured in characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
	text: String,
	cursor: usize,
}

impl SearchQuery {
	/// Start with `initial` and the cursor at its end.
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let text = initial.into();
		let cursor = text.chars().count();
		Self { text, cursor }
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.text
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.text.is_empty()
	}

	/// Cursor position in characters.
	#[must_use]
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// Display columns before the cursor, for placing the terminal caret.
	#[must_use]
	pub fn cursor_width(&self) -> u16 {
		let prefix = &self.text[..self.byte_offset(self.cursor)];
		u16::try_from(prefix.width()).unwrap_or(u16::MAX)
	}

	pub fn insert(&mut self, ch: char) {
		let at = self.byte_offset(self.cursor);
		self.text.insert(at, ch);
		self.cursor += 1;
	}

	/// Remove the character before the cursor. Returns whether text changed.
	pub fn backspace(&mut self) -> bool {
		if self.cursor == 0 {
			return false;
		}
		self.cursor -= 1;
		let at = self.byte_offset(self.cursor);
		self.text.remove(at);
		true
	}

	/// Remove the character under the cursor. Returns whether text changed.
	pub fn delete(&mut self) -> bool {
		if self.cursor >= self.char_len() {
			return false;
		}
		let at = self.byte_offset(self.cursor);
		self.text.remove(at);
		true
	}

	pub fn move_left(&mut self) {
		self.cursor = self.cursor.saturating_sub(1);
	}

	pub fn move_right(&mut self) {
		self.cursor = (self.cursor + 1).min(self.char_len());
	}

	pub fn move_home(&mut self) {
		self.cursor = 0;
	}

	pub fn move_end(&mut self) {
		self.cursor = self.char_len();
	}

	/// Replace the whole text and move the cursor to its end.
	pub fn set(&mut self, text: impl Into<String>) {
		self.text = text.into();
		self.cursor = self.char_len();
	}

	/// Empty the query. Returns whether anything was cleared.
	pub fn clear(&mut self) -> bool {
		let changed = !self.text.is_empty();
		self.text.clear();
		self.cursor = 0;
		changed
	}

	fn char_len(&self) -> usize {
		self.text.chars().count()
	}

	fn byte_offset(&self, chars: usize) -> usize {
		self.text
			.char_indices()
			.nth(chars)
			.map_or(self.text.len(), |(offset, _)| offset)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn typing_appends_at_cursor() {
		let mut query = SearchQuery::default();
		for ch in "gat".chars() {
			query.insert(ch);
		}
		query.move_left();
		query.move_left();
		query.insert('h');
		assert_eq!(query.as_str(), "ghat");
		assert_eq!(query.cursor(), 2);
	}

	#[test]
	fn backspace_and_delete_respect_bounds() {
		let mut query = SearchQuery::new("ab");
		assert!(!query.delete());
		assert!(query.backspace());
		assert_eq!(query.as_str(), "a");

		query.move_home();
		assert!(!query.backspace());
		assert!(query.delete());
		assert!(query.is_empty());
	}

	#[test]
	fn multibyte_text_is_edited_by_character() {
		let mut query = SearchQuery::new("घाट");
		query.backspace();
		assert_eq!(query.as_str(), "घा");
		query.move_home();
		query.move_right();
		query.insert('x');
		assert_eq!(query.as_str(), "घxा");
	}

	#[test]
	fn cursor_width_counts_display_columns() {
		let mut query = SearchQuery::new("日本");
		assert_eq!(query.cursor_width(), 4);
		query.move_left();
		assert_eq!(query.cursor_width(), 2);
	}

	#[test]
	fn clear_reports_change() {
		let mut query = SearchQuery::new("fort");
		assert!(query.clear());
		assert!(!query.clear());
		assert_eq!(query.cursor(), 0);
	}
}

//! Single-line query editor backing the search bar.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Thin single-line wrapper over [`TextArea`]. The menu feeds it one edit at
/// a time and reads the query back as a single line; the widget owns cursor
/// placement and display-width math.
pub(crate) struct QueryInput {
	textarea: TextArea<'static>,
}

impl Default for QueryInput {
	fn default() -> Self {
		Self::new(String::new())
	}
}

impl QueryInput {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Insert at the cursor. Returns true because the text always changes.
	pub fn insert(&mut self, ch: char) -> bool {
		self.textarea.insert_char(ch);
		true
	}

	/// Remove the character before the cursor. Returns whether text changed.
	pub fn backspace(&mut self) -> bool {
		self.textarea.delete_char()
	}

	/// Remove the character under the cursor. Returns whether text changed.
	pub fn delete(&mut self) -> bool {
		self.textarea.delete_next_char()
	}

	pub fn move_left(&mut self) {
		self.textarea.move_cursor(CursorMove::Back);
	}

	pub fn move_right(&mut self) {
		self.textarea.move_cursor(CursorMove::Forward);
	}

	pub fn move_home(&mut self) {
		self.textarea.move_cursor(CursorMove::Head);
	}

	pub fn move_end(&mut self) {
		self.textarea.move_cursor(CursorMove::End);
	}

	/// Draw the editor; the widget places the terminal cursor itself.
	pub fn render_textarea(&self, frame: &mut Frame<'_>, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

//! Styling for the menu's chrome and rows.

use ratatui::style::{Color, Modifier, Style};

/// Style slots consumed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Window border and title.
	pub border: Style,
	/// The search prompt and query text.
	pub prompt: Style,
	/// Unselected rows.
	pub row: Style,
	/// The row under the cursor.
	pub row_highlight: Style,
	/// Selection markers in multiple-selection mode.
	pub marker: Style,
	/// Dimmed subtitle lines.
	pub subtitle: Style,
	/// The placeholder shown when the bound collection is empty.
	pub empty: Style,
}

pub const DARK: Theme = Theme {
	border: Style::new().fg(Color::Rgb(148, 163, 184)),
	prompt: Style::new().fg(Color::Rgb(125, 196, 228)),
	row: Style::new(),
	row_highlight: Style::new()
		.bg(Color::Rgb(51, 65, 85))
		.add_modifier(Modifier::BOLD),
	marker: Style::new().fg(Color::Rgb(134, 239, 172)),
	subtitle: Style::new().fg(Color::DarkGray),
	empty: Style::new().fg(Color::Rgb(100, 116, 139)),
};

pub const LIGHT: Theme = Theme {
	border: Style::new().fg(Color::Rgb(71, 85, 105)),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	row: Style::new().fg(Color::Rgb(15, 23, 42)),
	row_highlight: Style::new()
		.bg(Color::Rgb(203, 213, 225))
		.add_modifier(Modifier::BOLD),
	marker: Style::new().fg(Color::Rgb(21, 128, 61)),
	subtitle: Style::new().fg(Color::Gray),
	empty: Style::new().fg(Color::Rgb(100, 116, 139)),
};

/// Themes bundled with the crate, addressable by name.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	match name {
		"dark" => Some(DARK),
		"light" => Some(LIGHT),
		_ => None,
	}
}

#[must_use]
pub fn default_theme() -> Theme {
	DARK
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

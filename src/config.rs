//! Plain-data configuration for a selection menu.
//!
//! Everything here is inert state decided at construction time: the selection
//! mode, the dismiss-on-select policy, the menu title, and the popover arrow
//! direction. The closures that drive rendering, filtering, and selection
//! live on [`SelectionMenu`](crate::SelectionMenu) itself.

use serde::{Deserialize, Serialize};

/// Whether the menu keeps one selection or many.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
	/// At most one element is marked selected at a time.
	#[default]
	Single,
	/// Any number of elements may be marked selected simultaneously.
	Multiple,
}

impl SelectionMode {
	/// Default dismiss-on-select policy for the mode: single-selection menus
	/// close after a pick, multi-selection menus stay open.
	#[must_use]
	pub fn default_dismiss_on_select(self) -> bool {
		matches!(self, SelectionMode::Single)
	}
}

/// Which way a popover's arrow points at its anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrowDirection {
	/// Arrow above the menu, pointing up at the anchor; menu sits below.
	#[default]
	Up,
	/// Arrow below the menu, pointing down at the anchor; menu sits above.
	Down,
}

/// Construction-time options for a menu.
///
/// `dismiss_on_select` is `None` until a caller overrides it, in which case
/// the mode default applies (see
/// [`SelectionMode::default_dismiss_on_select`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
	pub mode: SelectionMode,
	pub dismiss_on_select: Option<bool>,
	pub title: Option<String>,
	pub arrow: ArrowDirection,
}

impl MenuConfig {
	/// Effective dismiss-on-select policy, resolving the caller override
	/// against the mode default.
	#[must_use]
	pub fn dismisses_on_select(&self) -> bool {
		self.dismiss_on_select
			.unwrap_or_else(|| self.mode.default_dismiss_on_select())
	}
}

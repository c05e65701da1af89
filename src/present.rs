//! Presentation state and window geometry.
//!
//! The presentation style is recorded once when the menu is shown and read
//! back when it is dismissed; nothing queries the environment at
//! dismiss-time. Modal and popover presentations dismiss, a pushed menu pops
//! back to its host.

use ratatui::layout::{Position, Rect, Size};

use crate::config::ArrowDirection;

/// How the menu was put on screen. Recorded at show-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
	/// Centered window over the whole terminal.
	Modal,
	/// Window anchored to a source rectangle, with a directional arrow.
	Popover { anchor: Rect, size: Size },
	/// Embedded in a host-driven navigation flow; the host owns the area.
	Pushed,
}

/// What closing the menu means for the recorded presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseRequest {
	/// Tear the presented window down (modal and popover).
	Dismiss,
	/// Pop back to the previous screen in the host's navigation flow.
	Pop,
}

/// Computed placement for one draw: the menu window and, for popovers, the
/// cell where the arrow glyph goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Placement {
	pub window: Rect,
	pub arrow: Option<Position>,
}

impl Presentation {
	/// The dismissal branch for this presentation.
	#[must_use]
	pub fn close_request(self) -> CloseRequest {
		match self {
			Presentation::Modal | Presentation::Popover { .. } => CloseRequest::Dismiss,
			Presentation::Pushed => CloseRequest::Pop,
		}
	}

	/// Place the menu window inside the terminal area.
	///
	/// Callers must hand in a non-empty area; popover anchors that fall
	/// outside it are clamped rather than rejected.
	pub(crate) fn placement(self, area: Rect, arrow: ArrowDirection) -> Placement {
		match self {
			Presentation::Pushed => Placement {
				window: area,
				arrow: None,
			},
			Presentation::Modal => Placement {
				window: centered(area),
				arrow: None,
			},
			Presentation::Popover { anchor, size } => anchored(area, anchor, size, arrow),
		}
	}
}

/// Center a window covering roughly 60% x 70% of the terminal.
fn centered(area: Rect) -> Rect {
	let width = (u32::from(area.width) * 3 / 5).max(20).min(u32::from(area.width)) as u16;
	let height = (u32::from(area.height) * 7 / 10).max(5).min(u32::from(area.height)) as u16;
	Rect {
		x: area.x + (area.width.saturating_sub(width)) / 2,
		y: area.y + (area.height.saturating_sub(height)) / 2,
		width,
		height,
	}
}

fn anchored(area: Rect, anchor: Rect, size: Size, arrow: ArrowDirection) -> Placement {
	let width = size.width.min(area.width).max(1);
	let height = size.height.min(area.height.saturating_sub(1)).max(1);

	// Arrow column points at the anchor's horizontal center.
	let anchor_mid = anchor.x.saturating_add(anchor.width / 2);
	let arrow_x = anchor_mid.clamp(area.x, area.right().saturating_sub(1));

	// Window hugs the arrow row and is shifted to stay inside the area.
	let mut x = anchor_mid.saturating_sub(width / 2);
	x = x.clamp(area.x, area.right().saturating_sub(width).max(area.x));

	let (arrow_y, y) = match arrow {
		ArrowDirection::Up => {
			let arrow_y = anchor
				.bottom()
				.clamp(area.y, area.bottom().saturating_sub(1));
			let y = arrow_y.saturating_add(1);
			let y = y.min(area.bottom().saturating_sub(height).max(area.y));
			(arrow_y, y)
		}
		ArrowDirection::Down => {
			let arrow_y = anchor
				.y
				.saturating_sub(1)
				.clamp(area.y, area.bottom().saturating_sub(1));
			let y = arrow_y.saturating_sub(height).max(area.y);
			(arrow_y, y)
		}
	};

	Placement {
		window: Rect {
			x,
			y,
			width,
			height,
		},
		arrow: Some(Position::new(arrow_x, arrow_y)),
	}
}

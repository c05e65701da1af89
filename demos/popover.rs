//! Single-select popover anchored to a fixed cell rectangle, the shape a
//! status-bar dropdown would use.

use anyhow::Result;
use ratatui::layout::{Rect, Size};
use ratatui::text::{Line, Span};
use ratatui::style::{Color, Style};
use selmenu::{CellContent, CellDescriptor, SelectionMenu};

#[derive(Clone, PartialEq)]
struct Profile {
	id: u32,
	name: &'static str,
	detail: &'static str,
}

const PROFILES: [Profile; 3] = [
	Profile { id: 1, name: "Work", detail: "corp proxy, strict TLS" },
	Profile { id: 2, name: "Home", detail: "direct connection" },
	Profile { id: 3, name: "Lab", detail: "self-signed certs allowed" },
];

fn main() -> Result<()> {
	let outcome = SelectionMenu::new(
		PROFILES.to_vec(),
		CellDescriptor::subtitle(|profile: &Profile| {
			CellContent::new(Line::from(Span::styled(
				profile.name,
				Style::new().fg(Color::Cyan),
			)))
			.with_subtitle(profile.detail)
		}),
	)
	.with_unique_key(|profile| profile.id.to_string())
	.with_title("Profile")
	.show_as_popover(Rect::new(4, 0, 12, 1), Size::new(34, 12))?;

	if let Some(profile) = outcome.selections.first() {
		println!("switched to {}", profile.name);
	}
	Ok(())
}

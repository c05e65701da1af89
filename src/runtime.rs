//! Owned terminal run loop for modal and popover presentation.
//!
//! Pushed menus never come through here; their host drives rendering and key
//! handling inside its own loop.

use std::time::Duration;

use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use crate::error::MenuError;
use crate::menu::SelectionMenu;
use crate::present::CloseRequest;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run the menu to completion in the current terminal.
pub(crate) fn run<T: Clone + PartialEq>(
	menu: &mut SelectionMenu<T>,
) -> Result<CloseRequest, MenuError> {
	let mut terminal = ratatui::init();
	let close = drive(menu, &mut terminal);
	ratatui::restore();
	close
}

fn drive<T: Clone + PartialEq>(
	menu: &mut SelectionMenu<T>,
	terminal: &mut DefaultTerminal,
) -> Result<CloseRequest, MenuError> {
	terminal.clear()?;
	loop {
		terminal.draw(|frame| menu.render(frame, frame.area()))?;
		if !event::poll(POLL_INTERVAL)? {
			continue;
		}
		match event::read()? {
			Event::Key(key) if key.kind == KeyEventKind::Press => {
				if let Some(close) = menu.handle_key(key) {
					return Ok(close);
				}
			}
			_ => {}
		}
	}
}

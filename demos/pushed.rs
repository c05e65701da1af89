//! Embedding a pushed menu in a host-owned navigation flow.
//!
//! The host runs its own terminal loop with two screens: a status screen and
//! a menu pushed on top of it. The menu never owns the terminal; the host
//! renders it and pops it when it yields a close request.

use std::time::Duration;

use anyhow::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::widgets::Paragraph;
use selmenu::{CellDescriptor, CloseRequest, SelectionMenu};

enum Screen {
	Status,
	Menu(SelectionMenu<String>),
}

fn make_menu() -> SelectionMenu<String> {
	let branches = ["main", "develop", "release/1.4", "hotfix/tls"];
	let mut menu = SelectionMenu::new(
		branches.iter().map(|s| (*s).to_owned()).collect(),
		CellDescriptor::basic(|branch: &String| branch.clone()),
	)
	.with_title("Switch branch");
	menu.present_pushed();
	menu
}

fn main() -> Result<()> {
	let mut terminal = ratatui::init();
	let mut screen = Screen::Status;
	let mut last_pick: Option<String> = None;

	let result = loop {
		terminal.draw(|frame| match &mut screen {
			Screen::Status => {
				let caption = match &last_pick {
					Some(branch) => format!("on {branch} - m: menu, q: quit"),
					None => "m: open branch menu, q: quit".to_owned(),
				};
				frame.render_widget(Paragraph::new(caption), frame.area());
			}
			Screen::Menu(menu) => menu.render(frame, frame.area()),
		})?;

		if !event::poll(Duration::from_millis(50))? {
			continue;
		}
		let Event::Key(key) = event::read()? else {
			continue;
		};
		if key.kind != KeyEventKind::Press {
			continue;
		}

		match &mut screen {
			Screen::Status => match key.code {
				KeyCode::Char('q') => break Ok(()),
				KeyCode::Char('m') => screen = Screen::Menu(make_menu()),
				_ => {}
			},
			Screen::Menu(menu) => {
				if let Some(close) = menu.handle_key(key) {
					// A pushed menu pops back to the previous screen.
					assert_eq!(close, CloseRequest::Pop);
					if let Screen::Menu(menu) =
						std::mem::replace(&mut screen, Screen::Status)
					{
						last_pick = menu.into_outcome(close).selections.into_iter().next();
					}
				}
			}
		}
	};

	ratatui::restore();
	result
}

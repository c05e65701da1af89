//! End-to-end behavior of the selection menu driven through its key handler,
//! the way an embedding host exercises it.

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Rect, Size};
use selmenu::{
	CellContent, CellDescriptor, CloseRequest, Presentation, SelectionMenu, SelectionMode,
};

const FRUIT: [&str; 4] = ["apple", "apricot", "banana", "cherry"];

fn fruit_menu() -> SelectionMenu<String> {
	SelectionMenu::new(
		FRUIT.iter().map(|s| (*s).to_owned()).collect(),
		CellDescriptor::basic(|item: &String| item.clone()),
	)
}

fn searchable_fruit_menu() -> SelectionMenu<String> {
	fruit_menu().with_search(|text| {
		FRUIT
			.iter()
			.filter(|s| s.contains(text))
			.map(|s| (*s).to_owned())
			.collect()
	})
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::from(code)
}

fn type_str(menu: &mut SelectionMenu<String>, text: &str) {
	for ch in text.chars() {
		assert!(menu.handle_key(key(KeyCode::Char(ch))).is_none());
	}
}

#[test]
fn search_binds_filter_result_for_non_empty_text() {
	let mut menu = searchable_fruit_menu();
	type_str(&mut menu, "ap");
	assert_eq!(menu.query(), "ap");
	assert_eq!(menu.rows(), ["apple".to_string(), "apricot".to_string()]);
}

#[test]
fn clearing_search_text_binds_empty_collection() {
	let mut menu = searchable_fruit_menu();
	type_str(&mut menu, "a");
	assert!(!menu.rows().is_empty());

	// Deleting the last character is a search event with empty text: the
	// bound collection becomes empty, not the original four fruits.
	menu.handle_key(key(KeyCode::Backspace));
	assert_eq!(menu.query(), "");
	assert!(menu.rows().is_empty());
}

#[test]
fn typing_without_search_bar_is_ignored() {
	let mut menu = fruit_menu();
	type_str(&mut menu, "zzz");
	assert_eq!(menu.query(), "");
	assert_eq!(menu.rows().len(), FRUIT.len());
}

#[test]
fn single_mode_default_selects_once_and_dismisses_once() {
	let calls = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&calls);
	let mut menu = fruit_menu().on_select(move |item: &String, selected| {
		sink.borrow_mut().push((item.clone(), selected));
	});
	menu.present(Presentation::Modal);

	let close = menu.handle_key(key(KeyCode::Enter));

	assert_eq!(*calls.borrow(), [("apple".to_string(), true)]);
	assert_eq!(close, Some(CloseRequest::Dismiss));
	assert_eq!(menu.close_request(), Some(CloseRequest::Dismiss));
	assert_eq!(menu.selections(), ["apple".to_string()]);
}

#[test]
fn single_mode_with_dismissal_disabled_stays_open() {
	let mut menu = fruit_menu().dismiss_on_select(false);
	menu.present(Presentation::Modal);

	assert!(menu.handle_key(key(KeyCode::Enter)).is_none());
	assert!(menu.close_request().is_none());

	// Only one marker survives moving on and picking again.
	menu.handle_key(key(KeyCode::Down));
	assert!(menu.handle_key(key(KeyCode::Enter)).is_none());
	assert_eq!(menu.selections(), ["apricot".to_string()]);
}

#[test]
fn multiple_mode_toggles_markers_without_dismissing() {
	let calls = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&calls);
	let mut menu = fruit_menu()
		.with_selection_mode(SelectionMode::Multiple)
		.on_select(move |item: &String, selected| {
			sink.borrow_mut().push((item.clone(), selected));
		});
	menu.present(Presentation::Modal);

	// Activate three distinct rows.
	assert!(menu.handle_key(key(KeyCode::Enter)).is_none());
	menu.handle_key(key(KeyCode::Down));
	assert!(menu.handle_key(key(KeyCode::Enter)).is_none());
	menu.handle_key(key(KeyCode::Down));
	assert!(menu.handle_key(key(KeyCode::Enter)).is_none());

	assert_eq!(menu.selections().len(), 3);
	assert!(menu.close_request().is_none());

	// Re-activating a row clears its marker; the callback hears the toggle.
	menu.handle_key(key(KeyCode::Up));
	assert!(menu.handle_key(key(KeyCode::Enter)).is_none());
	assert_eq!(
		menu.selections(),
		["apple".to_string(), "banana".to_string()]
	);
	assert_eq!(
		calls.borrow().last(),
		Some(&("apricot".to_string(), false))
	);
}

#[test]
fn multiple_mode_can_opt_into_dismiss_on_select() {
	let mut menu = fruit_menu()
		.with_selection_mode(SelectionMode::Multiple)
		.dismiss_on_select(true);
	menu.present(Presentation::Modal);

	assert_eq!(
		menu.handle_key(key(KeyCode::Enter)),
		Some(CloseRequest::Dismiss)
	);
}

#[test]
fn space_toggles_in_multi_mode_without_search() {
	let mut menu = fruit_menu().with_selection_mode(SelectionMode::Multiple);
	menu.present(Presentation::Modal);

	assert!(menu.handle_key(key(KeyCode::Char(' '))).is_none());
	assert_eq!(menu.selections(), ["apple".to_string()]);

	// With a search bar attached, space types into the query instead.
	let mut menu = searchable_fruit_menu().with_selection_mode(SelectionMode::Multiple);
	menu.present(Presentation::Modal);
	menu.handle_key(key(KeyCode::Char(' ')));
	assert_eq!(menu.query(), " ");
	assert!(menu.selections().is_empty());
}

#[test]
fn preseeded_selections_highlight_and_toggle() {
	let mut menu = fruit_menu()
		.with_selection_mode(SelectionMode::Multiple)
		.with_selected(vec!["banana".to_string()]);
	menu.present_pushed();
	assert_eq!(menu.selections(), ["banana".to_string()]);

	let screen = render_to_string(&mut menu, 30, 10);
	assert!(screen.contains("✔ banana"));
	assert!(screen.contains("☐ apple"));

	// Activating the seeded row clears its marker again.
	menu.handle_key(key(KeyCode::Down));
	menu.handle_key(key(KeyCode::Down));
	assert!(menu.handle_key(key(KeyCode::Enter)).is_none());
	assert!(menu.selections().is_empty());
}

#[test]
fn preseeded_selection_collapses_to_one_in_single_mode() {
	let mut menu =
		fruit_menu().with_selected(vec!["apple".to_string(), "banana".to_string()]);
	menu.present_pushed();
	assert_eq!(menu.selections(), ["apple".to_string()]);

	let screen = render_to_string(&mut menu, 30, 10);
	assert!(screen.contains("✔ apple"));
}

#[test]
fn seeded_query_is_resolved_at_presentation() {
	let mut menu = searchable_fruit_menu().with_query("ap");
	menu.present_pushed();
	assert_eq!(menu.query(), "ap");
	assert_eq!(menu.rows(), ["apple".to_string(), "apricot".to_string()]);
}

#[test]
fn update_is_last_write_wins() {
	let mut menu = fruit_menu();
	menu.update(vec!["first".to_string()]);
	menu.update(vec!["second".to_string(), "third".to_string()]);
	assert_eq!(menu.rows(), ["second".to_string(), "third".to_string()]);
}

#[test]
fn dismiss_branch_follows_presentation_recorded_at_show_time() {
	let mut modal = fruit_menu();
	modal.present(Presentation::Modal);
	assert_eq!(modal.dismiss(), CloseRequest::Dismiss);

	let mut popover = fruit_menu();
	popover.present(Presentation::Popover {
		anchor: Rect::new(4, 1, 10, 1),
		size: Size::new(24, 8),
	});
	assert_eq!(popover.dismiss(), CloseRequest::Dismiss);

	let mut pushed = fruit_menu();
	pushed.present_pushed();
	assert_eq!(pushed.dismiss(), CloseRequest::Pop);
}

#[test]
fn escape_dismisses_via_the_recorded_presentation() {
	let mut menu = fruit_menu();
	menu.present_pushed();
	assert_eq!(menu.handle_key(key(KeyCode::Esc)), Some(CloseRequest::Pop));
}

#[test]
fn outcome_reports_selections_close_branch_and_query() {
	let mut menu = searchable_fruit_menu().with_selection_mode(SelectionMode::Multiple);
	menu.present_pushed();
	type_str(&mut menu, "an");
	menu.handle_key(key(KeyCode::Enter));
	let close = menu.handle_key(key(KeyCode::Esc)).expect("esc closes");

	let outcome = menu.into_outcome(close);
	assert_eq!(outcome.selections, ["banana".to_string()]);
	assert_eq!(outcome.close, CloseRequest::Pop);
	assert_eq!(outcome.query, "an");
}

#[test]
fn selections_survive_filter_rebinds() {
	let mut menu = searchable_fruit_menu().with_selection_mode(SelectionMode::Multiple);
	menu.present_pushed();
	menu.handle_key(key(KeyCode::Enter));
	assert_eq!(menu.selections(), ["apple".to_string()]);

	// Filtering down to bananas does not clear the apple marker.
	type_str(&mut menu, "an");
	assert_eq!(menu.rows(), ["banana".to_string()]);
	assert_eq!(menu.selections(), ["apple".to_string()]);
}

// ---- rendering ------------------------------------------------------------

fn buffer_to_string(buffer: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buffer.area.height {
		let mut line = String::new();
		for x in 0..buffer.area.width {
			line.push_str(buffer[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}

fn render_to_string(menu: &mut SelectionMenu<String>, width: u16, height: u16) -> String {
	let backend = TestBackend::new(width, height);
	let mut terminal = Terminal::new(backend).expect("terminal");
	terminal
		.draw(|frame| menu.render(frame, frame.area()))
		.expect("draw menu frame");
	buffer_to_string(terminal.backend().buffer())
}

#[test]
fn pushed_menu_renders_rows_with_cursor_highlight() {
	let mut menu = searchable_fruit_menu().with_title("Fruit");
	menu.present_pushed();

	let screen = render_to_string(&mut menu, 30, 10);
	assert!(screen.contains("Fruit"));
	assert!(screen.contains("❯"));
	assert!(screen.contains("▶"));
	assert!(screen.contains("apple"));
	assert!(screen.contains("cherry"));
}

#[test]
fn multi_mode_renders_selection_markers() {
	let mut menu = fruit_menu().with_selection_mode(SelectionMode::Multiple);
	menu.present_pushed();
	menu.handle_key(key(KeyCode::Enter));

	let screen = render_to_string(&mut menu, 30, 10);
	assert!(screen.contains("✔ apple"));
	assert!(screen.contains("☐ banana"));
}

#[test]
fn empty_rows_render_placeholder() {
	let mut menu = searchable_fruit_menu();
	menu.present_pushed();
	type_str(&mut menu, "q");
	assert!(menu.rows().is_empty());

	let screen = render_to_string(&mut menu, 30, 8);
	assert!(screen.contains("No options"));
}

#[test]
fn popover_render_stays_anchored_inside_the_terminal() {
	let mut menu = fruit_menu();
	menu.present(Presentation::Popover {
		anchor: Rect::new(6, 1, 8, 1),
		size: Size::new(20, 7),
	});

	let screen = render_to_string(&mut menu, 40, 14);
	assert!(screen.contains("▲"));
	assert!(screen.contains("apple"));

	// The arrow row sits directly under the anchor.
	let arrow_line = screen
		.lines()
		.position(|line| line.contains("▲"))
		.expect("arrow rendered");
	assert_eq!(arrow_line, 2);
}

#[test]
fn subtitle_cells_render_a_dimmed_second_line() {
	let mut menu = SelectionMenu::new(
		vec!["apple".to_string()],
		CellDescriptor::subtitle(|item: &String| {
			CellContent::new(item.clone()).with_subtitle("a fruit")
		}),
	);
	menu.present_pushed();

	let screen = render_to_string(&mut menu, 30, 8);
	assert!(screen.contains("apple"));
	assert!(screen.contains("a fruit"));
}

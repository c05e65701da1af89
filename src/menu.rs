//! The selection-menu controller.
//!
//! [`SelectionMenu`] composes the data adapter, the selection state, and the
//! optional search coordinator behind a builder-style configuration API, and
//! owns the key handling that turns terminal input into selection events.
//!
//! Everything runs on the caller's thread: key handling, filtering, the
//! selection callback, and dismissal are all synchronous.

use anyhow::{Context, Result};
use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Rect, Size};
use ratatui::widgets::ListState;

use crate::adapter::DataAdapter;
use crate::config::{ArrowDirection, MenuConfig, SelectionMode};
use crate::descriptor::CellDescriptor;
use crate::input::QueryInput;
use crate::present::{CloseRequest, Presentation};
use crate::render;
use crate::runtime;
use crate::search::SearchCoordinator;
use crate::selection::SelectionState;
use crate::style::Theme;

/// What the menu hands back when it closes.
#[derive(Debug, Clone)]
pub struct MenuOutcome<T> {
	/// Elements marked selected when the menu closed.
	pub selections: Vec<T>,
	/// Which dismissal branch closed the menu.
	pub close: CloseRequest,
	/// The query text at close time.
	pub query: String,
}

/// A searchable, selectable list over a caller-supplied collection.
///
/// Construction is builder-style: start from [`SelectionMenu::new`] with the
/// collection and a [`CellDescriptor`], then chain the optional pieces. The
/// menu is shown either through the owned run loop ([`show`](Self::show),
/// [`show_as_popover`](Self::show_as_popover)) or embedded in a host's
/// frame by calling [`present`](Self::present), [`render`](Self::render),
/// and [`handle_key`](Self::handle_key) directly.
pub struct SelectionMenu<T> {
	pub(crate) adapter: DataAdapter<T>,
	pub(crate) selection: SelectionState<T>,
	pub(crate) search: Option<SearchCoordinator<T>>,
	pub(crate) input: QueryInput,
	pub(crate) config: MenuConfig,
	pub(crate) theme: Theme,
	pub(crate) list_state: ListState,
	presentation: Option<Presentation>,
	close: Option<CloseRequest>,
}

impl<T: Clone + PartialEq> SelectionMenu<T> {
	/// Create a single-selection menu over `rows`.
	pub fn new(rows: Vec<T>, descriptor: CellDescriptor<T>) -> Self {
		let config = MenuConfig::default();
		let selection =
			SelectionState::new(config.mode, config.dismisses_on_select());
		let mut list_state = ListState::default();
		if !rows.is_empty() {
			list_state.select(Some(0));
		}
		Self {
			adapter: DataAdapter::new(rows, descriptor),
			selection,
			search: None,
			input: QueryInput::default(),
			config,
			theme: Theme::default(),
			list_state,
			presentation: None,
			close: None,
		}
	}

	/// Replace the whole configuration structure at once.
	#[must_use]
	pub fn with_config(mut self, config: MenuConfig) -> Self {
		self.config = config;
		self.selection
			.set_mode(self.config.mode, self.config.dismisses_on_select());
		self
	}

	/// Switch selection mode. Resets the dismiss-on-select policy to the
	/// mode default unless the caller overrode it.
	#[must_use]
	pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
		self.config.mode = mode;
		self.selection.set_mode(mode, self.config.dismisses_on_select());
		self
	}

	/// Identity key for structured element types whose `PartialEq` is not
	/// the identity the menu should use.
	#[must_use]
	pub fn with_unique_key<F>(mut self, key: F) -> Self
	where
		F: Fn(&T) -> String + 'static,
	{
		self.selection.set_key(Box::new(key));
		self
	}

	/// Pre-seed selections so reopening a menu highlights prior picks.
	#[must_use]
	pub fn with_selected(mut self, items: Vec<T>) -> Self {
		self.selection.seed(items);
		self
	}

	/// Attach the search bar. `filter` maps the query text to the collection
	/// that should be bound.
	///
	/// Clearing the query binds the empty collection, not the original one;
	/// callers who want "empty query shows everything" return the full
	/// collection from `filter` themselves for whitespace-light inputs.
	#[must_use]
	pub fn with_search<F>(mut self, filter: F) -> Self
	where
		F: Fn(&str) -> Vec<T> + 'static,
	{
		self.search = Some(SearchCoordinator::new(Box::new(filter)));
		self
	}

	/// Seed the query text. A non-empty seed is resolved through the filter
	/// when the menu is presented.
	#[must_use]
	pub fn with_query(mut self, query: impl Into<String>) -> Self {
		self.input = QueryInput::new(query);
		self
	}

	/// Selection callback: invoked with the element and its new selected
	/// state on every row activation.
	#[must_use]
	pub fn on_select<F>(mut self, callback: F) -> Self
	where
		F: FnMut(&T, bool) + 'static,
	{
		self.selection.set_on_select(Box::new(callback));
		self
	}

	/// Override the mode's dismiss-on-select default.
	#[must_use]
	pub fn dismiss_on_select(mut self, dismiss: bool) -> Self {
		self.config.dismiss_on_select = Some(dismiss);
		self.selection.set_dismiss_on_select(dismiss);
		self
	}

	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.config.title = Some(title.into());
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	#[must_use]
	pub fn with_arrow(mut self, arrow: ArrowDirection) -> Self {
		self.config.arrow = arrow;
		self
	}

	/// Replace the bound collection wholesale. Last write wins; the cursor
	/// is clamped to the new bounds.
	pub fn update(&mut self, rows: Vec<T>) {
		self.adapter.update(rows);
		self.ensure_cursor();
	}

	// ---- presentation -----------------------------------------------------

	/// Record how the menu is being put on screen. Called implicitly by
	/// [`show`](Self::show) and [`show_as_popover`](Self::show_as_popover);
	/// embedding hosts call it themselves before the first render.
	pub fn present(&mut self, presentation: Presentation) {
		log::debug!("presenting menu: {presentation:?}");
		self.presentation = Some(presentation);
		self.close = None;
		// A seeded query is resolved on first presentation; an empty one is
		// not a search event, so the initial collection stays bound.
		if !self.input.text().is_empty() {
			self.rebind_from_query();
		}
	}

	/// Record a pushed presentation: the host owns the screen area and pops
	/// the menu when [`handle_key`](Self::handle_key) yields a close request.
	pub fn present_pushed(&mut self) {
		self.present(Presentation::Pushed);
	}

	/// Close the menu. The branch is decided by the presentation recorded at
	/// show-time: modal and popover menus dismiss, pushed menus pop. A menu
	/// that was never presented dismisses.
	pub fn dismiss(&mut self) -> CloseRequest {
		let close = self
			.presentation
			.map_or(CloseRequest::Dismiss, Presentation::close_request);
		log::debug!("dismissing menu: {close:?}");
		self.close = Some(close);
		close
	}

	/// The close request recorded by [`dismiss`](Self::dismiss), if any.
	pub fn close_request(&self) -> Option<CloseRequest> {
		self.close
	}

	pub fn presentation(&self) -> Option<Presentation> {
		self.presentation
	}

	/// Present modally and run the owned terminal loop to completion.
	pub fn show(mut self) -> Result<MenuOutcome<T>> {
		self.present(Presentation::Modal);
		let close = runtime::run(&mut self).context("running modal selection menu")?;
		Ok(self.into_outcome(close))
	}

	/// Present as a popover anchored to `anchor` and run the owned terminal
	/// loop to completion.
	///
	/// The anchor is expressed in terminal cell coordinates; anchors that do
	/// not fit the terminal are clamped. A zero-area terminal is a caller
	/// precondition violation.
	pub fn show_as_popover(mut self, anchor: Rect, size: Size) -> Result<MenuOutcome<T>> {
		self.present(Presentation::Popover { anchor, size });
		let close = runtime::run(&mut self).context("running popover selection menu")?;
		Ok(self.into_outcome(close))
	}

	/// Consume the menu into its outcome after the host observed a close
	/// request.
	pub fn into_outcome(mut self, close: CloseRequest) -> MenuOutcome<T> {
		MenuOutcome {
			selections: self.selection.take_selections(),
			close,
			query: self.input.text().to_owned(),
		}
	}

	// ---- event handling ---------------------------------------------------

	/// Feed one key press. Returns the close request once the menu wants off
	/// the screen; the embedding host (or the owned runtime) acts on it.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<CloseRequest> {
		match key.code {
			KeyCode::Esc => Some(self.dismiss()),
			KeyCode::Enter => self.activate_cursor_row(),
			KeyCode::Up => {
				self.move_cursor(-1);
				None
			}
			KeyCode::Down => {
				self.move_cursor(1);
				None
			}
			// Space toggles in multi-select menus without a search bar; with
			// a search bar attached it types into the query instead.
			KeyCode::Char(' ')
				if self.search.is_none()
					&& self.selection.mode() == SelectionMode::Multiple =>
			{
				self.activate_cursor_row()
			}
			KeyCode::Char(ch) => {
				self.edit_query(|input| input.insert(ch));
				None
			}
			KeyCode::Backspace => {
				self.edit_query(QueryInput::backspace);
				None
			}
			KeyCode::Delete => {
				self.edit_query(QueryInput::delete);
				None
			}
			KeyCode::Left => {
				self.move_query_cursor(QueryInput::move_left);
				None
			}
			KeyCode::Right => {
				self.move_query_cursor(QueryInput::move_right);
				None
			}
			KeyCode::Home => {
				self.move_query_cursor(QueryInput::move_home);
				None
			}
			KeyCode::End => {
				self.move_query_cursor(QueryInput::move_end);
				None
			}
			_ => None,
		}
	}

	/// Draw into the host's frame. Modal and popover placements overlay the
	/// area; a pushed menu fills it.
	pub fn render(&mut self, frame: &mut Frame<'_>, area: Rect) {
		render::draw(self, frame, area);
	}

	pub fn query(&self) -> &str {
		self.input.text()
	}

	pub fn rows(&self) -> &[T] {
		self.adapter.rows()
	}

	/// Elements currently marked selected.
	pub fn selections(&self) -> &[T] {
		self.selection.selections()
	}

	pub(crate) fn has_search(&self) -> bool {
		self.search.is_some()
	}

	pub(crate) fn is_row_selected(&self, index: usize) -> bool {
		self.adapter
			.get(index)
			.is_some_and(|item| self.selection.is_selected(item))
	}

	fn activate_cursor_row(&mut self) -> Option<CloseRequest> {
		let index = self.list_state.selected()?;
		let item = self.adapter.get(index)?.clone();
		if self.selection.activate(&item) {
			return Some(self.dismiss());
		}
		None
	}

	fn move_cursor(&mut self, delta: isize) {
		let len = self.adapter.len();
		if len == 0 {
			self.list_state.select(None);
			return;
		}
		let current = self.list_state.selected().unwrap_or(0) as isize;
		let next = (current + delta).clamp(0, len as isize - 1) as usize;
		self.list_state.select(Some(next));
	}

	fn edit_query(&mut self, edit: impl FnOnce(&mut QueryInput) -> bool) {
		if self.search.is_none() {
			return;
		}
		if edit(&mut self.input) {
			self.rebind_from_query();
		}
	}

	fn move_query_cursor(&mut self, movement: impl FnOnce(&mut QueryInput)) {
		if self.search.is_some() {
			movement(&mut self.input);
		}
	}

	/// Forward the current query through the coordinator and rebind.
	fn rebind_from_query(&mut self) {
		if let Some(search) = &self.search {
			let rows = search.query_changed(self.input.text());
			self.adapter.update(rows);
			self.ensure_cursor();
		}
	}

	/// Keep the cursor valid for the bound collection.
	fn ensure_cursor(&mut self) {
		let len = self.adapter.len();
		if len == 0 {
			self.list_state.select(None);
		} else {
			match self.list_state.selected() {
				None => self.list_state.select(Some(0)),
				Some(selected) if selected >= len => {
					self.list_state.select(Some(len - 1));
				}
				Some(_) => {}
			}
		}
	}
}

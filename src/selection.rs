//! Selection bookkeeping and the selection-event forwarder.
//!
//! Row activation flows through here: the state decides what the activation
//! means for the current mode, invokes the caller's callback with the element
//! and its new selected state, and reports whether the menu should close.
//!
//! Element identity uses the caller's unique-key extractor when one was
//! supplied, falling back to `PartialEq` otherwise. A key extractor that does
//! not actually identify elements mis-highlights selections; it never errors.

use crate::config::SelectionMode;

/// Caller-supplied identity key for structured element types.
pub type KeyFn<T> = Box<dyn Fn(&T) -> String>;

/// Caller-supplied selection callback: the element and its new state.
pub type SelectFn<T> = Box<dyn FnMut(&T, bool)>;

pub(crate) struct SelectionState<T> {
	mode: SelectionMode,
	dismiss_on_select: bool,
	key: Option<KeyFn<T>>,
	selected: Vec<T>,
	on_select: Option<SelectFn<T>>,
}

impl<T: Clone + PartialEq> SelectionState<T> {
	pub fn new(mode: SelectionMode, dismiss_on_select: bool) -> Self {
		Self {
			mode,
			dismiss_on_select,
			key: None,
			selected: Vec::new(),
			on_select: None,
		}
	}

	pub fn set_mode(&mut self, mode: SelectionMode, dismiss_on_select: bool) {
		self.mode = mode;
		self.dismiss_on_select = dismiss_on_select;
		self.enforce_mode_invariant();
	}

	pub fn set_dismiss_on_select(&mut self, dismiss: bool) {
		self.dismiss_on_select = dismiss;
	}

	pub fn set_key(&mut self, key: KeyFn<T>) {
		self.key = Some(key);
	}

	pub fn set_on_select(&mut self, callback: SelectFn<T>) {
		self.on_select = Some(callback);
	}

	/// Pre-seed selections, e.g. when reopening a menu that was confirmed
	/// before. Single mode keeps only the first seeded element.
	pub fn seed(&mut self, items: Vec<T>) {
		self.selected = items;
		self.enforce_mode_invariant();
	}

	pub fn mode(&self) -> SelectionMode {
		self.mode
	}

	pub fn selections(&self) -> &[T] {
		&self.selected
	}

	pub fn take_selections(&mut self) -> Vec<T> {
		std::mem::take(&mut self.selected)
	}

	pub fn is_selected(&self, item: &T) -> bool {
		self.selected.iter().any(|held| self.matches(held, item))
	}

	/// Activate a row. Invokes the caller's callback exactly once and
	/// returns whether the menu should dismiss.
	pub fn activate(&mut self, item: &T) -> bool {
		let now_selected = match self.mode {
			SelectionMode::Single => {
				self.selected.clear();
				self.selected.push(item.clone());
				true
			}
			SelectionMode::Multiple => match self.position_of(item) {
				Some(index) => {
					self.selected.remove(index);
					false
				}
				None => {
					self.selected.push(item.clone());
					true
				}
			},
		};
		log::debug!(
			"row activated: mode={:?} now_selected={} markers={}",
			self.mode,
			now_selected,
			self.selected.len()
		);
		if let Some(callback) = self.on_select.as_mut() {
			callback(item, now_selected);
		}
		self.dismiss_on_select
	}

	fn position_of(&self, item: &T) -> Option<usize> {
		self.selected
			.iter()
			.position(|held| self.matches(held, item))
	}

	fn matches(&self, a: &T, b: &T) -> bool {
		match &self.key {
			Some(key) => key(a) == key(b),
			None => a == b,
		}
	}

	fn enforce_mode_invariant(&mut self) {
		if self.mode == SelectionMode::Single {
			self.selected.truncate(1);
		}
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::rc::Rc;

	use super::*;

	#[derive(Clone, PartialEq, Debug)]
	struct Contact {
		id: u32,
		name: String,
	}

	fn contact(id: u32, name: &str) -> Contact {
		Contact {
			id,
			name: name.to_owned(),
		}
	}

	#[test]
	fn single_mode_keeps_one_marker_and_dismisses() {
		let mut state = SelectionState::new(SelectionMode::Single, true);
		let calls = Rc::new(RefCell::new(Vec::new()));
		let sink = Rc::clone(&calls);
		state.set_on_select(Box::new(move |item: &String, selected| {
			sink.borrow_mut().push((item.clone(), selected));
		}));

		assert!(state.activate(&"a".to_string()));
		assert!(state.activate(&"b".to_string()));

		assert_eq!(state.selections(), ["b".to_string()]);
		assert_eq!(
			*calls.borrow(),
			[("a".to_string(), true), ("b".to_string(), true)]
		);
	}

	#[test]
	fn multiple_mode_toggles_independent_markers() {
		let mut state = SelectionState::new(SelectionMode::Multiple, false);

		assert!(!state.activate(&"a".to_string()));
		assert!(!state.activate(&"b".to_string()));
		assert!(state.is_selected(&"a".to_string()));
		assert!(state.is_selected(&"b".to_string()));

		// Second activation of the same element clears its marker.
		assert!(!state.activate(&"a".to_string()));
		assert!(!state.is_selected(&"a".to_string()));
		assert_eq!(state.selections(), ["b".to_string()]);
	}

	#[test]
	fn multiple_mode_can_opt_into_dismissal() {
		let mut state = SelectionState::new(SelectionMode::Multiple, true);
		assert!(state.activate(&"a".to_string()));
	}

	#[test]
	fn unique_key_drives_identity_for_structured_elements() {
		let mut state = SelectionState::new(SelectionMode::Multiple, false);
		state.set_key(Box::new(|c: &Contact| c.id.to_string()));

		state.activate(&contact(7, "Ada"));
		// Same id, different spelling: identity holds via the key.
		assert!(state.is_selected(&contact(7, "ada lovelace")));
		assert!(!state.is_selected(&contact(8, "Ada")));

		// Toggling through the renamed value removes the original marker.
		state.activate(&contact(7, "ada lovelace"));
		assert!(state.selections().is_empty());
	}

	#[test]
	fn seeding_respects_single_mode_invariant() {
		let mut state = SelectionState::new(SelectionMode::Single, true);
		state.seed(vec!["a".to_string(), "b".to_string()]);
		assert_eq!(state.selections(), ["a".to_string()]);
	}
}

//! Binding between a caller-supplied collection and the list widget.
//!
//! The adapter owns the current collection snapshot and the cell descriptor.
//! Updates are wholesale: each call to [`DataAdapter::update`] replaces the
//! previous snapshot entirely, last write wins. There is no diffing and no
//! incremental reload; the next draw simply renders the new rows.

use crate::descriptor::{CellContent, CellDescriptor};

pub(crate) struct DataAdapter<T> {
	rows: Vec<T>,
	descriptor: CellDescriptor<T>,
}

impl<T> DataAdapter<T> {
	pub fn new(rows: Vec<T>, descriptor: CellDescriptor<T>) -> Self {
		Self { rows, descriptor }
	}

	/// Replace the bound collection. The previous snapshot is discarded,
	/// never merged. An empty collection yields an empty list.
	pub fn update(&mut self, rows: Vec<T>) {
		log::debug!("adapter rebound: {} -> {} rows", self.rows.len(), rows.len());
		self.rows = rows;
	}

	pub fn rows(&self) -> &[T] {
		&self.rows
	}

	pub fn get(&self, index: usize) -> Option<&T> {
		self.rows.get(index)
	}

	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	pub fn descriptor(&self) -> &CellDescriptor<T> {
		&self.descriptor
	}

	pub fn content_for(&self, index: usize) -> Option<CellContent> {
		self.rows.get(index).map(|item| self.descriptor.content(item))
	}
}

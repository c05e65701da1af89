//! Search coordination between the query line and the data adapter.
//!
//! The coordinator owns nothing but the caller's filter closure. Every query
//! edit resolves synchronously to the collection that should be bound next;
//! there is no debouncing and no background work.

/// Caller-supplied filter: maps the current query text to a collection.
pub type FilterFn<T> = Box<dyn Fn(&str) -> Vec<T>>;

pub(crate) struct SearchCoordinator<T> {
	filter: FilterFn<T>,
}

impl<T> SearchCoordinator<T> {
	pub fn new(filter: FilterFn<T>) -> Self {
		Self { filter }
	}

	/// Resolve a query edit to the rows that should be bound.
	///
	/// Empty text resolves to the empty collection, not to the original
	/// unfiltered one. Kept behavior: clearing the query clears the list.
	pub fn query_changed(&self, text: &str) -> Vec<T> {
		if text.is_empty() {
			log::debug!("query cleared; binding empty collection");
			return Vec::new();
		}
		let rows = (self.filter)(text);
		log::debug!("query {text:?} resolved to {} rows", rows.len());
		rows
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn coordinator() -> SearchCoordinator<String> {
		let haystack = ["apple", "apricot", "banana"];
		SearchCoordinator::new(Box::new(move |text| {
			haystack
				.iter()
				.filter(|s| s.starts_with(text))
				.map(|s| (*s).to_owned())
				.collect()
		}))
	}

	#[test]
	fn non_empty_text_binds_filter_result() {
		let rows = coordinator().query_changed("ap");
		assert_eq!(rows, ["apple".to_string(), "apricot".to_string()]);
	}

	#[test]
	fn empty_text_binds_empty_not_original() {
		let rows = coordinator().query_changed("");
		assert!(rows.is_empty());
	}
}

//! Cell descriptors: how a bound element becomes visible text.
//!
//! A descriptor pairs a rendering style tag with the caller's render closure.
//! The pair is fixed when the menu is constructed; the closure is consulted
//! once per visible row on every draw.

use ratatui::text::Line;

/// Caller-supplied row renderer.
pub type RenderFn<T> = Box<dyn Fn(&T) -> CellContent>;

/// Rendering style tag for menu rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellStyle {
	/// One line per row; any subtitle returned by the renderer is ignored.
	#[default]
	Basic,
	/// Two lines per row when the renderer supplies a subtitle; the subtitle
	/// is drawn dimmed underneath the title.
	Subtitle,
}

/// Text produced by a render closure for one row.
///
/// The title carries whatever styling the caller baked into it; the subtitle
/// is restyled by the theme when the [`CellStyle::Subtitle`] tag is active.
#[derive(Debug, Clone)]
pub struct CellContent {
	pub title: Line<'static>,
	pub subtitle: Option<String>,
}

impl CellContent {
	pub fn new(title: impl Into<Line<'static>>) -> Self {
		Self {
			title: title.into(),
			subtitle: None,
		}
	}

	#[must_use]
	pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
		self.subtitle = Some(subtitle.into());
		self
	}
}

impl From<String> for CellContent {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}

impl From<&str> for CellContent {
	fn from(value: &str) -> Self {
		Self::new(value.to_owned())
	}
}

impl From<Line<'static>> for CellContent {
	fn from(value: Line<'static>) -> Self {
		Self::new(value)
	}
}

/// Immutable pairing of a [`CellStyle`] and a render closure.
pub struct CellDescriptor<T> {
	style: CellStyle,
	render: RenderFn<T>,
}

impl<T> CellDescriptor<T> {
	/// Single-line rows.
	pub fn basic<F, C>(render: F) -> Self
	where
		F: Fn(&T) -> C + 'static,
		C: Into<CellContent>,
	{
		Self::with_style(CellStyle::Basic, render)
	}

	/// Rows with an optional dimmed second line.
	pub fn subtitle<F, C>(render: F) -> Self
	where
		F: Fn(&T) -> C + 'static,
		C: Into<CellContent>,
	{
		Self::with_style(CellStyle::Subtitle, render)
	}

	fn with_style<F, C>(style: CellStyle, render: F) -> Self
	where
		F: Fn(&T) -> C + 'static,
		C: Into<CellContent>,
	{
		Self {
			style,
			render: Box::new(move |item| render(item).into()),
		}
	}

	pub fn style(&self) -> CellStyle {
		self.style
	}

	/// Run the caller's renderer for one element.
	pub(crate) fn content(&self, item: &T) -> CellContent {
		(self.render)(item)
	}
}

//! Drawing: query line, bordered list, markers, popover arrow.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::symbols::border;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
	Block, Borders, Clear, HighlightSpacing, List, ListItem, Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::config::{ArrowDirection, SelectionMode};
use crate::descriptor::CellStyle;
use crate::menu::SelectionMenu;
use crate::present::Presentation;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
const PROMPT: &str = "❯ ";
const EMPTY_PLACEHOLDER: &str = "No options";

// Marker glyph pairs per selection mode.
const MULTI_SELECTED: &str = "✔ ";
const MULTI_UNSELECTED: &str = "☐ ";
const SINGLE_SELECTED: &str = "✔ ";
const SINGLE_UNSELECTED: &str = "  ";

pub(crate) fn draw<T: Clone + PartialEq>(
	menu: &mut SelectionMenu<T>,
	frame: &mut Frame<'_>,
	area: Rect,
) {
	if area.width == 0 || area.height == 0 {
		return;
	}
	let Some(presentation) = menu.presentation() else {
		return;
	};
	let placement = presentation.placement(area, menu.config.arrow);
	let window = placement.window;
	if window.width < 2 || window.height < 2 {
		return;
	}

	if !matches!(presentation, Presentation::Pushed) {
		frame.render_widget(Clear, window);
	}
	if let Some(arrow) = placement.arrow {
		draw_arrow(menu, frame, area, arrow);
	}

	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(border::ROUNDED)
		.border_style(menu.theme.border);
	if let Some(title) = menu.config.title.clone() {
		block = block.title(title);
	}
	let inner = block.inner(window);
	frame.render_widget(block, window);
	if inner.height == 0 {
		return;
	}

	let list_area = if menu.has_search() {
		let [query_area, list_area] =
			Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
		draw_query_line(menu, frame, query_area);
		list_area
	} else {
		inner
	};

	if menu.adapter.is_empty() {
		frame.render_widget(
			Paragraph::new(EMPTY_PLACEHOLDER)
				.style(menu.theme.empty)
				.alignment(Alignment::Center),
			list_area,
		);
		return;
	}

	let items = build_items(menu);
	let list = List::new(items)
		.style(menu.theme.row)
		.highlight_style(menu.theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL)
		.highlight_spacing(HighlightSpacing::Always);
	frame.render_stateful_widget(list, list_area, &mut menu.list_state);
}

fn draw_arrow<T: Clone + PartialEq>(
	menu: &SelectionMenu<T>,
	frame: &mut Frame<'_>,
	area: Rect,
	arrow: Position,
) {
	let glyph = match menu.config.arrow {
		ArrowDirection::Up => "▲",
		ArrowDirection::Down => "▼",
	};
	let cell = Rect::new(arrow.x, arrow.y, 1, 1).intersection(area);
	if cell.is_empty() {
		return;
	}
	frame.render_widget(Clear, cell);
	frame.render_widget(Paragraph::new(glyph).style(menu.theme.border), cell);
}

fn draw_query_line<T: Clone + PartialEq>(
	menu: &SelectionMenu<T>,
	frame: &mut Frame<'_>,
	area: Rect,
) {
	let [prompt_area, input_area] =
		Layout::horizontal([Constraint::Length(PROMPT.width() as u16), Constraint::Min(0)])
			.areas(area);
	frame.render_widget(
		Paragraph::new(Span::styled(PROMPT, menu.theme.prompt)),
		prompt_area,
	);
	menu.input.render_textarea(frame, input_area);
}

fn build_items<T: Clone + PartialEq>(menu: &SelectionMenu<T>) -> Vec<ListItem<'static>> {
	let cell_style = menu.adapter.descriptor().style();
	(0..menu.adapter.len())
		.map(|index| {
			let content = menu
				.adapter
				.content_for(index)
				.unwrap_or_else(|| "".into());
			let selected = menu.is_row_selected(index);
			let marker = match (menu.selection.mode(), selected) {
				(SelectionMode::Multiple, true) => MULTI_SELECTED,
				(SelectionMode::Multiple, false) => MULTI_UNSELECTED,
				(SelectionMode::Single, true) => SINGLE_SELECTED,
				(SelectionMode::Single, false) => SINGLE_UNSELECTED,
			};

			let mut spans = vec![Span::styled(marker, menu.theme.marker)];
			spans.extend(content.title.spans);
			let mut lines = vec![Line::from(spans)];

			if cell_style == CellStyle::Subtitle {
				if let Some(subtitle) = content.subtitle {
					lines.push(Line::from(vec![
						Span::raw("  "),
						Span::styled(subtitle, menu.theme.subtitle),
					]));
				}
			}

			ListItem::new(Text::from(lines))
		})
		.collect()
}

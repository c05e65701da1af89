//! Searchable selection menus for ratatui.
//!
//! A [`SelectionMenu`] presents a caller-supplied collection as a selectable
//! list: single or multiple selection, an optional search bar driven by a
//! caller-supplied filter closure, caller-supplied cell rendering, and a
//! dismiss-on-select policy. The menu can own the terminal (modal or popover
//! presentation) or be embedded in a host application's navigation flow
//! ("pushed"), in which case the host renders it and reacts to its close
//! requests.
//!
//! ```no_run
//! use selmenu::{CellDescriptor, SelectionMenu, SelectionMode};
//!
//! # fn main() -> anyhow::Result<()> {
//! let flavors = vec!["vanilla", "chocolate", "pistachio"];
//! let outcome = SelectionMenu::new(
//! 	flavors.clone(),
//! 	CellDescriptor::basic(|flavor: &&str| (*flavor).to_owned()),
//! )
//! .with_selection_mode(SelectionMode::Multiple)
//! .with_search(move |text| {
//! 	flavors
//! 		.iter()
//! 		.copied()
//! 		.filter(|flavor| flavor.contains(text))
//! 		.collect()
//! })
//! .on_select(|flavor, selected| {
//! 	eprintln!("{flavor}: {selected}");
//! })
//! .show()?;
//! println!("picked {:?}", outcome.selections);
//! # Ok(())
//! # }
//! ```
//!
//! Search behavior note: clearing the query binds the empty collection, not
//! the original one. See [`SelectionMenu::with_search`].

mod adapter;
mod config;
mod descriptor;
mod error;
mod input;
mod menu;
mod present;
mod render;
mod runtime;
mod search;
mod selection;
pub mod style;

pub use config::{ArrowDirection, MenuConfig, SelectionMode};
pub use descriptor::{CellContent, CellDescriptor, CellStyle, RenderFn};
pub use error::MenuError;
pub use menu::{MenuOutcome, SelectionMenu};
pub use present::{CloseRequest, Presentation};
pub use search::FilterFn;
pub use selection::{KeyFn, SelectFn};
pub use style::{Theme, default_theme};

//! Modal multi-select menu with a search bar.
//!
//! Run with `cargo run --example basic`. Type to filter, Enter toggles the
//! highlighted row, Esc closes the menu.

use std::fs::File;

use anyhow::Result;
use selmenu::{CellDescriptor, SelectionMenu, SelectionMode};
use simplelog::{Config, LevelFilter, WriteLogger};

const LANGUAGES: [&str; 8] = [
	"rust",
	"zig",
	"go",
	"c",
	"c++",
	"haskell",
	"ocaml",
	"erlang",
];

fn main() -> Result<()> {
	WriteLogger::init(
		LevelFilter::Debug,
		Config::default(),
		File::create("selmenu-basic.log")?,
	)?;

	let rows: Vec<String> = LANGUAGES.iter().map(|s| (*s).to_owned()).collect();
	let outcome = SelectionMenu::new(
		rows,
		CellDescriptor::basic(|language: &String| language.clone()),
	)
	.with_selection_mode(SelectionMode::Multiple)
	.with_title("Languages")
	.with_search(|text| {
		LANGUAGES
			.iter()
			.filter(|s| s.contains(text))
			.map(|s| (*s).to_owned())
			.collect()
	})
	.on_select(|language, selected| {
		log::info!("{language}: selected={selected}");
	})
	.show()?;

	println!("picked: {:?} (query was {:?})", outcome.selections, outcome.query);
	Ok(())
}

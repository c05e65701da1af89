//! Failure modes of the interactive runtime.

use thiserror::Error;

/// Errors surfaced while driving the menu in a real terminal.
///
/// The configuration API itself has no recoverable errors: a misconfigured
/// unique key or an empty collection mis-renders, it never fails.
#[derive(Debug, Error)]
pub enum MenuError {
	#[error("terminal backend failure")]
	Backend(#[from] std::io::Error),
}

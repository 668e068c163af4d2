use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

/// Reasons the canvas cannot be drawn on. None of these reach the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CanvasError {
	#[error("no browser window")]
	MissingWindow,
	#[error("2d context unavailable")]
	ContextUnavailable,
	#[error("context is not a CanvasRenderingContext2d")]
	WrongContextType,
	#[error("animation frame request rejected")]
	FrameRequestRejected,
}

pub fn window() -> Result<Window, CanvasError> {
	web_sys::window().ok_or(CanvasError::MissingWindow)
}

/// Fetch the 2D drawing context of `canvas`.
pub fn canvas_context(
	canvas: &HtmlCanvasElement,
) -> Result<CanvasRenderingContext2d, CanvasError> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.ok_or(CanvasError::ContextUnavailable)?
		.dyn_into()
		.map_err(|_| CanvasError::WrongContextType)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages_are_readable() {
		assert_eq!(CanvasError::ContextUnavailable.to_string(), "2d context unavailable");
		assert_eq!(CanvasError::MissingWindow.to_string(), "no browser window");
	}
}

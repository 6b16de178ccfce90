//! Quillboard application shell.

mod app;
mod painter;
mod ui;

pub use app::QuillboardApp;
pub use ui::{SelectionProps, UiAction, UiState};

//! Quillboard Core Library
//!
//! Shape model, context-bar action resolution, selection state and
//! persistence for the Quillboard whiteboard toolbar.

pub mod actions;
pub mod canvas;
pub mod host;
pub mod shapes;
pub mod storage;

pub use actions::{ActionKind, actions_for_kinds, actions_for_selection, supported_actions};
pub use canvas::{Canvas, CanvasDocument};
pub use host::HostBridge;
pub use storage::{DocumentSaver, SaveKind, SaveScheduler};

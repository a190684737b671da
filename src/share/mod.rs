//! Multi-track selection, share formatting and clipboard delivery.

pub mod clipboard;
mod controller;
mod format;
mod hooks;
mod selection;
mod shortcuts;

pub use clipboard::{copy_to_clipboard, default_clipboard, ClipboardBackend, ClipboardError};
pub use controller::*;
pub use format::*;
pub use hooks::*;
pub use selection::*;
pub use shortcuts::*;

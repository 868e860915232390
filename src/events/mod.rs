//! Event handling module for keyboard, mouse, and paste events.
//!
//! Terminal events are mapped to `Action`s here; `App::dispatch` applies them.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::EventHandler;

//! Event Handlers
//!
//! - actions: quick actions, confirmations, save/cancel routing
//! - keyboard: key dispatch per overlay / mode / tab
//! - mouse: drag gestures and panel clicks on list cards

pub mod actions;
pub mod keyboard;
pub mod mouse;

pub use keyboard::handle_key;
pub use mouse::handle_mouse;

// UI module - all TUI rendering with Ratatui
//
// Architecture:
// - layout: screen area math
// - render: orchestrator dispatching per tab / mode / overlay
// - chrome: header title, tab bar, footer hints, search box
// - cards: swipeable card lists and the pagination bar
// - forms: field rendering for the mounted form
// - toast: toast notifications
// - dialogs: confirmation modal and the quick-action palette
// - dashboard / gallery / shop / orders / system: per-domain views

pub mod cards;
pub mod chrome;
pub mod dashboard;
pub mod dialogs;
pub mod forms;
pub mod gallery;
pub mod layout;
pub mod orders;
pub mod render;
pub mod shop;
pub mod system;
pub mod toast;

pub use render::render;

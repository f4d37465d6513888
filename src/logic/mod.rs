//! Business Logic
//!
//! Pure functions that can be unit tested without a terminal:
//! - filter: client-side substring filtering per domain
//! - pagination: fixed-size page math for list views
//! - swipe: horizontal drag gesture state machine for list cards
//! - ui: toast lifetime and simulated upload progress
//! - validate: form field and config validation rules

pub mod filter;
pub mod pagination;
pub mod swipe;
pub mod ui;
pub mod validate;

//! Target-independent logic for the TeamWork front-end.
//!
//! Everything here is pure: forms are plain values, validation turns them into
//! a `ValidationResult`, and `FormFeedback` turns that result into renderable
//! state plus the timers the UI layer has to run. Nothing in this crate touches
//! the DOM, so it builds and tests natively.

pub mod config;
pub mod decorations;
pub mod feedback;
pub mod model;
pub mod nav;
pub mod validation;

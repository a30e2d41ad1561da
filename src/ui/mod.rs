//! Full-screen host for the picker.
//!
//! The host plays the part of the embedding view: it owns the canonical
//! selection, renders the picker's toggle button, and applies the country the
//! picker reports. [`PickerUi`] is the public builder; the remaining modules
//! implement the event loop, key routing and drawing.

mod actions;
mod builder;
mod render;
mod runtime;
mod state;

pub use builder::PickerUi;
pub use runtime::run;
pub use state::{App, PickOutcome};

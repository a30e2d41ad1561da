//! Terminal country-code picker.
//!
//! The root module re-exports the pieces an embedder needs: the catalog model
//! and sources, the debounced filter, the [`Picker`] widget and the
//! [`PickerUi`] builder that hosts it full-screen.

pub mod app_dirs;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod logging;
pub mod picker;
pub mod theme;
pub mod ui;

pub use catalog::{CatalogError, CatalogSource, Country, FileCatalog, HttpCatalog};
pub use config::{PickerConfig, PickerLabels};
pub use filter::{FilterEngine, filter_indices};
pub use picker::{Picker, PickerEvent, PickerProps};
pub use theme::Theme;
pub use ui::{App, PickOutcome, PickerUi, run};

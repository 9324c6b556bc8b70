//! Data models for the Rehbar directory.
//!
//! - [`Catalog`]: The fixed, ordered category set and resource records
//! - [`SelectionState`]: The active category and search text driving rendering
//! - [`Settings`]: Application settings loaded from `Rehbar Settings.yaml`
//!
//! # Architecture Note
//!
//! The catalog is immutable once built. Selection state updates go through
//! [`StateManager`](crate::state::StateManager) so every change is detected and
//! broadcast.

pub mod catalog;
pub mod selection;
pub mod settings;

pub use catalog::{ALL_CATEGORY, Catalog, CatalogError, CatalogFile, Category, Resource};
pub use selection::SelectionState;
pub use settings::Settings;

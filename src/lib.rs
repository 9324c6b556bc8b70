// Rehbar - Community resource directory
//
// This is the library crate containing the catalog, the filter engine, markup
// rendering and the controller. The binary crate (main.rs) renders the page.

pub mod config;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod state;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use metrics::RenderMetrics;
pub use models::{Catalog, Category, Resource, SelectionState, Settings};
pub use state::{StateChange, StateManager};
pub use ui::{Command, DirectoryController, HtmlPage, UiEvent};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

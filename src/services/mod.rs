//! Services module - Pure logic for filtering the catalog and producing markup.
//!
//! The services are **framework-agnostic**: no view, no state, no I/O. Everything
//! here is a function of its arguments, which is what lets the controller
//! re-render any region at any time and get byte-identical output for
//! unchanged state.
//!
//! # Components
//!
//! - [`filter_resources`]: The filter engine. Category predicate AND
//!   case-insensitive substring predicate over title, description and category,
//!   preserving catalog order.
//! - [`markup`]: Templates for category chips, resource cards and the
//!   "no results" notice, plus [`escape_html`].
//!
//! # Usage Example
//!
//! ```ignore
//! use rehbar::models::{Catalog, Category};
//! use rehbar::services::{filter_resources, render_resource_cards};
//!
//! let catalog = Catalog::builtin();
//! let matches = filter_resources(&catalog, &Category::all(), "health");
//! let markup = render_resource_cards(&matches);
//! ```

pub mod filter;
pub mod markup;

pub use filter::{SearchTerm, filter_resources, matches_category};
pub use markup::{
    NO_RESULTS_NOTICE, escape_html, render_category_chip, render_category_chips,
    render_resource_card, render_resource_cards,
};

// Directory Controller - Bridges the view with selection state and the catalog
//
// This module contains the DirectoryController which coordinates between:
// - View (rendering + input-capture surface)
// - StateManager (selection state)
// - Catalog (immutable resource data)
// - RenderMetrics (render/dispatch counters)
//
// It handles:
// - One-time initialization on DocumentReady
// - Translating UI events into commands
// - Dispatching commands → state mutation → region re-render

use crate::metrics::RenderMetrics;
use crate::models::{Catalog, Category};
use crate::services::{filter_resources, render_category_chips, render_resource_cards};
use crate::state::{StateChange, StateManager};
use crate::ui::view::{Region, View};
use anyhow::{Context, Result};
use std::sync::Arc;

/// Key identity carried by a key-press notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other(String),
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        match name {
            "Enter" => Key::Enter,
            other => Key::Other(other.to_string()),
        }
    }
}

/// Notifications coming from the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// The page finished loading; triggers initialization once
    DocumentReady,

    /// A category chip was clicked
    CategoryClicked(Category),

    /// The search button was clicked
    SearchClicked,

    /// A key was pressed while the search field had focus
    KeyPressed(Key),
}

/// State transitions of the directory. Both are self-loops on the idle state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Set the active category, re-render chips and resources
    SelectCategory(Category),

    /// Store the raw search text, re-render resources
    Search(String),
}

/// Controller that wires a [`View`] to the selection state and the catalog
///
/// Owns the only [`StateManager`] for the page. Every command overwrites its
/// state field(s) first, then re-renders the affected region(s) in full.
/// Rendering is a pure function of the selection and the catalog, so rendering
/// twice with unchanged state writes byte-identical markup.
///
/// # Example
/// ```ignore
/// let mut controller = DirectoryController::new(Arc::new(Catalog::builtin()), HtmlPage::new("Rehbar"));
/// controller.handle_event(UiEvent::DocumentReady)?;
/// controller.handle_event(UiEvent::CategoryClicked("Health".into()))?;
/// ```
pub struct DirectoryController<V: View> {
    view: V,

    catalog: Arc<Catalog>,

    state_manager: StateManager,

    metrics: Arc<RenderMetrics>,

    initialized: bool,
}

impl<V: View> DirectoryController<V> {
    pub fn new(catalog: Arc<Catalog>, view: V) -> Self {
        Self::with_metrics(catalog, view, Arc::new(RenderMetrics::new()))
    }

    pub fn with_metrics(catalog: Arc<Catalog>, view: V, metrics: Arc<RenderMetrics>) -> Self {
        Self {
            view,
            catalog,
            state_manager: StateManager::new(),
            metrics,
            initialized: false,
        }
    }

    /// Render both regions from the current state.
    ///
    /// Runs once per page lifetime; later calls log a warning and do nothing.
    pub fn init(&mut self) -> Result<()> {
        if self.initialized {
            tracing::warn!("Directory already initialized, ignoring repeated ready notification");
            return Ok(());
        }

        self.render_categories()?;
        self.render_resources()?;
        self.initialized = true;

        tracing::info!(
            "Directory initialized: {} categories, {} resources",
            self.catalog.categories().len(),
            self.catalog.resources().len()
        );
        Ok(())
    }

    /// Translate a page notification into a command and dispatch it.
    ///
    /// Returns the state changes produced; notifications that map to no command
    /// (non-Enter keys, the ready notification) return an empty vector.
    /// Input that arrives before the ready notification has no effect.
    pub fn handle_event(&mut self, event: UiEvent) -> Result<Vec<StateChange>> {
        tracing::debug!("Handling UI event: {:?}", event);

        if !self.initialized && event != UiEvent::DocumentReady {
            tracing::warn!("Ignoring {:?} before the page is ready", event);
            return Ok(Vec::new());
        }

        let command = match event {
            UiEvent::DocumentReady => {
                self.init()?;
                return Ok(Vec::new());
            }
            UiEvent::CategoryClicked(category) => Command::SelectCategory(category),
            UiEvent::SearchClicked | UiEvent::KeyPressed(Key::Enter) => {
                Command::Search(self.view.search_value())
            }
            UiEvent::KeyPressed(Key::Other(_)) => return Ok(Vec::new()),
        };

        self.dispatch(command)
    }

    /// Apply a command: update state, then re-render.
    pub fn dispatch(&mut self, command: Command) -> Result<Vec<StateChange>> {
        self.metrics.record_command();

        match command {
            Command::SelectCategory(category) => {
                if !self.catalog.contains_category(&category) {
                    tracing::warn!("Ignoring selection of unknown category: {}", category);
                    return Ok(Vec::new());
                }

                tracing::info!("Category selected: {}", category);
                let changes = self.state_manager.set_active_category(category);
                self.render_categories()?;
                self.render_resources()?;
                Ok(changes)
            }
            Command::Search(query) => {
                tracing::info!("Search submitted: {:?}", query);
                let changes = self.state_manager.set_search_query(query);
                self.render_resources()?;
                Ok(changes)
            }
        }
    }

    /// Replace the category region with one chip per category.
    pub fn render_categories(&mut self) -> Result<()> {
        let active = self.state_manager.read(|s| s.active_category.clone());
        let markup = render_category_chips(self.catalog.categories(), &active);

        self.view
            .replace_region(Region::Categories.id(), &markup)
            .context("Failed to render category chips")?;

        self.metrics.record_chip_render();
        Ok(())
    }

    /// Replace the resource region with the filtered cards or the no-results notice.
    pub fn render_resources(&mut self) -> Result<()> {
        let selection = self.state_manager.snapshot();
        let matches = filter_resources(
            &self.catalog,
            &selection.active_category,
            &selection.search_query,
        );
        let markup = render_resource_cards(&matches);

        self.view
            .replace_region(Region::Resources.id(), &markup)
            .context("Failed to render resource cards")?;

        self.metrics.record_resource_render(matches.len());
        if matches.is_empty() && !selection.is_unfiltered() {
            tracing::debug!(
                "No resources for category={} query={:?}",
                selection.active_category,
                selection.search_query
            );
        }
        Ok(())
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the view, e.g. to type into the search field.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn state_manager(&self) -> &StateManager {
        &self.state_manager
    }

    pub fn metrics(&self) -> &Arc<RenderMetrics> {
        &self.metrics
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn into_view(self) -> V {
        self.view
    }
}

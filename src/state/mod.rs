// State management module
//
// This module provides the StateManager which wraps SelectionState with shared access
// using Arc<RwLock<T>> and emits change events for interested listeners.

use crate::models::{Category, SelectionState};
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::broadcast;

/// Change events emitted when the selection is modified
///
/// Emitted only when a field actually changes value; re-selecting the active
/// category or re-submitting the same search produces no event.
#[derive(Clone, Debug, PartialEq)]
pub enum StateChange {
    /// The active category chip changed
    CategoryChanged { category: Category },

    /// A new search text was submitted
    SearchChanged { query: String },
}

/// Selection state manager with event emission
///
/// This is the only owner of [`SelectionState`]. It:
/// - Provides shared access to the state via `Arc<RwLock<T>>`
/// - Detects state changes and emits [`StateChange`] events
/// - Supports subscribing to state changes via tokio broadcast channels
///
/// The directory runs single-threaded, so the lock is never contended; it exists
/// so clones handed to listeners observe the same state.
///
/// The binary has no broadcast subscriber. The event loop logs the changes
/// returned by each handler instead, and the broadcast is there for embedders
/// and tests that want to observe the selection.
///
/// # Related Types
///
/// - [`crate::models::SelectionState`]: The underlying state structure
/// - [`crate::ui::DirectoryController`]: Owns the manager and is the only writer
pub struct StateManager {
    state: Arc<RwLock<SelectionState>>,

    /// Multiple subscribers can listen for state changes
    state_tx: broadcast::Sender<StateChange>,
}

impl StateManager {
    /// Create a new StateManager with default state ("All", empty search)
    ///
    /// # Returns
    /// A new StateManager with a broadcast channel buffer of 100 events
    pub fn new() -> Self {
        let (state_tx, _) = broadcast::channel(100);
        Self {
            state: Arc::new(RwLock::new(SelectionState::default())),
            state_tx,
        }
    }

    /// Get a snapshot of the current state
    pub fn snapshot(&self) -> SelectionState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Execute a function with read access to the state
    ///
    /// # Example
    /// ```ignore
    /// let query = state_manager.read(|state| state.search_query.clone());
    /// ```
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&SelectionState) -> R,
    {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    /// Update the state and emit change events
    ///
    /// 1. Captures the old state
    /// 2. Applies the update function
    /// 3. Detects what changed
    /// 4. Emits appropriate events
    ///
    /// # Returns
    /// The StateChange events that were emitted
    pub fn update<F>(&self, update_fn: F) -> Vec<StateChange>
    where
        F: FnOnce(&mut SelectionState),
    {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let old_state = state.clone();

        update_fn(&mut state);

        let changes = Self::detect_changes(&old_state, &state);

        for change in &changes {
            // OK if no one is listening
            let _ = self.state_tx.send(change.clone());
        }

        changes
    }

    /// Subscribe to state change events
    pub fn subscribe(&self) -> broadcast::Receiver<StateChange> {
        self.state_tx.subscribe()
    }

    fn detect_changes(old: &SelectionState, new: &SelectionState) -> Vec<StateChange> {
        let mut changes = Vec::new();

        if old.active_category != new.active_category {
            changes.push(StateChange::CategoryChanged {
                category: new.active_category.clone(),
            });
        }

        if old.search_query != new.search_query {
            changes.push(StateChange::SearchChanged {
                query: new.search_query.clone(),
            });
        }

        changes
    }

    /// Overwrite the active category
    pub fn set_active_category(&self, category: Category) -> Vec<StateChange> {
        self.update(|state| {
            state.active_category = category;
        })
    }

    /// Overwrite the search query with the raw submitted text
    pub fn set_search_query(&self, query: String) -> Vec<StateChange> {
        self.update(|state| {
            state.search_query = query;
        })
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for StateManager {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            state_tx: self.state_tx.clone(),
        }
    }
}

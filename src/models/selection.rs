use super::catalog::Category;

/// The only mutable state of the directory: which category chip is active and
/// what the last submitted search text was.
///
/// Never accessed directly by UI code; [`crate::state::StateManager`] wraps it,
/// detects changes and emits [`crate::state::StateChange`] events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Always a member of the catalog's category set ("All" by default)
    pub active_category: Category,

    /// Raw search text as submitted, untrimmed
    pub search_query: String,
}

impl SelectionState {
    /// True when neither a category nor a search narrows the list.
    pub fn is_unfiltered(&self) -> bool {
        self.active_category.is_all() && self.search_query.trim().is_empty()
    }
}

use tokio::sync::watch;

use crate::data_models::Book;

/// The single view-state record shared by the search form, the pagination
/// controls and the result list.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub query: String,
    /// 1-based.
    pub page: u32,
    pub books: Vec<Book>,
    /// Number of result pages, not number of items.
    pub total: u64,
    /// True while a search is debounced or in flight.
    pub searching: bool,
    /// Searches currently in flight.
    pub searches: u32,
    pub message: String,
}

impl Default for SearchState {
    fn default() -> Self {
        SearchState {
            query: String::new(),
            page: 1,
            books: Vec::new(),
            total: 0,
            searching: false,
            searches: 0,
            message: String::new(),
        }
    }
}

/// Owner of the [`SearchState`]. Updates are applied in place and every
/// subscriber is notified.
#[derive(Debug)]
pub struct Store {
    tx: watch::Sender<SearchState>,
}

impl Store {
    pub fn new() -> Store {
        Store::with_state(SearchState::default())
    }

    pub fn with_state(state: SearchState) -> Store {
        Store {
            tx: watch::Sender::new(state),
        }
    }

    /// Snapshot of the current state.
    pub fn get(&self) -> SearchState {
        self.tx.borrow().clone()
    }

    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut SearchState),
    {
        self.tx.send_modify(f);
    }

    /// Like [`Store::update`], but subscribers are only notified when `f` returns true.
    pub fn update_if<F>(&self, f: F) -> bool
    where
        F: FnOnce(&mut SearchState) -> bool,
    {
        self.tx.send_if_modified(f)
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.tx.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new()
    }
}

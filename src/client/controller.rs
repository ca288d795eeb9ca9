use futures::FutureExt;
use futures::future::BoxFuture;
use std::sync::Arc;

use crate::api::models::{BooksResponse, PageEcho};

use super::api::BooksApi;
use super::store::{SearchState, Store};

pub const RESULTS_PER_PAGE: u64 = 20;
pub const NO_RESULTS_MESSAGE: &str = "No books found matching your search term.";

/// Runs searches against the proxy and folds their outcome into the [`Store`].
pub struct SearchController {
    store: Arc<Store>,
    api: Arc<dyn BooksApi>,
}

impl SearchController {
    pub fn new(store: Arc<Store>, api: Arc<dyn BooksApi>) -> Arc<Self> {
        Arc::new(Self { store, api })
    }

    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    /// Search for the current query and page. Does nothing for an empty query.
    pub fn search(self: &Arc<Self>) -> BoxFuture<'static, ()> {
        let this = self.clone();
        async move {
            let mut request = None;
            this.store.update_if(|state| {
                if state.query.is_empty() {
                    return false;
                }
                state.searches += 1;
                request = Some((state.query.clone(), state.page));
                true
            });
            let Some((query, page)) = request else {
                return;
            };

            tracing::debug!("searching {query:?} page {page}");
            let result = this.api.search_books(&query, page).await;
            if let Err(e) = &result {
                tracing::warn!("search failed: {e}");
            }
            let result = result.map_err(|e| e.message());

            // Decrement and guard must be one store transaction.
            let mut settled = Settled::Ignored;
            this.store
                .update(|state| settled = settle_search(state, result));

            if settled == Settled::Outdated {
                tracing::debug!("response was for an outdated query, searching again");
                this.search().await;
            }
        }
        .boxed()
    }

    pub fn clear_search(&self) {
        self.store.update(|state| {
            state.books.clear();
            state.searching = false;
            state.message.clear();
        });
    }
}

/// What [`settle_search`] did with a finished search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Applied,
    /// Another search is still pending, or the query was cleared meanwhile.
    Ignored,
    /// The response answered a query the user has since changed; search again.
    Outdated,
    Failed,
}

/// Account for one finished search and fold its outcome into `state`.
///
/// A success is applied only once no other search is pending and the query is
/// still set. A failure replaces the results unconditionally.
pub fn settle_search(state: &mut SearchState, result: Result<BooksResponse, String>) -> Settled {
    state.searches = state.searches.saturating_sub(1);

    let response = match result {
        Ok(response) => response,
        Err(message) => {
            state.page = 1;
            state.total = 0;
            state.books.clear();
            state.searching = false;
            state.message = message;
            return Settled::Failed;
        }
    };

    if state.query.is_empty() || state.searches != 0 {
        return Settled::Ignored;
    }
    if response.query.as_deref() != Some(state.query.as_str()) {
        return Settled::Outdated;
    }

    if let Some(page) = response.page.as_ref().and_then(PageEcho::as_page) {
        state.page = page;
    }
    state.total = response.total.div_ceil(RESULTS_PER_PAGE);
    state.message = if response.books.is_empty() {
        NO_RESULTS_MESSAGE.to_string()
    } else {
        String::new()
    };
    state.books = response.books;
    state.searching = false;
    Settled::Applied
}

use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use super::controller::SearchController;

/// Quiet period after the last keystroke before a search is issued.
pub const DEBOUNCE: Duration = Duration::from_millis(500);

/// Turns raw input events into debounced searches.
pub struct SearchForm {
    controller: Arc<SearchController>,
    timer: Option<CancellationToken>,
}

impl SearchForm {
    pub fn new(controller: Arc<SearchController>) -> Self {
        Self {
            controller,
            timer: None,
        }
    }

    /// Handle one input event carrying the full text of the search field.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_search(&mut self, input: &str) {
        self.controller.store().update(|state| {
            state.page = 1;
            state.query = input.to_string();
            state.searching = true;
        });

        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }

        if input.is_empty() {
            self.controller.clear_search();
            return;
        }

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let controller = self.controller.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => return,
                _ = tokio::time::sleep(DEBOUNCE) => {}
            }
            // Past this point the search runs to completion even if the timer is cancelled.
            controller.search().await;
        });
        self.timer = Some(token);
    }
}

impl Drop for SearchForm {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }
}

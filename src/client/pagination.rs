use std::sync::Arc;

use super::controller::SearchController;

/// Whatever displays the result list.
pub trait Viewport: Send + Sync {
    fn scroll_to_top(&self);
}

/// A viewport with nothing to scroll.
pub struct NoViewport;

impl Viewport for NoViewport {
    fn scroll_to_top(&self) {}
}

pub struct Pagination {
    controller: Arc<SearchController>,
    viewport: Box<dyn Viewport>,
}

impl Pagination {
    pub fn new(controller: Arc<SearchController>, viewport: Box<dyn Viewport>) -> Self {
        Self {
            controller,
            viewport,
        }
    }

    /// Move to the next page if `page + 1 < total`. Returns whether it moved.
    ///
    /// The bound is strict, so the last page is never reached going forward.
    pub async fn page_up(&self) -> bool {
        let state = self.controller.store().get();
        let next = state.page.saturating_add(1);
        if u64::from(next) >= state.total {
            return false;
        }
        self.turn_to(next).await;
        true
    }

    /// Move to the previous page if there is one. Returns whether it moved.
    pub async fn page_down(&self) -> bool {
        let next = self.controller.store().get().page.saturating_sub(1);
        if next == 0 {
            return false;
        }
        self.turn_to(next).await;
        true
    }

    async fn turn_to(&self, page: u32) {
        self.viewport.scroll_to_top();
        self.controller.store().update(|state| {
            state.page = page;
            state.searching = true;
        });
        self.controller.search().await;
    }
}

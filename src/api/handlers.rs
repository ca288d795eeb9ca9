use axum::{
    Json,
    extract::{Query, State},
};
use std::sync::Arc;
use std::time::Instant;

use crate::error::ProxyError;
use crate::goodreads::GoodreadsClient;

use super::models::{BooksQuery, BooksResponse, PageEcho};

pub async fn books_handler(
    State(goodreads): State<Arc<GoodreadsClient>>,
    Query(params): Query<BooksQuery>,
) -> Result<Json<BooksResponse>, ProxyError> {
    let start = Instant::now();

    let results = goodreads
        .search(params.q.as_deref(), params.page.as_deref())
        .await?;

    let processing_time_ms = start.elapsed().as_millis();
    tracing::info!(
        query = params.q.as_deref().unwrap_or_default(),
        page = params.page.as_deref().unwrap_or_default(),
        books = results.books.len(),
        "search proxied in {processing_time_ms}ms"
    );

    Ok(Json(BooksResponse {
        page: params.page.as_deref().map(PageEcho::from_param),
        query: params.q,
        start: results.start,
        end: results.end,
        total: results.total,
        books: results.books,
    }))
}

use async_trait::async_trait;
use reqwest::Url;

use crate::api::models::{BooksResponse, ErrorResponse};
use crate::error::ApiError;

/// The proxy's `GET /books` endpoint, as seen by the search controller.
#[async_trait]
pub trait BooksApi: Send + Sync {
    async fn search_books(&self, query: &str, page: u32) -> Result<BooksResponse, ApiError>;
}

pub struct HttpBooksApi {
    http: reqwest::Client,
    books_url: Url,
}

impl HttpBooksApi {
    /// `base` is the proxy's origin, e.g. `http://localhost:3000`.
    pub fn new(base: Url) -> Self {
        let mut books_url = base;
        books_url.set_path("/books");
        books_url.set_query(None);
        Self {
            http: reqwest::Client::new(),
            books_url,
        }
    }
}

#[async_trait]
impl BooksApi for HttpBooksApi {
    async fn search_books(&self, query: &str, page: u32) -> Result<BooksResponse, ApiError> {
        let page = page.to_string();
        let res = self
            .http
            .get(self.books_url.clone())
            .query(&[("q", query), ("page", page.as_str())])
            .send()
            .await?;

        let status = res.status();
        if status.is_success() {
            return Ok(res.json::<BooksResponse>().await?);
        }

        let body = res.text().await?;
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .map(|e| e.message)
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or("request failed").to_string());
        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

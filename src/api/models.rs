use serde::{Deserialize, Serialize};

use crate::data_models::Book;

#[derive(Debug, Deserialize, Default)]
pub struct BooksQuery {
    pub q: Option<String>,
    pub page: Option<String>,
}

/// The `page` value echoed back to the caller.
///
/// The incoming parameter is passed through untouched, except for the literal
/// `"undefined"` which becomes the number `1`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum PageEcho {
    Number(u64),
    Raw(String),
}

impl PageEcho {
    pub fn from_param(page: &str) -> PageEcho {
        if page == "undefined" {
            PageEcho::Number(1)
        } else {
            PageEcho::Raw(page.to_string())
        }
    }

    /// The echoed page as a 1-based page number, if it reads as one.
    pub fn as_page(&self) -> Option<u32> {
        let page = match self {
            PageEcho::Number(n) => u32::try_from(*n).ok()?,
            PageEcho::Raw(s) => s.trim().parse().ok()?,
        };
        (page >= 1).then_some(page)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BooksResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<PageEcho>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub start: u64,
    pub end: u64,
    pub total: u64,
    pub books: Vec<Book>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

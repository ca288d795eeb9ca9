use reqwest::Url;
use roxmltree::{Document, Node};

use crate::data_models::Book;
use crate::error::ProxyError;

/// The parts of an upstream search response the proxy passes on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub start: u64,
    pub end: u64,
    pub total: u64,
    pub books: Vec<Book>,
}

#[derive(Debug, Clone)]
pub struct GoodreadsClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GoodreadsClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// `endpoint?key=..` followed by `q` and `page`, each only when non-empty.
    pub fn build_url(&self, query: Option<&str>, page: Option<&str>) -> Result<Url, ProxyError> {
        let mut url = Url::parse(&self.endpoint)
            .map_err(|e| ProxyError::InvalidEndpoint(format!("{}: {e}", self.endpoint)))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            if let Some(q) = query.filter(|q| !q.is_empty()) {
                pairs.append_pair("q", q);
            }
            if let Some(page) = page.filter(|p| !p.is_empty()) {
                pairs.append_pair("page", page);
            }
        }
        Ok(url)
    }

    /// Fetch the raw XML body for one search. No timeout and no retry.
    pub async fn fetch(&self, query: Option<&str>, page: Option<&str>) -> Result<String, ProxyError> {
        let url = self.build_url(query, page)?;
        tracing::debug!("fetching upstream: {}", url.path());
        let res = self.http.get(url).send().await?.error_for_status()?;
        let body = res.text().await?;
        Ok(body)
    }

    pub async fn search(
        &self,
        query: Option<&str>,
        page: Option<&str>,
    ) -> Result<SearchResults, ProxyError> {
        let body = self.fetch(query, page).await?;
        parse_search(&body)
    }
}

/// Translate an upstream `GoodreadsResponse` document into [`SearchResults`].
///
/// A `results` element without any `work` is an empty book list, not an error.
/// Every other expected element must be present, `results` included.
pub fn parse_search(xml: &str) -> Result<SearchResults, ProxyError> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();
    if root.tag_name().name() != "GoodreadsResponse" {
        return Err(ProxyError::MissingField("GoodreadsResponse"));
    }
    let search = child(root, "search").ok_or(ProxyError::MissingField("search"))?;

    let start = number_field(search, "results-start")?;
    let end = number_field(search, "results-end")?;
    let total = number_field(search, "total-results")?;

    let results = child(search, "results").ok_or(ProxyError::MissingField("results"))?;
    let books = children(results, "work")
        .map(parse_work)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SearchResults {
        start,
        end,
        total,
        books,
    })
}

fn parse_work(work: Node) -> Result<Book, ProxyError> {
    let best_book = child(work, "best_book").ok_or(ProxyError::MissingField("best_book"))?;
    let author = child(best_book, "author").ok_or(ProxyError::MissingField("author"))?;

    Ok(Book::new(
        text_field(best_book, "title")?,
        text_field(author, "name")?,
        text_field(best_book, "image_url")?,
        text_field(work, "average_rating")?,
    ))
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}

fn text_of(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

fn text_field(node: Node, name: &'static str) -> Result<String, ProxyError> {
    child(node, name)
        .map(text_of)
        .ok_or(ProxyError::MissingField(name))
}

fn number_field(node: Node, name: &'static str) -> Result<u64, ProxyError> {
    let raw = text_field(node, name)?;
    raw.trim().parse().map_err(|_| ProxyError::InvalidNumber {
        field: name,
        value: raw,
    })
}

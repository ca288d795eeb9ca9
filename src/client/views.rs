use std::fmt;

use super::store::SearchState;

pub const HEADING: &str = "GoodReads DB Search";
pub const SPINNER: &str = "Searching...";

/// The whole search component, rendered as plain text through [`fmt::Display`].
pub struct SearchView<'a>(pub &'a SearchState);

impl fmt::Display for SearchView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        writeln!(f, "{HEADING}")?;
        writeln!(f, "{}", "=".repeat(HEADING.len()))?;

        // Results and paging are hidden while searching; the message is not.
        let pagination = if state.searching {
            None
        } else {
            render_pagination(state)
        };

        if let Some(line) = &pagination {
            writeln!(f, "{line}")?;
        }
        if !state.message.is_empty() {
            writeln!(f, "{}", state.message)?;
        }
        if !state.searching {
            write!(f, "{}", BookListView(state))?;
        }
        if let Some(line) = &pagination {
            writeln!(f, "{line}")?;
        }
        if state.searching {
            writeln!(f, "{SPINNER}")?;
        }
        Ok(())
    }
}

pub struct BookListView<'a>(pub &'a SearchState);

impl fmt::Display for BookListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for book in &self.0.books {
            writeln!(f)?;
            writeln!(f, "{}", book.title)?;
            writeln!(f, "  Written by {}", book.author)?;
            writeln!(f, "  Rating: {}", book.rating)?;
            writeln!(f, "  Cover: {}", book.image)?;
        }
        Ok(())
    }
}

pub fn render(state: &SearchState) -> String {
    SearchView(state).to_string()
}

/// The page indicator, shown only when there are books to page through.
pub fn render_pagination(state: &SearchState) -> Option<String> {
    if state.books.is_empty() {
        return None;
    }
    Some(format!(
        "Currently viewing page {} of {}.",
        state.page, state.total
    ))
}

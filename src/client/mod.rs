//! The search front-end's state machine: one owned [`SearchState`], a
//! controller that runs searches against the proxy, and the form and
//! pagination controls that drive it.

pub mod api;
pub mod controller;
pub mod form;
pub mod pagination;
pub mod store;
pub mod views;

pub use api::{BooksApi, HttpBooksApi};
pub use controller::SearchController;
pub use form::SearchForm;
pub use pagination::{NoViewport, Pagination, Viewport};
pub use store::{SearchState, Store};

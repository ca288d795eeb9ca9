use serde::{Deserialize, Serialize};

/// One search hit. Books have no identity beyond their position in a result list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub image: String,
    pub rating: String,
}

impl Book {
    pub fn new(title: String, author: String, image: String, rating: String) -> Book {
        Book {
            title,
            author,
            image,
            rating,
        }
    }
}

//! Search result envelope

use serde::{Deserialize, Serialize};

/// Records matching a search term, with their count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> SearchResults<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

impl<T> Default for SearchResults<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

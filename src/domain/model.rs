use serde::{Deserialize, Serialize};
use std::fmt;

/// 書目記錄；沒有識別欄位，移除時以書名完全比對
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let book = Book::new("The Catcher in the Rye", "J.D. Salinger");
        assert_eq!(book.to_string(), "The Catcher in the Rye by J.D. Salinger");
    }

    #[test]
    fn test_json_shape() {
        let book = Book::new("Dune", "Frank Herbert");
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json, serde_json::json!({"title": "Dune", "author": "Frank Herbert"}));
    }
}

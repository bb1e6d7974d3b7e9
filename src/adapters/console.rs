use crate::core::{Book, BookObserver};

/// 將通知印到標準輸出
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleObserver;

impl ConsoleObserver {
    pub fn format_notification(message: &str) -> String {
        format!("Notification: {}", message)
    }
}

impl BookObserver for ConsoleObserver {
    fn update(&self, message: &str) {
        println!("{}", Self::format_notification(message));
    }
}

pub fn render_books(header: &str, books: &[Book]) -> String {
    let mut lines = vec![header.to_string()];
    lines.extend(books.iter().map(|book| format!("  - {}", book)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_notification() {
        assert_eq!(
            ConsoleObserver::format_notification("Added book: Dune by Frank Herbert"),
            "Notification: Added book: Dune by Frank Herbert"
        );
    }

    #[test]
    fn test_render_books() {
        let books = vec![
            Book::new("Dune", "Frank Herbert"),
            Book::new("Emma", "Jane Austen"),
        ];
        assert_eq!(
            render_books("Search results:", &books),
            "Search results:\n  - Dune by Frank Herbert\n  - Emma by Jane Austen"
        );
        assert_eq!(render_books("Search results:", &[]), "Search results:");
    }
}

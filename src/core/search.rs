use crate::core::{Book, SearchStrategy};

/// 書名不分大小寫的子字串搜尋
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleSearch;

impl SearchStrategy for TitleSearch {
    fn search(&self, books: &[Book], query: &str) -> Vec<Book> {
        filter_books(books, query, |b| b.title.as_str())
    }
}

/// 作者不分大小寫的子字串搜尋
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorSearch;

impl SearchStrategy for AuthorSearch {
    fn search(&self, books: &[Book], query: &str) -> Vec<Book> {
        filter_books(books, query, |b| b.author.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SearchField {
    Title,
    Author,
}

impl SearchField {
    pub fn strategy(self) -> Box<dyn SearchStrategy> {
        match self {
            SearchField::Title => Box::new(TitleSearch),
            SearchField::Author => Box::new(AuthorSearch),
        }
    }
}

fn filter_books<F>(books: &[Book], query: &str, field: F) -> Vec<Book>
where
    F: Fn(&Book) -> &str,
{
    let query = query.to_lowercase();
    books
        .iter()
        .filter(|b| field(b).to_lowercase().contains(&query))
        .cloned()
        .collect()
}

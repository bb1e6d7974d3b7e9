use crate::core::repository::LibraryRepository;
use crate::core::{Book, Command, Storage};
use crate::utils::error::Result;

/// 延遲執行的「新增書目」請求
#[derive(Debug)]
pub struct AddBookCommand<'a, S: Storage> {
    repository: &'a mut LibraryRepository<S>,
    book: Book,
}

impl<'a, S: Storage> AddBookCommand<'a, S> {
    pub fn new(repository: &'a mut LibraryRepository<S>, book: Book) -> Self {
        Self { repository, book }
    }
}

impl<S: Storage> Command for AddBookCommand<'_, S> {
    fn execute(&mut self) -> Result<()> {
        self.repository.add_book(self.book.clone())
    }
}

#[derive(Debug)]
pub struct RemoveBookCommand<'a, S: Storage> {
    repository: &'a mut LibraryRepository<S>,
    title: String,
}

impl<'a, S: Storage> RemoveBookCommand<'a, S> {
    pub fn new(repository: &'a mut LibraryRepository<S>, title: impl Into<String>) -> Self {
        Self {
            repository,
            title: title.into(),
        }
    }
}

impl<S: Storage> Command for RemoveBookCommand<'_, S> {
    fn execute(&mut self) -> Result<()> {
        self.repository.remove_book(&self.title).map(|_| ())
    }
}

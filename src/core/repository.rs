use crate::core::{Book, BookObserver, Storage};
use crate::utils::error::{CatalogError, Result};
use crate::utils::logger::ActivityLog;
use std::fmt;
use std::io;

pub const DEFAULT_DATA_FILE: &str = "books.json";

/// 記憶體中的書目集合，並以 JSON 檔整份讀寫
///
/// 順序即插入順序；允許重複書名。每次新增、移除、儲存、載入各寫一行活動日誌，
/// 新增與移除同時通知已訂閱的觀察者。
pub struct LibraryRepository<S: Storage> {
    books: Vec<Book>,
    storage: S,
    data_file: String,
    log: ActivityLog,
    observers: Vec<Box<dyn BookObserver>>,
}

impl<S: Storage> fmt::Debug for LibraryRepository<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LibraryRepository")
            .field("books", &self.books)
            .field("data_file", &self.data_file)
            .field("log", &self.log.path())
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl<S: Storage> LibraryRepository<S> {
    pub fn new(storage: S, log: ActivityLog) -> Self {
        Self::with_data_file(storage, log, DEFAULT_DATA_FILE)
    }

    pub fn with_data_file(storage: S, log: ActivityLog, data_file: impl Into<String>) -> Self {
        Self {
            books: Vec::new(),
            storage,
            data_file: data_file.into(),
            log,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn BookObserver>) {
        self.observers.push(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn data_file(&self) -> &str {
        &self.data_file
    }

    pub fn activity_log(&self) -> &ActivityLog {
        &self.log
    }

    pub fn add_book(&mut self, book: Book) -> Result<()> {
        let message = format!("Added book: {}", book);
        self.books.push(book);
        self.record_change(&message)
    }

    /// 移除所有書名完全相符的記錄，回傳移除筆數；沒有相符時不視為錯誤
    pub fn remove_book(&mut self, title: &str) -> Result<usize> {
        let before = self.books.len();
        self.books.retain(|b| b.title != title);
        let removed = before - self.books.len();

        self.record_change(&format!("Removed book: {}", title))?;
        Ok(removed)
    }

    pub fn get_all_books(&self) -> &[Book] {
        &self.books
    }

    pub fn save_to_file(&self) -> Result<()> {
        let data = serde_json::to_vec(&self.books)?;
        self.storage.write_file(&self.data_file, &data)?;
        tracing::debug!("Saved {} books to {}", self.books.len(), self.data_file);

        self.log.log("Saved books to file")
    }

    /// 以檔案內容整份取代記憶體中的集合；檔案不存在時保持不變
    pub fn load_from_file(&mut self) -> Result<()> {
        match self.storage.read_file(&self.data_file) {
            Ok(data) => {
                self.books = serde_json::from_slice(&data)?;
                tracing::debug!("Loaded {} books from {}", self.books.len(), self.data_file);
                self.log.log("Loaded books from file")
            }
            Err(CatalogError::IoError(e)) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!("No catalog at {}, starting empty", self.data_file);
                self.log.log("File not found for loading books")
            }
            Err(e) => Err(e),
        }
    }

    fn record_change(&self, message: &str) -> Result<()> {
        tracing::info!("{}", message);
        self.log.log(message)?;

        for observer in &self.observers {
            observer.update(message);
        }
        Ok(())
    }
}

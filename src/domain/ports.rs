use crate::domain::model::Book;
use crate::utils::error::Result;

/// 位元組層級的儲存後端；檔案不存在時回傳 `ErrorKind::NotFound` 的 IO 錯誤
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn base_path(&self) -> &str;
    fn data_file(&self) -> &str;
    fn activity_log(&self) -> &str;
    fn notify_enabled(&self) -> bool;
}

/// 延遲執行的單一操作
pub trait Command {
    fn execute(&mut self) -> Result<()>;
}

pub trait BookObserver {
    fn update(&self, message: &str);
}

pub trait SearchStrategy {
    fn search(&self, books: &[Book], query: &str) -> Vec<Book>;
}

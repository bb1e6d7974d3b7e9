use crate::utils::error::Result;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("book_catalog=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("book_catalog=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("book_catalog=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

/// 目錄操作的純文字活動日誌
///
/// 整個行程共用一個實例：複製出來的 handle 都指向同一個檔案控制代碼。
/// 檔案在第一次 `log` 時以附加模式開啟，直到明確呼叫 `close` 才釋放。
#[derive(Debug, Clone)]
pub struct ActivityLog {
    inner: Arc<ActivityLogInner>,
}

#[derive(Debug)]
struct ActivityLogInner {
    path: PathBuf,
    writer: Mutex<Option<BufWriter<File>>>,
}

impl ActivityLog {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            inner: Arc::new(ActivityLogInner {
                path: path.into(),
                writer: Mutex::new(None),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    pub fn is_open(&self) -> bool {
        self.lock().is_some()
    }

    /// 寫入一行訊息（不含時間戳記）
    pub fn log(&self, message: &str) -> Result<()> {
        let mut writer = self.lock();

        if writer.is_none() {
            if let Some(parent) = self.inner.path.parent() {
                fs::create_dir_all(parent)?;
            }

            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.inner.path)?;
            tracing::debug!("Opened activity log at {}", self.inner.path.display());
            *writer = Some(BufWriter::new(file));
        }

        if let Some(w) = writer.as_mut() {
            writeln!(w, "{}", message)?;
        }
        Ok(())
    }

    /// 清空緩衝並釋放檔案；之後再呼叫 `log` 會重新開啟
    pub fn close(&self) -> Result<()> {
        if let Some(mut w) = self.lock().take() {
            w.flush()?;
            tracing::debug!("Closed activity log at {}", self.inner.path.display());
        }
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Option<BufWriter<File>>> {
        // 單執行緒使用，中毒的鎖仍可安全取回內容
        self.inner
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_opens_lazily() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("log.txt");
        let log = ActivityLog::new(&path);

        assert!(!log.is_open());
        assert!(!path.exists());

        log.log("first").unwrap();
        assert!(log.is_open());
        assert!(path.exists());
    }

    #[test]
    fn test_clones_share_handle_and_append() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("log.txt");
        std::fs::write(&path, "existing\n").unwrap();

        let log = ActivityLog::new(&path);
        let other = log.clone();
        log.log("one").unwrap();
        assert!(other.is_open());
        other.log("two").unwrap();
        log.close().unwrap();
        assert!(!other.is_open());

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "existing\none\ntwo\n");
    }

    #[test]
    fn test_log_after_close_reopens() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("log.txt");
        let log = ActivityLog::new(&path);

        log.log("before").unwrap();
        log.close().unwrap();
        log.log("after").unwrap();
        log.close().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "before\nafter\n");
    }

    #[test]
    fn test_log_creates_missing_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("library").join("logs").join("log.txt");
        let log = ActivityLog::new(&path);

        log.log("created").unwrap();
        log.close().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "created\n");
    }

    #[test]
    fn test_open_failure_propagates() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "file").unwrap();
        let log = ActivityLog::new(blocker.join("log.txt"));

        assert!(log.log("nope").is_err());
        assert!(!log.is_open());
    }
}

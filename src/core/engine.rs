use crate::adapters::console::ConsoleObserver;
use crate::adapters::storage::LocalStorage;
use crate::core::command::{AddBookCommand, RemoveBookCommand};
use crate::core::repository::LibraryRepository;
use crate::core::search::{SearchField, TitleSearch};
use crate::core::{Book, Command, ConfigProvider, SearchStrategy, Storage};
use crate::utils::error::Result;
use crate::utils::logger::ActivityLog;

pub const DEMO_TITLE: &str = "The Catcher in the Rye";
pub const DEMO_AUTHOR: &str = "J.D. Salinger";
pub const DEMO_QUERY: &str = "Catcher";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// 載入、新增示範書目、依書名搜尋、儲存
    Demo,
    Add { title: String, author: String },
    Remove { title: String },
    List,
    Search { field: SearchField, query: String },
}

impl Action {
    fn mutates(&self) -> bool {
        matches!(self, Action::Demo | Action::Add { .. } | Action::Remove { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub header: String,
    pub books: Vec<Book>,
    pub saved: bool,
}

#[derive(Debug)]
pub struct CatalogEngine<S: Storage> {
    repository: LibraryRepository<S>,
}

impl CatalogEngine<LocalStorage> {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        let storage = LocalStorage::new(config.base_path().to_string());
        let log = ActivityLog::new(config.activity_log());
        let mut repository = LibraryRepository::with_data_file(storage, log, config.data_file());

        if config.notify_enabled() {
            repository.subscribe(Box::new(ConsoleObserver));
        }

        Self::new(repository)
    }
}

impl<S: Storage> CatalogEngine<S> {
    pub fn new(repository: LibraryRepository<S>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &LibraryRepository<S> {
        &self.repository
    }

    pub fn run(&mut self, action: Action) -> Result<Outcome> {
        self.run_with(action, |_| {})
    }

    /// 每次執行都先從檔案載入；`report` 在寫回檔案之前收到結果，
    /// 因此儲存失敗時結果仍已輸出
    pub fn run_with<F>(&mut self, action: Action, report: F) -> Result<Outcome>
    where
        F: FnOnce(&Outcome),
    {
        tracing::debug!("Running action: {:?}", action);
        self.repository.load_from_file()?;

        let save = action.mutates();
        let (header, books) = match action {
            Action::Demo => {
                AddBookCommand::new(&mut self.repository, Book::new(DEMO_TITLE, DEMO_AUTHOR))
                    .execute()?;
                let results = TitleSearch.search(self.repository.get_all_books(), DEMO_QUERY);
                ("Search results:".to_string(), results)
            }
            Action::Add { title, author } => {
                AddBookCommand::new(&mut self.repository, Book::new(title, author)).execute()?;
                ("Catalog:".to_string(), self.repository.get_all_books().to_vec())
            }
            Action::Remove { title } => {
                RemoveBookCommand::new(&mut self.repository, title).execute()?;
                ("Catalog:".to_string(), self.repository.get_all_books().to_vec())
            }
            Action::List => ("Catalog:".to_string(), self.repository.get_all_books().to_vec()),
            Action::Search { field, query } => {
                let results = field.strategy().search(self.repository.get_all_books(), &query);
                ("Search results:".to_string(), results)
            }
        };

        let mut outcome = Outcome {
            header,
            books,
            saved: false,
        };
        report(&outcome);

        if save {
            self.repository.save_to_file()?;
            outcome.saved = true;
        }

        Ok(outcome)
    }

    /// 釋放活動日誌的檔案控制代碼
    pub fn close(&self) -> Result<()> {
        self.repository.activity_log().close()
    }
}

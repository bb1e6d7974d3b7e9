pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::console::ConsoleObserver;
pub use adapters::storage::{LocalStorage, MemoryStorage};
pub use crate::core::{
    command::{AddBookCommand, RemoveBookCommand},
    engine::{Action, CatalogEngine, Outcome},
    repository::LibraryRepository,
    search::{AuthorSearch, SearchField, TitleSearch},
};
pub use domain::model::Book;
pub use domain::ports::{BookObserver, Command, ConfigProvider, SearchStrategy, Storage};
pub use utils::error::{CatalogError, Result};
pub use utils::logger::ActivityLog;

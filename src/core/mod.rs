pub mod command;
pub mod engine;
pub mod repository;
pub mod search;

pub use crate::domain::model::Book;
pub use crate::domain::ports::{BookObserver, Command, ConfigProvider, SearchStrategy, Storage};
pub use crate::utils::error::Result;

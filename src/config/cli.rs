use crate::core::engine::Action;
use crate::core::search::SearchField;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "book-catalog")]
#[command(about = "A small in-memory book catalog with JSON persistence")]
pub struct CliConfig {
    #[arg(long, global = true, default_value = ".")]
    pub base_path: String,

    #[arg(long, global = true, default_value = "books.json")]
    pub data_file: String,

    #[arg(long, global = true, default_value = "log.txt")]
    pub log_file: String,

    /// Path to TOML configuration file (overrides the path flags)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit diagnostics as JSON")]
    pub json_logs: bool,

    #[arg(long, global = true, help = "Print a notification for every catalog change")]
    pub notify: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Add "The Catcher in the Rye", search titles for "Catcher", save
    Demo,
    /// Add a book
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
    },
    /// Remove every book with exactly this title
    Remove {
        #[arg(long)]
        title: String,
    },
    /// List the whole catalog
    List,
    /// Case-insensitive substring search
    Search {
        #[arg(long, value_enum, default_value = "title")]
        by: SearchField,
        query: String,
    },
}

impl From<CliCommand> for Action {
    fn from(command: CliCommand) -> Self {
        match command {
            CliCommand::Demo => Action::Demo,
            CliCommand::Add { title, author } => Action::Add { title, author },
            CliCommand::Remove { title } => Action::Remove { title },
            CliCommand::List => Action::List,
            CliCommand::Search { by, query } => Action::Search { field: by, query },
        }
    }
}

impl CliConfig {
    /// 未指定子命令時執行示範流程
    pub fn action(&self) -> Action {
        self.command.clone().map(Action::from).unwrap_or(Action::Demo)
    }
}

impl ConfigProvider for CliConfig {
    fn base_path(&self) -> &str {
        &self.base_path
    }

    fn data_file(&self) -> &str {
        &self.data_file
    }

    fn activity_log(&self) -> &str {
        &self.log_file
    }

    fn notify_enabled(&self) -> bool {
        self.notify
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("base_path", &self.base_path)?;
        validation::validate_path("data_file", &self.data_file)?;
        validation::validate_file_extension("data_file", &self.data_file, &["json"])?;
        validation::validate_path("log_file", &self.log_file)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_run_demo() {
        let config = CliConfig::parse_from(["book-catalog"]);
        assert_eq!(config.base_path, ".");
        assert_eq!(config.data_file(), "books.json");
        assert_eq!(config.activity_log(), "log.txt");
        assert!(!config.notify_enabled());
        assert_eq!(config.action(), Action::Demo);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_search_subcommand() {
        let config =
            CliConfig::parse_from(["book-catalog", "search", "--by", "author", "salinger"]);
        assert_eq!(
            config.action(),
            Action::Search {
                field: SearchField::Author,
                query: "salinger".to_string()
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let config = CliConfig::parse_from([
            "book-catalog",
            "add",
            "--title",
            "Dune",
            "--author",
            "Frank Herbert",
            "--data-file",
            "shelf.json",
            "--notify",
        ]);
        assert_eq!(config.data_file, "shelf.json");
        assert!(config.notify);
        assert_eq!(
            config.action(),
            Action::Add {
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_non_json_data_file() {
        let config = CliConfig::parse_from(["book-catalog", "--data-file", "books.csv"]);
        assert!(config.validate().is_err());
    }
}

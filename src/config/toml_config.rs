use crate::config::{DEFAULT_ACTIVITY_LOG, DEFAULT_BASE_PATH};
use crate::core::repository::DEFAULT_DATA_FILE;
use crate::core::ConfigProvider;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub storage: StorageConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub base_path: Option<String>,
    pub data_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub activity_log: Option<String>,
    pub notify: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${CATALOG_DIR})；未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 命令列旗標只能開啟通知，不能關閉設定檔中的通知
    pub fn with_notify_override(mut self, notify: bool) -> Self {
        if notify {
            self.logging
                .get_or_insert(LoggingConfig {
                    activity_log: None,
                    notify: None,
                })
                .notify = Some(true);
        }
        self
    }

    pub fn validate_config(&self) -> Result<()> {
        // 未設定時使用預設的 books.json
        validation::validate_path("storage.data_file", self.data_file())?;
        validation::validate_file_extension("storage.data_file", self.data_file(), &["json"])?;

        validation::validate_path("storage.base_path", self.base_path())?;

        if let Some(log) = self.logging.as_ref().and_then(|l| l.activity_log.as_deref()) {
            validation::validate_non_empty_string("logging.activity_log", log)?;
            validation::validate_path("logging.activity_log", log)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn base_path(&self) -> &str {
        self.storage.base_path.as_deref().unwrap_or(DEFAULT_BASE_PATH)
    }

    fn data_file(&self) -> &str {
        self.storage.data_file.as_deref().unwrap_or(DEFAULT_DATA_FILE)
    }

    fn activity_log(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.activity_log.as_deref())
            .unwrap_or(DEFAULT_ACTIVITY_LOG)
    }

    fn notify_enabled(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.notify)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

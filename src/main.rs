use anyhow::Context;
use book_catalog::adapters::console::render_books;
use book_catalog::utils::error::{CatalogError, ErrorSeverity};
use book_catalog::utils::{logger, validation::Validate};
use book_catalog::{Action, CatalogEngine, CliConfig, ConfigProvider, TomlConfig};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting book-catalog");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let action = config.action();
    let result = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let toml_config = TomlConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path))?
                .with_notify_override(config.notify);
            run(&toml_config, action)
        }
        None => run(&config, action),
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Catalog operation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

fn run<C: ConfigProvider + Validate>(config: &C, action: Action) -> Result<(), CatalogError> {
    // 驗證配置
    config.validate()?;

    let mut engine = CatalogEngine::from_config(config);
    // 先輸出結果再寫回檔案
    let outcome = engine.run_with(action, |outcome| {
        println!("{}", render_books(&outcome.header, &outcome.books));
    });
    // 不論成功與否都要釋放活動日誌
    let closed = engine.close();
    let outcome = outcome?;
    closed?;

    if outcome.saved {
        tracing::info!(
            "✅ Saved {} books to {}",
            engine.repository().get_all_books().len(),
            engine.repository().data_file()
        );
    }

    Ok(())
}

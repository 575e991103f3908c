use anyhow::Context;
use clap::Parser;
use dining_scrape::config::toml_config::TomlConfig;
use dining_scrape::utils::error::ErrorSeverity;
use dining_scrape::utils::{logger, validation::Validate};
use dining_scrape::{
    build_client, CliConfig, DiningHallScraper, FailurePolicy, LocalStorage, RunOptions,
    ScrapeConfig, ScrapeEngine,
};

const DEFAULT_OUTPUT_PATH: &str = "./output";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting dining-scrape");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("❌ Argument validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 載入設定檔（若有）
    let toml_config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path))?
        }
        None => TomlConfig::default(),
    };

    let output_path = cli
        .output_path
        .clone()
        .or_else(|| toml_config.output_path().map(str::to_string))
        .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());

    let mut config: ScrapeConfig = toml_config.into_scrape_config();
    if let Some(retries) = cli.max_retries {
        config.max_retries = retries;
    }
    if cli.continue_on_failure {
        config.failure_policy = FailurePolicy::Continue;
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let client = build_client(config.timeout_seconds).context("Failed to build HTTP client")?;
    let storage = LocalStorage::new(output_path.clone());
    let scraper = DiningHallScraper::new(client, &config, storage.clone());
    let engine = ScrapeEngine::new(scraper, storage);

    let date = cli.resolved_date();
    let options = RunOptions {
        skip_menu: cli.skip_menu,
        skip_hours: cli.skip_hours,
    };

    match engine.run(&date, options).await {
        Ok(summary) => {
            tracing::info!(
                "✅ Scrape for {} complete: {} daily items, {} catalog entries",
                summary.date,
                summary.daily_items,
                summary.all_data_items
            );
            match summary.hours {
                Some(hours) if hours.posted => {
                    tracing::info!("🕒 Operation hours saved for {} locations", hours.locations);
                }
                Some(hours) if hours.decode_failed => {
                    tracing::warn!("⚠️ Operation hours response could not be decoded");
                }
                Some(hours) => {
                    tracing::warn!(
                        "⚠️ Operation hours for {} locations were not saved",
                        hours.locations
                    );
                }
                None => {}
            }
            for failure in &summary.failures {
                tracing::warn!(
                    "⚠️ Skipped {} {}: {}",
                    failure.location,
                    failure.time_of_day,
                    failure.error
                );
            }
            println!("✅ Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Scrape failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

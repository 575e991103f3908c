use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "dining-scrape")]
#[command(about = "Scrape dining hall menus and operating hours")]
pub struct CliConfig {
    /// Menu date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output directory; overrides the config file
    #[arg(long)]
    pub output_path: Option<String>,

    /// Override the per-request attempt budget
    #[arg(long)]
    pub max_retries: Option<u32>,

    /// Keep partial results when a request exhausts its retries
    #[arg(long)]
    pub continue_on_failure: bool,

    #[arg(long, help = "Skip the menu scrape")]
    pub skip_menu: bool,

    #[arg(long, help = "Skip the operating hours scrape")]
    pub skip_hours: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn resolved_date(&self) -> String {
        self.date
            .clone()
            .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(date) = &self.date {
            validation::validate_date("date", date)?;
        }
        if let Some(path) = &self.output_path {
            validation::validate_path("output_path", path)?;
        }
        if let Some(retries) = self.max_retries {
            validation::validate_positive_number("max_retries", retries, 1)?;
        }
        Ok(())
    }
}

//! CLI for building prefilled form URLs.

mod commands;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use prefill_core::builder::DATE_FORMAT;
use prefill_core::config::DEFAULT_CONFIG_FILE;
use std::path::PathBuf;

use commands::{run_generate, run_init};

/// Build a prefilled form URL from a TOML list of answers.
#[derive(Debug, Parser)]
#[command(name = "prefill")]
#[command(about = "Build a prefilled Google Forms URL", long_about = None)]
pub struct Cli {
    /// Path to the form config.
    #[arg(default_value = DEFAULT_CONFIG_FILE, value_name = "CONFIG")]
    pub config: PathBuf,

    /// Date substituted for `{today}` answers (YYYY-MM-DD). Defaults to the local date.
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Write a sample config to CONFIG and exit.
    #[arg(long, conflicts_with = "date")]
    pub init: bool,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    pub fn run(self) -> Result<()> {
        if self.init {
            return run_init(&self.config);
        }
        let today = self
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let out = run_generate(&self.config, today)
            .with_context(|| format!("building URL from {}", self.config.display()))?;
        print!("{out}");
        Ok(())
    }
}

#[cfg(test)]
mod tests;

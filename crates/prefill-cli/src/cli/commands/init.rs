//! `prefill --init [CONFIG]` – write a sample config.

use anyhow::Result;
use prefill_core::config;
use std::path::Path;

pub fn run_init(path: &Path) -> Result<()> {
    config::write_template(path)?;
    println!("Wrote sample config to {}", path.display());
    Ok(())
}

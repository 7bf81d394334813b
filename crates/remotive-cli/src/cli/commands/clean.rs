//! `remotive-csv clean` – print jobs with cleaned descriptions as JSON.

use anyhow::{Context, Result};
use remotive_core::config::AppConfig;
use remotive_core::pipeline;

pub fn run_clean(cfg: &AppConfig) -> Result<()> {
    match pipeline::fetch_clean_jobs(cfg) {
        Ok(jobs) => {
            let json = serde_json::to_string_pretty(&jobs).context("serialize jobs")?;
            println!("{}", json);
        }
        Err(reason) => eprintln!("{}", reason),
    }
    Ok(())
}

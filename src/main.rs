mod cases;
mod config;
mod extractor;
mod prompts;

use anyhow::{bail, Result};
use config::Config;

fn main() -> Result<()> {
    env_logger::init();

    // 1. Load Config
    let config = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            eprintln!("Please check 'config.yml'.");
            return Err(e);
        }
    };

    config.ensure_directories()?;

    // 2. Dispatch. Without a command both stages run in pipeline order:
    // the prompt builder consumes the file the extractor just wrote.
    match std::env::args().nth(1).as_deref() {
        Some("extract") => extractor::run(&config)?,
        Some("prompts") => prompts::run(&config)?,
        None => {
            extractor::run(&config)?;
            prompts::run(&config)?;
        }
        Some(other) => bail!("Unknown command '{}' (expected 'extract' or 'prompts')", other),
    }

    Ok(())
}

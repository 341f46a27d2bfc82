use crate::cases::{self, Case};
use crate::config::Config;
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Collects every suspect name across the case collection, deduplicated
/// and sorted.
pub fn collect_names(cases: &[Case]) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for case in cases {
        for suspect in &case.base_suspects {
            names.insert(suspect.name.clone());
        }
    }
    names
}

fn render(names: &BTreeSet<String>) -> String {
    let mut body = String::new();
    for name in names {
        body.push_str(name);
        body.push('\n');
    }
    body
}

pub fn run(config: &Config) -> Result<()> {
    let cases = cases::load_cases(Path::new(&config.cases_file))?;

    let mut names = collect_names(&cases);
    // The protagonist is never listed as a suspect
    names.insert(config.protagonist.clone());

    let body = render(&names);
    fs::write(&config.names_file, body)
        .context(format!("Failed to write name file {}", config.names_file))?;

    log::info!(
        "Extracted {} character names to {}",
        names.len(),
        config.names_file
    );
    Ok(())
}

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One scenario from the case collection. Only the suspect roster is read
/// here; the rest of the case data (clues, dialogue trees, scenes) belongs
/// to the game and is ignored during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct Case {
    #[serde(rename = "baseSuspects")]
    pub base_suspects: Vec<Suspect>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Suspect {
    pub name: String,
}

pub fn load_cases(path: &Path) -> Result<Vec<Case>> {
    if !path.exists() {
        bail!("Case file not found: {}", path.display());
    }

    let content = fs::read_to_string(path)
        .context(format!("Failed to read case file {}", path.display()))?;
    let cases: Vec<Case> = serde_json::from_str(&content)
        .context(format!("Failed to parse case file {}", path.display()))?;
    Ok(cases)
}

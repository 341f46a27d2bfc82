use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILE: &str = "config.yml";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_cases_file")]
    pub cases_file: String,

    #[serde(default = "default_names_file")]
    pub names_file: String,

    #[serde(default = "default_icons_dir")]
    pub icons_dir: String,

    /// Appended to every generated name list and request batch.
    #[serde(default = "default_protagonist")]
    pub protagonist: String,
}

fn default_cases_file() -> String {
    "cases.json".to_string()
}
fn default_names_file() -> String {
    "character_names.txt".to_string()
}
fn default_icons_dir() -> String {
    "assets/icons".to_string()
}
fn default_protagonist() -> String {
    "Bia".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cases_file: default_cases_file(),
            names_file: default_names_file(),
            icons_dir: default_icons_dir(),
            protagonist: default_protagonist(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("{} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read {}", path.display()))?;
        let config: Config = serde_yaml_ng::from_str(&content)
            .context(format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    pub fn ensure_directories(&self) -> Result<()> {
        if let Some(parent) = Path::new(&self.names_file).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

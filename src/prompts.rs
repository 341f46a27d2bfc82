use crate::config::Config;
use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// One request for the downstream image generator.
#[derive(Debug, Clone, Serialize)]
pub struct IconRequest {
    pub path: String,
    pub prompt: String,
    pub aspect_ratio: String,
}

pub struct IconPromptBuilder {
    config: Config,
}

impl IconPromptBuilder {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Maps a character name onto its asset file name: lowercase, spaces
    /// replaced with underscores.
    pub fn slug(name: &str) -> String {
        name.to_lowercase().replace(' ', "_")
    }

    fn icon_path(&self, name: &str) -> String {
        format!("{}/{}.png", self.config.icons_dir, Self::slug(name))
    }

    fn icon_prompt(&self, name: &str) -> String {
        format!(
            "Ícone de personagem em estilo cartoon para um jogo de detetive infantil. \
            O personagem é '{}'. O ícone deve ser um retrato do personagem, com um \
            fundo transparente, em um estilo de desenho animado simples e amigável. \
            O personagem deve ter uma expressão facial que corresponda à sua \
            personalidade (por exemplo, 'Leo, o comilão' pode estar sorrindo com um \
            biscoito na mão). O ícone deve ser quadrado e ter um contorno preto grosso.",
            name
        )
    }

    /// Reads the name file and appends the protagonist. No deduplication:
    /// if the file already lists the protagonist, two requests are built
    /// for them.
    pub fn read_names(&self) -> Result<Vec<String>> {
        let path = Path::new(&self.config.names_file);
        if !path.exists() {
            bail!(
                "Name file not found: {} (run 'extract' first)",
                path.display()
            );
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read name file {}", path.display()))?;

        let mut names: Vec<String> = content
            .lines()
            .map(|line| line.trim_end().to_string())
            .collect();
        names.push(self.config.protagonist.clone());
        Ok(names)
    }

    pub fn build_requests(&self, names: &[String]) -> Vec<IconRequest> {
        names
            .iter()
            .map(|name| IconRequest {
                path: self.icon_path(name),
                prompt: self.icon_prompt(name),
                aspect_ratio: "square".to_string(),
            })
            .collect()
    }
}

pub fn run(config: &Config) -> Result<()> {
    let builder = IconPromptBuilder::new(config);
    let names = builder.read_names()?;
    let requests = builder.build_requests(&names);

    log::info!("Built {} icon requests", requests.len());
    println!("{}", serde_json::to_string_pretty(&requests)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(dir: &Path) -> Config {
        Config {
            names_file: dir.join("character_names.txt").to_string_lossy().to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_slug() {
        assert_eq!(IconPromptBuilder::slug("Ana"), "ana");
        assert_eq!(IconPromptBuilder::slug("Leo Junior"), "leo_junior");
        assert_eq!(IconPromptBuilder::slug("Dona Nara"), "dona_nara");
    }

    #[test]
    fn test_protagonist_is_always_appended_last() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = test_config(dir.path());
        fs::write(&config.names_file, "Ana\nLeo\n")?;

        let builder = IconPromptBuilder::new(&config);
        let names = builder.read_names()?;
        assert_eq!(names, vec!["Ana", "Leo", "Bia"]);
        Ok(())
    }

    #[test]
    fn test_no_deduplication_against_the_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = test_config(dir.path());
        fs::write(&config.names_file, "Ana\nBia\nLeo\n")?;

        let builder = IconPromptBuilder::new(&config);
        let names = builder.read_names()?;
        assert_eq!(names, vec!["Ana", "Bia", "Leo", "Bia"]);
        Ok(())
    }

    #[test]
    fn test_request_paths_and_aspect_ratio() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = test_config(dir.path());
        fs::write(&config.names_file, "Ana\nLeo\n")?;

        let builder = IconPromptBuilder::new(&config);
        let requests = builder.build_requests(&builder.read_names()?);

        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0].path, "assets/icons/ana.png");
        assert_eq!(requests[1].path, "assets/icons/leo.png");
        assert_eq!(requests[2].path, "assets/icons/bia.png");
        assert!(requests.iter().all(|r| r.aspect_ratio == "square"));
        Ok(())
    }

    #[test]
    fn test_prompt_embeds_the_name() {
        let builder = IconPromptBuilder::new(&Config::default());
        let requests = builder.build_requests(&["Dona Nara".to_string()]);
        assert!(requests[0].prompt.contains("O personagem é 'Dona Nara'"));
        assert!(requests[0].prompt.contains("contorno preto grosso"));
    }

    #[test]
    fn test_json_shape() -> Result<()> {
        let builder = IconPromptBuilder::new(&Config::default());
        let requests = builder.build_requests(&["Ana".to_string()]);

        let json = serde_json::to_string_pretty(&requests)?;
        let value: serde_json::Value = serde_json::from_str(&json)?;
        assert_eq!(value[0]["path"], "assets/icons/ana.png");
        assert_eq!(value[0]["aspect_ratio"], "square");
        assert!(value[0]["prompt"].as_str().unwrap().contains("'Ana'"));
        Ok(())
    }

    #[test]
    fn test_missing_name_file() {
        let config = Config {
            names_file: "no_such_names.txt".to_string(),
            ..Config::default()
        };
        let err = IconPromptBuilder::new(&config).read_names().unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;
use anyhow::{Result, Context};

/// Environment variable consulted for the API key, overriding the config file.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub llm: LlmConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UiConfig {
    pub show_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm: LlmConfig {
                api_key: "".to_string(),
                model: "gemini-1.5-flash".to_string(),
                temperature: 0.7,
                top_k: 40,
                top_p: 0.95,
                max_output_tokens: 2048,
            },
            ui: UiConfig {
                show_timestamps: false,
            },
        }
    }
}

pub fn load_or_create_config(config_path: &Path) -> Result<Config> {
    Ok(apply_env_overrides(load_or_create_file(config_path)?))
}

// Reads exactly what is on disk; the env override is applied separately so
// `update_config` never writes an environment-supplied key back to the file.
fn load_or_create_file(config_path: &Path) -> Result<Config> {
    if !config_path.exists() {
        let config_dir = config_path.parent().unwrap();
        fs::create_dir_all(config_dir)?;

        let config = Config::default();
        let toml_string = toml::to_string_pretty(&config)?;

        let mut file = File::create(config_path)?;
        file.write_all(toml_string.as_bytes())?;

        return Ok(config);
    }

    let mut file = File::open(config_path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let config: Config = toml::from_str(&contents)
        .context("Failed to parse config file")?;

    Ok(config)
}

// The environment always wins over the file so a one-off shell can supply a
// key without touching the config on disk.
fn apply_env_overrides(mut config: Config) -> Config {
    if let Ok(key) = std::env::var(API_KEY_ENV) {
        if !key.trim().is_empty() {
            config.llm.api_key = key;
        }
    }
    config
}

pub fn update_config(
    config_path: &Path,
    api_key: &Option<String>,
    model: &Option<String>,
) -> Result<()> {
    let mut config = load_or_create_file(config_path)?;

    if let Some(key) = api_key {
        config.llm.api_key = key.clone();
    }

    if let Some(model_name) = model {
        config.llm.model = model_name.clone();
    }

    let toml_string = toml::to_string_pretty(&config)?;
    let mut file = File::create(config_path)?;
    file.write_all(toml_string.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_default_config_on_first_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("component-assist/config.toml");

        let config = load_or_create_config(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config.llm.model, "gemini-1.5-flash");
        assert_eq!(config.llm.temperature, 0.7);
        assert_eq!(config.llm.top_k, 40);
        assert_eq!(config.llm.max_output_tokens, 2048);
    }

    #[test]
    fn updates_are_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        update_config(&path, &Some("abc123".to_string()), &None).unwrap();
        update_config(&path, &None, &Some("gemini-1.5-pro".to_string())).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let config: Config = toml::from_str(&contents).unwrap();
        assert_eq!(config.llm.api_key, "abc123");
        assert_eq!(config.llm.model, "gemini-1.5-pro");
    }

    #[test]
    fn rejects_malformed_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "llm = \"not a table\"").unwrap();

        assert!(load_or_create_config(&path).is_err());
    }
}

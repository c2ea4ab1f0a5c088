use crate::error::{QuizError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.json";

/// User preferences, stored as `config.json` in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct QuizConfig {
    /// Show the expected answer after a miss in play.
    #[serde(default)]
    pub reveal_answer: bool,

    /// Fill a brand-new store with the sample quizzes.
    #[serde(default = "default_seed_examples")]
    pub seed_examples: bool,
}

fn default_seed_examples() -> bool {
    true
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            reveal_answer: false,
            seed_examples: default_seed_examples(),
        }
    }
}

pub const KEYS: [&str; 2] = ["reveal-answer", "seed-examples"];

impl QuizConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILENAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "reveal-answer" => Some(self.reveal_answer.to_string()),
            "seed-examples" => Some(self.seed_examples.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let slot = match key {
            "reveal-answer" => &mut self.reveal_answer,
            "seed-examples" => &mut self.seed_examples,
            _ => return Err(QuizError::Config(format!("Unknown config key: {}", key))),
        };
        *slot = parse_bool(value).ok_or_else(|| {
            QuizError::Config(format!("{} expects true or false, got '{}'", key, value))
        })?;
        Ok(())
    }

    /// `(key, value)` pairs in display order.
    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|k| self.get(k).map(|v| (*k, v)))
            .collect()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = QuizConfig::default();
        assert!(!config.reveal_answer);
        assert!(config.seed_examples);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(QuizConfig::load(dir.path()).unwrap(), QuizConfig::default());
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested");

        let mut config = QuizConfig::default();
        config.set("reveal-answer", "yes").unwrap();
        config.save(&target).unwrap();

        let loaded = QuizConfig::load(&target).unwrap();
        assert!(loaded.reveal_answer);
        assert_eq!(loaded.get("reveal-answer").as_deref(), Some("true"));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"reveal-answer": true}"#).unwrap();
        let loaded = QuizConfig::load(dir.path()).unwrap();
        assert!(loaded.reveal_answer);
        assert!(loaded.seed_examples);
    }

    #[test]
    fn rejects_unknown_keys_and_bad_values() {
        let mut config = QuizConfig::default();
        assert!(matches!(
            config.set("colour", "true"),
            Err(QuizError::Config(_))
        ));
        assert!(matches!(
            config.set("seed-examples", "maybe"),
            Err(QuizError::Config(_))
        ));
        assert!(config.seed_examples);
        assert_eq!(config.get("colour"), None);
    }

    #[test]
    fn lists_every_key() {
        let keys: Vec<_> = QuizConfig::default()
            .list_all()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, KEYS.to_vec());
    }
}

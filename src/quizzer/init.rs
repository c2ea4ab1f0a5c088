use crate::api::QuizApi;
use crate::config::QuizConfig;
use crate::error::{QuizError, Result};
use crate::model::QuestionDraft;
use crate::store::fs::JsonFileStore;
use directories::ProjectDirs;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Overrides the platform data directory.
pub const HOME_ENV: &str = "QUIZZER_HOME";

/// The quizzes a fresh install starts with.
pub fn sample_quizzes() -> Vec<QuestionDraft> {
    vec![
        QuestionDraft::new("What is the capital of Italy", "Rome"),
        QuestionDraft::new("What is the capital of France", "Paris"),
        QuestionDraft::new("What is the capital of Spain", "Madrid"),
        QuestionDraft::new("What is the capital of Portugal", "Lisboa"),
    ]
}

/// `--data-dir`, then `$QUIZZER_HOME`, then the platform data directory.
pub fn resolve_data_dir(flag: Option<&Path>, env_value: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = env_value.filter(|d| !d.as_os_str().is_empty()) {
        return Ok(dir);
    }
    ProjectDirs::from("com", "quizzer", "quizzer")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| QuizError::Store("could not determine a data directory".to_string()))
}

/// Loads config, seeds a missing store if configured, and builds the API.
pub fn initialize(data_dir: PathBuf) -> Result<QuizApi<JsonFileStore>> {
    let config = QuizConfig::load(&data_dir)?;
    let mut store = JsonFileStore::in_dir(&data_dir);
    debug!("using store at {}", store.path().display());

    if config.seed_examples {
        let seeded = store.seed_if_missing(&sample_quizzes())?;
        if seeded > 0 {
            info!("created a new store with {} sample quizzes", seeded);
        }
    }

    Ok(QuizApi::new(store, data_dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_env() {
        let dir = resolve_data_dir(Some(Path::new("/tmp/a")), Some(PathBuf::from("/tmp/b")))
            .unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/a"));
    }

    #[test]
    fn env_used_when_no_flag() {
        let dir = resolve_data_dir(None, Some(PathBuf::from("/tmp/b"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/b"));
    }

    #[test]
    fn fresh_dir_is_seeded_once() {
        let tmp = tempfile::tempdir().unwrap();
        let api = initialize(tmp.path().to_path_buf()).unwrap();
        let listed = api.list_questions().unwrap().listed_questions;
        assert_eq!(listed.len(), 4);
        assert_eq!(listed[3].answer, "Lisboa");

        let mut api = initialize(tmp.path().to_path_buf()).unwrap();
        api.delete_question(Some("1")).unwrap();
        let api = initialize(tmp.path().to_path_buf()).unwrap();
        assert_eq!(api.list_questions().unwrap().listed_questions.len(), 3);
    }

    #[test]
    fn seeding_can_be_turned_off() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = QuizConfig::default();
        config.seed_examples = false;
        config.save(tmp.path()).unwrap();

        let api = initialize(tmp.path().to_path_buf()).unwrap();
        assert!(api.list_questions().unwrap().listed_questions.is_empty());
    }
}

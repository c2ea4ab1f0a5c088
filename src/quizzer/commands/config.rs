use crate::commands::{CmdMessage, CmdResult};
use crate::config::QuizConfig;
use crate::error::{QuizError, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = QuizConfig::load(dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => Ok(result.with_config(config)),
        ConfigAction::ShowKey(key) => {
            let value = config
                .get(&key)
                .ok_or_else(|| QuizError::Config(format!("Unknown config key: {}", key)))?;
            result.add_message(CmdMessage::info(value));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(dir)?;
            let shown = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
            Ok(result.with_config(config))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_persists_and_show_reads_back() {
        let dir = tempfile::tempdir().unwrap();

        let set = run(
            dir.path(),
            ConfigAction::Set("reveal-answer".into(), "on".into()),
        )
        .unwrap();
        assert_eq!(set.messages[0].content, "reveal-answer set to true");

        let shown = run(dir.path(), ConfigAction::ShowKey("reveal-answer".into())).unwrap();
        assert_eq!(shown.messages[0].content, "true");

        let all = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert!(all.config.unwrap().reveal_answer);
    }

    #[test]
    fn unknown_key_fails_without_saving() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(dir.path(), ConfigAction::Set("nope".into(), "true".into())).unwrap_err();
        assert_eq!(err.to_string(), "Unknown config key: nope");
        assert!(!dir.path().join(crate::config::CONFIG_FILENAME).exists());

        assert!(matches!(
            run(dir.path(), ConfigAction::ShowKey("nope".into())),
            Err(QuizError::Config(_))
        ));
    }

    #[test]
    fn bad_value_fails_and_keeps_the_old_one() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(
            dir.path(),
            ConfigAction::Set("seed-examples".into(), "maybe".into()),
        )
        .unwrap_err();
        assert!(matches!(err, QuizError::Config(_)));

        let shown = run(dir.path(), ConfigAction::ShowKey("seed-examples".into())).unwrap();
        assert_eq!(shown.messages[0].content, "true");
    }
}

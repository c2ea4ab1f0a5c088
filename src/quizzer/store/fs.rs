use super::QuestionStore;
use crate::error::{QuizError, Result};
use crate::model::{Question, QuestionDraft, QuestionId};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const STORE_FILENAME: &str = "quizzes.json";

/// On-disk shape of `quizzes.json`.
#[derive(Debug, Serialize, Deserialize)]
struct StoreData {
    next_id: QuestionId,
    questions: Vec<Question>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            next_id: 1,
            questions: Vec::new(),
        }
    }
}

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// A store backed by `quizzes.json` inside `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            path: dir.as_ref().join(STORE_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Writes the given drafts into a store file that does not exist yet.
    /// Returns how many questions were written (0 if the file already existed).
    pub fn seed_if_missing(&mut self, drafts: &[QuestionDraft]) -> Result<usize> {
        if self.exists() {
            return Ok(0);
        }
        let mut data = StoreData::default();
        for draft in drafts {
            let question = Question::new(data.next_id, draft.clone());
            data.next_id += 1;
            data.questions.push(question);
        }
        self.save(&data)?;
        debug!(
            "seeded {} with {} questions",
            self.path.display(),
            drafts.len()
        );
        Ok(drafts.len())
    }

    fn load(&self) -> Result<StoreData> {
        if !self.path.exists() {
            return Ok(StoreData::default());
        }
        let content = fs::read_to_string(&self.path)?;
        let mut data: StoreData = serde_json::from_str(&content)?;
        data.questions.sort_by_key(|q| q.id);
        Ok(data)
    }

    fn save(&self, data: &StoreData) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(data)?;
        // Write beside the target and rename over it, so a crash never leaves a
        // half-written store behind.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl QuestionStore for JsonFileStore {
    fn list_all(&self) -> Result<Vec<Question>> {
        Ok(self.load()?.questions)
    }

    fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>> {
        let data = self.load()?;
        Ok(data.questions.into_iter().find(|q| q.id == id))
    }

    fn create(&mut self, draft: QuestionDraft) -> Result<Question> {
        let mut data = self.load()?;
        // Guard against hand-edited files whose counter lags behind the ids.
        let max_id = data.questions.iter().map(|q| q.id).max().unwrap_or(0);
        let id = data.next_id.max(max_id + 1);

        let question = Question::new(id, draft);
        data.next_id = id + 1;
        data.questions.push(question.clone());
        self.save(&data)?;
        debug!("created quiz {}", id);
        Ok(question)
    }

    fn update(&mut self, question: &Question) -> Result<()> {
        let mut data = self.load()?;
        let slot = data
            .questions
            .iter_mut()
            .find(|q| q.id == question.id)
            .ok_or(QuizError::NotFound(question.id))?;
        *slot = question.clone();
        self.save(&data)?;
        debug!("updated quiz {}", question.id);
        Ok(())
    }

    fn delete(&mut self, id: QuestionId) -> Result<()> {
        let mut data = self.load()?;
        let before = data.questions.len();
        data.questions.retain(|q| q.id != id);
        if data.questions.len() == before {
            return Err(QuizError::NotFound(id));
        }
        self.save(&data)?;
        debug!("deleted quiz {}", id);
        Ok(())
    }
}
